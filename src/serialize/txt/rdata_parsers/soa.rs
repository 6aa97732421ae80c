// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Parser for SOA text form

use std::io::Read;

use crate::rr::domain::Name;
use crate::rr::rdata::SOA;
use crate::serialize::txt::errors::{ParseErrorKind, ParseResult};
use crate::serialize::txt::zone::TokenSource;

pub(crate) fn parse<R: Read>(s: &mut TokenSource<'_, R>, origin: &Name) -> ParseResult<SOA> {
    let token = s.next_field("mname")?;
    let mname = Name::parse(&token.text, Some(origin))
        .map_err(|_| s.error(ParseErrorKind::Message("bad SOA mname"), &token))?;

    let token = s.next_field("rname")?;
    let rname = Name::parse(&token.text, Some(origin))
        .map_err(|_| s.error(ParseErrorKind::Message("bad SOA rname"), &token))?;

    let mut counters = [0u32; 5];
    for counter in &mut counters {
        let token = s.next_field("zone parameter")?;
        *counter = token
            .text
            .parse()
            .map_err(|_| s.error(ParseErrorKind::Message("bad SOA zone parameter"), &token))?;
    }
    let [serial, refresh, retry, expire, minimum] = counters;

    Ok(SOA::new(mname, rname, serial, refresh, retry, expire, minimum))
}
