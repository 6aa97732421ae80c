// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Parser for AAAA text form

use std::io::Read;
use std::net::Ipv6Addr;

use crate::rr::rdata::AAAA;
use crate::serialize::txt::errors::{ParseErrorKind, ParseResult};
use crate::serialize::txt::zone::TokenSource;

pub(crate) fn parse<R: Read>(s: &mut TokenSource<'_, R>) -> ParseResult<AAAA> {
    let token = s.next_field("ipv6 address")?;
    let address = token
        .text
        .parse::<Ipv6Addr>()
        .map_err(|_| s.error(ParseErrorKind::Message("bad AAAA"), &token))?;
    Ok(address.into())
}
