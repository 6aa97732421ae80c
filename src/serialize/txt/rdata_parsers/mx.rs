// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Parser for MX text form

use std::io::Read;

use crate::rr::domain::Name;
use crate::rr::rdata::MX;
use crate::serialize::txt::errors::{ParseErrorKind, ParseResult};
use crate::serialize::txt::zone::TokenSource;

pub(crate) fn parse<R: Read>(s: &mut TokenSource<'_, R>, origin: &Name) -> ParseResult<MX> {
    let token = s.next_field("preference")?;
    let preference = token
        .text
        .parse::<u16>()
        .map_err(|_| s.error(ParseErrorKind::Message("bad MX preference"), &token))?;

    let token = s.next_field("exchange")?;
    let exchange = Name::parse(&token.text, Some(origin))
        .map_err(|_| s.error(ParseErrorKind::Message("bad MX exchange"), &token))?;

    Ok(MX::new(preference, exchange))
}
