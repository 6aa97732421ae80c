// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Parser for the RFC 3597 generic rdata form

use std::io::Read;

use data_encoding::HEXUPPER_PERMISSIVE;

use crate::rr::rdata::NULL;
use crate::rr::record_data::RData;
use crate::serialize::txt::errors::{ParseErrorKind, ParseResult};
use crate::serialize::txt::zone::TokenSource;

/// RFC 3597 section 5: `\# <rdlength> <hex>`, the hex possibly split
/// into white space separated chunks, whose decoded length must match
/// the declared one.
pub(crate) fn parse<R: Read>(s: &mut TokenSource<'_, R>, code: u16) -> ParseResult<RData> {
    let token = s.next_field("\\#")?;
    if token.text != "\\#" {
        return Err(s.error(
            ParseErrorKind::Message("bad unknown rdata: expected \\#"),
            &token,
        ));
    }

    let token = s.next_field("rdata length")?;
    let rdlength = token
        .text
        .parse::<u16>()
        .map_err(|_| s.error(ParseErrorKind::Message("bad unknown rdata length"), &token))?;

    let hex = s.concat_rest()?;
    let rdata = HEXUPPER_PERMISSIVE
        .decode(hex.as_bytes())
        .map_err(|_| s.error_here(ParseErrorKind::Message("bad unknown rdata hex")))?;

    if rdata.len() != usize::from(rdlength) {
        return Err(s.error_here(ParseErrorKind::Message(
            "unknown rdata length does not match its data",
        )));
    }

    Ok(RData::Unknown {
        code,
        rdata: NULL::with(rdata),
    })
}
