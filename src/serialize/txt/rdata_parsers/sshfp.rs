// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Parser for SSHFP text form

use std::io::Read;

use data_encoding::HEXUPPER_PERMISSIVE;

use crate::rr::rdata::SSHFP;
use crate::serialize::txt::errors::{ParseErrorKind, ParseResult};
use crate::serialize::txt::zone::TokenSource;

pub(crate) fn parse<R: Read>(s: &mut TokenSource<'_, R>) -> ParseResult<SSHFP> {
    let token = s.next_field("algorithm")?;
    let algorithm = token
        .text
        .parse::<u8>()
        .map_err(|_| s.error(ParseErrorKind::Message("bad SSHFP algorithm"), &token))?;

    let token = s.next_field("fingerprint type")?;
    let fingerprint_type = token
        .text
        .parse::<u8>()
        .map_err(|_| s.error(ParseErrorKind::Message("bad SSHFP fingerprint type"), &token))?;

    let token = s.next_field("fingerprint")?;
    let fingerprint = HEXUPPER_PERMISSIVE
        .decode(token.text.as_bytes())
        .map_err(|_| s.error(ParseErrorKind::Message("bad SSHFP fingerprint"), &token))?;

    Ok(SSHFP::new(algorithm, fingerprint_type, fingerprint))
}
