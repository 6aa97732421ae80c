// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Parser for DS text form

use std::io::Read;

use data_encoding::HEXUPPER_PERMISSIVE;

use crate::rr::rdata::DS;
use crate::serialize::txt::errors::{ParseErrorKind, ParseResult};
use crate::serialize::txt::zone::TokenSource;

/// RFC 4034 section 5.3: key tag, algorithm, digest type, then the
/// digest as case-insensitive hex, white space allowed within.
pub(crate) fn parse<R: Read>(s: &mut TokenSource<'_, R>) -> ParseResult<DS> {
    let token = s.next_field("key tag")?;
    let key_tag = token
        .text
        .parse::<u16>()
        .map_err(|_| s.error(ParseErrorKind::Message("bad DS key tag"), &token))?;

    let token = s.next_field("algorithm")?;
    let algorithm = token
        .text
        .parse::<u8>()
        .map_err(|_| s.error(ParseErrorKind::Message("bad DS algorithm"), &token))?;

    let token = s.next_field("digest type")?;
    let digest_type = token
        .text
        .parse::<u8>()
        .map_err(|_| s.error(ParseErrorKind::Message("bad DS digest type"), &token))?;

    let digest_str = s.concat_rest()?;
    let digest = HEXUPPER_PERMISSIVE
        .decode(digest_str.as_bytes())
        .map_err(|_| s.error_here(ParseErrorKind::Message("bad DS digest")))?;

    Ok(DS::new(key_tag, algorithm, digest_type, digest))
}
