// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Parser for NSEC text form

use std::io::Read;

use crate::rr::domain::Name;
use crate::rr::rdata::NSEC;
use crate::serialize::txt::errors::{ParseErrorKind, ParseResult};
use crate::serialize::txt::zone::TokenSource;

/// RFC 4034 section 4.2: the next domain name, then the type bitmap as a
/// list of RR type mnemonics.
pub(crate) fn parse<R: Read>(s: &mut TokenSource<'_, R>, origin: &Name) -> ParseResult<NSEC> {
    let token = s.next_field("next domain name")?;
    let next_domain_name = Name::parse(&token.text, Some(origin))
        .map_err(|_| s.error(ParseErrorKind::Message("bad NSEC next domain name"), &token))?;

    let type_bit_maps = s.bitmap_rest("bad NSEC type bitmap")?;

    Ok(NSEC::new(next_domain_name, type_bit_maps))
}
