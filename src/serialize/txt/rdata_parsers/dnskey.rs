// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Parser for DNSKEY text form

use std::io::Read;

use data_encoding::BASE64;

use crate::rr::rdata::DNSKEY;
use crate::serialize::txt::errors::{ParseErrorKind, ParseResult};
use crate::serialize::txt::zone::TokenSource;

/// RFC 4034 section 2.2: flags, protocol, algorithm, then the public key
/// in base64, which may be split over any number of white space separated
/// chunks.
pub(crate) fn parse<R: Read>(s: &mut TokenSource<'_, R>) -> ParseResult<DNSKEY> {
    let token = s.next_field("flags")?;
    let flags = token
        .text
        .parse::<u16>()
        .map_err(|_| s.error(ParseErrorKind::Message("bad DNSKEY flags"), &token))?;

    let token = s.next_field("protocol")?;
    let protocol = token
        .text
        .parse::<u8>()
        .map_err(|_| s.error(ParseErrorKind::Message("bad DNSKEY protocol"), &token))?;

    let token = s.next_field("algorithm")?;
    let algorithm = token
        .text
        .parse::<u8>()
        .map_err(|_| s.error(ParseErrorKind::Message("bad DNSKEY algorithm"), &token))?;

    let key_str = s.concat_rest()?;
    let public_key = BASE64
        .decode(key_str.as_bytes())
        .map_err(|_| s.error_here(ParseErrorKind::Message("bad DNSKEY public key")))?;

    Ok(DNSKEY::new(flags, protocol, algorithm, public_key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialize::txt::rdata_parsers::test_util::with_source;

    const ENCODED: &str = "aGVsbG8=";

    #[test]
    fn good() {
        let dnskey = with_source(&format!("256 3 8 {ENCODED}\n"), |s| parse(s)).unwrap();
        assert_eq!(dnskey.flags(), 256);
        assert_eq!(dnskey.protocol(), 3);
        assert_eq!(dnskey.algorithm(), 8);
        assert_eq!(dnskey.public_key(), b"hello");
        assert!(dnskey.zone_key());
        assert!(!dnskey.secure_entry_point());
    }

    #[test]
    fn key_split_across_chunks() {
        let dnskey = with_source("257 3 8 aGVs bG8=\n", |s| parse(s)).unwrap();
        assert_eq!(dnskey.public_key(), b"hello");
        assert!(dnskey.secure_entry_point());
    }

    #[test]
    fn bad_base64() {
        let e = with_source("256 3 8 !!!\n", |s| parse(s)).unwrap_err();
        assert!(e.to_string().contains("bad DNSKEY public key"), "{e}");
    }

    #[test]
    fn missing_fields() {
        for input in ["\n", "256\n", "256 3\n"] {
            let e = with_source(input, |s| parse(s)).unwrap_err();
            assert!(e.to_string().contains("token is missing"), "{e}");
        }
        // no key at all decodes to an empty key, the original tolerated this
        let dnskey = with_source("256 3 8\n", |s| parse(s)).unwrap();
        assert!(dnskey.public_key().is_empty());
    }
}
