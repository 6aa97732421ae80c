// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Parser for RRSIG text form

use std::io::Read;
use std::str::FromStr;

use data_encoding::BASE64;
use time::PrimitiveDateTime;

use crate::rr::domain::Name;
use crate::rr::rdata::{RRSIG, SERIAL_TIME};
use crate::rr::record_type::RecordType;
use crate::serialize::txt::errors::{ParseErrorKind, ParseResult};
use crate::serialize::txt::zone::TokenSource;

/// RFC 4034 section 3.2. The two times are either `YYYYMMDDHHmmSS` in
/// UTC or a plain decimal count of seconds since the epoch; 14 digits
/// means the former, the maximum TTL being far smaller than any date in
/// that form keeps the two unambiguous.
fn parse_serial_time(text: &str) -> Option<u32> {
    if text.len() == 14 && text.bytes().all(|b| b.is_ascii_digit()) {
        let dt = PrimitiveDateTime::parse(text, SERIAL_TIME).ok()?;
        u32::try_from(dt.assume_utc().unix_timestamp()).ok()
    } else {
        text.parse().ok()
    }
}

pub(crate) fn parse<R: Read>(s: &mut TokenSource<'_, R>, origin: &Name) -> ParseResult<RRSIG> {
    let token = s.next_field("type covered")?;
    let type_covered = RecordType::from_str(&token.text.to_ascii_uppercase())
        .map_err(|_| s.error(ParseErrorKind::Message("bad RRSIG type covered"), &token))?;

    let token = s.next_field("algorithm")?;
    let algorithm = token
        .text
        .parse::<u8>()
        .map_err(|_| s.error(ParseErrorKind::Message("bad RRSIG algorithm"), &token))?;

    let token = s.next_field("labels")?;
    let labels = token
        .text
        .parse::<u8>()
        .map_err(|_| s.error(ParseErrorKind::Message("bad RRSIG labels"), &token))?;

    let token = s.next_field("original TTL")?;
    let original_ttl = token
        .text
        .parse::<u32>()
        .map_err(|_| s.error(ParseErrorKind::Message("bad RRSIG original TTL"), &token))?;

    let token = s.next_field("expiration")?;
    let sig_expiration = parse_serial_time(&token.text)
        .ok_or_else(|| s.error(ParseErrorKind::Message("bad RRSIG expiration"), &token))?;

    let token = s.next_field("inception")?;
    let sig_inception = parse_serial_time(&token.text)
        .ok_or_else(|| s.error(ParseErrorKind::Message("bad RRSIG inception"), &token))?;

    let token = s.next_field("key tag")?;
    let key_tag = token
        .text
        .parse::<u16>()
        .map_err(|_| s.error(ParseErrorKind::Message("bad RRSIG key tag"), &token))?;

    let token = s.next_field("signer name")?;
    let signer_name = Name::parse(&token.text, Some(origin))
        .map_err(|_| s.error(ParseErrorKind::Message("bad RRSIG signer name"), &token))?;

    let sig_str = s.concat_rest()?;
    let sig = BASE64
        .decode(sig_str.as_bytes())
        .map_err(|_| s.error_here(ParseErrorKind::Message("bad RRSIG signature")))?;

    Ok(RRSIG::new(
        type_covered,
        algorithm,
        labels,
        original_ttl,
        sig_expiration,
        sig_inception,
        key_tag,
        signer_name,
        sig,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialize::txt::rdata_parsers::test_util::with_source;

    #[test]
    fn serial_time_forms() {
        // both presentation forms mean the same instant
        assert_eq!(parse_serial_time("20000101000000"), Some(946684800));
        assert_eq!(parse_serial_time("946684800"), Some(946684800));
        assert_eq!(parse_serial_time("0"), Some(0));
        assert_eq!(parse_serial_time("19700101000000"), Some(0));

        assert_eq!(parse_serial_time("20001301000000"), None); // month 13
        assert_eq!(parse_serial_time("x"), None);
        assert_eq!(parse_serial_time(""), None);
    }

    #[test]
    fn good() {
        let origin = Name::root();
        let rrsig = with_source(
            "A 5 3 3600 20000102030405 19990102030405 2642 miek.nl. aGVsbG8=\n",
            |s| parse(s, &origin),
        )
        .unwrap();
        assert_eq!(rrsig.type_covered(), RecordType::A);
        assert_eq!(rrsig.algorithm(), 5);
        assert_eq!(rrsig.labels(), 3);
        assert_eq!(rrsig.original_ttl(), 3600);
        assert_eq!(rrsig.sig_expiration(), 946782245);
        assert_eq!(rrsig.key_tag(), 2642);
        assert_eq!(rrsig.signer_name().to_string(), "miek.nl.");
        assert_eq!(rrsig.sig(), b"hello");
    }

    #[test]
    fn signature_split_across_lines_of_a_brace_block() {
        // what the lexer produces for a multi-line signature
        let origin = Name::root();
        let rrsig = with_source(
            "NSEC 8 2 3600 20000101000000 19990101000000 2642 miek.nl. aGVs bG8=\n",
            |s| parse(s, &origin),
        )
        .unwrap();
        assert_eq!(rrsig.sig(), b"hello");
        assert_eq!(rrsig.type_covered(), RecordType::NSEC);
    }

    #[test]
    fn bad_expiration() {
        let origin = Name::root();
        let e = with_source(
            "A 5 3 3600 not-a-time 19990101000000 2642 miek.nl. aGVsbG8=\n",
            |s| parse(s, &origin),
        )
        .unwrap_err();
        assert!(e.to_string().contains("bad RRSIG expiration"), "{e}");
    }

    #[test]
    fn bad_type_covered() {
        let origin = Name::root();
        let e = with_source(
            "BOGUS 5 3 3600 20000101000000 19990101000000 2642 miek.nl. aGVsbG8=\n",
            |s| parse(s, &origin),
        )
        .unwrap_err();
        assert!(e.to_string().contains("bad RRSIG type covered"), "{e}");
    }
}
