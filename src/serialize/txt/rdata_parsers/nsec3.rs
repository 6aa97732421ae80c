// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Parser for NSEC3 text form

use std::io::Read;

use data_encoding::{BASE32_DNSSEC, HEXUPPER_PERMISSIVE};

use crate::rr::rdata::NSEC3;
use crate::rr::domain::Name;
use crate::serialize::txt::errors::{ParseErrorKind, ParseResult};
use crate::serialize::txt::zone::TokenSource;

/// RFC 5155 section 3.3: hash algorithm, flags, iterations, the salt in
/// hex with `-` for the empty salt, the next hashed owner name in
/// unpadded base32hex, then the type bitmap.
///
/// The next hashed owner is a hash, not a domain name, so it is not
/// qualified against the origin.
pub(crate) fn parse<R: Read>(s: &mut TokenSource<'_, R>, _origin: &Name) -> ParseResult<NSEC3> {
    let token = s.next_field("hash algorithm")?;
    let hash_algorithm = token
        .text
        .parse::<u8>()
        .map_err(|_| s.error(ParseErrorKind::Message("bad NSEC3 hash algorithm"), &token))?;

    let token = s.next_field("flags")?;
    let flags = token
        .text
        .parse::<u8>()
        .map_err(|_| s.error(ParseErrorKind::Message("bad NSEC3 flags"), &token))?;

    let token = s.next_field("iterations")?;
    let iterations = token
        .text
        .parse::<u16>()
        .map_err(|_| s.error(ParseErrorKind::Message("bad NSEC3 iterations"), &token))?;

    let token = s.next_field("salt")?;
    let salt = if token.text == "-" {
        Vec::new()
    } else {
        HEXUPPER_PERMISSIVE
            .decode(token.text.as_bytes())
            .map_err(|_| s.error(ParseErrorKind::Message("bad NSEC3 salt"), &token))?
    };

    let token = s.next_field("next hashed owner")?;
    let next_hashed_owner_name = BASE32_DNSSEC
        .decode(token.text.to_ascii_lowercase().as_bytes())
        .map_err(|_| s.error(ParseErrorKind::Message("bad NSEC3 next hashed owner"), &token))?;

    let type_bit_maps = s.bitmap_rest("bad NSEC3 type bitmap")?;

    Ok(NSEC3::new(
        hash_algorithm,
        flags,
        iterations,
        salt,
        next_hashed_owner_name,
        type_bit_maps,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rr::record_type::RecordType;
    use crate::serialize::txt::rdata_parsers::test_util::with_source;

    #[test]
    fn rfc5155_example() {
        let origin = Name::root();
        let nsec3 = with_source(
            "1 1 12 aabbccdd 2vptu5timamqttgl4luu9kg21e0aor3s A RRSIG\n",
            |s| parse(s, &origin),
        )
        .unwrap();
        assert_eq!(nsec3.hash_algorithm(), 1);
        assert_eq!(nsec3.flags(), 1);
        assert!(nsec3.opt_out());
        assert_eq!(nsec3.iterations(), 12);
        assert_eq!(nsec3.salt(), &[0xaa, 0xbb, 0xcc, 0xdd]);
        assert_eq!(nsec3.next_hashed_owner_name().len(), 20);
        assert_eq!(
            nsec3.type_bit_maps(),
            &[RecordType::A, RecordType::RRSIG]
        );
    }

    #[test]
    fn empty_salt_is_a_dash() {
        let origin = Name::root();
        let nsec3 = with_source(
            "1 0 0 - 2vptu5timamqttgl4luu9kg21e0aor3s\n",
            |s| parse(s, &origin),
        )
        .unwrap();
        assert!(nsec3.salt().is_empty());
        assert!(!nsec3.opt_out());
        assert!(nsec3.type_bit_maps().is_empty());
    }

    #[test]
    fn uppercase_base32_accepted() {
        let origin = Name::root();
        let nsec3 = with_source(
            "1 0 0 - 2VPTU5TIMAMQTTGL4LUU9KG21E0AOR3S\n",
            |s| parse(s, &origin),
        )
        .unwrap();
        assert_eq!(nsec3.next_hashed_owner_name().len(), 20);
    }

    #[test]
    fn bad_fields() {
        let origin = Name::root();
        let e = with_source("1 0 0 zz 2vptu5timamqttgl4luu9kg21e0aor3s\n", |s| {
            parse(s, &origin)
        })
        .unwrap_err();
        assert!(e.to_string().contains("bad NSEC3 salt"), "{e}");

        let e = with_source("1 0 0 - not!base32\n", |s| parse(s, &origin)).unwrap_err();
        assert!(e.to_string().contains("bad NSEC3 next hashed owner"), "{e}");
    }
}
