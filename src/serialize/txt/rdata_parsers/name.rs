// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Parser for record types whose rdata is a single domain name

use std::io::Read;

use crate::rr::domain::Name;
use crate::serialize::txt::errors::{ParseErrorKind, ParseResult};
use crate::serialize::txt::zone::TokenSource;

/// Reads one domain name field, qualified against `origin` when it is
/// relative. `what` names the field in errors, e.g. `"bad NS nsdname"`.
pub(crate) fn parse<R: Read>(
    s: &mut TokenSource<'_, R>,
    origin: &Name,
    what: &'static str,
) -> ParseResult<Name> {
    let token = s.next_field("domain name")?;
    Name::parse(&token.text, Some(origin))
        .map_err(|_| s.error(ParseErrorKind::Message(what), &token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    use crate::serialize::txt::rdata_parsers::test_util::with_source;

    #[test]
    fn qualifies_relative_names() {
        let origin = Name::from_str("miek.nl.").unwrap();
        let name = with_source("ns1\n", |s| parse(s, &origin, "bad NS nsdname")).unwrap();
        assert_eq!(name.to_string(), "ns1.miek.nl.");

        let name = with_source("ns1.example.org.\n", |s| parse(s, &origin, "bad NS nsdname"))
            .unwrap();
        assert_eq!(name.to_string(), "ns1.example.org.");
    }

    #[test]
    fn bad_name() {
        let origin = Name::root();
        let e = with_source("no..good.\n", |s| parse(s, &origin, "bad CNAME target"))
            .unwrap_err();
        assert!(e.to_string().contains("bad CNAME target"), "{e}");
    }
}
