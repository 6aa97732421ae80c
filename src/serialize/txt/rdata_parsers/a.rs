// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Parser for A text form

use std::io::Read;
use std::net::Ipv4Addr;

use crate::rr::rdata::A;
use crate::serialize::txt::errors::{ParseErrorKind, ParseResult};
use crate::serialize::txt::zone::TokenSource;

pub(crate) fn parse<R: Read>(s: &mut TokenSource<'_, R>) -> ParseResult<A> {
    let token = s.next_field("ipv4 address")?;
    let address = token
        .text
        .parse::<Ipv4Addr>()
        .map_err(|_| s.error(ParseErrorKind::Message("bad A"), &token))?;
    Ok(address.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialize::txt::rdata_parsers::test_util::with_source;

    #[test]
    fn good() {
        let a = with_source("127.0.0.1\n", |s| parse(s)).unwrap();
        assert_eq!(a, A::new(127, 0, 0, 1));
    }

    #[test]
    fn bad() {
        let e = with_source("127.0.0.256\n", |s| parse(s)).unwrap_err();
        assert!(e.to_string().contains("bad A"), "{e}");
        // an ipv6 address is not an A record
        assert!(with_source("::1\n", |s| parse(s)).is_err());
        // missing entirely
        let e = with_source("\n", |s| parse(s)).unwrap_err();
        assert!(e.to_string().contains("ipv4 address"), "{e}");
    }
}
