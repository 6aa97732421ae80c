// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Zone file text parsing: RFC 1035 section 5 master file format plus
//! the `$TTL`, `$ORIGIN` and `$INCLUDE` control entries.

use std::io::{Cursor, Read};

use crate::rr::resource::Record;

mod errors;
mod rdata_parsers;
mod scanner;
mod zone;
mod zone_lex;

pub use self::errors::{LexerError, LexerErrorKind, ParseError, ParseErrorKind, ParseResult};
pub use self::zone::ZoneParser;
pub use self::zone_lex::{Token, TokenKind};

/// Parses a zone from `input`, streaming the records out in source
/// order. `file` appears in errors and is the empty string for
/// in-memory input.
///
/// The returned iterator yields each record, or, on the first error, that
/// error as its final item. `$INCLUDE`d files are read relative to the
/// process working directory and their records appear at the inclusion
/// point.
pub fn parse_zone<'a>(input: impl Read + 'a, file: impl Into<String>) -> ZoneParser<'a> {
    ZoneParser::new(input, file)
}

/// Reads the first record contained in `input` and discards the rest.
pub fn read_rr<'a>(input: impl Read + 'a, file: impl Into<String>) -> ParseResult<Record> {
    let file = file.into();
    let mut parser = ZoneParser::new(input, file.as_str());
    parser
        .next()
        .unwrap_or_else(|| Err(ParseError::no_records(&file)))
}

/// Reads the record contained in `text`, supplying the closing newline
/// when the caller left it off.
///
/// The class defaults to `IN` and the TTL to [`crate::DEFAULT_TTL`]:
///
/// ```
/// let mx = zonefile::new_rr("miek.nl. IN MX 10 mx.miek.nl.").unwrap();
/// assert_eq!(mx.to_string(), "miek.nl.\t3600\tIN\tMX\t10 mx.miek.nl.");
/// ```
pub fn new_rr(text: &str) -> ParseResult<Record> {
    if text.ends_with('\n') {
        read_rr(text.as_bytes(), "")
    } else {
        read_rr(Cursor::new(format!("{text}\n").into_bytes()), "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rr_supplies_the_newline() {
        let with = new_rr("miek.nl. IN A 127.0.0.1\n").unwrap();
        let without = new_rr("miek.nl. IN A 127.0.0.1").unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn read_rr_takes_the_first() {
        let rr = read_rr(
            "a.nl. IN A 10.0.0.1\nb.nl. IN A 10.0.0.2\n".as_bytes(),
            "",
        )
        .unwrap();
        assert_eq!(rr.name().to_string(), "a.nl.");
    }

    #[test]
    fn read_rr_on_empty_input() {
        let e = read_rr("".as_bytes(), "empty.zone").unwrap_err();
        assert!(e.to_string().contains("no record found"), "{e}");

        let e = read_rr("; nothing here\n\n".as_bytes(), "").unwrap_err();
        assert!(e.to_string().contains("no record found"), "{e}");
    }

    #[test]
    fn new_rr_on_empty_string() {
        assert!(new_rr("").is_err());
    }
}
