// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Parser for TXT text form

use std::io::Read;

use crate::rr::rdata::TXT;
use crate::serialize::txt::errors::ParseResult;
use crate::serialize::txt::zone::TokenSource;

/// Everything up to the end of the record, verbatim: word and blank
/// tokens alike contribute their text, so spacing between bare words
/// survives.
pub(crate) fn parse<R: Read>(s: &mut TokenSource<'_, R>) -> ParseResult<TXT> {
    use crate::serialize::txt::zone_lex::TokenKind;

    let mut txt_data = String::new();
    loop {
        let token = s.next()?;
        match token.kind {
            TokenKind::Eol | TokenKind::Eof => return Ok(TXT::new(txt_data)),
            _ => txt_data.push_str(&token.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialize::txt::rdata_parsers::test_util::with_source;

    #[test]
    fn quoted_keeps_everything() {
        let txt = with_source("\"hello ; world\"\n", |s| parse(s)).unwrap();
        assert_eq!(txt.txt_data(), "hello ; world");
    }

    #[test]
    fn bare_words_keep_their_spacing() {
        let txt = with_source("hello world\n", |s| parse(s)).unwrap();
        assert_eq!(txt.txt_data(), "hello world");
    }

    #[test]
    fn empty() {
        let txt = with_source("\n", |s| parse(s)).unwrap();
        assert_eq!(txt.txt_data(), "");
    }
}
