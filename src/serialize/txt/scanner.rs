// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! character scanner underneath the zone lexer
//!
//! The scanner chops the input byte stream into atoms: maximal runs of
//! ordinary bytes, the structural single characters of the zone file
//! grammar, and EOF, each stamped with its 1-based line and column.

use std::io::Read;

use crate::serialize::txt::errors::{LexerError, LexerErrorKind, LexerResult};

/// One lexical atom. Everything the zone lexer consumes comes through
/// here; no other layer touches the input.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Atom {
    pub(crate) kind: AtomKind,
    pub(crate) line: usize,
    pub(crate) column: usize,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum AtomKind {
    /// A maximal run of non-structural bytes.
    Word(String),
    /// A single space or tab, preserving which.
    Space(char),
    Newline,
    Semicolon,
    Quote,
    Backslash,
    OpenParen,
    CloseParen,
    Eof,
}

const fn is_structural(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b';' | b'"' | b'\\' | b'(' | b')')
}

pub(crate) struct Scanner<R> {
    reader: R,
    peeked: Option<u8>,
    line: usize,
    column: usize,
}

impl<R: Read> Scanner<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            reader,
            peeked: None,
            line: 1,
            column: 1,
        }
    }

    /// The position the next atom will start at.
    pub(crate) fn position(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    /// The next atom. After EOF has been returned it is returned again.
    pub(crate) fn next_atom(&mut self) -> LexerResult<Atom> {
        // carriage returns carry no information, swallow them wherever
        // they appear so that CRLF files lex like LF files
        while self.peek()? == Some(b'\r') {
            self.advance()?;
        }

        let (line, column) = (self.line, self.column);
        let atom = |kind| Atom { kind, line, column };

        let Some(b) = self.advance()? else {
            return Ok(atom(AtomKind::Eof));
        };

        Ok(match b {
            b' ' | b'\t' => atom(AtomKind::Space(char::from(b))),
            b'\n' => atom(AtomKind::Newline),
            b';' => atom(AtomKind::Semicolon),
            b'"' => atom(AtomKind::Quote),
            b'\\' => atom(AtomKind::Backslash),
            b'(' => atom(AtomKind::OpenParen),
            b')' => atom(AtomKind::CloseParen),
            first => {
                let mut word = vec![first];
                while let Some(b) = self.peek()? {
                    if is_structural(b) {
                        break;
                    }
                    word.push(b);
                    self.advance()?;
                }
                let word = String::from_utf8(word).map_err(|_| {
                    LexerError::new(LexerErrorKind::Utf8, "", line, column)
                })?;
                atom(AtomKind::Word(word))
            }
        })
    }

    fn peek(&mut self) -> LexerResult<Option<u8>> {
        if self.peeked.is_none() {
            self.peeked = self.read_byte()?;
        }
        Ok(self.peeked)
    }

    /// Consumes one byte, updating the position.
    fn advance(&mut self) -> LexerResult<Option<u8>> {
        let b = match self.peeked.take() {
            Some(b) => Some(b),
            None => self.read_byte()?,
        };
        match b {
            Some(b'\n') => {
                self.line += 1;
                self.column = 1;
            }
            Some(_) => self.column += 1,
            None => {}
        }
        Ok(b)
    }

    fn read_byte(&mut self) -> LexerResult<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    return Err(LexerError::new(
                        LexerErrorKind::Io(e),
                        "",
                        self.line,
                        self.column,
                    ))
                }
            }
        }
    }
}
