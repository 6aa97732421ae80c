// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::fmt;
use std::io;

use thiserror::Error;

use crate::serialize::txt::zone_lex::Token;

/// An alias for parse results returned by functions of this crate
pub type ParseResult<T> = Result<T, ParseError>;

/// An alias for lexer results returned by functions of this crate
pub(crate) type LexerResult<T> = Result<T, LexerError>;

/// The error kind for parse errors that get returned in the crate
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// An error with an arbitrary message, referenced as &'static str
    #[error("{0}")]
    Message(&'static str),

    /// An error with an arbitrary message, stored as String
    #[error("{0}")]
    Msg(String),

    /// A token is missing
    #[error("token is missing: {0}")]
    MissingToken(&'static str),

    /// A TTL field did not hold an unsigned 31 bit number of seconds
    #[error("not a TTL")]
    ParseTtl,

    /// An RR name that is not in the known-types table
    #[error("unknown RR type")]
    UnknownRecordType,

    /// A class mnemonic that is not in the known-class table
    #[error("unknown class")]
    UnknownClass,

    /// Trailing tokens after the rdata of a fixed-arity record
    #[error("garbage after rdata")]
    GarbageAfterRdata,

    /// More than [`crate::MAX_INCLUDE_DEPTH`] nested `$INCLUDE` files
    #[error("too deeply nested $INCLUDE")]
    IncludeTooDeep,

    /// An error from the lexer
    #[error("{0}")]
    Lexer(LexerErrorKind),
}

/// The error type for parse errors that get returned in the crate.
///
/// Every error carries the file being parsed (empty for in-memory
/// parses), the offending token's text, and its 1-based line and column.
#[derive(Debug, Error)]
pub struct ParseError {
    file: String,
    kind: ParseErrorKind,
    token: String,
    line: usize,
    column: usize,
}

impl ParseError {
    pub(crate) fn new(file: &str, kind: ParseErrorKind, token: &Token) -> Self {
        Self {
            file: file.to_string(),
            kind,
            token: token.text.clone(),
            line: token.line,
            column: token.column,
        }
    }

    pub(crate) fn from_lexer(e: LexerError, file: &str) -> Self {
        Self {
            file: file.to_string(),
            kind: ParseErrorKind::Lexer(e.kind),
            token: e.token,
            line: e.line,
            column: e.column,
        }
    }

    pub(crate) fn no_records(file: &str) -> Self {
        Self {
            file: file.to_string(),
            kind: ParseErrorKind::Message("no record found in input"),
            token: String::new(),
            line: 1,
            column: 1,
        }
    }

    /// Get the kind of the error
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// The file being parsed when the error occurred, empty for in-memory
    /// input.
    pub fn file(&self) -> &str {
        &self.file
    }

    /// The text of the offending token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The 1-based line of the offending token.
    pub fn line(&self) -> usize {
        self.line
    }

    /// The 1-based column of the offending token.
    pub fn column(&self) -> usize {
        self.column
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.file.is_empty() {
            write!(f, "{}: ", self.file)?;
        }
        write!(
            f,
            "{kind}: `{token}' at line: {line}:{column}",
            kind = self.kind,
            token = self.token,
            line = self.line,
            column = self.column,
        )
    }
}

/// The error kind for lexer errors that get returned in the crate
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LexerErrorKind {
    /// A `)` without a matching opening brace
    #[error("extra closing brace")]
    ExtraClosingBrace,

    /// A `(` that was never closed; positioned at the opening brace
    #[error("unclosed brace")]
    UnclosedBrace,

    /// A `\` escape directly before the end of input
    #[error("dangling escape at end of input")]
    DanglingEscape,

    /// The input was not valid UTF-8
    #[error("invalid utf-8 in input")]
    Utf8,

    /// An error got returned from IO
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// The error type for lexer errors that get returned in the crate
#[derive(Debug, Error)]
#[error("{kind} at line: {line}:{column}")]
pub struct LexerError {
    kind: LexerErrorKind,
    token: String,
    line: usize,
    column: usize,
}

impl LexerError {
    pub(crate) fn new(
        kind: LexerErrorKind,
        token: impl Into<String>,
        line: usize,
        column: usize,
    ) -> Self {
        Self {
            kind,
            token: token.into(),
            line,
            column,
        }
    }

    /// Get the kind of the error
    pub fn kind(&self) -> &LexerErrorKind {
        &self.kind
    }
}
