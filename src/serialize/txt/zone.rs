// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! The zone parser: a state machine over the lexer's token stream.
//!
//! A line of a zone file takes one of five shapes, `_` marking mandatory
//! whitespace:
//!
//! ```text
//! OWNER _ RRTYPE ...rdata            ; ttl and class omitted
//! OWNER _ TTL _ RRTYPE ...           ; class omitted
//! OWNER _ TTL _ CLASS _ RRTYPE ...   ; both given
//! OWNER _ CLASS _ RRTYPE ...         ; ttl omitted
//! OWNER _ CLASS _ TTL _ RRTYPE ...   ; both given, reversed
//! ```
//!
//! Once the RR type is known the rdata reader for that type takes over
//! the token stream until the end of the record. A line that starts with
//! whitespace instead of an owner name reuses the previous owner.

use std::fs::File;
use std::io::{BufReader, Read};
use std::mem;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::rr::dns_class::DNSClass;
use crate::rr::domain::Name;
use crate::rr::record_type::RecordType;
use crate::rr::resource::Record;
use crate::serialize::txt::errors::{ParseError, ParseErrorKind, ParseResult};
use crate::serialize::txt::rdata_parsers::parse_rdata;
use crate::serialize::txt::zone_lex::{Lexer, Token, TokenKind};
use crate::{DEFAULT_TTL, MAX_INCLUDE_DEPTH, MAX_TTL};

/// A streaming zone file parser.
///
/// `ZoneParser` is an iterator over the records of a zone, in source
/// order across `$INCLUDE` boundaries. The first error ends the stream:
/// it is yielded as the final item and the iterator is fused afterwards.
///
/// Dropping the parser closes the zone file and every include file it
/// still has open.
pub struct ZoneParser<'a> {
    frames: Vec<Frame<'a>>,
    done: bool,
}

/// One input being lexed: the primary zone file, or an `$INCLUDE`.
///
/// An include inherits the origin and default TTL of the file that
/// included it, but changes it makes to them die with the frame.
struct Frame<'a> {
    lexer: Lexer<Box<dyn Read + 'a>>,
    file: String,
    origin: Name,
    default_ttl: u32,
    state: State,
    owner: Option<Name>,
    class: DNSClass,
    ttl: u32,
}

#[derive(Debug)]
enum State {
    /// Start of a line: an owner name, a directive, or a continuation
    ExpectOwnerOrDir,
    /// The whitespace after the owner name
    ExpectOwnerBl,
    /// RR type, TTL or class
    ExpectAny,
    ExpectAnyNoClassBl,
    /// RR type or TTL, the class was given
    ExpectAnyNoClass,
    ExpectAnyNoTtlBl,
    /// RR type or class, the TTL was given
    ExpectAnyNoTtl,
    ExpectRrTypeBl,
    /// Only the RR type is still acceptable
    ExpectRrType,
    /// The RR type is known, its rdata reader takes over on the next token
    ExpectRdata {
        rtype: RecordType,
        type_token: Token,
    },
    ExpectDirTtlBl,
    ExpectDirTtl,
    ExpectDirOriginBl,
    ExpectDirOrigin,
    ExpectDirIncludeBl,
    ExpectDirInclude,
}

enum Outcome<'a> {
    Continue,
    Emit(Record),
    Pop,
    Push(Frame<'a>),
}

impl<'a> ZoneParser<'a> {
    /// Creates a parser over `input`. `file` is only used in error
    /// messages; pass an empty string for in-memory input.
    pub fn new(input: impl Read + 'a, file: impl Into<String>) -> Self {
        let frame = Frame {
            lexer: Lexer::new(Box::new(input) as Box<dyn Read + 'a>),
            file: file.into(),
            origin: Name::root(),
            default_ttl: DEFAULT_TTL,
            state: State::ExpectOwnerOrDir,
            owner: None,
            class: DNSClass::IN,
            ttl: DEFAULT_TTL,
        };
        Self {
            frames: vec![frame],
            done: false,
        }
    }

    /// Presets the origin that relative names are qualified against, as
    /// if the file began with `$ORIGIN`. The initial origin is `.`
    pub fn origin(mut self, origin: Name) -> Self {
        self.frames[0].origin = origin;
        self
    }

    /// Presets the TTL applied to records without one, as if the file
    /// began with `$TTL`. The initial default is [`DEFAULT_TTL`].
    pub fn default_ttl(mut self, ttl: u32) -> Self {
        self.frames[0].default_ttl = ttl;
        self.frames[0].ttl = ttl;
        self
    }

    fn step(frame: &mut Frame<'a>, depth: usize) -> ParseResult<Outcome<'a>> {
        let token = frame
            .lexer
            .next_token()
            .map_err(|e| ParseError::from_lexer(e, &frame.file))?;
        let state = mem::replace(&mut frame.state, State::ExpectOwnerOrDir);
        trace!(?state, kind = ?token.kind, text = %token.text, "zone token");

        // the end of this input ends the frame, except while rdata is
        // expected, where the reader decides what a missing line end means
        if token.kind == TokenKind::Eof && !matches!(state, State::ExpectRdata { .. }) {
            return Ok(Outcome::Pop);
        }

        let err = |kind: ParseErrorKind, token: &Token| ParseError::new(&frame.file, kind, token);

        match state {
            State::ExpectOwnerOrDir => {
                // each line starts over from the current defaults
                frame.ttl = frame.default_ttl;
                frame.class = DNSClass::IN;
                match token.kind {
                    TokenKind::Eol => {} // empty line
                    TokenKind::Owner => {
                        let name = Name::parse(&token.text, Some(&frame.origin)).map_err(|_| {
                            err(ParseErrorKind::Message("bad owner name"), &token)
                        })?;
                        frame.owner = Some(name);
                        frame.state = State::ExpectOwnerBl;
                    }
                    // a line starting with whitespace keeps the previous owner
                    TokenKind::Blank => frame.state = State::ExpectAny,
                    TokenKind::TtlDirective => frame.state = State::ExpectDirTtlBl,
                    TokenKind::OriginDirective => frame.state = State::ExpectDirOriginBl,
                    TokenKind::IncludeDirective => frame.state = State::ExpectDirIncludeBl,
                    _ => {
                        return Err(err(
                            ParseErrorKind::Message("expected owner name or directive"),
                            &token,
                        ))
                    }
                }
            }
            State::ExpectOwnerBl => match token.kind {
                TokenKind::Blank => frame.state = State::ExpectAny,
                _ => {
                    return Err(err(
                        ParseErrorKind::Message("missing blank after owner"),
                        &token,
                    ))
                }
            },
            State::ExpectAny => match token.kind {
                TokenKind::RecordType => {
                    frame.state = rdata_state(&frame.file, token)?;
                }
                TokenKind::Class => {
                    frame.class = parse_class(&frame.file, &token)?;
                    frame.state = State::ExpectAnyNoClassBl;
                }
                TokenKind::CharData => {
                    frame.ttl = parse_ttl(&token.text)
                        .ok_or_else(|| err(ParseErrorKind::ParseTtl, &token))?;
                    frame.state = State::ExpectAnyNoTtlBl;
                }
                // an indented line with nothing on it
                TokenKind::Eol => {}
                _ => {
                    return Err(err(
                        ParseErrorKind::Message("expected RR type, TTL or class"),
                        &token,
                    ))
                }
            },
            State::ExpectAnyNoClassBl => match token.kind {
                TokenKind::Blank => frame.state = State::ExpectAnyNoClass,
                _ => {
                    return Err(err(
                        ParseErrorKind::Message("missing blank after class"),
                        &token,
                    ))
                }
            },
            State::ExpectAnyNoClass => match token.kind {
                TokenKind::RecordType => {
                    frame.state = rdata_state(&frame.file, token)?;
                }
                TokenKind::CharData => {
                    frame.ttl = parse_ttl(&token.text)
                        .ok_or_else(|| err(ParseErrorKind::ParseTtl, &token))?;
                    frame.state = State::ExpectRrTypeBl;
                }
                _ => {
                    return Err(err(
                        ParseErrorKind::Message("expected RR type or TTL"),
                        &token,
                    ))
                }
            },
            State::ExpectAnyNoTtlBl => match token.kind {
                TokenKind::Blank => frame.state = State::ExpectAnyNoTtl,
                _ => {
                    return Err(err(
                        ParseErrorKind::Message("missing blank after TTL"),
                        &token,
                    ))
                }
            },
            State::ExpectAnyNoTtl => match token.kind {
                TokenKind::RecordType => {
                    frame.state = rdata_state(&frame.file, token)?;
                }
                TokenKind::Class => {
                    frame.class = parse_class(&frame.file, &token)?;
                    frame.state = State::ExpectRrTypeBl;
                }
                _ => {
                    return Err(err(
                        ParseErrorKind::Message("expected RR type or class"),
                        &token,
                    ))
                }
            },
            State::ExpectRrTypeBl => match token.kind {
                TokenKind::Blank => frame.state = State::ExpectRrType,
                _ => {
                    return Err(err(
                        ParseErrorKind::Message("missing blank before RR type"),
                        &token,
                    ))
                }
            },
            State::ExpectRrType => match token.kind {
                TokenKind::RecordType => {
                    frame.state = rdata_state(&frame.file, token)?;
                }
                _ => return Err(err(ParseErrorKind::UnknownRecordType, &token)),
            },
            State::ExpectRdata { rtype, type_token } => {
                let owner = frame.owner.clone().ok_or_else(|| {
                    err(ParseErrorKind::Message("missing owner name"), &type_token)
                })?;
                // the token separating type and rdata was just consumed;
                // anything else belongs to the reader
                let pushback = (token.kind != TokenKind::Blank).then_some(token);
                let mut source =
                    TokenSource::new(&mut frame.lexer, &frame.file, type_token, pushback);
                let rdata = parse_rdata(rtype, &mut source, &frame.origin)?;
                let record = Record::new(owner, frame.class, frame.ttl, rdata);
                trace!(name = %record.name(), rtype = %record.record_type(), "parsed record");
                return Ok(Outcome::Emit(record));
            }
            State::ExpectDirTtlBl => match token.kind {
                TokenKind::Blank => frame.state = State::ExpectDirTtl,
                _ => {
                    return Err(err(
                        ParseErrorKind::Message("missing blank after $TTL directive"),
                        &token,
                    ))
                }
            },
            State::ExpectDirTtl => match token.kind {
                TokenKind::CharData => {
                    let ttl = parse_ttl(&token.text)
                        .ok_or_else(|| err(ParseErrorKind::ParseTtl, &token))?;
                    debug!(ttl, "default TTL set by $TTL");
                    frame.default_ttl = ttl;
                }
                _ => return Err(err(ParseErrorKind::Message("expected $TTL value"), &token)),
            },
            State::ExpectDirOriginBl => match token.kind {
                TokenKind::Blank => frame.state = State::ExpectDirOrigin,
                _ => {
                    return Err(err(
                        ParseErrorKind::Message("missing blank after $ORIGIN directive"),
                        &token,
                    ))
                }
            },
            State::ExpectDirOrigin => match token.kind {
                TokenKind::CharData => {
                    // a relative origin is appended to the previous one
                    let origin = Name::parse(&token.text, Some(&frame.origin))
                        .map_err(|_| err(ParseErrorKind::Message("bad origin name"), &token))?;
                    debug!(%origin, "origin set by $ORIGIN");
                    frame.origin = origin;
                }
                _ => {
                    return Err(err(
                        ParseErrorKind::Message("expected $ORIGIN value"),
                        &token,
                    ))
                }
            },
            State::ExpectDirIncludeBl => match token.kind {
                TokenKind::Blank => frame.state = State::ExpectDirInclude,
                _ => {
                    return Err(err(
                        ParseErrorKind::Message("missing blank after $INCLUDE directive"),
                        &token,
                    ))
                }
            },
            State::ExpectDirInclude => match token.kind {
                TokenKind::CharData => {
                    if depth > MAX_INCLUDE_DEPTH {
                        return Err(err(ParseErrorKind::IncludeTooDeep, &token));
                    }
                    let file = File::open(&token.text).map_err(|e| {
                        err(
                            ParseErrorKind::Msg(format!("failed to open `{}': {e}", token.text)),
                            &token,
                        )
                    })?;
                    debug!(path = %token.text, "reading $INCLUDE file");
                    let child = Frame {
                        lexer: Lexer::new(Box::new(BufReader::new(file)) as Box<dyn Read + 'a>),
                        file: token.text.clone(),
                        origin: frame.origin.clone(),
                        default_ttl: frame.default_ttl,
                        state: State::ExpectOwnerOrDir,
                        owner: None,
                        class: DNSClass::IN,
                        ttl: frame.default_ttl,
                    };
                    return Ok(Outcome::Push(child));
                }
                _ => {
                    return Err(err(
                        ParseErrorKind::Message("expected $INCLUDE path"),
                        &token,
                    ))
                }
            },
        }
        Ok(Outcome::Continue)
    }
}

impl Iterator for ZoneParser<'_> {
    type Item = ParseResult<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let depth = self.frames.len();
            let Some(frame) = self.frames.last_mut() else {
                self.done = true;
                return None;
            };
            match Self::step(frame, depth) {
                Ok(Outcome::Continue) => {}
                Ok(Outcome::Emit(record)) => return Some(Ok(record)),
                Ok(Outcome::Pop) => {
                    if self.frames.pop().is_some() && !self.frames.is_empty() {
                        debug!("finished $INCLUDE file");
                    }
                }
                Ok(Outcome::Push(child)) => self.frames.push(child),
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

fn rdata_state(file: &str, token: Token) -> ParseResult<State> {
    let rtype = RecordType::from_str(&token.text.to_ascii_uppercase())
        .map_err(|_| ParseError::new(file, ParseErrorKind::UnknownRecordType, &token))?;
    Ok(State::ExpectRdata {
        rtype,
        type_token: token,
    })
}

fn parse_class(file: &str, token: &Token) -> ParseResult<DNSClass> {
    DNSClass::from_str(&token.text.to_ascii_uppercase())
        .map_err(|_| ParseError::new(file, ParseErrorKind::UnknownClass, token))
}

/// Zone file TTLs are plain decimal seconds, capped at 2^31 - 1 by
/// RFC 2181. RFC 2308 unit suffixes are deliberately not accepted.
fn parse_ttl(s: &str) -> Option<u32> {
    let ttl = s.parse::<u32>().ok()?;
    (ttl <= MAX_TTL).then_some(ttl)
}

/// The token stream an rdata reader consumes: the current frame's lexer
/// plus the context needed to build good errors.
pub(crate) struct TokenSource<'p, R> {
    lexer: &'p mut Lexer<R>,
    file: &'p str,
    pushback: Option<Token>,
    /// the most recently read token, used to position errors that are
    /// not about any one token, e.g. an unparsable record type
    last: Token,
}

impl<'p, R: Read> TokenSource<'p, R> {
    pub(crate) fn new(
        lexer: &'p mut Lexer<R>,
        file: &'p str,
        type_token: Token,
        pushback: Option<Token>,
    ) -> Self {
        Self {
            lexer,
            file,
            pushback,
            last: type_token,
        }
    }

    pub(crate) fn next(&mut self) -> ParseResult<Token> {
        let token = match self.pushback.take() {
            Some(token) => token,
            None => self
                .lexer
                .next_token()
                .map_err(|e| ParseError::from_lexer(e, self.file))?,
        };
        self.last = token.clone();
        Ok(token)
    }

    /// The next rdata field, skipping the blanks separating fields.
    pub(crate) fn next_field(&mut self, what: &'static str) -> ParseResult<Token> {
        loop {
            let token = self.next()?;
            match token.kind {
                TokenKind::Blank => continue,
                TokenKind::Eol | TokenKind::Eof => {
                    return Err(self.error(ParseErrorKind::MissingToken(what), &token))
                }
                _ => return Ok(token),
            }
        }
    }

    /// After fixed-arity rdata: one optional blank, then the end of the
    /// record, anything else is garbage.
    pub(crate) fn slurp(&mut self) -> ParseResult<()> {
        let token = self.next()?;
        let token = if token.kind == TokenKind::Blank {
            self.next()?
        } else {
            token
        };
        match token.kind {
            TokenKind::Eol | TokenKind::Eof => Ok(()),
            _ => Err(self.error(ParseErrorKind::GarbageAfterRdata, &token)),
        }
    }

    /// Concatenates the remaining fields up to the end of the record,
    /// dropping the whitespace. This is how multi-chunk base64 and hex
    /// blobs are collected.
    pub(crate) fn concat_rest(&mut self) -> ParseResult<String> {
        let mut collected = String::new();
        loop {
            let token = self.next()?;
            match token.kind {
                TokenKind::Blank => {}
                TokenKind::Eol | TokenKind::Eof => return Ok(collected),
                _ => collected.push_str(&token.text),
            }
        }
    }

    /// Reads an RFC 4034 type bitmap: the remaining fields must each be
    /// a known RR type name.
    pub(crate) fn bitmap_rest(&mut self, what: &'static str) -> ParseResult<Vec<RecordType>> {
        let mut types = Vec::new();
        loop {
            let token = self.next()?;
            match token.kind {
                TokenKind::Blank => {}
                TokenKind::Eol | TokenKind::Eof => return Ok(types),
                _ => {
                    let rtype = RecordType::from_str(&token.text.to_ascii_uppercase())
                        .map_err(|_| self.error(ParseErrorKind::Message(what), &token))?;
                    types.push(rtype);
                }
            }
        }
    }

    pub(crate) fn error(&self, kind: ParseErrorKind, token: &Token) -> ParseError {
        ParseError::new(self.file, kind, token)
    }

    /// An error positioned at the most recently read token.
    pub(crate) fn error_here(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(self.file, kind, &self.last)
    }
}
