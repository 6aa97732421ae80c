// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! A Lexer for zone files
//!
//! Tokenizes RFC 1035 master file text and normalizes it on the way out:
//! runs of whitespace shrink to one `Blank`, comments disappear, records
//! continued across lines with braces come out as a single logical line,
//! and each bare word is classified by its position and by the known
//! RR-type and class tables.

use std::collections::VecDeque;
use std::io::Read;

use crate::rr::dns_class::DNSClass;
use crate::rr::record_type::RecordType;
use crate::serialize::txt::errors::{LexerError, LexerErrorKind, LexerResult};
use crate::serialize::txt::scanner::{Atom, AtomKind, Scanner};

/// Tokens emitted from each lexer pass
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// What role the token plays in the grammar
    pub kind: TokenKind,
    /// The text of the token; `" "` for a blank, `"\n"` for end of line
    pub text: String,
    /// 1-based line the token started on
    pub line: usize,
    /// 1-based column the token started at
    pub column: usize,
}

impl Token {
    fn new(kind: TokenKind, text: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    pub(crate) fn eof(line: usize, column: usize) -> Self {
        Self::new(TokenKind::Eof, "", line, column)
    }
}

/// The syntactic role the lexer assigned to a token
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// The first word of a line, the name records attach to
    Owner,
    /// A word with no further role known to the lexer
    CharData,
    /// One or more spaces or tabs
    Blank,
    /// The end of a logical record
    Eol,
    /// A word found in the known RR-type table
    RecordType,
    /// A word found in the known class table
    Class,
    /// `$TTL` at the start of a line
    TtlDirective,
    /// `$ORIGIN` at the start of a line
    OriginDirective,
    /// `$INCLUDE` at the start of a line
    IncludeDirective,
    /// The end of the input
    Eof,
}

pub(crate) struct Lexer<R> {
    scanner: Scanner<R>,
    pending: VecDeque<Token>,
    accum: String,
    accum_pos: Option<(usize, usize)>,
    in_quote: bool,
    in_comment: bool,
    after_escape: bool,
    paren_depth: usize,
    open_paren_pos: (usize, usize),
    /// the next flushed word is in owner position
    at_line_start: bool,
    rrtype_seen: bool,
    /// a blank waiting to be emitted before the next word token
    pending_blank: Option<(usize, usize)>,
    finished: bool,
}

impl<R: Read> Lexer<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            scanner: Scanner::new(reader),
            pending: VecDeque::new(),
            accum: String::new(),
            accum_pos: None,
            in_quote: false,
            in_comment: false,
            after_escape: false,
            paren_depth: 0,
            open_paren_pos: (0, 0),
            at_line_start: true,
            rrtype_seen: false,
            pending_blank: None,
            finished: false,
        }
    }

    /// Return the next token. After `Eof` has been returned it is
    /// returned again; errors are terminal.
    pub(crate) fn next_token(&mut self) -> LexerResult<Token> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            if self.finished {
                let (line, column) = self.scanner.position();
                return Ok(Token::eof(line, column));
            }
            let atom = self.scanner.next_atom()?;
            self.step(atom)?;
        }
    }

    fn step(&mut self, atom: Atom) -> LexerResult<()> {
        let pos = (atom.line, atom.column);

        if self.after_escape {
            if atom.kind == AtomKind::Eof {
                return Err(LexerError::new(
                    LexerErrorKind::DanglingEscape,
                    "\\",
                    atom.line,
                    atom.column,
                ));
            }
            // the escaped atom goes into the accumulator verbatim, the
            // backslash itself is already there
            self.push_atom_text(&atom, pos);
            self.after_escape = false;
            return Ok(());
        }

        if self.in_comment {
            match atom.kind {
                AtomKind::Newline => {
                    self.in_comment = false;
                    self.end_line(pos);
                }
                AtomKind::Eof => self.finish(pos)?,
                _ => {}
            }
            return Ok(());
        }

        if self.in_quote {
            match atom.kind {
                AtomKind::Quote => self.in_quote = false,
                AtomKind::Backslash => {
                    self.push_accum('\\', pos);
                    self.after_escape = true;
                }
                // an unterminated quote is caught by the grammar: the
                // accumulator flushes at EOF and the record has no Eol
                AtomKind::Eof => self.finish(pos)?,
                _ => self.push_atom_text(&atom, pos),
            }
            return Ok(());
        }

        match atom.kind {
            AtomKind::Word(ref word) => self.push_str_accum(word, pos),
            AtomKind::Space(_) => {
                self.flush_word(false);
                if self.pending_blank.is_none() {
                    self.pending_blank = Some(pos);
                }
                self.at_line_start = false;
            }
            AtomKind::Quote => self.in_quote = true,
            AtomKind::Semicolon => {
                self.flush_word(true);
                self.in_comment = true;
            }
            AtomKind::Backslash => {
                self.push_accum('\\', pos);
                self.after_escape = true;
            }
            AtomKind::OpenParen => {
                if self.paren_depth == 0 {
                    self.open_paren_pos = pos;
                }
                self.paren_depth += 1;
            }
            AtomKind::CloseParen => {
                if self.paren_depth == 0 {
                    return Err(LexerError::new(
                        LexerErrorKind::ExtraClosingBrace,
                        ")",
                        atom.line,
                        atom.column,
                    ));
                }
                self.paren_depth -= 1;
            }
            AtomKind::Newline => {
                self.flush_word(true);
                self.end_line(pos);
            }
            AtomKind::Eof => self.finish(pos)?,
        }
        Ok(())
    }

    /// A newline outside quotes and comments: end of the logical record,
    /// unless braces are still open, in which case it is whitespace.
    fn end_line(&mut self, pos: (usize, usize)) {
        if self.paren_depth > 0 {
            if self.pending_blank.is_none() {
                self.pending_blank = Some(pos);
            }
        } else {
            self.pending_blank = None;
            self.pending
                .push_back(Token::new(TokenKind::Eol, "\n", pos.0, pos.1));
            self.at_line_start = true;
            self.rrtype_seen = false;
        }
    }

    fn finish(&mut self, pos: (usize, usize)) -> LexerResult<()> {
        if self.paren_depth > 0 {
            let (line, column) = self.open_paren_pos;
            return Err(LexerError::new(
                LexerErrorKind::UnclosedBrace,
                "(",
                line,
                column,
            ));
        }
        // remainder goes out as-is, the grammar notices the missing Eol
        if !self.accum.is_empty() {
            let (line, column) = self.accum_pos.take().unwrap_or(pos);
            let text = std::mem::take(&mut self.accum);
            self.emit_word(Token::new(TokenKind::CharData, text, line, column));
        }
        self.pending_blank = None;
        self.pending.push_back(Token::eof(pos.0, pos.1));
        self.finished = true;
        Ok(())
    }

    /// Flushes the accumulator as a word token. At the start of the line
    /// the word is the owner, or one of the directives; afterwards it is
    /// classified against the RR-type and class tables until the line's
    /// RR type has been seen. A flush at end of line can no longer be an
    /// owner and, matching the original scanner, only consults the type
    /// table.
    fn flush_word(&mut self, at_line_end: bool) {
        if self.accum.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.accum);
        let (line, column) = self.accum_pos.take().unwrap_or((0, 0));

        let kind = if self.at_line_start && !at_line_end {
            match text.as_str() {
                "$TTL" => TokenKind::TtlDirective,
                "$ORIGIN" => TokenKind::OriginDirective,
                "$INCLUDE" => TokenKind::IncludeDirective,
                _ => TokenKind::Owner,
            }
        } else if !self.rrtype_seen {
            let upper = text.to_ascii_uppercase();
            if RecordType::is_known(&upper) {
                self.rrtype_seen = true;
                TokenKind::RecordType
            } else if !at_line_end && DNSClass::is_known(&upper) {
                TokenKind::Class
            } else {
                TokenKind::CharData
            }
        } else {
            TokenKind::CharData
        };

        self.emit_word(Token::new(kind, text, line, column));
    }

    /// A word token always flushes the blank separating it from whatever
    /// came before. Deferring the blank until here keeps adjacent blanks
    /// collapsed and keeps blanks from landing directly before an Eol.
    fn emit_word(&mut self, token: Token) {
        if let Some((line, column)) = self.pending_blank.take() {
            self.pending
                .push_back(Token::new(TokenKind::Blank, " ", line, column));
        }
        self.pending.push_back(token);
    }

    fn push_accum(&mut self, c: char, pos: (usize, usize)) {
        if self.accum.is_empty() {
            self.accum_pos = Some(pos);
        }
        self.accum.push(c);
    }

    fn push_str_accum(&mut self, s: &str, pos: (usize, usize)) {
        if self.accum.is_empty() {
            self.accum_pos = Some(pos);
        }
        self.accum.push_str(s);
    }

    fn push_atom_text(&mut self, atom: &Atom, pos: (usize, usize)) {
        match &atom.kind {
            AtomKind::Word(word) => self.push_str_accum(word, pos),
            AtomKind::Space(c) => self.push_accum(*c, pos),
            AtomKind::Newline => self.push_accum('\n', pos),
            AtomKind::Semicolon => self.push_accum(';', pos),
            AtomKind::Quote => self.push_accum('"', pos),
            AtomKind::Backslash => self.push_accum('\\', pos),
            AtomKind::OpenParen => self.push_accum('(', pos),
            AtomKind::CloseParen => self.push_accum(')', pos),
            AtomKind::Eof => {}
        }
    }
}

#[cfg(test)]
mod lex_test {
    use super::*;

    fn lex(input: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(input.as_bytes());
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token().expect("lexer error");
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    fn kinds(input: &str) -> Vec<TokenKind> {
        lex(input).into_iter().map(|t| t.kind).collect()
    }

    fn texts(input: &str) -> Vec<String> {
        lex(input).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn simple_record_line() {
        use TokenKind::*;
        assert_eq!(
            kinds("miek.nl. IN A 127.0.0.1\n"),
            &[Owner, Blank, Class, Blank, RecordType, Blank, CharData, Eol, Eof]
        );
        assert_eq!(
            texts("miek.nl. IN A 127.0.0.1\n"),
            &["miek.nl.", " ", "IN", " ", "A", " ", "127.0.0.1", "\n", ""]
        );
    }

    #[test]
    fn classification_stops_after_rrtype() {
        use TokenKind::*;
        // the "A" and "NS" in the bitmap are rdata, not types
        assert_eq!(
            kinds("x.nl. NSEC miek.nl. A NS\n"),
            &[
                Owner, Blank, RecordType, Blank, CharData, Blank, CharData, Blank, CharData, Eol,
                Eof
            ]
        );
    }

    #[test]
    fn class_and_type_case_insensitive() {
        use TokenKind::*;
        assert_eq!(
            kinds("miek.nl. in mx 10 mx.miek.nl.\n"),
            &[Owner, Blank, Class, Blank, RecordType, Blank, CharData, Blank, CharData, Eol, Eof]
        );
    }

    #[test]
    fn leading_blank_is_emitted_once() {
        use TokenKind::*;
        assert_eq!(
            kinds("   \t  A 127.0.0.1\n"),
            &[Blank, RecordType, Blank, CharData, Eol, Eof]
        );
    }

    #[test]
    fn no_blank_before_eol() {
        use TokenKind::*;
        assert_eq!(kinds("miek.nl. A   \n"), &[Owner, Blank, RecordType, Eol, Eof]);
    }

    #[test]
    fn blank_survives_line_boundary() {
        use TokenKind::*;
        // trailing spaces on one line must not eat the next line's
        // leading blank
        assert_eq!(
            kinds("a.nl. A 1.2.3.4 \n NS ns.nl.\n"),
            &[
                Owner, Blank, RecordType, Blank, CharData, Eol, Blank, RecordType, Blank, CharData,
                Eol, Eof
            ]
        );
    }

    #[test]
    fn directives() {
        use TokenKind::*;
        assert_eq!(
            kinds("$ORIGIN miek.nl.\n$TTL 300\n$INCLUDE sub.zone\n"),
            &[
                OriginDirective, Blank, CharData, Eol, TtlDirective, Blank, CharData, Eol,
                IncludeDirective, Blank, CharData, Eol, Eof
            ]
        );
        // directives are only special at the start of the line
        assert_eq!(
            kinds("miek.nl. TXT $TTL\n"),
            &[Owner, Blank, RecordType, Blank, CharData, Eol, Eof]
        );
    }

    #[test]
    fn comments_vanish() {
        use TokenKind::*;
        assert_eq!(kinds("; just a comment\n"), &[Eol, Eof]);
        assert_eq!(
            kinds("miek.nl. A 127.0.0.1 ; the address\n"),
            &[Owner, Blank, RecordType, Blank, CharData, Eol, Eof]
        );
        // no space before the comment
        assert_eq!(
            kinds("miek.nl. A 127.0.0.1;comment\n"),
            &[Owner, Blank, RecordType, Blank, CharData, Eol, Eof]
        );
    }

    #[test]
    fn quoted_strings_keep_spaces_and_semicolons() {
        let tokens = lex("miek.nl. TXT \"hello ; world\"\n");
        assert_eq!(tokens[4].kind, TokenKind::CharData);
        assert_eq!(tokens[4].text, "hello ; world");
    }

    #[test]
    fn quotes_concatenate_with_bare_words() {
        // a quote only toggles; it does not flush
        let tokens = lex("miek.nl. TXT \"a\"b\n");
        assert_eq!(tokens[4].text, "ab");
    }

    #[test]
    fn escapes_stay_verbatim() {
        let tokens = lex("Action\\.domains. A 127.0.0.1\n");
        assert_eq!(tokens[0].kind, TokenKind::Owner);
        assert_eq!(tokens[0].text, "Action\\.domains.");

        let tokens = lex("miek.nl. TXT a\\;b\n");
        assert_eq!(tokens[4].text, "a\\;b");

        let tokens = lex("miek.nl. TXT \"a\\\"b\"\n");
        assert_eq!(tokens[4].text, "a\\\"b");
    }

    #[test]
    fn dangling_escape_fails() {
        let mut lexer = Lexer::new(&b"miek.nl. TXT a\\"[..]);
        let err = loop {
            match lexer.next_token() {
                Ok(t) if t.kind == TokenKind::Eof => panic!("expected an error"),
                Ok(_) => {}
                Err(e) => break e,
            }
        };
        assert!(matches!(err.kind(), LexerErrorKind::DanglingEscape));
    }

    #[test]
    fn braces_join_lines() {
        use TokenKind::*;
        assert_eq!(
            kinds("miek.nl. SOA ns. root. (\n1 2\n3 4 5\n)\n"),
            &[
                Owner, Blank, RecordType, Blank, CharData, Blank, CharData, Blank, CharData, Blank,
                CharData, Blank, CharData, Blank, CharData, Blank, CharData, Eol, Eof
            ]
        );
    }

    #[test]
    fn comment_inside_braces() {
        use TokenKind::*;
        assert_eq!(
            kinds("a.nl. SOA ns. root. (1 ; serial\n2 3 4 5)\n"),
            &[
                Owner, Blank, RecordType, Blank, CharData, Blank, CharData, Blank, CharData, Blank,
                CharData, Blank, CharData, Blank, CharData, Blank, CharData, Eol, Eof
            ]
        );
    }

    #[test]
    fn extra_closing_brace_fails() {
        let mut lexer = Lexer::new(&b"miek.nl. A 1.2.3.4 )\n"[..]);
        let err = loop {
            match lexer.next_token() {
                Ok(t) if t.kind == TokenKind::Eof => panic!("expected an error"),
                Ok(_) => {}
                Err(e) => break e,
            }
        };
        assert!(matches!(err.kind(), LexerErrorKind::ExtraClosingBrace));
    }

    #[test]
    fn unclosed_brace_fails_at_the_opening_brace() {
        let mut lexer = Lexer::new(&b"miek.nl. IN A (\n 127.0.0.1\n"[..]);
        let err = loop {
            match lexer.next_token() {
                Ok(t) if t.kind == TokenKind::Eof => panic!("expected an error"),
                Ok(_) => {}
                Err(e) => break e,
            }
        };
        assert!(matches!(err.kind(), LexerErrorKind::UnclosedBrace));
        let parse_err = crate::serialize::txt::errors::ParseError::from_lexer(err, "");
        assert_eq!(parse_err.line(), 1);
        assert_eq!(parse_err.column(), 15);
    }

    #[test]
    fn missing_final_newline_flushes_remainder() {
        use TokenKind::*;
        assert_eq!(
            kinds("miek.nl. A 127.0.0.1"),
            &[Owner, Blank, RecordType, Blank, CharData, Eof]
        );
    }

    #[test]
    fn positions() {
        let tokens = lex("miek.nl. IN A 127.0.0.1\n");
        let owner = &tokens[0];
        assert_eq!((owner.line, owner.column), (1, 1));
        let addr = &tokens[6];
        assert_eq!((addr.line, addr.column), (1, 15));

        let tokens = lex("a.nl. A 1.2.3.4\nb.nl. A 5.6.7.8\n");
        let second_owner = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Owner)
            .nth(1)
            .unwrap();
        assert_eq!((second_owner.line, second_owner.column), (2, 1));
    }

    #[test]
    fn eof_repeats() {
        let mut lexer = Lexer::new(&b"\n"[..]);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eol);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn rfc1035_soa_example() {
        use TokenKind::*;
        let input = "VENERA  A       10.1.0.52\n        A       128.9.0.32\n";
        assert_eq!(
            kinds(input),
            &[
                Owner, Blank, RecordType, Blank, CharData, Eol, Blank, RecordType, Blank, CharData,
                Eol, Eof
            ]
        );
    }
}
