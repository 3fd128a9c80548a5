//! FILENAME: parser/src/lexer.rs
//! PURPOSE: Scans a raw formula string and produces a stream of Tokens.
//! CONTEXT: This is the first stage of the parsing pipeline. Every recognized
//! symbol is a single code point, so there is no multi-character lookahead.
//!
//! RECOGNIZED SYMBOLS:
//! - Connectives: ¬ ∧ ∨ → ↔
//! - Grouping: ( )
//! - Atoms: A-Z (ASCII uppercase only)
//! - Insignificant: space, tab, newline
//!
//! Anything else is dropped silently by the default lexer. A strict lexer
//! reports it as Token::Illegal instead, leaving the rejection to the parser.

use crate::token::Token;
use std::iter::Peekable;
use std::str::Chars;

pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
    /// Char offset of the next unread character.
    offset: usize,
    strict: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input: input.chars().peekable(),
            offset: 0,
            strict: false,
        }
    }

    /// A lexer that yields Token::Illegal for unrecognized non-whitespace
    /// characters instead of discarding them.
    pub fn strict(input: &'a str) -> Self {
        Lexer {
            strict: true,
            ..Lexer::new(input)
        }
    }

    /// Advances the lexer and returns the next token.
    pub fn next_token(&mut self) -> Token {
        self.next_spanned().0
    }

    /// Returns the next token together with the char offset it started at.
    /// EOF reports the length of the input.
    pub fn next_spanned(&mut self) -> (Token, usize) {
        loop {
            self.skip_whitespace();

            let start = self.offset;
            let Some(ch) = self.bump() else {
                return (Token::EOF, start);
            };

            if let Some(token) = Token::from_char(ch) {
                return (token, start);
            }

            if self.strict && !ch.is_whitespace() {
                return (Token::Illegal(ch), start);
            }
            // Unknown character: dropped, keep scanning.
        }
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.input.next()?;
        self.offset += 1;
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(&ch) = self.input.peek() {
            if !matches!(ch, ' ' | '\t' | '\n') {
                break;
            }
            self.bump();
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        match self.next_token() {
            Token::EOF => None,
            token => Some(token),
        }
    }
}

/// Scans `formula` with the default (permissive) lexer and returns every
/// token in order, without the trailing EOF.
pub fn tokenize(formula: &str) -> Vec<Token> {
    Lexer::new(formula).collect()
}
