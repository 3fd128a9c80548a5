//! FILENAME: parser/src/parser.rs
//! PURPOSE: Recursive descent parser that converts a stream of Tokens into an AST.
//! CONTEXT: This is the second stage of the parsing pipeline. It takes the
//! token sequence from the Lexer and builds a Formula tree for the Renderer.
//!
//! GRAMMAR (weakest binding first):
//!   formula       --> biconditional
//!   biconditional --> implication ( "↔" implication )*      // left-folding
//!   implication   --> disjunction ( "→" implication )?       // right-folding
//!   disjunction   --> conjunction ( "∨" conjunction )*       // left-folding
//!   conjunction   --> unary ( "∧" unary )*                   // left-folding
//!   unary         --> "¬" unary | "(" formula ")" | ATOM
//!
//! The parser is strict: no implicit operators, no inferred atoms, and every
//! token must be consumed. Trees deeper than MAX_DEPTH are rejected so that
//! neither parsing nor later walks of the tree can exhaust the stack.

use crate::ast::Formula;
use crate::lexer::Lexer;
use crate::token::Token;
use thiserror::Error;

/// Deepest formula the parser accepts, counted as `Formula::depth()` and as
/// nesting of `¬`, `(` and `→`.
pub const MAX_DEPTH: usize = 256;

/// A parsed sub-formula and its depth.
type Node = (Formula, usize);

/// Reasons a token sequence is not a well-formed formula.
/// `position` is the index of the offending token.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ParseError {
    #[error("unexpected end of formula")]
    UnexpectedEnd,

    #[error("expected '{expected}' at token {position}, found '{found}'")]
    Expected {
        expected: Token,
        found: Token,
        position: usize,
    },

    #[error("expected an atom (A-Z) at token {position}, found '{found}'")]
    InvalidAtom { found: Token, position: usize },

    #[error("unexpected '{found}' at token {position} after a complete formula")]
    TrailingTokens { found: Token, position: usize },

    #[error("illegal character '{ch}' at offset {offset}")]
    IllegalCharacter { ch: char, offset: usize },

    #[error("formula nests deeper than {limit} levels")]
    TooDeep { limit: usize },
}

pub type ParseResult<T> = Result<T, ParseError>;

/// The Parser struct holds the token sequence and a cursor into it.
pub struct Parser {
    /// Tokens paired with the char offset they started at.
    tokens: Vec<(Token, usize)>,
    pos: usize,
    /// Open `¬` / `(` / `→` recursions.
    nesting: usize,
}

impl Parser {
    /// Creates a parser over the permissive tokenization of `input`.
    pub fn new(input: &str) -> Self {
        Self::from_lexer(Lexer::new(input))
    }

    /// Creates a parser that rejects any character outside the formula alphabet.
    pub fn strict(input: &str) -> Self {
        Self::from_lexer(Lexer::strict(input))
    }

    /// Creates a parser over an already tokenized formula.
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Parser {
            tokens: tokens
                .into_iter()
                .filter(|token| *token != Token::EOF)
                .enumerate()
                .map(|(index, token)| (token, index))
                .collect(),
            pos: 0,
            nesting: 0,
        }
    }

    fn from_lexer(mut lexer: Lexer<'_>) -> Self {
        let mut tokens = Vec::new();
        loop {
            match lexer.next_spanned() {
                (Token::EOF, _) => break,
                spanned => tokens.push(spanned),
            }
        }
        Parser {
            tokens,
            pos: 0,
            nesting: 0,
        }
    }

    /// Parses the entire token sequence and returns the AST.
    pub fn parse(&mut self) -> ParseResult<Formula> {
        if let Some((ch, offset)) = self.tokens.iter().find_map(|(token, offset)| match token {
            Token::Illegal(ch) => Some((*ch, *offset)),
            _ => None,
        }) {
            return Err(ParseError::IllegalCharacter { ch, offset });
        }

        let (formula, _) = self.parse_formula()?;

        // Ensure we consumed all tokens
        if let Some(found) = self.peek() {
            return Err(ParseError::TrailingTokens {
                found,
                position: self.pos,
            });
        }

        Ok(formula)
    }

    /// The current token, or None past the end.
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).map(|(token, _)| *token)
    }

    /// Consumes the current token. Running off the end is a parse failure.
    fn advance(&mut self) -> ParseResult<Token> {
        let token = self.peek().ok_or(ParseError::UnexpectedEnd)?;
        self.pos += 1;
        Ok(token)
    }

    /// Checks if the current token matches the expected token.
    /// If it matches, advances and returns Ok. Otherwise returns an error.
    fn expect(&mut self, expected: Token) -> ParseResult<()> {
        match self.peek() {
            Some(token) if token == expected => {
                self.pos += 1;
                Ok(())
            }
            found => Err(ParseError::Expected {
                expected,
                found: found.unwrap_or(Token::EOF),
                position: self.pos,
            }),
        }
    }

    /// Enters one level of recursion.
    fn descend(&mut self) -> ParseResult<()> {
        self.nesting += 1;
        if self.nesting > MAX_DEPTH {
            return Err(ParseError::TooDeep { limit: MAX_DEPTH });
        }
        Ok(())
    }

    fn ascend(&mut self) {
        self.nesting -= 1;
    }

    /// Wraps a finished sub-formula, rejecting it when it is too deep.
    fn node(&self, formula: Formula, depth: usize) -> ParseResult<Node> {
        if depth > MAX_DEPTH {
            return Err(ParseError::TooDeep { limit: MAX_DEPTH });
        }
        Ok((formula, depth))
    }

    fn join(
        &self,
        (left, left_depth): Node,
        (right, right_depth): Node,
        build: fn(Formula, Formula) -> Formula,
    ) -> ParseResult<Node> {
        self.node(build(left, right), 1 + left_depth.max(right_depth))
    }

    /// Entry point for formula parsing.
    fn parse_formula(&mut self) -> ParseResult<Node> {
        self.parse_biconditional()
    }

    /// Parses biconditional chains (↔), folding to the left.
    fn parse_biconditional(&mut self) -> ParseResult<Node> {
        let mut left = self.parse_implication()?;

        while self.peek() == Some(Token::Iff) {
            self.advance()?;
            let right = self.parse_implication()?;
            left = self.join(left, right, Formula::iff)?;
        }

        Ok(left)
    }

    /// Parses implication (→). The right side recurses, so chains fold to the right.
    fn parse_implication(&mut self) -> ParseResult<Node> {
        let left = self.parse_disjunction()?;

        if self.peek() == Some(Token::Implies) {
            self.advance()?;
            self.descend()?;
            let right = self.parse_implication()?;
            self.ascend();
            return self.join(left, right, Formula::implies);
        }

        Ok(left)
    }

    /// Parses disjunction chains (∨).
    fn parse_disjunction(&mut self) -> ParseResult<Node> {
        let mut left = self.parse_conjunction()?;

        while self.peek() == Some(Token::Or) {
            self.advance()?;
            let right = self.parse_conjunction()?;
            left = self.join(left, right, Formula::or)?;
        }

        Ok(left)
    }

    /// Parses conjunction chains (∧).
    fn parse_conjunction(&mut self) -> ParseResult<Node> {
        let mut left = self.parse_unary()?;

        while self.peek() == Some(Token::And) {
            self.advance()?;
            let right = self.parse_unary()?;
            left = self.join(left, right, Formula::and)?;
        }

        Ok(left)
    }

    /// Parses negation, parenthesized sub-formulas and atoms.
    fn parse_unary(&mut self) -> ParseResult<Node> {
        let position = self.pos;

        match self.advance()? {
            Token::Not => {
                self.descend()?;
                let (operand, depth) = self.parse_unary()?;
                self.ascend();
                self.node(Formula::not(operand), depth + 1)
            }

            // Parentheses reset precedence; the closing one is mandatory
            Token::LParen => {
                self.descend()?;
                let node = self.parse_formula()?;
                self.expect(Token::RParen)?;
                self.ascend();
                Ok(node)
            }

            Token::Atom(name) => Ok((Formula::atom(name), 1)),

            found => Err(ParseError::InvalidAtom { found, position }),
        }
    }
}

/// Parses a formula string with the permissive tokenizer.
pub fn parse_formula(input: &str) -> ParseResult<Formula> {
    Parser::new(input).parse()
}

/// Parses a formula string, rejecting characters outside the formula alphabet.
pub fn parse_formula_strict(input: &str) -> ParseResult<Formula> {
    Parser::strict(input).parse()
}
