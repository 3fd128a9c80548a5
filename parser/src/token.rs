//! FILENAME: parser/src/token.rs
//! PURPOSE: Token definitions for the formula lexer.
//! CONTEXT: Tokens are the atomic units produced by the lexer and consumed by the parser.

/// Tokens recognized by the formula lexer.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Propositional variable, always an ASCII uppercase letter.
    Atom(char),

    // Connectives
    Not,
    And,
    Or,
    Implies,
    Iff,

    // Delimiters
    LParen,
    RParen,

    // Special
    EOF,
    /// Only produced by a strict lexer.
    Illegal(char),
}

impl Token {
    /// Maps a single source character to its token, if the character is part
    /// of the formula alphabet.
    pub fn from_char(ch: char) -> Option<Token> {
        match ch {
            '¬' => Some(Token::Not),
            '∧' => Some(Token::And),
            '∨' => Some(Token::Or),
            '→' => Some(Token::Implies),
            '↔' => Some(Token::Iff),
            '(' => Some(Token::LParen),
            ')' => Some(Token::RParen),
            'A'..='Z' => Some(Token::Atom(ch)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Atom(c) => write!(f, "{}", c),
            Token::Not => write!(f, "¬"),
            Token::And => write!(f, "∧"),
            Token::Or => write!(f, "∨"),
            Token::Implies => write!(f, "→"),
            Token::Iff => write!(f, "↔"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::EOF => write!(f, "EOF"),
            Token::Illegal(c) => write!(f, "ILLEGAL({})", c),
        }
    }
}
