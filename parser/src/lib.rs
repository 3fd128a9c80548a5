//! FILENAME: parser/src/lib.rs
//! PURPOSE: Library root for the propositional-calculus formula parser.
//! CONTEXT: This module exposes the lexer, parser, AST and renderer
//! needed to turn formula strings into Portuguese sentences.
//!
//! PIPELINE: Formula String --> Lexer --> Tokens --> Parser --> AST --> Renderer
//!
//! SUPPORTED FEATURES:
//! - Atoms: single uppercase letters A-Z
//! - Connectives: ¬ (not), ∧ (and), ∨ (or), → (implies), ↔ (iff)
//! - Parentheses for grouping
//! - Whitespace (space, tab, newline) anywhere between symbols
//!
//! Every stage is a pure function of its input; nothing is shared between calls.

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod render;
pub mod token;

// Register the separate tests module
#[cfg(test)]
mod tests;

// Re-export commonly used types for convenience
pub use ast::{Connective, Formula};
pub use lexer::{tokenize, Lexer};
pub use parser::{parse_formula, parse_formula_strict, ParseError, ParseResult, Parser, MAX_DEPTH};
pub use render::{placeholder, render, MeaningLookup, NoMeanings};
pub use token::Token;
