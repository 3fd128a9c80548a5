//! FILENAME: parser/src/render.rs
//! PURPOSE: Turns a Formula tree into a Portuguese sentence.
//! CONTEXT: Final stage of the pipeline. Rendering is total: every tree the
//! parser can build renders to a non-empty phrase.
//!
//! PHRASES:
//! - Atom:    its meaning, or "proposição X" when none is known
//! - ¬A:      "não A"
//! - A ∧ B:   "A e B"
//! - A ∨ B:   "A ou B"
//! - A → B:   "se A, então B"
//! - A ↔ B:   "A se e somente se B"
//!
//! A sub-phrase is parenthesized when its parent connective binds tighter
//! than its own.

use crate::ast::{Connective, Formula};
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Lookup from atom letter to its natural-language meaning.
pub trait MeaningLookup {
    fn meaning(&self, atom: char) -> Option<&str>;
}

/// An empty mapping; every atom renders as its placeholder.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMeanings;

impl MeaningLookup for NoMeanings {
    fn meaning(&self, _atom: char) -> Option<&str> {
        None
    }
}

impl<S: BuildHasher> MeaningLookup for HashMap<char, String, S> {
    fn meaning(&self, atom: char) -> Option<&str> {
        self.get(&atom).map(String::as_str)
    }
}

impl<S: BuildHasher> MeaningLookup for HashMap<String, String, S> {
    fn meaning(&self, atom: char) -> Option<&str> {
        let mut buf = [0u8; 4];
        self.get(atom.encode_utf8(&mut buf) as &str)
            .map(String::as_str)
    }
}

impl MeaningLookup for BTreeMap<char, String> {
    fn meaning(&self, atom: char) -> Option<&str> {
        self.get(&atom).map(String::as_str)
    }
}

impl MeaningLookup for BTreeMap<String, String> {
    fn meaning(&self, atom: char) -> Option<&str> {
        let mut buf = [0u8; 4];
        self.get(atom.encode_utf8(&mut buf) as &str)
            .map(String::as_str)
    }
}

impl<M: MeaningLookup + ?Sized> MeaningLookup for &M {
    fn meaning(&self, atom: char) -> Option<&str> {
        (**self).meaning(atom)
    }
}

/// Phrase used for an atom with no known meaning.
pub fn placeholder(atom: char) -> String {
    format!("proposição {}", atom)
}

/// Renders `formula` as a Portuguese sentence, substituting atom meanings
/// from `meanings`.
pub fn render<M: MeaningLookup + ?Sized>(formula: &Formula, meanings: &M) -> String {
    phrase(formula, None, meanings)
}

/// Renders one node. `parent` is the connective of the immediate parent.
fn phrase<M: MeaningLookup + ?Sized>(
    node: &Formula,
    parent: Option<Connective>,
    meanings: &M,
) -> String {
    let (op, left, right) = match node {
        Formula::Atom { name } => {
            return match meanings.meaning(*name) {
                Some(meaning) if !meaning.is_empty() => meaning.to_string(),
                _ => placeholder(*name),
            };
        }
        // A binary operand wraps itself, since ¬ outranks every binary connective
        Formula::Not { operand } => {
            return format!("não {}", phrase(operand, Some(Connective::Not), meanings));
        }
        Formula::And { left, right } => (Connective::And, left, right),
        Formula::Or { left, right } => (Connective::Or, left, right),
        Formula::Implies { left, right } => (Connective::Implies, left, right),
        Formula::Iff { left, right } => (Connective::Iff, left, right),
    };

    let a = phrase(left, Some(op), meanings);
    let b = phrase(right, Some(op), meanings);

    let sentence = match op {
        Connective::Implies => format!("se {}, então {}", a, b),
        _ => format!("{} {} {}", a, op.word(), b),
    };

    match parent {
        Some(parent) if parent.precedence() > op.precedence() => format!("({})", sentence),
        _ => sentence,
    }
}
