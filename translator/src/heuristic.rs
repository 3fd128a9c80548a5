//! FILENAME: translator/src/heuristic.rs
//! PURPOSE: Last-resort sentence-to-formula guess by plain string splitting.
//! CONTEXT: Only used when the model reply is unusable. It recognizes a
//! handful of Portuguese sentence shapes and nothing more; the result is
//! always a well-formed formula over atoms P, Q, R, S.

use std::collections::BTreeMap;

const SPLIT_ATOMS: [char; 4] = ['P', 'Q', 'R', 'S'];

/// A guessed formula with the meaning of each atom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    pub formula: String,
    pub propositions: BTreeMap<String, String>,
}

impl Guess {
    fn new(formula: impl Into<String>, propositions: &[(char, &str)]) -> Self {
        Self {
            formula: formula.into(),
            propositions: propositions
                .iter()
                .map(|(atom, meaning)| (atom.to_string(), meaning.to_string()))
                .collect(),
        }
    }
}

/// Guesses a formula for `sentence`. Shapes are tried in order:
/// biconditional, conditional, conjunction/disjunction, negation, and
/// finally the whole sentence as a single atom.
pub fn guess_formula(sentence: &str) -> Guess {
    let s = sentence.trim().to_lowercase();

    if let Some(guess) = biconditional(&s) {
        return guess;
    }
    if let Some(guess) = conditional(&s) {
        return guess;
    }
    if let Some(guess) = junction(&s) {
        return guess;
    }
    if let Some(rest) = s.strip_prefix("não ") {
        return Guess::new("¬P", &[('P', rest.trim_start())]);
    }

    Guess::new("P", &[('P', s.as_str())])
}

/// "A se e somente se B"
fn biconditional(s: &str) -> Option<Guess> {
    let mut parts = s.split("se e somente se");
    let left = parts.next()?;
    let right = parts.next()?;

    let left = left
        .strip_prefix("se")
        .filter(|rest| rest.starts_with(char::is_whitespace))
        .unwrap_or(left)
        .trim();
    let right = right
        .trim_start_matches(|c: char| c == ',' || c.is_whitespace())
        .trim();

    let p = if left.is_empty() { "proposição P" } else { left };
    let q = if right.is_empty() { "proposição Q" } else { right };

    Some(Guess::new("P ↔ Q", &[('P', p), ('Q', q)]))
}

/// "se A, então B"
fn conditional(s: &str) -> Option<Guess> {
    const IF: &str = "se ";
    const THEN: &str = "então";

    let if_at = s.find(IF)?;
    let then_at = s.find(THEN)?;
    if then_at <= if_at {
        return None;
    }

    let antecedent = s
        .get(if_at + IF.len()..then_at)
        .unwrap_or_default()
        .trim_matches(|c: char| c == ',' || c.is_whitespace());
    let consequent = s[then_at + THEN.len()..].trim();

    Some(Guess::new("P → Q", &[('P', antecedent), ('Q', consequent)]))
}

/// "A e B e C" or "A ou B ou C", up to four atoms.
fn junction(s: &str) -> Option<Guess> {
    let (separator, symbol) = if s.contains(" e ") {
        (" e ", " ∧ ")
    } else if s.contains(" ou ") {
        (" ou ", " ∨ ")
    } else {
        return None;
    };

    let parts: Vec<&str> = s
        .split(separator)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .take(SPLIT_ATOMS.len())
        .collect();
    if parts.is_empty() {
        return None;
    }

    let pairs: Vec<(char, &str)> = SPLIT_ATOMS.iter().copied().zip(parts).collect();
    let formula = pairs
        .iter()
        .map(|(atom, _)| atom.to_string())
        .collect::<Vec<_>>()
        .join(symbol);

    Some(Guess::new(formula, &pairs))
}
