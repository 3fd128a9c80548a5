//! FILENAME: parser/src/ast.rs
//! PURPOSE: Defines the Abstract Syntax Tree (AST) for propositional formulas.
//! CONTEXT: After the Lexer tokenizes a formula string, the Parser converts
//! those tokens into this tree structure. The Renderer then walks the tree
//! to produce a Portuguese sentence.
//!
//! Each parse yields a fresh, exclusively owned tree. Children are boxed, so
//! the tree is finite and has no shared nodes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Represents a parsed propositional formula.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Formula {
    /// A propositional variable, identified solely by its letter.
    Atom { name: char },

    /// ¬operand
    Not { operand: Box<Formula> },

    /// left ∧ right
    And { left: Box<Formula>, right: Box<Formula> },

    /// left ∨ right
    Or { left: Box<Formula>, right: Box<Formula> },

    /// left → right
    Implies { left: Box<Formula>, right: Box<Formula> },

    /// left ↔ right
    Iff { left: Box<Formula>, right: Box<Formula> },
}

/// The five connectives of classical propositional calculus.
/// Listed from strongest to weakest binding.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Connective {
    Not,     // ¬ (binds tightest)
    And,     // ∧
    Or,      // ∨
    Implies, // →
    Iff,     // ↔ (binds loosest)
}

/// Binding strength of an atom. Shares the top rank with negation.
pub const ATOM_PRECEDENCE: u8 = 5;

impl Connective {
    /// Precedence rank, higher binds tighter: ¬ 5, ∧ 4, ∨ 3, → 2, ↔ 1.
    pub const fn precedence(self) -> u8 {
        match self {
            Connective::Not => 5,
            Connective::And => 4,
            Connective::Or => 3,
            Connective::Implies => 2,
            Connective::Iff => 1,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Connective::Not => '¬',
            Connective::And => '∧',
            Connective::Or => '∨',
            Connective::Implies => '→',
            Connective::Iff => '↔',
        }
    }

    /// The Portuguese connective word, as used between (or before) operands.
    pub const fn word(self) -> &'static str {
        match self {
            Connective::Not => "não",
            Connective::And => "e",
            Connective::Or => "ou",
            Connective::Implies => "então",
            Connective::Iff => "se e somente se",
        }
    }

    pub const fn is_binary(self) -> bool {
        !matches!(self, Connective::Not)
    }

    /// Whether a chain of this connective folds to the right (`P→Q→R` is `P→(Q→R)`).
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Connective::Implies)
    }
}

impl std::fmt::Display for Connective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Formula {
    pub fn atom(name: char) -> Self {
        Formula::Atom { name }
    }

    pub fn not(operand: Formula) -> Self {
        Formula::Not {
            operand: Box::new(operand),
        }
    }

    pub fn and(left: Formula, right: Formula) -> Self {
        Formula::And {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn or(left: Formula, right: Formula) -> Self {
        Formula::Or {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn implies(left: Formula, right: Formula) -> Self {
        Formula::Implies {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn iff(left: Formula, right: Formula) -> Self {
        Formula::Iff {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Builds the binary node for `connective`. Returns None for negation.
    pub fn binary(connective: Connective, left: Formula, right: Formula) -> Option<Self> {
        match connective {
            Connective::And => Some(Formula::and(left, right)),
            Connective::Or => Some(Formula::or(left, right)),
            Connective::Implies => Some(Formula::implies(left, right)),
            Connective::Iff => Some(Formula::iff(left, right)),
            Connective::Not => None,
        }
    }

    /// The top-level connective, or None for an atom.
    pub fn connective(&self) -> Option<Connective> {
        match self {
            Formula::Atom { .. } => None,
            Formula::Not { .. } => Some(Connective::Not),
            Formula::And { .. } => Some(Connective::And),
            Formula::Or { .. } => Some(Connective::Or),
            Formula::Implies { .. } => Some(Connective::Implies),
            Formula::Iff { .. } => Some(Connective::Iff),
        }
    }

    pub fn precedence(&self) -> u8 {
        self.connective()
            .map_or(ATOM_PRECEDENCE, Connective::precedence)
    }

    /// The two operands of a binary node.
    pub fn operands(&self) -> Option<(&Formula, &Formula)> {
        match self {
            Formula::And { left, right }
            | Formula::Or { left, right }
            | Formula::Implies { left, right }
            | Formula::Iff { left, right } => Some((left, right)),
            Formula::Atom { .. } | Formula::Not { .. } => None,
        }
    }

    /// Distinct atom letters appearing in the formula, in alphabetical order.
    pub fn atoms(&self) -> BTreeSet<char> {
        let mut atoms = BTreeSet::new();
        self.collect_atoms(&mut atoms);
        atoms
    }

    fn collect_atoms(&self, atoms: &mut BTreeSet<char>) {
        match self {
            Formula::Atom { name } => {
                atoms.insert(*name);
            }
            Formula::Not { operand } => operand.collect_atoms(atoms),
            _ => {
                if let Some((left, right)) = self.operands() {
                    left.collect_atoms(atoms);
                    right.collect_atoms(atoms);
                }
            }
        }
    }

    /// Height of the tree; a lone atom has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Formula::Atom { .. } => 1,
            Formula::Not { operand } => 1 + operand.depth(),
            _ => match self.operands() {
                Some((left, right)) => 1 + left.depth().max(right.depth()),
                None => 1,
            },
        }
    }
}

/// Writes a child of `parent`, parenthesized when re-parsing the bare text
/// would attach it differently.
fn fmt_operand(
    f: &mut std::fmt::Formatter<'_>,
    child: &Formula,
    parent: Connective,
    is_left: bool,
) -> std::fmt::Result {
    let child_prec = child.precedence();
    let parent_prec = parent.precedence();

    let needs_parens = child_prec < parent_prec
        || (child_prec == parent_prec
            && parent.is_binary()
            && is_left == parent.is_right_associative());

    if needs_parens {
        write!(f, "({})", child)
    } else {
        write!(f, "{}", child)
    }
}

/// Canonical symbolic notation with the fewest parentheses that still
/// re-parse to the same tree.
impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Formula::Atom { name } => write!(f, "{}", name),
            Formula::Not { operand } => {
                write!(f, "¬")?;
                fmt_operand(f, operand, Connective::Not, false)
            }
            _ => {
                let (Some(op), Some((left, right))) = (self.connective(), self.operands()) else {
                    return Ok(());
                };
                fmt_operand(f, left, op, true)?;
                write!(f, " {} ", op)?;
                fmt_operand(f, right, op, false)
            }
        }
    }
}
