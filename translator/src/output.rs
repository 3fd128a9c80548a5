//! FILENAME: translator/src/output.rs
//! PURPOSE: Text shown to the user for a sentence-to-formula conversion,
//! and recovery of its parts on the receiving side.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static FORMULA_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)F[óo]rmula:\s*([^\n]+)").expect("static regex"));

static PROPOSITIONS_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)Proposi[cç][õo]es:\s*(.*)").expect("static regex"));

static PROPOSITION_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z])\s*:\s*(.+)$").expect("static regex"));

/// Formats a formula and its atom meanings as
/// `Fórmula: <formula>` / `Proposições:` / one `<atom>: <meaning>` line per atom.
pub fn stitch(formula: &str, propositions: &BTreeMap<String, String>) -> String {
    let lines = propositions
        .iter()
        .map(|(atom, meaning)| format!("{}: {}", atom, meaning))
        .collect::<Vec<_>>()
        .join("\n");

    format!("Fórmula: {}\nProposições:\n{}", formula, lines)
}

/// A formula and mapping recovered from stitched text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Stitched {
    pub formula: Option<String>,
    pub propositions: BTreeMap<String, String>,
}

/// Inverse of [`stitch`]. Tolerates missing accents and unrelated lines;
/// proposition lines that are not `<A-Z>: <meaning>` are skipped.
pub fn unstitch(text: &str) -> Stitched {
    let formula = FORMULA_LINE
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
        .filter(|formula| !formula.is_empty());

    let propositions = PROPOSITIONS_BLOCK
        .captures(text)
        .map(|caps| {
            caps[1]
                .lines()
                .map(str::trim)
                .filter_map(|line| PROPOSITION_LINE.captures(line))
                .map(|caps| (caps[1].to_string(), caps[2].to_string()))
                .collect()
        })
        .unwrap_or_default();

    Stitched {
        formula,
        propositions,
    }
}
