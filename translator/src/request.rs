//! FILENAME: translator/src/request.rs
//! PURPOSE: Conversion request types shared with the request-handling layer.

use crate::error::TranslateError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Direction of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Formula in, Portuguese sentence out.
    #[serde(rename = "cpc-to-nl")]
    CpcToNl,
    /// Portuguese sentence in, formula and atom meanings out.
    #[serde(rename = "nl-to-cpc")]
    NlToCpc,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::CpcToNl => write!(f, "cpc-to-nl"),
            Mode::NlToCpc => write!(f, "nl-to-cpc"),
        }
    }
}

/// One conversion asked for by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub mode: Mode,
    pub input: String,
    /// Atom letter to meaning. Only used in the formula-to-sentence direction.
    #[serde(default)]
    pub propositions: BTreeMap<String, String>,
}

impl ConversionRequest {
    pub fn new(mode: Mode, input: impl Into<String>) -> Self {
        Self {
            mode,
            input: input.into(),
            propositions: BTreeMap::new(),
        }
    }

    /// Adds a meaning for `atom`.
    pub fn with_proposition(mut self, atom: char, meaning: impl Into<String>) -> Self {
        self.propositions.insert(atom.to_string(), meaning.into());
        self
    }

    pub fn validate(&self) -> Result<(), TranslateError> {
        if self.input.trim().is_empty() {
            return Err(TranslateError::MissingInput);
        }
        Ok(())
    }
}
