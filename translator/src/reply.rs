//! FILENAME: translator/src/reply.rs
//! PURPOSE: Makes sense of the raw text a language model sends back.
//! CONTEXT: Models are asked for a single JSON object but often wrap it in
//! markdown fences or surround it with prose. This module recovers the
//! object when there is one and classifies it.
//!
//! RECOGNIZED OBJECTS (first matching key wins):
//! - {"error": "..."}                          -> Refused
//! - {"formula": "...", "propositions": {...}} -> Formula
//! - {"sentence": "..."}                       -> Sentence

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

static LEADING_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*```(json)?").expect("static regex"));

static TRAILING_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"```\s*$").expect("static regex"));

/// First `{` through last `}`.
static OBJECT_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("static regex"));

/// A model reply after interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelReply {
    /// The model declined, with its reason.
    Refused { error: String },
    /// A formula and, when the model supplied one, its atom meanings.
    Formula {
        formula: String,
        propositions: Option<BTreeMap<String, String>>,
    },
    Sentence { sentence: String },
    /// An object with none of the expected keys, or an array.
    Unrecognized,
}

/// Removes a leading ```` ``` ```` / ```` ```json ```` fence and a trailing
/// fence, then trims.
pub fn strip_fences(raw: &str) -> String {
    let text = LEADING_FENCE.replace(raw, "");
    let text = TRAILING_FENCE.replace(&text, "");
    text.trim().to_string()
}

/// Interprets a raw model reply. Returns None when no JSON object or array
/// can be recovered; bare strings, numbers, booleans and null count as no JSON.
pub fn interpret_reply(raw: &str) -> Option<ModelReply> {
    let text = strip_fences(raw);

    let value = serde_json::from_str::<Value>(&text).ok().or_else(|| {
        OBJECT_SPAN
            .find(&text)
            .and_then(|span| serde_json::from_str::<Value>(span.as_str()).ok())
    })?;

    match value {
        Value::Object(object) => Some(classify(&object)),
        Value::Array(_) => Some(ModelReply::Unrecognized),
        _ => None,
    }
}

fn classify(object: &Map<String, Value>) -> ModelReply {
    if let Some(error) = object.get("error").and_then(truthy_text) {
        return ModelReply::Refused { error };
    }

    if let Some(formula) = object.get("formula").and_then(truthy_text) {
        let propositions = match object.get("propositions") {
            Some(Value::Object(map)) => Some(
                map.iter()
                    .map(|(atom, meaning)| (atom.clone(), plain_text(meaning)))
                    .collect(),
            ),
            _ => None,
        };
        return ModelReply::Formula {
            formula,
            propositions,
        };
    }

    if let Some(sentence) = object.get("sentence").and_then(truthy_text) {
        return ModelReply::Sentence { sentence };
    }

    ModelReply::Unrecognized
}

/// Text of a field that counts as present: null, false, zero and "" do not.
fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(plain_text(other)),
    }
}

fn plain_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
