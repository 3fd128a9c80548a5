//! FILENAME: translator/src/translator.rs
//! PURPOSE: Runs one conversion request end to end.
//! CONTEXT: The deterministic parser/renderer answers formula-to-sentence
//! requests whenever the input is a well-formed formula, so the model is
//! only consulted when that fails or for the sentence-to-formula direction.
//! Model replies are then interpreted with several fallbacks before giving up.
//!
//! FLOW:
//!   request --> validate --> [cpc-to-nl: parse + render] --> backend
//!           --> interpret reply --> formula / sentence / fallback / error

use crate::backend::ModelBackend;
use crate::config::TranslatorConfig;
use crate::error::TranslateError;
use crate::heuristic::guess_formula;
use crate::output::stitch;
use crate::reply::{interpret_reply, strip_fences, ModelReply};
use crate::request::{ConversionRequest, Mode};
use cpc_parser::{parse_formula, parse_formula_strict, render, Formula, MeaningLookup, ParseResult};
use log::{debug, info, warn};
use std::collections::BTreeMap;

pub struct Translator<B> {
    backend: B,
    config: TranslatorConfig,
}

impl<B: ModelBackend> Translator<B> {
    pub fn new(backend: B, config: TranslatorConfig) -> Self {
        Self { backend, config }
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Parses `formula` honoring the configured tokenizer strictness.
    pub fn parse(&self, formula: &str) -> ParseResult<Formula> {
        if self.config.strict_tokens {
            parse_formula_strict(formula)
        } else {
            parse_formula(formula)
        }
    }

    /// The deterministic formula-to-sentence path, without any model call.
    pub fn formula_to_sentence<M: MeaningLookup + ?Sized>(
        &self,
        formula: &str,
        meanings: &M,
    ) -> ParseResult<String> {
        let formula = self.parse(formula)?;
        Ok(render(&formula, meanings))
    }

    /// Converts `request`, consulting the model only when needed.
    pub fn convert(&self, request: &ConversionRequest) -> Result<String, TranslateError> {
        request.validate()?;

        if request.mode == Mode::CpcToNl {
            if let Some(sentence) = self.try_render(request) {
                return Ok(sentence);
            }
        }

        debug!(target: "CONVERT", "calling backend mode={}", request.mode);
        let raw = self.backend.complete(request)?;

        let Some(reply) = interpret_reply(&raw) else {
            return self.recover_unstructured(request, &raw);
        };

        match reply {
            ModelReply::Refused { error } => Err(TranslateError::Refused(error)),
            ModelReply::Formula {
                formula,
                propositions: Some(propositions),
            } => Ok(self.formula_reply(&formula, &propositions)),
            ModelReply::Formula {
                propositions: None, ..
            } => Err(TranslateError::MissingPropositions),
            ModelReply::Sentence { sentence } => Ok(sentence),
            ModelReply::Unrecognized => Err(TranslateError::MissingFields),
        }
    }

    fn try_render(&self, request: &ConversionRequest) -> Option<String> {
        match self.formula_to_sentence(&request.input, &request.propositions) {
            Ok(sentence) => Some(sentence),
            Err(err) => {
                debug!(target: "CONVERT", "deterministic path declined: {}", err);
                None
            }
        }
    }

    /// Handles a reply that carried no JSON at all.
    fn recover_unstructured(
        &self,
        request: &ConversionRequest,
        raw: &str,
    ) -> Result<String, TranslateError> {
        if request.mode == Mode::NlToCpc && self.config.heuristic_fallback {
            let guess = guess_formula(&request.input);
            info!(target: "CONVERT", "heuristic fallback formula={}", guess.formula);
            return Ok(stitch(&guess.formula, &guess.propositions));
        }

        let text = strip_fences(raw);
        if self.is_plain_answer(&text) && !text.contains('{') && !text.contains("error") {
            info!(target: "CONVERT", "accepting plain-text reply len={}", text.len());
            return Ok(text);
        }

        Err(TranslateError::InvalidReply)
    }

    fn is_plain_answer(&self, text: &str) -> bool {
        let len = text.chars().count();
        len > 0 && len < self.config.max_plain_reply_len
    }

    /// Validates a model-authored formula and stitches it with its meanings.
    /// A formula that parses is re-emitted in canonical notation; one that
    /// does not is passed through as written.
    fn formula_reply(&self, formula: &str, propositions: &BTreeMap<String, String>) -> String {
        match self.parse(formula) {
            Ok(parsed) => {
                for atom in parsed.atoms() {
                    if propositions.meaning(atom).map_or(true, str::is_empty) {
                        warn!(target: "CONVERT", "model left atom {} without a meaning", atom);
                    }
                }
                stitch(&parsed.to_string(), propositions)
            }
            Err(err) => {
                warn!(
                    target: "CONVERT",
                    "model formula does not parse: {} formula={}",
                    err,
                    formula
                );
                stitch(formula, propositions)
            }
        }
    }
}
