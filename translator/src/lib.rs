//! FILENAME: translator/src/lib.rs
//! PURPOSE: Conversion between Portuguese sentences and propositional formulas.
//! CONTEXT: Wraps the cpc-parser pipeline with the request-level logic around
//! a hosted language model: request validation, reply interpretation, the
//! string-splitting fallback and the text handed back to the user.
//!
//! The model itself sits behind the ModelBackend trait.

pub mod backend;
pub mod config;
pub mod error;
pub mod heuristic;
pub mod output;
pub mod reply;
pub mod request;
pub mod translator;


pub use backend::ModelBackend;
pub use config::TranslatorConfig;
pub use error::{BackendError, ConfigError, TranslateError};
pub use heuristic::{guess_formula, Guess};
pub use output::{stitch, unstitch, Stitched};
pub use reply::{interpret_reply, strip_fences, ModelReply};
pub use request::{ConversionRequest, Mode};
pub use translator::Translator;
