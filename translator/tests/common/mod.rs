//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for translator integration tests.

#![allow(dead_code)]

use cpc_translator::{
    BackendError, ConversionRequest, ModelBackend, Translator, TranslatorConfig,
};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Backend that replays canned replies and records every request it sees.
pub struct ScriptedBackend {
    replies: RefCell<VecDeque<Result<String, BackendError>>>,
    pub calls: RefCell<Vec<ConversionRequest>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        ScriptedBackend {
            replies: RefCell::new(VecDeque::new()),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Queue a successful reply.
    pub fn reply(self, text: &str) -> Self {
        self.replies.borrow_mut().push_back(Ok(text.to_string()));
        self
    }

    /// Queue a failed call.
    pub fn fail(self, err: BackendError) -> Self {
        self.replies.borrow_mut().push_back(Err(err));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl ModelBackend for ScriptedBackend {
    fn complete(&self, request: &ConversionRequest) -> Result<String, BackendError> {
        self.calls.borrow_mut().push(request.clone());
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(BackendError::Unavailable("no scripted reply".to_string())))
    }
}

/// Translator with default config over `backend`.
pub fn translator(backend: ScriptedBackend) -> Translator<ScriptedBackend> {
    Translator::new(backend, TranslatorConfig::default())
}

/// Translator with a custom config over `backend`.
pub fn translator_with(
    backend: ScriptedBackend,
    config: TranslatorConfig,
) -> Translator<ScriptedBackend> {
    Translator::new(backend, config)
}
