//! FILENAME: translator/src/backend.rs
//! PURPOSE: Boundary to the hosted language model.
//! CONTEXT: Prompt construction, transport, timeouts and retries all live on
//! the implementor's side. The translator only ever sees the raw reply text.

use crate::error::BackendError;
use crate::request::ConversionRequest;

pub trait ModelBackend {
    /// Asks the model to perform `request` and returns its raw reply.
    fn complete(&self, request: &ConversionRequest) -> Result<String, BackendError>;
}

impl<B: ModelBackend + ?Sized> ModelBackend for &B {
    fn complete(&self, request: &ConversionRequest) -> Result<String, BackendError> {
        (**self).complete(request)
    }
}

impl<B: ModelBackend + ?Sized> ModelBackend for Box<B> {
    fn complete(&self, request: &ConversionRequest) -> Result<String, BackendError> {
        (**self).complete(request)
    }
}
