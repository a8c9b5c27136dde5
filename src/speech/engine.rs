//! Recognition engine seam
//!
//! The actual engine (a platform speech service) is an external
//! collaborator. Callers supply it through [`EngineFactory`], which also
//! answers the capability probe, so nothing here depends on ambient
//! environment state.

use super::types::{RecognitionConfig, RecognitionError, RecognitionResult};

/// Result-channel handler; receives the engine's full result list so far
pub type ResultHandler = Box<dyn FnMut(&[RecognitionResult]) + Send>;

/// Error-channel handler
pub type ErrorHandler = Box<dyn FnMut(RecognitionError) + Send>;

/// End-channel handler
pub type EndHandler = Box<dyn FnMut() + Send>;

/// A continuous speech-recognition engine instance.
///
/// The wrapper only configures engines and registers handlers; `start`,
/// `stop` and disposal belong to whoever holds the returned handle.
pub trait SpeechEngine: Send {
    /// Keep listening across utterances
    fn set_continuous(&mut self, continuous: bool);

    /// Deliver interim (still changing) results
    fn set_interim_results(&mut self, interim_results: bool);

    /// Recognition language tag
    fn set_language(&mut self, language: &str);

    /// Register the result channel
    fn on_result(&mut self, handler: ResultHandler);

    /// Register the error channel
    fn on_error(&mut self, handler: ErrorHandler);

    /// Register the end channel
    fn on_end(&mut self, handler: EndHandler);

    /// Start listening. Caller-driven; never invoked by the wrapper.
    fn start(&mut self);

    /// Stop listening. Caller-driven; never invoked by the wrapper.
    fn stop(&mut self);

    /// Apply a configuration bundle in one go
    fn configure(&mut self, config: &RecognitionConfig) {
        self.set_continuous(config.continuous);
        self.set_interim_results(config.interim_results);
        self.set_language(&config.language);
    }
}

/// Supplies engines and answers whether the capability exists at all.
///
/// When `is_supported` returns false no engine is ever created; the
/// wrapper treats absence as a benign no-op, not an error.
pub trait EngineFactory: Send + Sync {
    /// Whether the host environment provides speech recognition
    fn is_supported(&self) -> bool;

    /// Construct a fresh, unconfigured engine
    fn create(&self) -> Box<dyn SpeechEngine>;
}
