//! Speech recognition wrapper
//!
//! Configures an engine from the injected factory and forwards its three
//! callback channels. The service retains no engine reference: each
//! `initialize` call constructs and returns a fresh handle whose lifetime
//! the caller owns.

use std::sync::Arc;

use super::engine::{EndHandler, EngineFactory, ErrorHandler, SpeechEngine};
use super::types::{RecognitionConfig, RecognitionResult};

/// The caller's three event channels
pub struct RecognitionCallbacks {
    /// Receives the cumulative transcript on every result event
    pub on_result: Box<dyn FnMut(String) + Send>,

    /// Receives engine errors verbatim
    pub on_error: ErrorHandler,

    /// Signals that the engine stopped listening
    pub on_end: EndHandler,
}

/// Wires caller callbacks onto a configured recognition engine.
pub struct SpeechRecognitionService {
    factory: Arc<dyn EngineFactory>,
}

impl SpeechRecognitionService {
    /// Create a service over the given engine factory
    pub fn new(factory: Arc<dyn EngineFactory>) -> Self {
        Self { factory }
    }

    /// Configure and return a continuous, interim-result-enabled engine
    /// bound to `language`, with the result, error and end channels wired
    /// to the given callbacks.
    ///
    /// Returns `None` when the host environment has no speech recognition
    /// capability; that is a silent no-op, never an error, and none of the
    /// callbacks will ever be invoked. Starting, stopping and disposing of
    /// the returned engine are the caller's responsibility.
    pub fn initialize(
        &self,
        language: &str,
        callbacks: RecognitionCallbacks,
    ) -> Option<Box<dyn SpeechEngine>> {
        if !self.factory.is_supported() {
            tracing::debug!("speech recognition unavailable; no engine created");
            return None;
        }

        let config = RecognitionConfig::for_language(language);
        let mut engine = self.factory.create();
        engine.configure(&config);

        let RecognitionCallbacks {
            mut on_result,
            on_error,
            on_end,
        } = callbacks;

        // Every event rebuilds the whole transcript from the full result
        // list, so the caller always sees the cumulative text, not a delta.
        engine.on_result(Box::new(move |results| {
            on_result(cumulative_transcript(results));
        }));
        engine.on_error(on_error);
        engine.on_end(on_end);

        tracing::debug!(language = %config.language, "recognition engine configured");
        Some(engine)
    }
}

/// Concatenation of the top alternative of every result entry, in order
fn cumulative_transcript(results: &[RecognitionResult]) -> String {
    results
        .iter()
        .filter_map(|result| result.top())
        .map(|alternative| alternative.transcript.as_str())
        .collect()
}
