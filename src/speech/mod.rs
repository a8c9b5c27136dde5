//! Speech recognition wrapper
//!
//! Thin layer over an external continuous speech-recognition engine.
//! The engine comes from an injected [`EngineFactory`] (capability absence
//! is a silent no-op), gets configured for continuous interim-result
//! listening in the caller's language, and forwards its result, error and
//! end channels to caller-supplied handlers. The result channel always
//! carries the cumulative transcript of the session, never a delta.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dictado::speech::{RecognitionCallbacks, SpeechRecognitionService};
//!
//! let service = SpeechRecognitionService::new(factory);
//! let engine = service.initialize("en-US", RecognitionCallbacks {
//!     on_result: Box::new(|transcript| println!("{transcript}")),
//!     on_error: Box::new(|error| eprintln!("{error:?}")),
//!     on_end: Box::new(|| {}),
//! });
//!
//! // Lifecycle stays with the caller
//! if let Some(mut engine) = engine {
//!     engine.start();
//! }
//! ```

mod engine;
mod service;
mod types;

pub use engine::{EndHandler, EngineFactory, ErrorHandler, ResultHandler, SpeechEngine};
pub use service::{RecognitionCallbacks, SpeechRecognitionService};
pub use types::{
    RecognitionAlternative, RecognitionConfig, RecognitionError, RecognitionResult,
};
