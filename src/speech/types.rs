//! Speech recognition types

use serde::{Deserialize, Serialize};

/// Engine configuration for one recognition session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionConfig {
    /// BCP 47 language tag (e.g. `en-US`)
    pub language: String,

    /// Keep listening across utterances
    pub continuous: bool,

    /// Deliver results that may still change before finalization
    pub interim_results: bool,
}

impl RecognitionConfig {
    /// Continuous, interim-result-enabled session for the given language
    pub fn for_language(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            continuous: true,
            interim_results: true,
        }
    }
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self::for_language("en-US")
    }
}

/// One recognition hypothesis for a result entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionAlternative {
    /// Recognized text
    pub transcript: String,

    /// Engine confidence, when reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

impl RecognitionAlternative {
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            confidence: None,
        }
    }
}

/// One entry of the engine's result list.
///
/// A result event carries the full list observed so far in the session;
/// interim entries are replaced in place by the engine as they firm up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionResult {
    /// Hypotheses ordered best-first
    pub alternatives: Vec<RecognitionAlternative>,

    /// Whether this entry will no longer change
    pub is_final: bool,
}

impl RecognitionResult {
    /// Final result with a single hypothesis
    pub fn final_text(transcript: impl Into<String>) -> Self {
        Self {
            alternatives: vec![RecognitionAlternative::new(transcript)],
            is_final: true,
        }
    }

    /// Interim result with a single hypothesis
    pub fn interim_text(transcript: impl Into<String>) -> Self {
        Self {
            alternatives: vec![RecognitionAlternative::new(transcript)],
            is_final: false,
        }
    }

    /// Top recognition alternative, if any
    pub fn top(&self) -> Option<&RecognitionAlternative> {
        self.alternatives.first()
    }
}

/// Error reported by the recognition engine.
///
/// The wrapper never produces these itself; they pass through to the
/// caller's error channel untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionError {
    /// Engine error code (e.g. `no-speech`, `audio-capture`, `network`)
    pub code: String,

    /// Human-readable detail, when the engine provides one
    pub message: String,
}

impl RecognitionError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}
