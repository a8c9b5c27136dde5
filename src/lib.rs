//! Dictado
//!
//! Utilities for reading-practice front ends: extract the text of uploaded
//! PDF files and wire up continuous speech-recognition sessions.
//!
//! # Modules
//!
//! - `extract`: uploaded-file validation and sequential PDF text extraction
//! - `speech`: recognition engine configuration and callback forwarding
//!
//! The two modules are independent and share no state.

pub mod extract;
pub mod speech;
