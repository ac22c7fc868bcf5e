//! Condense - web front-end for summarization and transcription.
//!
//! Accepts raw text, audio, or document uploads and returns a
//! length-constrained summary or transcription, delegating the model
//! work to pretrained pipelines behind an HTTP inference endpoint.

pub mod extract;
pub mod feedback;
pub mod inference;
pub mod server;
