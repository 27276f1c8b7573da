//! chartcheck-core — shared types for chartcheck.
//!
//! This crate holds the generic rendered-document model read by every
//! validator, plus the layered configuration that tunes validator behaviour.
//! It has no knowledge of assertions; see `chartcheck-validators` for those.

pub mod config;
pub mod document;

pub use config::{Config, NegatedExistencePolicy};
pub use document::{documents_from_json, Document, DocumentError, Identity};
