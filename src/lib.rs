//! chartcheck — containment assertions for rendered manifests.
//!
//! Answers one question about a template render: does the document set (or
//! one member of it) contain, or deliberately not contain, a document with a
//! given `kind`, `apiVersion`, `metadata.name` and `metadata.namespace`?
//!
//! This crate re-exports the two library layers so that integration tests and
//! embedding test runners can import them from one place.
//!
//! # Architecture
//!
//! ```text
//! render ──► Document set ──► Assertion ──► ContainsDocument ──► Verdict
//!                 │                              ▲
//!                 └──────── Config (policy) ─────┘
//! ```

pub use chartcheck_core::{config, document};
pub use chartcheck_core::{documents_from_json, Config, Document, Identity, NegatedExistencePolicy};
pub use chartcheck_validators::{
    assertion, contains_document, context, diff, Assertion, ContainsDocument, ContextError, Mode,
    Scope, Validatable, ValidateContext, Verdict,
};
