//! chartcheck-validators — containment assertions over rendered documents.
//!
//! # Flow
//!
//! ```text
//! Assertion ──► ValidateContext ──► Validatable::validate ──► Verdict
//!   (index check)   (scope, not)        (pure, no I/O)        (passed + diff)
//! ```
//!
//! Validators never mutate their inputs and hold no shared state, so a single
//! document set may be validated from many threads at once.

pub mod assertion;
pub mod contains_document;
pub mod context;
pub mod diff;

pub use assertion::Assertion;
pub use contains_document::{ContainsDocument, Mode};
pub use context::{ContextError, Scope, ValidateContext};

/// Result of one validation: a verdict plus the lines explaining failures.
///
/// `diff` is empty, never absent, when there is nothing to report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verdict {
    pub passed: bool,
    pub diff: Vec<String>,
}

/// Implemented by every assertion validator.
pub trait Validatable {
    fn validate(&self, ctx: &ValidateContext<'_>) -> Verdict;
}
