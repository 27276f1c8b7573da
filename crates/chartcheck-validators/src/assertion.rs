//! Binding of one `containsDocument` assertion entry from a test suite.
//!
//! ```json
//! { "containsDocument": { "kind": "Service", "apiVersion": "v1", "name": "web" },
//!   "not": true,
//!   "documentIndex": 0 }
//! ```
//!
//! This is where the raw `documentIndex` is checked against the rendered
//! set, so validators only ever see in-range scopes.

use chartcheck_core::{Config, Document};
use serde::Deserialize;
use tracing::debug;

use crate::{
    context::{ContextError, Scope, ValidateContext, WHOLE_SET_INDEX},
    contains_document::ContainsDocument,
    Validatable, Verdict,
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assertion {
    pub contains_document: ContainsDocument,
    #[serde(default)]
    pub not: bool,
    #[serde(default = "default_document_index")]
    pub document_index: i64,
}

fn default_document_index() -> i64 {
    WHOLE_SET_INDEX
}

impl Assertion {
    /// Run the assertion against a rendered document set.
    pub fn evaluate(&self, docs: &[Document], config: &Config) -> Result<Verdict, ContextError> {
        let scope = Scope::from_index(self.document_index)?;
        let ctx = ValidateContext::new(docs)
            .with_scope(scope)?
            .negative(self.not);
        debug!(documents = docs.len(), ?scope, not = self.not, "evaluating assertion");

        let validator = self
            .contains_document
            .clone()
            .with_policy(config.contains_document.negated_existence);
        Ok(validator.validate(&ctx))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
