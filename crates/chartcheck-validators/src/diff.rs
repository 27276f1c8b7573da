//! Line-oriented failure report for containment checks.
//!
//! Each failing document contributes one block:
//!
//! ```text
//! DocumentIndex:	1
//! Expected NOT to contain document:
//! 	Kind = Service, apiVersion = v1, Name = bar, Namespace = foo
//! ```
//!
//! The echoed values are the selector's, not the document's. Trailing
//! whitespace on the detail line is trimmed, so an empty namespace renders as
//! `Namespace =`.

use crate::contains_document::ContainsDocument;

/// One failing document, ready to render.
#[derive(Debug, Clone, Copy)]
pub struct DiffBlock<'a> {
    pub index: usize,
    pub negative: bool,
    pub selector: &'a ContainsDocument,
}

impl<'a> DiffBlock<'a> {
    pub fn new(index: usize, negative: bool, selector: &'a ContainsDocument) -> Self {
        Self {
            index,
            negative,
            selector,
        }
    }

    pub fn lines(&self) -> [String; 3] {
        let expectation = if self.negative {
            "Expected NOT to contain document:"
        } else {
            "Expected to contain document:"
        };
        let detail = format!(
            "\tKind = {}, apiVersion = {}, Name = {}, Namespace = {}",
            self.selector.kind(),
            self.selector.api_version(),
            self.selector.name(),
            self.selector.namespace(),
        );
        [
            format!("DocumentIndex:\t{}", self.index),
            expectation.to_string(),
            detail.trim_end().to_string(),
        ]
    }

    /// Append this block's lines to `diff`.
    pub fn write_to(&self, diff: &mut Vec<String>) {
        diff.extend(self.lines());
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
