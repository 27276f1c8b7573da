//! Per-invocation validation context.
//!
//! A [`ValidateContext`] borrows the rendered document set for the duration of
//! one `validate` call and records which part of it is under test ([`Scope`])
//! and whether the assertion is negated.

use chartcheck_core::Document;

/// Raw index value meaning "the whole document set".
pub const WHOLE_SET_INDEX: i64 = -1;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
    #[error("documentIndex {index} is invalid, expected -1 or a position >= 0")]
    NegativeIndex { index: i64 },
    #[error("documentIndex {index} out of range ({len} documents rendered)")]
    IndexOutOfRange { index: usize, len: usize },
    /// A positive index wider than `usize` on this target.
    #[error("documentIndex {index} out of range (exceeds addressable positions)")]
    IndexTooLarge { index: i64 },
}

/// Which documents a validation considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    #[default]
    All,
    /// Only the document at this position.
    At(usize),
}

impl Scope {
    /// Convert the assertion-file form, where `-1` selects the whole set.
    pub fn from_index(index: i64) -> Result<Self, ContextError> {
        match index {
            WHOLE_SET_INDEX => Ok(Scope::All),
            n if n >= 0 => usize::try_from(n)
                .map(Scope::At)
                .map_err(|_| ContextError::IndexTooLarge { index }),
            _ => Err(ContextError::NegativeIndex { index }),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ValidateContext<'a> {
    docs: &'a [Document],
    scope: Scope,
    negative: bool,
}

impl<'a> ValidateContext<'a> {
    pub fn new(docs: &'a [Document]) -> Self {
        Self {
            docs,
            scope: Scope::All,
            negative: false,
        }
    }

    /// Restrict the context to `scope`, rejecting positions past the end.
    pub fn with_scope(mut self, scope: Scope) -> Result<Self, ContextError> {
        if let Scope::At(index) = scope {
            if index >= self.docs.len() {
                return Err(ContextError::IndexOutOfRange {
                    index,
                    len: self.docs.len(),
                });
            }
        }
        self.scope = scope;
        Ok(self)
    }

    pub fn negative(mut self, negative: bool) -> Self {
        self.negative = negative;
        self
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Documents under test, paired with their position in the full set.
    pub fn documents_in_scope(&self) -> impl Iterator<Item = (usize, &'a Document)> + 'a {
        let (offset, slice) = match self.scope {
            Scope::All => (0, self.docs),
            Scope::At(index) => (index, &self.docs[index..=index]),
        };
        slice
            .iter()
            .enumerate()
            .map(move |(i, doc)| (offset + i, doc))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
