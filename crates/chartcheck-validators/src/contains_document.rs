//! `containsDocument` — assert that rendered output contains (or, negated,
//! does not contain) a document with a given kind, apiVersion, name and
//! namespace.
//!
//! Two evaluation modes exist:
//!
//! - [`Mode::Universal`]: every document in scope must match (or, negated,
//!   none may). Each offending document gets its own diff block.
//! - [`Mode::Existence`]: at least one document in the whole set must match.
//!   Negated, every matching document is reported.
//!
//! A fixed `documentIndex` always evaluates universally over that single
//! document, since "any" and "all" coincide for a singleton.

use chartcheck_core::{Document, NegatedExistencePolicy};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    context::{Scope, ValidateContext},
    diff::DiffBlock,
    Validatable, Verdict,
};

const VALIDATOR: &str = "contains_document";

/// Selector for one document. Immutable once built; a single value can be
/// reused across any number of contexts and threads.
///
/// `name` and `namespace` are wildcards when empty. `kind` and `apiVersion`
/// are always compared verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainsDocument {
    kind: String,
    api_version: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    namespace: String,
    /// Existence semantics over the whole set instead of universal semantics.
    #[serde(default)]
    any: bool,
    #[serde(skip)]
    policy: NegatedExistencePolicy,
}

/// How a selector is evaluated against its scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Existence,
    Universal,
}

impl ContainsDocument {
    pub fn new(kind: impl Into<String>, api_version: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            api_version: api_version.into(),
            name: String::new(),
            namespace: String::new(),
            any: false,
            policy: NegatedExistencePolicy::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn any(mut self, any: bool) -> Self {
        self.any = any;
        self
    }

    pub fn with_policy(mut self, policy: NegatedExistencePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Field-equality match against one document.
    pub fn matches(&self, doc: &Document) -> bool {
        let id = doc.identity();
        id.kind == self.kind
            && id.api_version == self.api_version
            && (self.name.is_empty() || id.name == self.name)
            && (self.namespace.is_empty() || id.namespace == self.namespace)
    }

    pub fn mode_for(&self, scope: Scope) -> Mode {
        match scope {
            Scope::All if self.any => Mode::Existence,
            _ => Mode::Universal,
        }
    }

    /// Every document in scope must match; negated, none may.
    pub fn validate_universal(&self, ctx: &ValidateContext<'_>) -> Verdict {
        let negative = ctx.is_negative();
        let mut diff = Vec::new();

        for (index, doc) in ctx.documents_in_scope() {
            let matched = self.matches(doc);
            trace!(validator = VALIDATOR, index, matched, "compared document");
            if matched == negative {
                DiffBlock::new(index, negative, self).write_to(&mut diff);
            }
        }

        Verdict {
            passed: diff.is_empty(),
            diff,
        }
    }

    /// At least one document must match. Stops at the first match unless
    /// negated, in which case every match is reported.
    pub fn validate_existence(&self, ctx: &ValidateContext<'_>) -> Verdict {
        let negative = ctx.is_negative();
        let mut diff = Vec::new();
        let mut found = false;
        let mut last_index = 0;

        for (index, doc) in ctx.documents_in_scope() {
            last_index = index;
            let matched = self.matches(doc);
            trace!(validator = VALIDATOR, index, matched, "compared document");
            if !matched {
                continue;
            }
            found = true;
            if !negative {
                break;
            }
            DiffBlock::new(index, true, self).write_to(&mut diff);
        }

        let passed = match (negative, self.policy) {
            (false, _) => found,
            (true, NegatedExistencePolicy::Compatible) => false,
            (true, NegatedExistencePolicy::Symmetric) => !found,
        };

        if !negative && !found {
            DiffBlock::new(last_index, false, self).write_to(&mut diff);
        }

        Verdict { passed, diff }
    }
}

impl Validatable for ContainsDocument {
    fn validate(&self, ctx: &ValidateContext<'_>) -> Verdict {
        let mode = self.mode_for(ctx.scope());
        debug!(
            validator = VALIDATOR,
            scope = ?ctx.scope(),
            negative = ctx.is_negative(),
            ?mode,
            "validating"
        );

        let verdict = match mode {
            Mode::Universal => self.validate_universal(ctx),
            Mode::Existence => self.validate_existence(ctx),
        };

        debug!(validator = VALIDATOR, passed = verdict.passed, "validated");
        verdict
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
