//! Configuration types for chartcheck.
//!
//! [`Config::load`] layers an optional TOML file and `CHARTCHECK__*`
//! environment variables over the built-in defaults. [`Config::defaults`]
//! returns the same defaults without touching the filesystem (useful in tests).

use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[contains_document]
negated_existence = "compatible"
"#;

const ENV_PREFIX: &str = "CHARTCHECK";
const ENV_SEPARATOR: &str = "__";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub contains_document: ContainsDocumentConfig,
}

/// `[contains_document]` section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ContainsDocumentConfig {
    #[serde(default)]
    pub negated_existence: NegatedExistencePolicy,
}

/// Outcome of a negated existence-mode check (`any: true` with `not: true`
/// over the whole document set).
///
/// Existing suites were written against [`Compatible`](Self::Compatible),
/// where such a check never passes, even when no document matches. Suites
/// that want "must not contain" to succeed on a set without matches opt into
/// [`Symmetric`](Self::Symmetric), which makes the check pass exactly when
/// nothing matched, the same rule negated universal checks already follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NegatedExistencePolicy {
    #[default]
    Compatible,
    Symmetric,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the defaults, then `path` if given, then the environment.
    ///
    /// A missing file is an error when a path is passed explicitly.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Load from a TOML file layered over the defaults, ignoring the environment.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(true))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
