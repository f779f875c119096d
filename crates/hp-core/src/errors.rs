//! Structured error types shared across the sampler crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`HpError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (residue indices, parameter values, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

/// Canonical error type for the sampler.
///
/// Geometric non-applicability of a move is deliberately not represented
/// here: an inapplicable move is an empty journal, consumed by the
/// Metropolis rule as a rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum HpError {
    /// Sequence content errors (letters outside the HP alphabet).
    #[error("sequence error: {0}")]
    Sequence(ErrorInfo),
    /// Invalid search or lattice parameters detected at setup.
    #[error("parameter error: {0}")]
    Parameters(ErrorInfo),
    /// Lattice state errors: failed initialisation, grid overflow,
    /// inconsistent hand-built conformations.
    #[error("lattice error: {0}")]
    Lattice(ErrorInfo),
    /// Search driver errors.
    #[error("search error: {0}")]
    Search(ErrorInfo),
}

impl HpError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            HpError::Sequence(info)
            | HpError::Parameters(info)
            | HpError::Lattice(info)
            | HpError::Search(info) => info,
        }
    }

    /// True for errors caused by invalid user input rather than by the
    /// sampler itself. The CLI maps these to its validation exit code.
    pub fn is_validation(&self) -> bool {
        matches!(self, HpError::Sequence(_) | HpError::Parameters(_))
    }
}
