//! Structured error types shared across SIMPL crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`SimplError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (vertices, sizes, positions, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for simpliciality computations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum SimplError {
    /// A vertex was looked up in a degree source or vertex set that does not contain it.
    #[error("lookup error: {0}")]
    Lookup(ErrorInfo),
    /// Malformed caller input (empty edges, duplicate edges, zero volume, ...).
    #[error("input error: {0}")]
    Input(ErrorInfo),
    /// Random sampling could not satisfy its constraints within the attempt cap.
    #[error("sampling error: {0}")]
    Sampling(ErrorInfo),
    /// Configuration decoding or validation errors.
    #[error("config error: {0}")]
    Config(ErrorInfo),
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
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl SimplError {
    /// Builds a [`SimplError::Lookup`] with the provided code and message.
    pub fn lookup(code: impl Into<String>, message: impl Into<String>) -> Self {
        SimplError::Lookup(ErrorInfo::new(code, message))
    }

    /// Builds a [`SimplError::Input`] with the provided code and message.
    pub fn input(code: impl Into<String>, message: impl Into<String>) -> Self {
        SimplError::Input(ErrorInfo::new(code, message))
    }

    /// Builds a [`SimplError::Sampling`] with the provided code and message.
    pub fn sampling(code: impl Into<String>, message: impl Into<String>) -> Self {
        SimplError::Sampling(ErrorInfo::new(code, message))
    }

    /// Builds a [`SimplError::Config`] with the provided code and message.
    pub fn config(code: impl Into<String>, message: impl Into<String>) -> Self {
        SimplError::Config(ErrorInfo::new(code, message))
    }

    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            SimplError::Lookup(info)
            | SimplError::Input(info)
            | SimplError::Sampling(info)
            | SimplError::Config(info) => info,
        }
    }

    /// Returns the stable error code.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Adds a context entry to the payload regardless of the error family.
    pub fn with_context(self, key: impl Into<String>, value: impl ToString) -> Self {
        self.map_info(|info| info.with_context(key, value))
    }

    /// Attaches a remediation hint regardless of the error family.
    pub fn with_hint(self, hint: impl Into<String>) -> Self {
        self.map_info(|info| info.with_hint(hint))
    }

    fn map_info(self, f: impl FnOnce(ErrorInfo) -> ErrorInfo) -> Self {
        match self {
            SimplError::Lookup(info) => SimplError::Lookup(f(info)),
            SimplError::Input(info) => SimplError::Input(f(info)),
            SimplError::Sampling(info) => SimplError::Sampling(f(info)),
            SimplError::Config(info) => SimplError::Config(f(info)),
        }
    }
}

/// Builds the lookup error raised when a vertex is absent from a degree source.
pub fn unknown_vertex(vertex: &impl fmt::Debug) -> SimplError {
    SimplError::lookup("unknown-vertex", "vertex is not present in the degree source")
        .with_context("vertex", format!("{vertex:?}"))
}
