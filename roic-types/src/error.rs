use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the ROIC workspace.
///
/// Covers capability mismatches, argument validation, provider-tagged
/// failures, not-found conditions, timeouts, and an aggregate for
/// multi-provider attempts. None of these ever escape `Roic::compute`; they
/// are recorded on the per-ticker report instead.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoicError {
    /// The requested capability is not implemented by the target connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "balance-sheet").
        capability: String,
    },

    /// Issues with the returned data (malformed payloads, unusable values).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An individual connector returned an error.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),

    /// A ticker or statement could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of missing resource, e.g. "balance sheet for ZZZZ".
        what: String,
    },

    /// All registered providers failed; contains the individual failures.
    #[error("all providers failed: {0:?}")]
    AllProvidersFailed(Vec<RoicError>),

    /// A provider call exceeded the configured timeout.
    #[error("provider timed out: {capability} via {connector}")]
    ProviderTimeout {
        /// Connector name (or "roic" for the per-ticker deadline).
        connector: String,
        /// Capability label (e.g. "income-statement").
        capability: String,
    },
}

impl RoicError {
    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `ProviderTimeout` error.
    pub fn provider_timeout(connector: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            connector: connector.into(),
            capability: capability.into(),
        }
    }
}
