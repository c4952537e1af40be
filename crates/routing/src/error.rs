//! Errors raised while building, navigating and loading a route table

use thiserror::Error;

/// Route table errors
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("invalid route pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("catch-all route `{pattern}` must be the last of its siblings")]
    CatchAllNotLast { pattern: String },

    #[error("route name `{0}` is declared more than once")]
    DuplicateName(String),

    #[error("no route named `{0}`")]
    UnknownRoute(String),

    #[error("route `{route}` requires parameter `{param}`")]
    MissingParam { route: String, param: String },

    #[error("failed to load view for `{pattern}`")]
    Load {
        pattern: String,
        #[source]
        source: LoadError,
    },
}

impl RoutingError {
    pub(crate) fn invalid_pattern(pattern: &str, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }
}

/// Failure reported by a view loader
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LoadError {
    message: String,
}

impl LoadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
