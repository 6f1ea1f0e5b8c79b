/// Convenience result type used across the crate.
pub type AgsResult<T> = Result<T, AgsError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Drawing primitives never surface errors; they degrade to visually inert no-ops. Errors are
/// reserved for malformed configuration and for callers that break the transition protocol.
#[derive(thiserror::Error, Debug)]
pub enum AgsError {
    /// Invalid caller-provided configuration or arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// A transition call arrived in a state that does not accept it.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AgsError {
    /// Build an [`AgsError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`AgsError::Protocol`] value.
    pub fn protocol(msg: impl Into<String>) -> Self {
        Self::Protocol(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
