/// Convenience result type used across skyvec.
pub type SkyvecResult<T> = Result<T, SkyvecError>;

/// Top-level error taxonomy used by the rendering core.
#[derive(thiserror::Error, Debug)]
pub enum SkyvecError {
    /// Invalid user-provided data (channel orders, pixel buffer sizes, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// A pixel readback or text-metrics query was made with no surface bound.
    #[error("no surface bound: {0}")]
    UnboundSurface(String),

    /// A backend primitive rejected a single command during replay.
    ///
    /// The replay loop catches this per command; it never aborts the
    /// remainder of a frame.
    #[error("replay error: {0}")]
    Replay(String),

    /// Wrapped lower-level error from dependencies or collaborators.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SkyvecError {
    /// Build a [`SkyvecError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SkyvecError::UnboundSurface`] value.
    pub fn unbound_surface(msg: impl Into<String>) -> Self {
        Self::UnboundSurface(msg.into())
    }

    /// Build a [`SkyvecError::Replay`] value.
    pub fn replay(msg: impl Into<String>) -> Self {
        Self::Replay(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
