//! Controller boundary errors

use thiserror::Error;

/// Errors surfaced at the controller boundary.
///
/// Everything past the boundary is best-effort: a malformed or missing
/// engine reply is never an error, only the absence of a result. The
/// caller observes that as `is_searching` staying true.
#[derive(Debug, Error)]
pub enum SessionError {
    /// `evaluate_position` was called with an empty position encoding.
    #[error("empty position encoding")]
    EmptyPosition,

    /// The engine endpoint could not be opened.
    #[error("failed to open engine endpoint: {0}")]
    Endpoint(#[from] std::io::Error),
}
