use thiserror::Error;

/// Errors surfaced by the distance operations
///
/// The taxonomy is deliberately narrow: mismatched input lengths are a caller
/// contract violation and abort the whole call, and a nearest-match query
/// against zero targets has no defined minimum. Pure math has no transient
/// failure modes, so nothing here is retryable and no partial results are
/// ever produced alongside an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DistanceError {
    #[error("length mismatch in {what}: {left} vs {right}")]
    LengthMismatch {
        what: &'static str,
        left: usize,
        right: usize,
    },

    #[error("nearest match requires at least one target point")]
    EmptyTargetSet,
}
