use thiserror::Error;

/// Errors raised by the match scorer
///
/// The scorer does no I/O, so caller mistakes are the only failure mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
