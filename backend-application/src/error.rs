use thiserror::Error;

/// Application failure taxonomy. Variants map 1:1 onto the HTTP status
/// surface in `backend-interfaces-http`; every failure raised before
/// commit rolls the open inventory transaction back.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("bad request: {0}")]
    InvalidInput(String),
    #[error("invalid state: {0}")]
    InvalidState(String),
    #[error("sold out: {0}")]
    SoldOut(String),
    #[error("misconfigured: {0}")]
    Misconfigured(String),
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),
    #[error("mint failed: {0}")]
    MintFailed(String),
    #[error("ticket already finalized or processing")]
    AlreadyFinalized,
    /// Referential integrity violated; unreachable unless the store is
    /// corrupt.
    #[error("inconsistent state: {0}")]
    Inconsistent(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
