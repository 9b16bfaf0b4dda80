//! crates/repetiteur_core/src/error.rs
//!
//! The error taxonomy shared by every lifecycle operation. Validation and
//! permission failures are decided before any persistence call, so a caller
//! that receives one knows no side effect happened.

use crate::ports::PortError;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    /// Malformed input (budget_max < budget_min, message too short, ...).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The actor lacks the required role, ownership or validation flag.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// The action is not legal from the entity's current state.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// A uniqueness invariant would be violated.
    #[error("conflict: {0}")]
    Conflict(String),

    /// A referenced entity does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The backing store or an external service failed.
    #[error("backend unavailable: {0}")]
    Backend(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<PortError> for DomainError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::NotFound(msg) => DomainError::NotFound(msg),
            PortError::Conflict(msg) => DomainError::Conflict(msg),
            PortError::Unavailable(msg) => DomainError::Backend(msg),
            PortError::Unexpected(msg) => DomainError::Backend(msg),
        }
    }
}
