use thiserror::Error;

use crate::domain::error::DomainError;

/// Reasons a submit was refused before any request went out.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShareError {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("the post has already been created")]
    AlreadySubmitted,
    #[error("no authenticated session")]
    NotLoggedIn,
    #[error(transparent)]
    MissingField(DomainError),
    #[error("invalid session user id: {0}")]
    InvalidUserId(DomainError),
}
