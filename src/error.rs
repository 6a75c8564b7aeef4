//! Domain errors
//!
//! Every failure here is recovered at the request boundary; none of them
//! leave partial state behind.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RewardsError {
    #[error("user {0} not found")]
    NotFound(u32),

    #[error("user with email {0} already exists")]
    DuplicateEmail(String),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("donation amount must be positive")]
    InvalidDonation,
}

pub type Result<T> = std::result::Result<T, RewardsError>;
