//! Authentication gateway
//!
//! - Login against the user store
//! - Signup that creates new referrers
//!
//! NOTE: this is a demo stub, not a security boundary. Every account shares
//! [`DEMO_PASSWORD`], nothing is hashed, and no session or token is issued.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Result, RewardsError};
use crate::store::{User, UserStore};

/// Shared password accepted for every account
pub const DEMO_PASSWORD: &str = "password123";

/// Public identity returned by login and signup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthUser {
    pub id: u32,
    pub name: String,
    pub email: String,
}

impl From<User> for AuthUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

pub struct AuthGateway {
    store: Arc<UserStore>,
}

impl AuthGateway {
    pub fn new(store: Arc<UserStore>) -> Self {
        Self { store }
    }

    /// Unknown email and wrong password both yield `InvalidCredentials`.
    pub fn login(&self, email: &str, password: &str) -> Result<AuthUser> {
        match self.store.find_by_email(email) {
            Some(user) if password == DEMO_PASSWORD => {
                info!("User {} logged in", user.id);
                Ok(user.into())
            }
            Some(user) => {
                debug!("Wrong password for user {}", user.id);
                Err(RewardsError::InvalidCredentials)
            }
            None => {
                debug!("Login attempt for unknown email");
                Err(RewardsError::InvalidCredentials)
            }
        }
    }

    /// Register a new referrer.
    ///
    /// The password is accepted but never stored; login keeps using
    /// [`DEMO_PASSWORD`] for the new account.
    pub fn signup(&self, name: &str, email: &str, _password: &str) -> Result<AuthUser> {
        let user = self.store.create(name, email)?;
        Ok(user.into())
    }
}
