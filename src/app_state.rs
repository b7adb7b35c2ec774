//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use axum_extra::extract::cookie::Key;
use rusqlite::Connection;
use sha2::{Digest, Sha512};

use crate::{
    Error,
    auth::{IdentityProvider, SessionCookieIdentity},
    db::initialize,
};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Resolves the identity of the caller for protected routes.
    pub identity_provider: Arc<dyn IdentityProvider>,

    /// The database connection
    pub db_connection: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the tables for the domain models.
    /// Callers are identified by the session cookie, encrypted with a key derived from `cookie_secret`.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(db_connection: Connection, cookie_secret: &str) -> Result<Self, Error> {
        initialize(&db_connection)?;

        let cookie_key = create_cookie_key(cookie_secret);

        Ok(Self {
            identity_provider: Arc::new(SessionCookieIdentity::new(cookie_key)),
            db_connection: Arc::new(Mutex::new(db_connection)),
        })
    }

    /// Replace the identity provider, e.g. to plug in a different identity service.
    pub fn with_identity_provider(mut self, provider: impl IdentityProvider + 'static) -> Self {
        self.identity_provider = Arc::new(provider);
        self
    }
}

/// Create a signing key for cookies from a `secret`s string.
pub fn create_cookie_key(secret: &str) -> Key {
    let hash = Sha512::digest(secret);

    Key::from(&hash)
}
