//! Identifies callers by an encrypted session cookie.
//!
//! The cookie is written by the external sign-in flow and holds a JSON
//! [SessionToken]. It is stored in a private cookie, so the server only
//! accepts tokens that were encrypted with its own key.

use axum::http::request::Parts;
use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, Key, SameSite},
};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::auth::{Identity, IdentityProvider};

/// The name of the cookie holding the session token.
pub const SESSION_COOKIE: &str = "__session";

mod datetime_format {
    //! Serializes a [time::OffsetDateTime] as an RFC 3339 string.
    use serde::{Deserialize, Deserializer, Serializer};
    use time::{OffsetDateTime, format_description::well_known::Rfc3339};

    pub fn serialize<S>(dt: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let formatted = dt.format(&Rfc3339).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&formatted)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        OffsetDateTime::parse(&s, &Rfc3339).map_err(serde::de::Error::custom)
    }
}

/// The contents of the session cookie.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SessionToken {
    /// The ID the identity provider assigned to the user.
    pub user_id: String,

    /// The session is rejected at and after this time.
    #[serde(
        serialize_with = "datetime_format::serialize",
        deserialize_with = "datetime_format::deserialize"
    )]
    pub expires_at: OffsetDateTime,
}

impl SessionToken {
    /// Create a token for `user_id` that is valid for `duration` from now.
    pub fn new(user_id: impl Into<String>, duration: Duration) -> Self {
        Self {
            user_id: user_id.into(),
            expires_at: OffsetDateTime::now_utc() + duration,
        }
    }

    /// Whether the token is still valid at `now`.
    pub fn is_valid_at(&self, now: OffsetDateTime) -> bool {
        now < self.expires_at
    }
}

/// Add the session cookie for `token` to `jar`.
///
/// # Errors
///
/// Returns a [serde_json::Error] if the token cannot be serialized.
pub fn set_session_cookie(
    jar: PrivateCookieJar,
    token: &SessionToken,
) -> Result<PrivateCookieJar, serde_json::Error> {
    let value = serde_json::to_string(token)?;

    Ok(jar.add(
        Cookie::build((SESSION_COOKIE, value))
            .expires(token.expires_at)
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(true)
            .path("/"),
    ))
}

/// An [IdentityProvider] that reads the private session cookie.
#[derive(Debug, Clone)]
pub struct SessionCookieIdentity {
    key: Key,
}

impl SessionCookieIdentity {
    /// Create a provider that decrypts session cookies with `key`.
    pub fn new(key: Key) -> Self {
        Self { key }
    }
}

impl IdentityProvider for SessionCookieIdentity {
    fn resolve_identity(&self, parts: &Parts) -> Option<Identity> {
        let jar = PrivateCookieJar::from_headers(&parts.headers, self.key.clone());
        let cookie = jar.get(SESSION_COOKIE)?;

        let token: SessionToken = match serde_json::from_str(cookie.value_trimmed()) {
            Ok(token) => token,
            Err(error) => {
                tracing::debug!("Could not parse session token: {error}");
                return None;
            }
        };

        if !token.is_valid_at(OffsetDateTime::now_utc()) {
            tracing::debug!("Session for user {} has expired", token.user_id);
            return None;
        }

        Some(Identity {
            user_id: token.user_id,
        })
    }
}
