//! The seam between the router and whatever service identifies callers.

use std::fmt::Debug;

use axum::http::request::Parts;

/// The caller of a protected route, as established by an [IdentityProvider].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// The ID the identity provider assigned to the user.
    pub user_id: String,
}

/// Resolves who is making a request.
///
/// Implementations must not fail loudly: a request that carries no usable
/// credentials simply has no identity.
pub trait IdentityProvider: Send + Sync + Debug {
    /// Inspect the request head and return the caller's identity, if any.
    fn resolve_identity(&self, parts: &Parts) -> Option<Identity>;
}
