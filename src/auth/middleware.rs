//! Middleware that rejects requests to protected routes unless the caller has an identity.

use std::sync::Arc;

use axum::{
    extract::{FromRef, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{AppState, Error, auth::IdentityProvider};

/// The state needed for the identity gate.
#[derive(Debug, Clone)]
pub struct IdentityState {
    /// Resolves the identity of the caller.
    pub identity_provider: Arc<dyn IdentityProvider>,
}

impl FromRef<AppState> for IdentityState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            identity_provider: state.identity_provider.clone(),
        }
    }
}

/// Middleware function that asks the identity provider who the caller is.
///
/// The [Identity](crate::Identity) is placed into the request extensions and the request
/// executed normally if one is found, otherwise a 401 JSON error is returned.
///
/// **Note**: Route handlers can use the function argument
/// `Extension(identity): Extension<Identity>` to receive the identity.
pub async fn identity_gate(
    State(state): State<IdentityState>,
    request: Request,
    next: Next,
) -> Response {
    let (mut parts, body) = request.into_parts();

    let Some(identity) = state.identity_provider.resolve_identity(&parts) else {
        tracing::debug!("No identity for request to {}", parts.uri.path());
        return Error::Unauthorized.into_response();
    };

    parts.extensions.insert(identity);
    next.run(Request::from_parts(parts, body)).await
}
