mod identity;
mod middleware;
mod session;

pub use identity::{Identity, IdentityProvider};
pub use middleware::identity_gate;
pub use session::{SESSION_COOKIE, SessionCookieIdentity, SessionToken, set_session_cookie};
