//! Client-side route guard for the admin route trees
//!
//! Mirrors what the storefront shell does before rendering an admin layout:
//! decode the stored token, read its `role` claim, and compare against the
//! tree being entered. The signature is deliberately NOT verified: the
//! client has no secret, and the backend re-checks the token on every call.

use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use verdora_rust_core::{LoginRoute, Role, SessionStore};

/// Outcome of a route-guard check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Granted,
    /// Denied; the caller should navigate to this login route
    Denied(LoginRoute),
}

#[derive(Debug, Deserialize)]
struct TokenClaims {
    #[serde(default)]
    role: Option<Role>,
}

/// Decode the `role` claim from a backend token without verifying it.
///
/// Returns `None` for tokens that are not parseable JWTs or carry no role.
pub fn token_role(token: &str) -> Option<Role> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    jsonwebtoken::decode::<TokenClaims>(token, &DecodingKey::from_secret(&[]), &validation)
        .ok()
        .and_then(|data| data.claims.role)
}

pub(crate) fn check_route(session: &SessionStore, path: &str) -> RouteAccess {
    let (required, login_route) = if path.starts_with("/superadmin") {
        (Role::SuperAdmin, LoginRoute::SuperAdmin)
    } else if path.starts_with("/distributor") {
        (Role::Distributor, LoginRoute::Distributor)
    } else {
        return RouteAccess::Granted;
    };

    // The admin login pages themselves sit inside the gated trees.
    if path == login_route.path() {
        return RouteAccess::Granted;
    }

    let Some(token) = session.token() else {
        return RouteAccess::Denied(login_route);
    };

    match token_role(&token) {
        Some(role) if role == required => RouteAccess::Granted,
        _ => RouteAccess::Denied(login_route),
    }
}
