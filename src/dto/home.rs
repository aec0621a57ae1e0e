//! DTOs for the landing route.

use crate::models::auth::AuthenticatedUser;

/// What the home route should show.
#[derive(Debug, Clone, PartialEq)]
pub enum HomePage {
    /// Signed in but still waiting for e-mail confirmation.
    Activate(AuthenticatedUser),
    Dashboard(AuthenticatedUser),
    /// A remembered user name suggests a returning visitor.
    RedirectToLogin(String),
    Landing,
}
