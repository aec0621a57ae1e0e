use crate::dto::home::HomePage;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;

/// Picks the landing view for the current visitor.
///
/// `remembered` is the value of the remember-username cookie, if any.
pub fn resolve_home(
    user: Option<AuthenticatedUser>,
    remembered: Option<&str>,
    config: &ServerConfig,
) -> HomePage {
    match user {
        Some(user) if !user.is_active && config.service.register_email_confirm => {
            HomePage::Activate(user)
        }
        Some(user) => HomePage::Dashboard(user),
        None if remembered.is_some_and(|name| !name.is_empty()) => {
            HomePage::RedirectToLogin(format!("{}/user/login", config.app_sub_url))
        }
        None => HomePage::Landing,
    }
}
