use actix_web::{HttpRequest, Responder, get, web};
use tera::Tera;

use crate::dto::home::HomePage;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::routes::{base_context, redirect, render_template};
use crate::services::home::resolve_home;

#[get("/")]
pub async fn show_home(
    req: HttpRequest,
    user: Option<AuthenticatedUser>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let remembered = req.cookie(&server_config.cookie_username);
    let remembered = remembered.as_ref().map(|cookie| cookie.value());

    match resolve_home(user, remembered, &server_config) {
        HomePage::Activate(user) => {
            let mut context = base_context(Some(&user), "activate", &server_config);
            context.insert("email", &user.email);
            render_template(&tera, "user/activate.html", &context)
        }
        HomePage::Dashboard(user) => {
            let context = base_context(Some(&user), "dashboard", &server_config);
            render_template(&tera, "user/dashboard.html", &context)
        }
        HomePage::RedirectToLogin(location) => redirect(&location),
        HomePage::Landing => {
            let context = base_context(None, "home", &server_config);
            render_template(&tera, "home.html", &context)
        }
    }
}
