//! HTTP handlers and the helpers they share.

use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web::{HttpResponse, web};
use tera::{Context, Tera};

use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;

pub mod explore;
pub mod home;

/// Context every page template expects.
pub fn base_context(
    user: Option<&AuthenticatedUser>,
    current_page: &str,
    server_config: &ServerConfig,
) -> Context {
    let mut context = Context::new();
    context.insert("current_user", &user);
    context.insert("current_page", current_page);
    context.insert("app_sub_url", &server_config.app_sub_url);
    context
}

/// Renders `template` with a `200 OK` status.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    render_with_status(tera, template, context, StatusCode::OK)
}

fn render_with_status(
    tera: &Tera,
    template: &str,
    context: &Context,
    status: StatusCode,
) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Fallback for unknown routes.
pub async fn not_found(
    user: Option<AuthenticatedUser>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> HttpResponse {
    let context = base_context(user.as_ref(), "not_found", &server_config);
    render_with_status(&tera, "status/404.html", &context, StatusCode::NOT_FOUND)
}
