use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use tera::{Context, Tera};

use crate::dto::explore::{AccountsPageData, ExploreQuery, ListingPage};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, render_template};
use crate::services::explore as explore_service;

/// Fills in the listing state shared by all explore templates.
fn insert_listing<T>(context: &mut Context, items_key: &str, page: &ListingPage<T>)
where
    T: serde::Serialize,
{
    context.insert(items_key, &page.items);
    context.insert("total", &page.total);
    context.insert("page", &page.page);
    context.insert("keyword", &page.keyword);
    context.insert("sort_type", &page.sort_type);
    context.insert("is_explore", &true);
}

fn render_accounts(
    tera: &Tera,
    template: &str,
    mut context: Context,
    items_key: &str,
    data: &AccountsPageData,
) -> HttpResponse {
    insert_listing(&mut context, items_key, &data.accounts);
    context.insert("show_user_email", &data.show_user_email);
    render_template(tera, template, &context)
}

#[get("/explore/repos")]
pub async fn explore_repos(
    req: HttpRequest,
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = ExploreQuery::from_query_string(req.query_string());
    let viewer = user.as_ref().and_then(AuthenticatedUser::account_id);

    match explore_service::explore_repositories(repo.get_ref(), viewer, &query, &server_config.ui)
    {
        Ok(page) => {
            let mut context = base_context(user.as_ref(), "explore_repos", &server_config);
            insert_listing(&mut context, "repos", &page);
            render_template(&tera, "explore/repos.html", &context)
        }
        Err(err) => {
            log::error!("Failed to list repositories: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/explore/users")]
pub async fn explore_users(
    req: HttpRequest,
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = ExploreQuery::from_query_string(req.query_string());

    match explore_service::explore_users(repo.get_ref(), &query, &server_config.ui) {
        Ok(data) => {
            let context = base_context(user.as_ref(), "explore_users", &server_config);
            render_accounts(&tera, "explore/users.html", context, "users", &data)
        }
        Err(err) => {
            log::error!("Failed to list users: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/explore/organizations")]
pub async fn explore_organizations(
    req: HttpRequest,
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = ExploreQuery::from_query_string(req.query_string());

    match explore_service::explore_organizations(repo.get_ref(), &query, &server_config.ui) {
        Ok(data) => {
            let context = base_context(user.as_ref(), "explore_organizations", &server_config);
            render_accounts(
                &tera,
                "explore/organizations.html",
                context,
                "organizations",
                &data,
            )
        }
        Err(err) => {
            log::error!("Failed to list organizations: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
