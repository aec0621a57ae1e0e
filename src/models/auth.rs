//! Signed-in user extracted from the identity cookie.

use std::future::{Ready, ready};

use actix_identity::IdentityExt;
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, error, web};
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use crate::domain::types::AccountId;
use crate::models::config::ServerConfig;

/// Claims carried by the identity token issued at sign-in.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AuthenticatedUser {
    /// Account identifier.
    pub sub: String,
    pub name: String,
    pub email: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub exp: usize,
}

fn default_active() -> bool {
    true
}

impl AuthenticatedUser {
    /// Account id of the user, when `sub` holds a valid one.
    pub fn account_id(&self) -> Option<AccountId> {
        self.sub
            .parse::<i32>()
            .ok()
            .and_then(|id| AccountId::new(id).ok())
    }

    /// Decodes and validates the identity token.
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        let key = DecodingKey::from_secret(secret.as_bytes());
        decode::<Self>(token, &key, &Validation::default()).map(|data| data.claims)
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(config) = req.app_data::<web::Data<ServerConfig>>() else {
            log::error!("Server config is not registered");
            return ready(Err(error::ErrorInternalServerError("missing config")));
        };

        let token = match req.get_identity().and_then(|identity| identity.id()) {
            Ok(token) => token,
            Err(_) => return ready(Err(error::ErrorUnauthorized("not signed in"))),
        };

        ready(Self::from_token(&token, &config.secret).map_err(|err| {
            log::debug!("Rejected identity token: {err}");
            error::ErrorUnauthorized("invalid token")
        }))
    }
}
