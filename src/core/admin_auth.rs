use actix_web::dev::Payload;
use actix_web::{http, web, FromRequest, HttpRequest};
use chrono::{Duration, Utc};
use futures_util::future::LocalBoxFuture;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use secrecy::ExposeSecret;
use std::future::{ready, Ready};

use crate::core::config::AdminConfig;
use crate::core::kv_store::KvStore;
use crate::core::AppError;
use crate::db::admin;
use crate::models::admin::AdminClaims;

pub const OWNER_HEADER: &str = "X-Owner-Token";

/// Whether the host vouched for the caller as the site owner.
#[derive(Debug, Clone, Copy)]
pub struct OwnerIdentity {
    pub is_owner: bool,
}

fn owner_from_request(req: &HttpRequest, config: &AdminConfig) -> bool {
    let expected = config.owner_token.expose_secret();
    !expected.is_empty()
        && req
            .headers()
            .get(OWNER_HEADER)
            .and_then(|value| value.to_str().ok())
            .map_or(false, |value| value == expected)
}

fn admin_config(req: &HttpRequest) -> Result<web::Data<AdminConfig>, AppError> {
    req.app_data::<web::Data<AdminConfig>>()
        .cloned()
        .ok_or_else(|| AppError::internal_error("Admin configuration is not registered"))
}

impl FromRequest for OwnerIdentity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(admin_config(req).map(|config| OwnerIdentity {
            is_owner: owner_from_request(req, &config),
        }))
    }
}

/// Guard for dashboard routes: owner identity, a valid session token and the
/// stored logged-in flag are all required.
#[derive(Debug)]
pub struct AdminSession {
    pub claims: AdminClaims,
}

impl FromRequest for AdminSession {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let config = match admin_config(req) {
            Ok(config) => config,
            Err(e) => return Box::pin(ready(Err(e))),
        };
        let store = req.app_data::<web::Data<KvStore>>().cloned();
        let is_owner = owner_from_request(req, &config);
        let token = req
            .headers()
            .get(http::header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(|value| value.to_string());

        Box::pin(async move {
            if !is_owner {
                return Err(AppError::unauthorized("Admin access requires the site owner"));
            }
            let token = token.ok_or_else(|| AppError::unauthorized("Invalid login credentials"))?;
            let claims = decode_token(&token, &config)?;

            let store = store.ok_or_else(|| AppError::internal_error("Store is not registered"))?;
            if !admin::is_logged_in(&store).await? {
                return Err(AppError::unauthorized("Session has ended, please log in again"));
            }

            Ok(AdminSession { claims })
        })
    }
}

pub fn generate_token(config: &AdminConfig) -> Result<(String, chrono::DateTime<Utc>), AppError> {
    let now = Utc::now();
    let expires_at = now + Duration::hours(config.token_expiration_hours);
    let claims = AdminClaims {
        sub: "owner".to_string(),
        iat: now.timestamp() as usize,
        exp: expires_at.timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.expose_secret().as_bytes()),
    )
    .map_err(|e| {
        tracing::error!("Failed to generate token string: {:?}", e);
        AppError::internal_error("Failed to generate session token")
    })?;

    Ok((token, expires_at))
}

pub fn decode_token(token: &str, config: &AdminConfig) -> Result<AdminClaims, AppError> {
    decode::<AdminClaims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.expose_secret().as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid token"))
}
