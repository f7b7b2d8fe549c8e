use actix_web::{get, post, web, HttpResponse, Responder};
use tracing::instrument;

use crate::core::admin_auth::{generate_token, AdminSession, OwnerIdentity};
use crate::core::config::AdminConfig;
use crate::core::{AppError, AppSuccessResponse, KvStore};
use crate::db::admin;
use crate::models::admin::{LoginOutcome, LoginRequest, LoginResponse, SessionStatus};

#[instrument(name = "Admin Login", skip(store, config, request))]
#[post("/login")]
pub async fn login(
    store: web::Data<KvStore>,
    config: web::Data<AdminConfig>,
    owner: OwnerIdentity,
    request: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    if !owner.is_owner {
        return Err(AppError::forbidden_error(
            "Access denied, you must be the owner of the site to sign in",
        ));
    }

    let outcome = admin::authenticate(&store, &request.password)
        .await?
        .ok_or_else(|| AppError::unauthorized("Incorrect password"))?;
    let (token, expires_at) = generate_token(&config)?;

    let message = match outcome {
        LoginOutcome::PasswordCreated => "Admin password created successfully",
        LoginOutcome::LoggedIn => "Welcome to the admin dashboard",
    };

    Ok(HttpResponse::Ok().json(AppSuccessResponse {
        success: true,
        message: message.to_string(),
        data: LoginResponse {
            outcome,
            token,
            expires_at,
        },
    }))
}

#[instrument(name = "Admin Logout", skip(store, _session))]
#[post("/logout")]
pub async fn logout(
    store: web::Data<KvStore>,
    _session: AdminSession,
) -> Result<impl Responder, AppError> {
    admin::log_out(&store).await?;

    Ok(HttpResponse::Ok().json(AppSuccessResponse {
        success: true,
        message: "Logged out successfully".to_string(),
        data: (),
    }))
}

#[instrument(name = "Admin Session Status", skip(store))]
#[get("/session")]
pub async fn session_status(
    store: web::Data<KvStore>,
    owner: OwnerIdentity,
) -> Result<impl Responder, AppError> {
    let logged_in = admin::is_logged_in(&store).await?;

    Ok(HttpResponse::Ok().json(AppSuccessResponse {
        success: true,
        message: "Session status retrieved".to_string(),
        data: SessionStatus {
            is_owner: owner.is_owner,
            logged_in,
        },
    }))
}

#[instrument(name = "Dashboard Overview", skip(store, _session))]
#[get("/overview")]
pub async fn dashboard_overview(
    store: web::Data<KvStore>,
    _session: AdminSession,
) -> Result<impl Responder, AppError> {
    let overview = admin::dashboard_overview(&store).await?;

    Ok(HttpResponse::Ok().json(AppSuccessResponse {
        success: true,
        message: "Overview retrieved successfully".to_string(),
        data: overview,
    }))
}
