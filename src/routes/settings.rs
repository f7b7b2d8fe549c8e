use actix_multipart::Multipart;
use actix_web::http::header;
use actix_web::{get, post, put, web, HttpResponse, Responder};
use tracing::instrument;

use crate::core::admin_auth::AdminSession;
use crate::core::utils::{parse_data_uri, read_images};
use crate::core::{AppError, AppSuccessResponse, KvStore};
use crate::db::settings::{fetch_site_settings, save_site_settings};
use crate::models::settings::SiteSettings;

const DEFAULT_LOGO: &[u8] = include_bytes!("../../static/xalima-logo.svg");

#[instrument(name = "Get Site Settings", skip(store))]
#[get("/settings")]
pub async fn get_site_settings(store: web::Data<KvStore>) -> Result<impl Responder, AppError> {
    let settings = fetch_site_settings(&store).await?;

    Ok(HttpResponse::Ok().json(AppSuccessResponse {
        success: true,
        message: "Site settings retrieved successfully".to_string(),
        data: settings,
    }))
}

/// Header logo: the uploaded image, a redirect to an external logo, or the
/// built-in asset when none is set.
#[instrument(name = "Get Site Logo", skip(store))]
#[get("/settings/logo")]
pub async fn get_site_logo(store: web::Data<KvStore>) -> Result<HttpResponse, AppError> {
    let settings = fetch_site_settings(&store).await?;
    let logo = settings.logo_url.trim();

    if logo.is_empty() {
        return Ok(HttpResponse::Ok()
            .content_type("image/svg+xml")
            .body(DEFAULT_LOGO));
    }
    if logo.starts_with("data:") {
        return match parse_data_uri(logo) {
            Some((content_type, bytes)) => Ok(HttpResponse::Ok().content_type(content_type).body(bytes)),
            None => {
                tracing::warn!("Stored logo is not a readable data URI, serving the default logo");
                Ok(HttpResponse::Ok()
                    .content_type("image/svg+xml")
                    .body(DEFAULT_LOGO))
            }
        };
    }

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, logo.to_string()))
        .finish())
}

#[instrument(name = "Update Site Settings", skip(store, _session, payload))]
#[put("/settings")]
pub async fn update_site_settings(
    store: web::Data<KvStore>,
    _session: AdminSession,
    payload: web::Json<SiteSettings>,
) -> Result<impl Responder, AppError> {
    let settings = payload.into_inner();
    save_site_settings(&store, &settings).await?;

    tracing::info!("Site settings saved");

    Ok(HttpResponse::Ok().json(AppSuccessResponse {
        success: true,
        message: "Site settings saved successfully".to_string(),
        data: settings,
    }))
}

/// Converts an uploaded image into a `data:` URI for the settings form. Nothing
/// is stored until the settings are saved.
#[instrument(name = "Upload Image", skip(_session, payload))]
#[post("/uploads/image")]
pub async fn upload_image(
    _session: AdminSession,
    payload: Multipart,
) -> Result<impl Responder, AppError> {
    let mut images = read_images(payload).await?;
    let image = images.remove(0);

    Ok(HttpResponse::Ok().json(AppSuccessResponse {
        success: true,
        message: "Image loaded, remember to save your changes".to_string(),
        data: image,
    }))
}
