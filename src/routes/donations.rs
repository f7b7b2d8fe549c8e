use actix_web::{get, post, web, HttpResponse, Responder};
use tracing::instrument;

use crate::core::{AppError, AppSuccessResponse, KvStore};
use crate::db::settings::fetch_site_settings;
use crate::models::donations::{checkout, DonationOptions, DonationRequest};

#[instrument(name = "Get Donation Options", skip(store))]
#[get("/methods")]
pub async fn get_donation_options(store: web::Data<KvStore>) -> Result<impl Responder, AppError> {
    let settings = fetch_site_settings(&store).await?;

    Ok(HttpResponse::Ok().json(AppSuccessResponse {
        success: true,
        message: "Donation options retrieved successfully".to_string(),
        data: DonationOptions::from_settings(&settings),
    }))
}

#[instrument(name = "Donation Checkout", skip(store))]
#[post("/checkout")]
pub async fn create_checkout(
    store: web::Data<KvStore>,
    request: web::Json<DonationRequest>,
) -> Result<impl Responder, AppError> {
    let settings = fetch_site_settings(&store).await?;
    let instructions = checkout(&settings, request.method, &request.amount)
        .map_err(AppError::bad_request)?;

    Ok(HttpResponse::Ok().json(AppSuccessResponse {
        success: true,
        message: format!("Donation of {}€ via {}", request.amount.normalized(), request.method.display_name()),
        data: instructions,
    }))
}
