use actix_web::{delete, get, post, web, HttpResponse, Responder};
use chrono::Utc;
use tracing::instrument;

use crate::core::admin_auth::AdminSession;
use crate::core::{AppError, AppSuccessResponse, KvStore};
use crate::db::volunteers;
use crate::models::common::SearchQuery;
use crate::models::volunteers::VolunteerForm;

#[instrument(name = "Submit Volunteer Application", skip(store, payload))]
#[post("")]
pub async fn submit_application(
    store: web::Data<KvStore>,
    payload: web::Json<VolunteerForm>,
) -> Result<impl Responder, AppError> {
    let mut form = payload.into_inner();
    let application = form.submit(Utc::now())?;
    volunteers::append_application(&store, &application).await?;

    tracing::info!("Volunteer application {} received", application.id);

    Ok(HttpResponse::Created().json(AppSuccessResponse {
        success: true,
        message: "Thank you for your application, we will contact you soon".to_string(),
        data: application,
    }))
}

#[instrument(name = "Get Volunteer Applications", skip(store, _session))]
#[get("/volunteers")]
pub async fn get_applications(
    store: web::Data<KvStore>,
    _session: AdminSession,
    query: web::Query<SearchQuery>,
) -> Result<impl Responder, AppError> {
    let data = volunteers::search_applications(&store, query.search.as_deref()).await?;

    Ok(HttpResponse::Ok().json(AppSuccessResponse {
        success: true,
        message: "Volunteer applications retrieved successfully".to_string(),
        data,
    }))
}

#[instrument(name = "Delete Volunteer Application", skip(store, _session))]
#[delete("/volunteers/{application_id}")]
pub async fn delete_application(
    store: web::Data<KvStore>,
    _session: AdminSession,
    path: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let application_id = path.into_inner();
    if !volunteers::delete_application(&store, &application_id).await? {
        return Err(AppError::not_found("Application not found"));
    }

    Ok(HttpResponse::Ok().json(AppSuccessResponse {
        success: true,
        message: "Application deleted successfully".to_string(),
        data: application_id,
    }))
}
