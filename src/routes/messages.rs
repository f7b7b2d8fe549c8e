use actix_web::{delete, get, post, web, HttpResponse, Responder};
use chrono::Utc;
use tracing::instrument;

use crate::core::admin_auth::AdminSession;
use crate::core::{AppError, AppSuccessResponse, KvStore};
use crate::db::messages;
use crate::models::common::SearchQuery;
use crate::models::messages::ContactForm;

#[instrument(name = "Submit Contact Message", skip(store, payload))]
#[post("")]
pub async fn submit_message(
    store: web::Data<KvStore>,
    payload: web::Json<ContactForm>,
) -> Result<impl Responder, AppError> {
    let mut form = payload.into_inner();
    let message = form.submit(Utc::now())?;
    messages::append_message(&store, &message).await?;

    tracing::info!("Contact message {} received", message.id);

    Ok(HttpResponse::Created().json(AppSuccessResponse {
        success: true,
        message: "Message sent, we will get back to you shortly".to_string(),
        data: message,
    }))
}

#[instrument(name = "Get Contact Messages", skip(store, _session))]
#[get("/messages")]
pub async fn get_messages(
    store: web::Data<KvStore>,
    _session: AdminSession,
    query: web::Query<SearchQuery>,
) -> Result<impl Responder, AppError> {
    let data = messages::search_messages(&store, query.search.as_deref()).await?;

    Ok(HttpResponse::Ok().json(AppSuccessResponse {
        success: true,
        message: "Messages retrieved successfully".to_string(),
        data,
    }))
}

#[instrument(name = "Delete Contact Message", skip(store, _session))]
#[delete("/messages/{message_id}")]
pub async fn delete_message(
    store: web::Data<KvStore>,
    _session: AdminSession,
    path: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let message_id = path.into_inner();
    if !messages::delete_message(&store, &message_id).await? {
        return Err(AppError::not_found("Message not found"));
    }

    Ok(HttpResponse::Ok().json(AppSuccessResponse {
        success: true,
        message: "Message deleted".to_string(),
        data: message_id,
    }))
}
