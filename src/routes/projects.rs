use actix_multipart::Multipart;
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use tracing::instrument;

use crate::core::admin_auth::AdminSession;
use crate::core::utils::read_images;
use crate::core::{AppError, AppSuccessResponse, KvStore};
use crate::db::projects::{self, ImageRemoval};
use crate::models::projects::{DeleteConfirmation, ProjectFilter, ProjectForm};

#[instrument(name = "Get Projects", skip(store))]
#[get("")]
pub async fn get_projects(
    store: web::Data<KvStore>,
    filter: web::Query<ProjectFilter>,
) -> Result<impl Responder, AppError> {
    let data = projects::fetch_projects_by_status(&store, filter.status).await?;

    Ok(HttpResponse::Ok().json(AppSuccessResponse {
        success: true,
        message: "Projects retrieved successfully".to_string(),
        data,
    }))
}

#[instrument(name = "Get Project", skip(store))]
#[get("/{project_id}")]
pub async fn get_project(
    store: web::Data<KvStore>,
    path: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let project = projects::fetch_project(&store, &path)
        .await?
        .ok_or_else(|| AppError::not_found("Project not found"))?;

    Ok(HttpResponse::Ok().json(AppSuccessResponse {
        success: true,
        message: "Project retrieved successfully".to_string(),
        data: project,
    }))
}

#[instrument(name = "Create Project", skip(store, _session, payload))]
#[post("")]
pub async fn create_project(
    store: web::Data<KvStore>,
    _session: AdminSession,
    payload: web::Json<ProjectForm>,
) -> Result<impl Responder, AppError> {
    let input = payload.into_inner().validated()?;
    let project = projects::create_project(&store, input).await?;

    tracing::info!("Project {} created", project.id);

    Ok(HttpResponse::Created().json(AppSuccessResponse {
        success: true,
        message: "Project added successfully".to_string(),
        data: project,
    }))
}

#[instrument(name = "Update Project", skip(store, _session, payload))]
#[put("/{project_id}")]
pub async fn update_project(
    store: web::Data<KvStore>,
    _session: AdminSession,
    path: web::Path<String>,
    payload: web::Json<ProjectForm>,
) -> Result<impl Responder, AppError> {
    let input = payload.into_inner().validated()?;
    let project = projects::update_project(&store, &path, input)
        .await?
        .ok_or_else(|| AppError::not_found("Project not found"))?;

    Ok(HttpResponse::Ok().json(AppSuccessResponse {
        success: true,
        message: "Project updated successfully".to_string(),
        data: project,
    }))
}

/// Irreversible; the caller has to pass `confirm=true`.
#[instrument(name = "Delete Project", skip(store, _session))]
#[delete("/{project_id}")]
pub async fn delete_project(
    store: web::Data<KvStore>,
    _session: AdminSession,
    path: web::Path<String>,
    confirmation: web::Query<DeleteConfirmation>,
) -> Result<impl Responder, AppError> {
    if !confirmation.confirm {
        return Err(AppError::bad_request(
            "Deleting a project cannot be undone, confirm the deletion to proceed",
        ));
    }

    let project_id = path.into_inner();
    if !projects::delete_project(&store, &project_id).await? {
        return Err(AppError::not_found("Project not found"));
    }

    tracing::info!("Project {} deleted", project_id);

    Ok(HttpResponse::Ok().json(AppSuccessResponse {
        success: true,
        message: "Project deleted successfully".to_string(),
        data: project_id,
    }))
}

#[instrument(name = "Upload Project Images", skip(store, _session, payload))]
#[post("/{project_id}/images")]
pub async fn upload_project_images(
    store: web::Data<KvStore>,
    _session: AdminSession,
    path: web::Path<String>,
    payload: Multipart,
) -> Result<impl Responder, AppError> {
    let project_id = path.into_inner();
    if projects::fetch_project(&store, &project_id).await?.is_none() {
        return Err(AppError::not_found("Project not found"));
    }

    let images = read_images(payload).await?;
    let count = images.len();
    let project = projects::append_images(
        &store,
        &project_id,
        images.into_iter().map(|image| image.data_uri).collect(),
    )
    .await?
    .ok_or_else(|| AppError::not_found("Project not found"))?;

    Ok(HttpResponse::Ok().json(AppSuccessResponse {
        success: true,
        message: format!("{} image(s) added", count),
        data: project,
    }))
}

#[instrument(name = "Delete Project Image", skip(store, _session))]
#[delete("/{project_id}/images/{index}")]
pub async fn delete_project_image(
    store: web::Data<KvStore>,
    _session: AdminSession,
    path: web::Path<(String, usize)>,
) -> Result<impl Responder, AppError> {
    let (project_id, index) = path.into_inner();

    let project = match projects::remove_image(&store, &project_id, index).await? {
        ImageRemoval::Removed(project) => project,
        ImageRemoval::ProjectNotFound => return Err(AppError::not_found("Project not found")),
        ImageRemoval::ImageNotFound => return Err(AppError::not_found("Image not found")),
    };

    Ok(HttpResponse::Ok().json(AppSuccessResponse {
        success: true,
        message: "Image removed".to_string(),
        data: project,
    }))
}
