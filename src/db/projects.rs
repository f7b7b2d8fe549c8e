use chrono::Utc;
use uuid::Uuid;

use crate::core::{KvStore, StoreError};
use crate::models::projects::{Project, ProjectStatusKind, ValidProject};

use super::PROJECTS_KEY;

pub async fn fetch_projects(store: &KvStore) -> Result<Vec<Project>, StoreError> {
    store.get_or(PROJECTS_KEY, Vec::new()).await
}

pub async fn save_projects(store: &KvStore, projects: &[Project]) -> Result<(), StoreError> {
    store.set(PROJECTS_KEY, projects).await
}

/// Projects in stored order, optionally narrowed to one status.
pub async fn fetch_projects_by_status(
    store: &KvStore,
    status: Option<ProjectStatusKind>,
) -> Result<Vec<Project>, StoreError> {
    let projects = fetch_projects(store).await?;
    Ok(match status {
        Some(kind) => projects.into_iter().filter(|p| p.is(kind)).collect(),
        None => projects,
    })
}

pub async fn fetch_project(store: &KvStore, id: &str) -> Result<Option<Project>, StoreError> {
    let projects = fetch_projects(store).await?;
    Ok(projects.into_iter().find(|p| p.id == id))
}

pub async fn create_project(store: &KvStore, input: ValidProject) -> Result<Project, StoreError> {
    let mut projects = fetch_projects(store).await?;
    let project = Project {
        id: Uuid::new_v4().to_string(),
        title: input.title,
        description: input.description,
        status: input.status,
        images: Vec::new(),
        created_at: Utc::now(),
    };
    projects.push(project.clone());
    save_projects(store, &projects).await?;
    Ok(project)
}

/// Overwrites title, description and status; id, images and creation time stay.
pub async fn update_project(
    store: &KvStore,
    id: &str,
    input: ValidProject,
) -> Result<Option<Project>, StoreError> {
    let mut projects = fetch_projects(store).await?;
    let Some(project) = projects.iter_mut().find(|p| p.id == id) else {
        return Ok(None);
    };
    project.title = input.title;
    project.description = input.description;
    project.status = input.status;
    let updated = project.clone();

    save_projects(store, &projects).await?;
    Ok(Some(updated))
}

/// Returns false when no project has this id.
pub async fn delete_project(store: &KvStore, id: &str) -> Result<bool, StoreError> {
    let mut projects = fetch_projects(store).await?;
    let before = projects.len();
    projects.retain(|p| p.id != id);
    if projects.len() == before {
        return Ok(false);
    }
    save_projects(store, &projects).await?;
    Ok(true)
}

pub async fn append_images(
    store: &KvStore,
    id: &str,
    images: Vec<String>,
) -> Result<Option<Project>, StoreError> {
    let mut projects = fetch_projects(store).await?;
    let Some(project) = projects.iter_mut().find(|p| p.id == id) else {
        return Ok(None);
    };
    project.images.extend(images);
    let updated = project.clone();

    save_projects(store, &projects).await?;
    Ok(Some(updated))
}

#[derive(Debug, PartialEq, Eq)]
pub enum ImageRemoval {
    Removed(Project),
    ProjectNotFound,
    ImageNotFound,
}

pub async fn remove_image(store: &KvStore, id: &str, index: usize) -> Result<ImageRemoval, StoreError> {
    let mut projects = fetch_projects(store).await?;
    let Some(project) = projects.iter_mut().find(|p| p.id == id) else {
        return Ok(ImageRemoval::ProjectNotFound);
    };
    if index >= project.images.len() {
        return Ok(ImageRemoval::ImageNotFound);
    }
    project.images.remove(index);
    let updated = project.clone();

    save_projects(store, &projects).await?;
    Ok(ImageRemoval::Removed(updated))
}
