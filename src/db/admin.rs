use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use secrecy::{ExposeSecret, Secret};

use crate::core::{AppError, KvStore, StoreError};
use crate::models::admin::{DashboardOverview, LoginOutcome};
use crate::models::projects::ProjectStatusKind;

use super::{messages, projects, volunteers, ADMIN_LOGGED_IN_KEY, ADMIN_PASSWORD_KEY};

pub async fn is_logged_in(store: &KvStore) -> Result<bool, StoreError> {
    store.get_or(ADMIN_LOGGED_IN_KEY, false).await
}

pub async fn log_out(store: &KvStore) -> Result<(), StoreError> {
    store.delete(ADMIN_LOGGED_IN_KEY).await?;
    Ok(())
}

fn hash_password(password: &Secret<String>) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.expose_secret().as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AppError::internal_error("Failed to hash password"))
}

fn verify_password(password: &Secret<String>, stored_hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(stored_hash).map_err(|e| {
        tracing::error!("Stored admin password hash is unreadable: {:?}", e);
        AppError::internal_error("Invalid stored password")
    })?;
    Ok(Argon2::default()
        .verify_password(password.expose_secret().as_bytes(), &parsed_hash)
        .is_ok())
}

/// Checks the admin password. With no password stored yet, the submitted one
/// becomes the password; an empty stored value counts as none. Returns `None`
/// on a mismatch, in which case the logged-in flag is left as it was.
pub async fn authenticate(
    store: &KvStore,
    password: &Secret<String>,
) -> Result<Option<LoginOutcome>, AppError> {
    if password.expose_secret().is_empty() {
        return Err(AppError::bad_request("Password is required"));
    }
    let stored_hash: Option<String> = store
        .get::<String>(ADMIN_PASSWORD_KEY)
        .await?
        .filter(|hash| !hash.is_empty());

    let outcome = match stored_hash {
        None => {
            let hash = hash_password(password)?;
            store.set(ADMIN_PASSWORD_KEY, &hash).await?;
            tracing::info!("Admin password created on first login");
            LoginOutcome::PasswordCreated
        }
        Some(hash) if verify_password(password, &hash)? => LoginOutcome::LoggedIn,
        Some(_) => return Ok(None),
    };

    store.set(ADMIN_LOGGED_IN_KEY, &true).await?;
    Ok(Some(outcome))
}

pub async fn dashboard_overview(store: &KvStore) -> Result<DashboardOverview, StoreError> {
    let projects = projects::fetch_projects(store).await?;
    let volunteers = volunteers::fetch_applications(store).await?;
    let messages = messages::fetch_messages(store).await?;

    Ok(DashboardOverview {
        volunteers: volunteers.len(),
        messages: messages.len(),
        ongoing_projects: projects.iter().filter(|p| p.is(ProjectStatusKind::Ongoing)).count(),
        completed_projects: projects
            .iter()
            .filter(|p| p.is(ProjectStatusKind::Completed))
            .count(),
        total_projects: projects.len(),
    })
}
