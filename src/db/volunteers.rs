use crate::core::{KvStore, StoreError};
use crate::models::volunteers::VolunteerApplication;

use super::VOLUNTEERS_KEY;

pub async fn fetch_applications(store: &KvStore) -> Result<Vec<VolunteerApplication>, StoreError> {
    store.get_or(VOLUNTEERS_KEY, Vec::new()).await
}

pub async fn search_applications(
    store: &KvStore,
    term: Option<&str>,
) -> Result<Vec<VolunteerApplication>, StoreError> {
    let applications = fetch_applications(store).await?;
    Ok(match term {
        Some(term) => applications.into_iter().filter(|a| a.matches(term)).collect(),
        None => applications,
    })
}

pub async fn append_application(
    store: &KvStore,
    application: &VolunteerApplication,
) -> Result<(), StoreError> {
    let mut applications = fetch_applications(store).await?;
    applications.push(application.clone());
    store.set(VOLUNTEERS_KEY, &applications).await
}

pub async fn delete_application(store: &KvStore, id: &str) -> Result<bool, StoreError> {
    let mut applications = fetch_applications(store).await?;
    let before = applications.len();
    applications.retain(|a| a.id != id);
    if applications.len() == before {
        return Ok(false);
    }
    store.set(VOLUNTEERS_KEY, &applications).await?;
    Ok(true)
}
