use crate::core::{KvStore, StoreError};
use crate::models::settings::SiteSettings;

use super::SITE_SETTINGS_KEY;

pub async fn fetch_site_settings(store: &KvStore) -> Result<SiteSettings, StoreError> {
    store.get_or(SITE_SETTINGS_KEY, SiteSettings::default()).await
}

/// Replaces the whole record.
pub async fn save_site_settings(store: &KvStore, settings: &SiteSettings) -> Result<(), StoreError> {
    store.set(SITE_SETTINGS_KEY, settings).await
}
