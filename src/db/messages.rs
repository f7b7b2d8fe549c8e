use crate::core::{KvStore, StoreError};
use crate::models::messages::{sort_newest_first, ContactMessage};

use super::MESSAGES_KEY;

pub async fn fetch_messages(store: &KvStore) -> Result<Vec<ContactMessage>, StoreError> {
    store.get_or(MESSAGES_KEY, Vec::new()).await
}

/// Matching messages, newest first.
pub async fn search_messages(
    store: &KvStore,
    term: Option<&str>,
) -> Result<Vec<ContactMessage>, StoreError> {
    let mut messages: Vec<ContactMessage> = fetch_messages(store)
        .await?
        .into_iter()
        .filter(|m| term.map_or(true, |term| m.matches(term)))
        .collect();
    sort_newest_first(&mut messages);
    Ok(messages)
}

pub async fn append_message(store: &KvStore, message: &ContactMessage) -> Result<(), StoreError> {
    let mut messages = fetch_messages(store).await?;
    messages.push(message.clone());
    store.set(MESSAGES_KEY, &messages).await
}

pub async fn delete_message(store: &KvStore, id: &str) -> Result<bool, StoreError> {
    let mut messages = fetch_messages(store).await?;
    let before = messages.len();
    messages.retain(|m| m.id != id);
    if messages.len() == before {
        return Ok(false);
    }
    store.set(MESSAGES_KEY, &messages).await?;
    Ok(true)
}
