use std::{path::{Path, PathBuf}, sync::Arc};

use async_trait::async_trait;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::storage::json_list_store::{JsonListStore, Mutation};
use super::entry::MailEntry;
use super::repository::MailRepository;

/// File-backed mail store.
/// Every call works on the whole persisted collection; mutations rewrite it.
#[derive(Clone)]
pub struct MailStore {
    store: Arc<JsonListStore<MailEntry>>,
}

impl MailStore {
    /// Initialize the store from the given file path. The file is created on first write.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let store = JsonListStore::<MailEntry>::new(path).await?;
        Ok(Arc::new(Self { store }))
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// All stored entries, in insertion order. Empty when nothing was saved yet.
    pub async fn load(&self) -> Result<Vec<MailEntry>, ServiceError> {
        self.store.load().await
    }

    /// Replace the persisted collection in full.
    pub async fn save(&self, entries: &[MailEntry]) -> Result<(), ServiceError> {
        self.store.save(entries).await
    }

    /// Append an entry under a freshly generated id and return that id.
    /// Any client-supplied `id` is replaced.
    pub async fn add(&self, entry: MailEntry) -> Result<String, ServiceError> {
        let id = Uuid::new_v4().to_string();
        let entry = entry.with_id(id.clone());
        let total = self
            .store
            .update(move |entries| {
                entries.push(entry);
                Mutation::Persist(entries.len())
            })
            .await?;
        info!(%id, total, "mail added");
        Ok(id)
    }

    /// Remove the first entry with the given id; returns whether one existed.
    pub async fn delete(&self, id: &str) -> Result<bool, ServiceError> {
        let removed = self
            .store
            .update(|entries| match entries.iter().position(|e| e.id() == Some(id)) {
                Some(idx) => {
                    entries.remove(idx);
                    Mutation::Persist(true)
                }
                None => Mutation::Skip(false),
            })
            .await?;
        if removed {
            info!(%id, "mail deleted");
        } else {
            debug!(%id, "delete: no such mail");
        }
        Ok(removed)
    }

    pub async fn get(&self, id: &str) -> Result<Option<MailEntry>, ServiceError> {
        let found = self
            .store
            .read(|entries| entries.into_iter().find(|e| e.id() == Some(id)))
            .await?;
        debug!(%id, found = found.is_some(), "get mail");
        Ok(found)
    }

    /// Entries whose `recipient` equals the argument exactly.
    pub async fn list_by_recipient(&self, recipient: &str) -> Result<Vec<MailEntry>, ServiceError> {
        let inbox = self
            .store
            .read(|entries| {
                entries
                    .into_iter()
                    .filter(|e| e.recipient() == Some(recipient))
                    .collect::<Vec<_>>()
            })
            .await?;
        debug!(%recipient, count = inbox.len(), "list inbox");
        Ok(inbox)
    }

    /// Entries whose `sender` equals the argument exactly.
    pub async fn list_by_sender(&self, sender: &str) -> Result<Vec<MailEntry>, ServiceError> {
        let sent = self
            .store
            .read(|entries| {
                entries
                    .into_iter()
                    .filter(|e| e.sender() == Some(sender))
                    .collect::<Vec<_>>()
            })
            .await?;
        debug!(%sender, count = sent.len(), "list sent");
        Ok(sent)
    }
}

#[async_trait]
impl MailRepository for MailStore {
    async fn add(&self, entry: MailEntry) -> Result<String, ServiceError> { self.add(entry).await }
    async fn delete(&self, id: &str) -> Result<bool, ServiceError> { self.delete(id).await }
    async fn get(&self, id: &str) -> Result<Option<MailEntry>, ServiceError> { self.get(id).await }
    async fn list_by_recipient(&self, recipient: &str) -> Result<Vec<MailEntry>, ServiceError> {
        self.list_by_recipient(recipient).await
    }
    async fn list_by_sender(&self, sender: &str) -> Result<Vec<MailEntry>, ServiceError> {
        self.list_by_sender(sender).await
    }
}
