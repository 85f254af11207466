use async_trait::async_trait;

use crate::errors::ServiceError;
use super::entry::MailEntry;

/// Trait abstraction for mail storage as seen by the HTTP layer.
/// Not-found is a normal outcome (`None` / `false`), never an error.
#[async_trait]
pub trait MailRepository: Send + Sync {
    async fn add(&self, entry: MailEntry) -> Result<String, ServiceError>;
    async fn delete(&self, id: &str) -> Result<bool, ServiceError>;
    async fn get(&self, id: &str) -> Result<Option<MailEntry>, ServiceError>;
    async fn list_by_recipient(&self, recipient: &str) -> Result<Vec<MailEntry>, ServiceError>;
    async fn list_by_sender(&self, sender: &str) -> Result<Vec<MailEntry>, ServiceError>;
}
