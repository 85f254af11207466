use std::{
    io::ErrorKind,
    marker::PhantomData,
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::{de::DeserializeOwned, Serialize};
use tokio::{fs, sync::RwLock};

use crate::errors::ServiceError;

/// Result of an [`JsonListStore::update`] closure.
pub enum Mutation<R> {
    /// The list changed and must be written back.
    Persist(R),
    /// Nothing changed; the file is left untouched.
    Skip(R),
}

/// Generic JSON file-backed list store.
///
/// Keeps no in-memory copy: every call reads the whole file, and every
/// mutation rewrites it in full. A single `RwLock` serialises writers so a
/// load-modify-save sequence is never interleaved with another one.
pub struct JsonListStore<T> {
    lock: RwLock<()>,
    file_path: PathBuf,
    _item: PhantomData<fn() -> T>,
}

impl<T> JsonListStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    /// Initialize the store for a path. The parent directory is created if
    /// missing; the file itself is only written on the first save.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        Ok(Arc::new(Self { lock: RwLock::new(()), file_path, _item: PhantomData }))
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    async fn load_unlocked(&self) -> Result<Vec<T>, ServiceError> {
        match fs::read(&self.file_path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save_unlocked(&self, items: &[T]) -> Result<(), ServiceError> {
        let mut data = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut data, formatter);
        items.serialize(&mut ser)?;
        fs::write(&self.file_path, data).await?;
        Ok(())
    }

    /// Read the full list. A missing file is an empty list.
    pub async fn load(&self) -> Result<Vec<T>, ServiceError> {
        let _guard = self.lock.read().await;
        self.load_unlocked().await
    }

    /// Overwrite the file with the given list.
    pub async fn save(&self, items: &[T]) -> Result<(), ServiceError> {
        let _guard = self.lock.write().await;
        self.save_unlocked(items).await
    }

    /// Load the list and hand it to a read-only closure.
    pub async fn read<F, R>(&self, f: F) -> Result<R, ServiceError>
    where
        F: FnOnce(Vec<T>) -> R + Send,
    {
        let _guard = self.lock.read().await;
        let items = self.load_unlocked().await?;
        Ok(f(items))
    }

    /// Load, mutate and (if the closure asks for it) save, under the write lock.
    pub async fn update<F, R>(&self, f: F) -> Result<R, ServiceError>
    where
        F: FnOnce(&mut Vec<T>) -> Mutation<R> + Send,
        R: Send,
    {
        let _guard = self.lock.write().await;
        let mut items = self.load_unlocked().await?;
        match f(&mut items) {
            Mutation::Persist(out) => {
                self.save_unlocked(&items).await?;
                Ok(out)
            }
            Mutation::Skip(out) => Ok(out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn tmp_path() -> PathBuf {
        std::env::temp_dir().join(format!("json_list_store_{}.json", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn missing_file_loads_empty() -> Result<(), anyhow::Error> {
        let tmp = tmp_path();
        let store = JsonListStore::<String>::new(&tmp).await?;
        assert!(store.load().await?.is_empty());
        // loading must not create the file
        assert!(fs::metadata(&tmp).await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn save_writes_indented_array() -> Result<(), anyhow::Error> {
        let tmp = tmp_path();
        let store = JsonListStore::<BTreeMap<String, String>>::new(&tmp).await?;
        let mut item = BTreeMap::new();
        item.insert("sender".to_string(), "alice".to_string());
        store.save(&[item.clone()]).await?;

        let text = fs::read_to_string(&tmp).await?;
        assert_eq!(text, "[\n    {\n        \"sender\": \"alice\"\n    }\n]");
        assert_eq!(store.load().await?, vec![item]);

        let _ = fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn update_skip_leaves_file_untouched() -> Result<(), anyhow::Error> {
        let tmp = tmp_path();
        let store = JsonListStore::<u32>::new(&tmp).await?;

        let len = store.update(|items| Mutation::Skip(items.len())).await?;
        assert_eq!(len, 0);
        assert!(fs::metadata(&tmp).await.is_err());

        store
            .update(|items| {
                items.extend([1, 2, 3]);
                Mutation::Persist(())
            })
            .await?;
        let sum = store.read(|items| items.iter().sum::<u32>()).await?;
        assert_eq!(sum, 6);

        let _ = fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn malformed_file_is_an_error() -> Result<(), anyhow::Error> {
        let tmp = tmp_path();
        fs::write(&tmp, b"{not json").await?;
        let store = JsonListStore::<String>::new(&tmp).await?;
        assert!(matches!(store.load().await, Err(ServiceError::Serde(_))));
        let _ = fs::remove_file(&tmp).await;
        Ok(())
    }
}
