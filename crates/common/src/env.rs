//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::Path;

use tracing::info;

/// Ensure the directory holding the given data file exists.
pub async fn ensure_data_dir(data_file: &str) -> anyhow::Result<()> {
    let parent = match Path::new(data_file).parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => return Ok(()),
    };
    if tokio::fs::metadata(parent).await.is_err() {
        info!(data_dir = %parent.display(), "creating data directory");
    }
    tokio::fs::create_dir_all(parent)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_missing_parent() -> anyhow::Result<()> {
        let dir = std::env::temp_dir().join(format!("mail_env_{}", std::process::id()));
        let file = dir.join("nested").join("mail_db.json");
        ensure_data_dir(&file.to_string_lossy()).await?;
        assert!(tokio::fs::metadata(dir.join("nested")).await?.is_dir());
        let _ = tokio::fs::remove_dir_all(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn bare_file_name_is_noop() -> anyhow::Result<()> {
        ensure_data_dir("mail_db.json").await?;
        Ok(())
    }
}
