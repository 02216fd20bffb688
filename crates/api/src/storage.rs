//! Local-disk storage for uploaded images.
//!
//! Stored paths are relative to the media root (`gallery/<uuid>.jpg`) and are
//! what the database keeps. The same root is served read-only under `/media`.

use std::path::{Component, Path, PathBuf};

use hotel_core::media;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
    base_url: String,
}

impl MediaStore {
    pub fn new(root: PathBuf, base_url: String) -> Self {
        Self { root, base_url }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Public URL for a stored relative path.
    pub fn url(&self, stored_path: &str) -> String {
        media::public_url(&self.base_url, stored_path)
    }

    /// Write an upload into `folder`, returning its stored relative path.
    ///
    /// `field` names the form field the file came from; an unsupported
    /// extension is reported against it.
    pub async fn save(
        &self,
        folder: &str,
        field: &'static str,
        file_name: &str,
        data: &[u8],
    ) -> AppResult<String> {
        let stored = media::stored_image_path(folder, field, file_name)?;
        let path = self.root.join(&stored);

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::InternalError(e.to_string()))?;
        }
        tokio::fs::write(&path, data)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        tracing::debug!(path = %stored, bytes = data.len(), "Stored upload");
        Ok(stored)
    }

    /// Delete a stored file. Missing files and I/O failures are logged, not returned:
    /// the owning row is already gone by the time this runs.
    pub async fn remove(&self, stored_path: &str) {
        let Some(path) = self.resolve(stored_path) else {
            tracing::warn!(path = %stored_path, "Refusing to delete path outside media root");
            return;
        };

        match tokio::fs::remove_file(&path).await {
            Ok(()) => tracing::debug!(path = %stored_path, "Removed stored file"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %stored_path, "Stored file already missing");
            }
            Err(e) => {
                tracing::warn!(path = %stored_path, error = %e, "Failed to remove stored file");
            }
        }
    }

    /// Delete several stored files.
    pub async fn remove_all<I, S>(&self, stored_paths: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for path in stored_paths {
            self.remove(path.as_ref()).await;
        }
    }

    /// Map a stored relative path onto the media root, rejecting anything that
    /// could escape it.
    fn resolve(&self, stored_path: &str) -> Option<PathBuf> {
        let relative = Path::new(stored_path);
        let safe = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        safe.then(|| self.root.join(relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(dir: &tempfile::TempDir) -> MediaStore {
        MediaStore::new(dir.path().to_path_buf(), "http://localhost:3000/media".into())
    }

    #[tokio::test]
    async fn save_writes_file_under_folder() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);

        let stored = store
            .save("gallery", "image", "lobby.PNG", b"png-bytes")
            .await
            .unwrap();

        assert!(stored.starts_with("gallery/"));
        assert!(stored.ends_with(".png"));
        let on_disk = tokio::fs::read(dir.path().join(&stored)).await.unwrap();
        assert_eq!(on_disk, b"png-bytes");
    }

    #[tokio::test]
    async fn save_rejects_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let err = store(&dir)
            .save("food", "image", "menu.pdf", b"%PDF")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Core(_)));
        assert!(!dir.path().join("food").exists());
    }

    #[tokio::test]
    async fn remove_deletes_file_and_tolerates_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        let stored = store.save("food", "image", "tea.jpg", b"x").await.unwrap();

        store.remove(&stored).await;
        assert!(!dir.path().join(&stored).exists());

        // Second delete is a no-op.
        store.remove(&stored).await;
    }

    #[test]
    fn resolve_rejects_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        assert!(store.resolve("../etc/passwd").is_none());
        assert!(store.resolve("/etc/passwd").is_none());
        assert!(store.resolve("gallery/a.jpg").is_some());
    }

    #[test]
    fn url_joins_base_and_path() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            store(&dir).url("gallery/a.jpg"),
            "http://localhost:3000/media/gallery/a.jpg"
        );
    }
}
