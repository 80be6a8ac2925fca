//! # society-storage
//!
//! Local filesystem store for lost-and-found item images. Files are the
//! only blob content in the system; metadata in the database is
//! authoritative and file cleanup is best-effort.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use society_core::error::{AppError, ErrorKind};
use society_core::result::AppResult;

/// Web path prefix under which stored images are served.
const WEB_PREFIX: &str = "/uploads";

/// Subdirectory for lost-and-found images.
const LOSTFOUND_DIR: &str = "lostfound";

/// Stores uploaded images under a local root directory and addresses them
/// by their public web path (`/uploads/lostfound/<name>`).
#[derive(Debug, Clone)]
pub struct ImageStore {
    /// Root directory for all uploads.
    root: PathBuf,
}

impl ImageStore {
    /// Create a new image store rooted at the given path, creating the
    /// lost-and-found subdirectory if needed.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(root.join(LOSTFOUND_DIR))
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create upload root: {}", root.display()),
                    e,
                )
            })?;
        Ok(Self { root })
    }

    /// Return the filesystem root this store serves from (for static file
    /// serving).
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Save image bytes under a generated unique name, preserving the
    /// original file extension. Returns the public web path.
    pub async fn save_image(&self, original_name: &str, data: &[u8]) -> AppResult<String> {
        let ext = sanitized_extension(original_name);
        let file_name = match ext {
            Some(ext) => format!("image-{}.{ext}", Uuid::new_v4()),
            None => format!("image-{}", Uuid::new_v4()),
        };

        let full_path = self.root.join(LOSTFOUND_DIR).join(&file_name);
        fs::write(&full_path, data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write image: {}", full_path.display()),
                e,
            )
        })?;

        debug!(path = %full_path.display(), bytes = data.len(), "Stored image");
        Ok(format!("{WEB_PREFIX}/{LOSTFOUND_DIR}/{file_name}"))
    }

    /// Delete a stored image by its public web path.
    ///
    /// Callers deleting a database record treat a failure here as
    /// non-fatal: they log it and proceed with the record deletion.
    pub async fn delete_image(&self, web_path: &str) -> AppResult<()> {
        let full_path = self.resolve(web_path)?;
        fs::remove_file(&full_path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to delete image: {}", full_path.display()),
                e,
            )
        })?;

        debug!(path = %full_path.display(), "Deleted image");
        Ok(())
    }

    /// Resolve a public web path to a filesystem path inside the root,
    /// rejecting traversal outside the upload tree.
    fn resolve(&self, web_path: &str) -> AppResult<PathBuf> {
        let relative = web_path
            .strip_prefix(&format!("{WEB_PREFIX}/"))
            .ok_or_else(|| {
                AppError::validation(format!("Not an upload path: '{web_path}'"))
            })?;

        if relative.split('/').any(|seg| seg == ".." || seg.is_empty()) {
            return Err(AppError::validation(format!(
                "Invalid upload path: '{web_path}'"
            )));
        }

        Ok(self.root.join(relative))
    }
}

/// Extract a safe alphanumeric extension from an uploaded file name.
fn sanitized_extension(name: &str) -> Option<&str> {
    let ext = name.rsplit('.').next()?;
    if ext != name && !ext.is_empty() && ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric())
    {
        Some(ext)
    } else {
        None
    }
}
