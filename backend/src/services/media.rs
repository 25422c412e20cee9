//! Local media store for uploaded meal photos
//!
//! Decodes base64 data URIs and writes them under a configured directory,
//! returning the public URL the stored image is served from.

use crate::config::StorageConfig;
use crate::error::ApiError;
use crate::services::analysis::split_data_uri;
use anyhow::Context;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::PathBuf;
use tracing::debug;
use uuid::Uuid;

/// Filesystem-backed image store
pub struct MediaStore {
    root_dir: PathBuf,
    public_base_url: String,
}

impl MediaStore {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            root_dir: PathBuf::from(&config.root_dir),
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Decode and persist a data URI, returning the public URL
    ///
    /// The filename embeds the owning user's ID so stored images can be
    /// traced back without a lookup table.
    pub async fn store_data_uri(&self, user_id: Uuid, data_uri: &str) -> Result<String, ApiError> {
        let (mime, payload) = split_data_uri(data_uri)?;

        let bytes = STANDARD
            .decode(payload)
            .map_err(|e| ApiError::BadRequest(format!("invalid base64 image data: {e}")))?;

        let file_name = format!("{}-{}.{}", user_id, Uuid::new_v4(), extension_for(mime));

        tokio::fs::create_dir_all(&self.root_dir)
            .await
            .context("creating media directory")?;
        let path = self.root_dir.join(&file_name);
        tokio::fs::write(&path, &bytes)
            .await
            .with_context(|| format!("writing media file {}", path.display()))?;

        debug!(file = %file_name, bytes = bytes.len(), "stored meal photo");
        Ok(format!("{}/{}", self.public_base_url, file_name))
    }
}

fn extension_for(mime: &str) -> &'static str {
    match mime {
        "image/png" => "png",
        "image/jpeg" | "image/jpg" => "jpg",
        "image/webp" => "webp",
        "image/gif" => "gif",
        _ => "bin",
    }
}
