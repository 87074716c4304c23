//! Loads the submitted food photo from disk. No decoding happens here; the
//! collaborator receives the raw bytes, MIME-tagged from the file extension.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
    pub mime_type: &'static str,
}

pub fn mime_type_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "image/jpeg",
    }
}

pub async fn load_image(path: &Path) -> Result<ImageAttachment> {
    let bytes = fs::read(path)
        .await
        .with_context(|| format!("Failed to read image file '{}'", path.display()))?;
    log::debug!("loaded image '{}' ({} bytes)", path.display(), bytes.len());
    Ok(ImageAttachment {
        path: path.to_path_buf(),
        bytes,
        mime_type: mime_type_for(path),
    })
}
