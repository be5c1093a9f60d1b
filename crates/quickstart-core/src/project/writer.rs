//! Directory creation and file writing

use crate::project::layout::ProjectLayout;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// Create every directory of the layout, tolerating ones that exist
pub async fn create_directories(layout: &ProjectLayout) -> Result<()> {
    for dir in layout.directories() {
        fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(())
}

/// Write text as UTF-8 bytes
pub async fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content.as_bytes())
        .await
        .with_context(|| format!("Failed to write file: {}", path.display()))
}
