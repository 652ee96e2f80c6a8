//! Exported drawings and saving them to disk.

use crate::draw::{SurfaceError, png_data_url};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name every export is offered under.
pub const EXPORT_FILE_NAME: &str = "drawing.png";

/// Errors that can occur while exporting the canvas.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to encode canvas: {0}")]
    Encode(#[from] SurfaceError),

    #[error("Failed to save drawing: {0}")]
    Save(#[from] std::io::Error),
}

/// A PNG snapshot of the canvas, ready to be downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedImage {
    file_name: &'static str,
    png: Vec<u8>,
}

impl ExportedImage {
    pub fn new(png: Vec<u8>) -> Self {
        Self {
            file_name: EXPORT_FILE_NAME,
            png,
        }
    }

    pub fn file_name(&self) -> &str {
        self.file_name
    }

    pub fn png(&self) -> &[u8] {
        &self.png
    }

    /// `data:image/png;base64,...` URL suitable for a download link.
    pub fn to_data_url(&self) -> String {
        png_data_url(&self.png)
    }

    /// Writes the image as `drawing.png` inside `directory`, creating the
    /// directory if needed. An existing file is overwritten.
    ///
    /// # Returns
    /// Path to the saved file
    pub fn save_in(&self, directory: &Path) -> Result<PathBuf, ExportError> {
        let directory = ensure_directory_exists(directory)?;
        let file_path = directory.join(self.file_name);

        log::info!(
            "Saving drawing to: {} ({} bytes)",
            file_path.display(),
            self.png.len()
        );
        fs::write(&file_path, &self.png)?;

        let written_size = fs::metadata(&file_path)?.len();
        log::debug!("File written: {} bytes", written_size);

        Ok(file_path)
    }
}

/// Ensure the export directory exists, creating it if necessary.
///
/// # Returns
/// The canonicalized path to the directory
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
