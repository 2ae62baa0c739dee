use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};

pub mod ghostscript;

pub use ghostscript::GhostscriptInkcov;

/// A PDF on disk that has been checked to exist and be readable.
#[derive(Debug, Clone)]
pub struct PdfFile {
    pub path: PathBuf,
    pub filename: String,
}

impl PdfFile {
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(AppError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        File::open(path).map_err(|e| open_error(path, e))?;

        let filename = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "Unknown".to_string());

        Ok(Self {
            path: path.to_path_buf(),
            filename,
        })
    }
}

fn open_error(path: &Path, err: io::Error) -> AppError {
    match err.kind() {
        io::ErrorKind::NotFound => AppError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => AppError::FileUnreadable {
            path: path.display().to_string(),
        },
    }
}
