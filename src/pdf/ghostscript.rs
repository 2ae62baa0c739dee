use std::path::Path;
use std::process::{Command, Stdio};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::PdfFile;
use crate::analyzer::{CoverageIter, CoverageReader, CoverageSource};
use crate::config::{Config, ConfigValue};
use crate::error::{AppError, Result};

pub fn default_command() -> &'static str {
    if cfg!(windows) {
        "gswin64c"
    } else {
        "gs"
    }
}

/// Measures ink coverage with Ghostscript's `inkcov` output device.
pub struct GhostscriptInkcov {
    command: String,
}

impl Default for GhostscriptInkcov {
    fn default() -> Self {
        Self {
            command: default_command().to_string(),
        }
    }
}

impl GhostscriptInkcov {
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Renders `pdf` and returns the file holding the per-page coverage.
    pub fn render(&self, pdf: &PdfFile) -> Result<NamedTempFile> {
        let output = NamedTempFile::new()?;
        info!(
            command = %self.command,
            file = %pdf.filename,
            output = %output.path().display(),
            "Running inkcov renderer"
        );

        let result = Command::new(&self.command)
            .arg("-q")
            .arg("-o")
            .arg(output.path())
            .arg("-sDEVICE=inkcov")
            .arg(&pdf.path)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| AppError::RendererMissing {
                command: self.command.clone(),
                reason: e.to_string(),
            })?;

        let stderr = String::from_utf8_lossy(&result.stderr);
        if !result.status.success() {
            return Err(AppError::RendererFailed {
                command: self.command.clone(),
                status: result
                    .status
                    .code()
                    .map_or_else(|| "unknown".to_string(), |c| c.to_string()),
                stderr: stderr.trim().to_string(),
            });
        }
        if !stderr.trim().is_empty() {
            debug!(stderr = %stderr.trim(), "Renderer diagnostics");
        }

        Ok(output)
    }
}

impl CoverageSource for GhostscriptInkcov {
    fn id(&self) -> &'static str {
        "inkcov"
    }

    fn coverage(&self, pdf: &Path) -> Result<CoverageIter> {
        let pdf = PdfFile::open(pdf)?;
        let output = self.render(&pdf)?;
        Ok(Box::new(CoverageReader::from_temp_file(output)?))
    }

    fn apply_config(&mut self, config: &Config) {
        if let Some(command) = config
            .get_analyzer_value(self.id(), "command")
            .and_then(ConfigValue::as_str)
        {
            self.command = command.to_string();
        }
    }
}
