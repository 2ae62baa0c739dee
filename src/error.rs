use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{path} does not exist or is not a file")]
    FileNotFound { path: String },

    #[error("{path} is not readable")]
    FileUnreadable { path: String },

    #[error("Page price was specified for color but not for B/W pages")]
    ColorPriceWithoutBw,

    #[error("Page price was specified for B/W but not for color pages")]
    BwPriceWithoutColor,

    #[error("Could not run renderer '{command}' (is Ghostscript installed and on PATH?): {reason}")]
    RendererMissing { command: String, reason: String },

    #[error("Renderer '{command}' failed (exit code {status}): {stderr}")]
    RendererFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
