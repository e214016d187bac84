use thiserror::Error;

use barcode_creator::ValidationFailure;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Usage(ValidationFailure),

    #[error("{0}")]
    Args(#[from] clap::Error),

    #[error("{0}")]
    Config(barcode_creator::Error),

    #[error("{0}")]
    Render(#[from] barcode_creator::Error),
}

impl AppError {
    /// `--version` is the only clap outcome that is not an error.
    pub fn is_version(&self) -> bool {
        matches!(self, AppError::Args(e) if e.kind() == clap::error::ErrorKind::DisplayVersion)
    }

    /// 0 for `--version`, 1 for anything the user can fix by re-invoking,
    /// 2 for render and I/O failures.
    pub fn exit_code(&self) -> u8 {
        match self {
            _ if self.is_version() => 0,
            AppError::Usage(_) | AppError::Args(_) => 1,
            AppError::Config(_) | AppError::Render(_) => 2,
        }
    }
}
