//! # App Error Type
//!
//! Unified error type for the CLI.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the CLI                                │
//! │                                                                         │
//! │  ConfigError ─── bad --config / empty path ──────┐                      │
//! │                                                  │                      │
//! │  DataError ───── missing file / bad JSON ────────┼──► AppError          │
//! │                                                  │       │              │
//! │  CoreError ───── negative qty / unknown code ────┘       ▼              │
//! │                                                   stderr + exit code    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each variant carries a machine-readable [`ErrorCode`] next to its
//! human-readable message.

use thiserror::Error;

use checkout_core::CoreError;
use checkout_data::DataError;

use crate::config::ConfigError;

/// Error codes for CLI failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Line item references an unknown product.
    NotFound,

    /// Line or rule failed validation.
    ValidationError,

    /// Input file missing, unreadable or malformed.
    DataLoadError,

    /// Configuration file or value is invalid.
    ConfigError,

    /// Writing the summary failed.
    IoError,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::DataLoadError => "DATA_LOAD_ERROR",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::IoError => "IO_ERROR",
        }
    }
}

/// Anything that can stop a checkout run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Pricing(#[from] CoreError),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl AppError {
    /// Machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Pricing(CoreError::ProductNotFound(_)) => ErrorCode::NotFound,
            AppError::Pricing(_) => ErrorCode::ValidationError,
            AppError::Data(_) => ErrorCode::DataLoadError,
            AppError::Config(_) => ErrorCode::ConfigError,
            AppError::Output(_) => ErrorCode::IoError,
        }
    }

    /// Process exit code. Configuration problems exit 2, everything else 1.
    pub fn exit_code(&self) -> u8 {
        match self.code() {
            ErrorCode::ConfigError => 2,
            _ => 1,
        }
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
