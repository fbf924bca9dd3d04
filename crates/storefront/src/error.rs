//! Unified error handling.
//!
//! Domain outcomes such as a duplicate add or an out-of-range remove are not
//! errors; they come back as [`AddOutcome`](crate::cart::AddOutcome) and
//! [`RemoveOutcome`](crate::cart::RemoveOutcome) values. The types here cover
//! malformed input and infrastructure failures.

use thiserror::Error;

use crate::cart::StorageError;
use crate::config::ConfigError;
use crate::order::OrderError;
use crate::render::RenderError;

/// Errors from Cart Store operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// Item or index supplied by the page is malformed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Durable storage could not be read or written.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Application-level error type for the storefront page component.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Cart operation failed.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Order link could not be built.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    /// Cart fragments could not be rendered.
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        Self::Cart(CartError::Storage(err))
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
