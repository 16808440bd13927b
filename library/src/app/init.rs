//! Application initialization error types

use thiserror::Error;
use wayrest_core::StoreError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Event loop error: {0}")]
    EventLoop(String),

    #[error("Settings error: {0}")]
    Settings(#[from] StoreError),
}
