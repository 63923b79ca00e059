pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod validation;

pub use config::AppConfig;
pub use error::{AppError, Result};
