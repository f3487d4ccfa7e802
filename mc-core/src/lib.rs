//! MediaCloud Core - Foundation types, error handling, configuration, and logging.
//!
//! This crate provides the shared foundation used by the MediaCloud client crates:
//! - Client and logging configuration loaded from TOML
//! - The error type every client operation returns
//! - Structured logging with tracing
//! - Platform directory lookup and common constants

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod platform;

// Re-export commonly used items at the crate root
pub use config::{AppConfig, ClientConfig, LoggingConfig};
pub use error::{McError, McResult};
pub use logging::init_logging;
pub use platform::Platform;
