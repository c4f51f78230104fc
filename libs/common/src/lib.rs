//! byteconv basic library
//!
//! Provides functions shared by byteconv tools, including:
//! - logging initialisation
//! - layered configuration loading

pub mod config;
pub mod error;
pub mod logging;

pub use config::load_config;
pub use error::{Error, Result};
pub use logging::{init_logging, LogConfig, LogFormat};
