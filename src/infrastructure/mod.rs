//! Infrastructure layer providing external service integrations.
//!
//! Storage, the simulated email and directory services, the clipboard,
//! CSV export, and configuration loading.

pub mod persistence;
pub mod verification;
pub mod directory;
pub mod clipboard;
pub mod export;
pub mod config;

pub use persistence::*;
pub use verification::*;
pub use directory::*;
pub use clipboard::*;
pub use export::*;
pub use config::{ConfigError, Settings, load_settings};
