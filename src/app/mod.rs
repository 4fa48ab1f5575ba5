//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Settings, Messages)
//! - `controllers/` - Orchestration (DownloadController)
//! - `services/` - Business operations (download client)
//! - `infrastructure/` - External integrations (platform detection, error)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use domain::{AppSettings, Message, ThemeMode};
pub use infrastructure::platform::detect_system_dark_mode;
pub use services::downloader::{DownloadClient, DownloadOutcome};
