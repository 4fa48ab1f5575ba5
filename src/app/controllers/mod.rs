//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the UI:
//! - Download workflow management

pub mod download;
