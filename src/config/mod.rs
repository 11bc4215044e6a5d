//! Configuration module for creatorlink
//!
//! This module provides configuration management including:
//! - Platform config path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::Settings;
