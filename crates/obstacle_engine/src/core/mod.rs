//! # Core Module
//!
//! Shared abstractions used by every registry component.
//!
//! ## Organization
//!
//! - **Config**: Service configuration (logging, registry policy)
//! - **Foundation**: Low-level utilities (math, locks, logging)

pub mod config;

// Re-export foundation modules for convenience
pub use crate::foundation;

// Re-export commonly used config types
pub use config::{
    ServiceConfig,
    RegistryConfig,
    Config,
    ConfigError,
};
