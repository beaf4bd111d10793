//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the registry:
//! - Math types and operations
//! - Lock helpers for the shared registries
//! - Logging utilities

pub mod math;
pub mod sync;
pub mod logging;
