//! Infrastructure layer.
//!
//! Configuration and wiring. No business logic lives here.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root for adapters
//! - [`config`] - Configuration loading and validation

pub mod bootstrap;
pub mod config;
