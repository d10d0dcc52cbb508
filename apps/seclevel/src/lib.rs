//! # Seclevel Library
//!
//! This library exposes the seclevel modules for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod cli;
pub mod client;
pub mod config;
pub mod controller;
pub mod store;

// Re-export seclevel_core for convenience
pub use seclevel_core;
