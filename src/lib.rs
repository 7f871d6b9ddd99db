//! SCOUT — Domain Acquisition Intelligence
//!
//! Library crate exposing all modules for use by integration tests
//! and the binary entry point.

pub mod config;
pub mod error;
pub mod types;
pub mod providers;
pub mod scoring;
pub mod engine;
