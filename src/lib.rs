//! snapfx - filter compositing for a mobile photo/video editor
//!
//! The color-matrix engine lives in the `filter-matrix` crate. This crate
//! adds configuration, editing sessions and the command-line tool.
//! This library exposes modules for integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod services;
