//! Basalt Core
//!
//! Shared building blocks for the Basalt application shell: integer window
//! geometry, math re-exports, logging setup, profiling hooks and launch
//! configuration.

pub mod config;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
