//! Math types used by the shell.
//!
//! Touch and cursor positions are carried as [`Vec2`] (logical pixels, origin at
//! the top-left corner of the window). This module re-exports the [`glam`] types
//! so downstream crates do not need a direct dependency.
//!
//! ```
//! use basalt_core::math::Vec2;
//!
//! let start = Vec2::new(10.0, 10.0);
//! let now = Vec2::new(13.0, 14.0);
//! assert_eq!(start.distance(now), 5.0);
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::{IVec2, UVec2, Vec2};
