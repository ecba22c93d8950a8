//! Prelude module for calendar_offset.
//!
//! Re-exports the derive_more macros used across the crate.

pub use derive_more::Display;
