//! Prelude module for the dateop crate.
//!
//! Re-exports the derive macros used across modules.

#[allow(unused_imports)]
pub use derive_more::Display;
