//! # ft-core
//!
//! Core types and error definitions for feiertage-rs.
//!
//! This crate provides the building blocks shared by the other crates in the
//! workspace: the error hierarchy, the `ensure!` macro, the [`Settings`]
//! value consulted when rolling dates forward, and a few integer aliases.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Tunable limits for date adjustment.
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Signed integer used for month and week offsets and raw form values.
pub type Integer = i32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::Settings;
