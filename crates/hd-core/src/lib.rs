//! # hd-core
//!
//! Core types, settings, and error definitions for hdate-rs.
//!
//! This crate provides the building blocks shared by the other crates in the
//! workspace: the Julian-day-number alias, the error hierarchy with its
//! `ensure!` macro, and the observance [`Settings`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Observance settings (Israel / Diaspora, output language).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Julian day number: integer day count from the Julian-period epoch.
///
/// The canonical key of every calendar date.
pub type Jdn = i32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{Language, Settings};
