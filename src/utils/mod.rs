//! Utility modules for DOM access and display formatting.
//!
//! - [`dom`] - safe, consistent access to browser APIs
//! - [`format`] - human-readable sizes and icon lookup

pub mod dom;
pub mod format;
