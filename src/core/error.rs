//! Error types for the enhancement layer.
//!
//! Everything here is advisory: failures are surfaced to the user as a
//! notification (or degrade silently for preference storage) and never
//! block the native submission path.

use thiserror::Error;

/// Preference store errors for localStorage-backed persistence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    /// localStorage not available (privacy mode, sandboxed frame).
    #[error("preference storage not available")]
    StorageUnavailable,
    /// The browser rejected the write (quota, privacy settings).
    #[error("failed to save preference")]
    SaveFailed,
}

/// Clipboard copy errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// The async Clipboard API is not exposed in this context.
    #[error("clipboard not available in this browser")]
    Unavailable,
    /// The platform denied the programmatic copy.
    #[error("failed to copy to clipboard")]
    CopyRejected,
}
