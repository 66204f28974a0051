//! Application configuration.
//!
//! Centralizes the constants shared across the enhancement layer: the
//! upload validation policy, timing values, and the fixed element ids and
//! class names that form the contract with the server-rendered page.

use crate::core::validate::ValidationPolicy;

// =============================================================================
// Upload Validation Policy
// =============================================================================

/// Maximum accepted upload size in bytes (16 MiB).
pub const MAX_UPLOAD_SIZE: u64 = 16 * 1024 * 1024;

/// File extensions accepted for upload (matched case-insensitively).
pub const ALLOWED_EXTENSIONS: &[&str] = &[
    "txt", "pdf", "png", "jpg", "jpeg", "gif", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "zip",
    "rar",
];

/// The validation policy applied to every candidate file.
pub const UPLOAD_POLICY: ValidationPolicy = ValidationPolicy {
    max_size_bytes: MAX_UPLOAD_SIZE,
    allowed_extensions: ALLOWED_EXTENSIONS,
};

// =============================================================================
// Timing
// =============================================================================

/// Timer durations in milliseconds.
pub mod timing {
    /// Interval between simulated upload progress ticks.
    pub const PROGRESS_TICK_MS: u32 = 200;

    /// Delay before the upload form's native submission is triggered.
    pub const SUBMIT_DELAY_MS: u32 = 500;

    /// Fallback timeout restoring a submit button to its idle state.
    pub const BUTTON_RESET_MS: u32 = 10_000;

    /// Lifetime of a transient notification.
    pub const NOTIFICATION_DISMISS_MS: u32 = 3_000;

    /// Lifetime of server-rendered flash messages present at startup.
    pub const FLASH_DISMISS_MS: u32 = 5_000;
}

/// Upper bound on the simulated progress value; the remaining span belongs
/// to the real submission.
pub const PROGRESS_CAP_PERCENT: f64 = 90.0;

/// Largest per-tick progress increment in percentage points.
pub const PROGRESS_MAX_INCREMENT: f64 = 15.0;

// =============================================================================
// Page Contract
// =============================================================================

/// Element ids owned by the page markup.
pub mod element_ids {
    /// Drag-and-drop intake region.
    pub const DROP_ZONE: &str = "dropZone";
    /// Native file-selection input.
    pub const FILE_INPUT: &str = "file";
    /// Preview panel container.
    pub const FILE_PREVIEW: &str = "filePreview";
    /// Preview: file name field.
    pub const FILE_NAME: &str = "fileName";
    /// Preview: human-readable size field.
    pub const FILE_SIZE: &str = "fileSize";
    /// Preview: MIME type field.
    pub const FILE_TYPE: &str = "fileType";
    /// Preview: icon container.
    pub const FILE_ICON: &str = "fileIconPreview";
    /// Progress bar container.
    pub const UPLOAD_PROGRESS: &str = "uploadProgress";
    /// Progress bar fill element.
    pub const PROGRESS_BAR: &str = "progressBar";
    /// Progress percentage text.
    pub const PROGRESS_TEXT: &str = "progressText";
    /// Progress status line.
    pub const UPLOAD_STATUS: &str = "uploadStatus";
    /// Free-text search input for the file table.
    pub const SEARCH_INPUT: &str = "searchInput";
    /// Sort order select.
    pub const SORT_SELECT: &str = "sortSelect";
    /// Category filter select.
    pub const FILTER_SELECT: &str = "filterSelect";
    /// Theme toggle button.
    pub const THEME_TOGGLE: &str = "themeToggle";
    /// Theme toggle icon.
    pub const THEME_ICON: &str = "themeIcon";
    /// Upload form.
    pub const UPLOAD_FORM: &str = "uploadForm";
}

/// CSS class names the layer adds or removes.
pub mod css_classes {
    /// Classes applied to the drop zone while a drag hovers over it.
    pub const DROP_HIGHLIGHT: &[&str] = &["border-primary", "bg-light"];
    /// Utility class hiding an element.
    pub const HIDDEN: &str = "d-none";
    /// Body class enabling the dark theme.
    pub const DARK_THEME: &str = "dark-theme";
    /// Theme icon class shown in light mode.
    pub const ICON_MOON: &str = "bi-moon";
    /// Theme icon class shown in dark mode.
    pub const ICON_SUN: &str = "bi-sun";
}

/// Selector for the file table's row container.
pub const FILE_TABLE_BODY_SELECTOR: &str = "tbody";

/// Selector for the empty-state indicator shown when no rows survive.
pub const EMPTY_STATE_SELECTOR: &str = ".text-center.py-5";

/// Selector for server-rendered flash alerts dismissed shortly after load.
pub const FLASH_ALERT_SELECTOR: &str = ".alert";

/// Selector for controls that require a confirmation dialog before acting.
pub const CONFIRM_SELECTOR: &str = "[data-confirm]";

// =============================================================================
// Preference Storage
// =============================================================================

/// localStorage key holding the explicit theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Media query expressing the system dark-mode signal.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
