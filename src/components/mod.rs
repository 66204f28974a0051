//! DOM-facing controllers wiring the enhancements onto the page.
//!
//! - [`dropzone`] - drag-and-drop file intake and preview
//! - [`file_table`] - search/sort/category view over the file table
//! - [`progress`] - simulated upload progress bar driver
//! - [`notify`] - transient notifications
//! - [`theme`] - theme persistence and system-preference tracking
//! - [`upload_form`] - submit gate, loading states, and page glue
//! - [`clipboard`] - copy-to-clipboard export for page scripts
//!
//! Every controller locates its elements by the fixed ids in
//! [`crate::config`] and becomes a no-op on pages without them.

pub mod clipboard;
pub mod dropzone;
pub mod file_table;
pub mod notify;
pub mod progress;
pub mod theme;
pub mod upload_form;
