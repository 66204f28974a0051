//! File-related data types: upload candidates and table rows.

/// A file the user has selected or dropped, not yet accepted for upload.
///
/// Built from the browser's `File` object at selection time and discarded
/// once the preview and validation have run.
#[derive(Clone, Debug, PartialEq)]
pub struct CandidateFile {
    /// File name as reported by the browser.
    pub name: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// MIME type; empty when the browser cannot determine one.
    pub mime_type: String,
}

impl CandidateFile {
    /// Extension after the last `.` in the name, lower-cased.
    ///
    /// A name without a dot has no extension.
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
    }
}

/// Coarse file classification derived from the extension, used for the
/// category filter and for iconography.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Image,
    Document,
    Archive,
    Other,
}

impl Category {
    /// Classify a file name by its extension.
    pub fn from_name(name: &str) -> Self {
        match name.rsplit('.').next().map(|s| s.to_lowercase()).as_deref() {
            Some("jpg" | "jpeg" | "png" | "gif") => Self::Image,
            Some("pdf" | "doc" | "docx" | "txt") => Self::Document,
            Some("zip" | "rar") => Self::Archive,
            _ => Self::Other,
        }
    }

    /// Parse a filter control value. `"all"` (and anything unrecognized)
    /// means no category restriction.
    pub fn from_control_value(value: &str) -> Option<Self> {
        match value {
            "image" => Some(Self::Image),
            "document" => Some(Self::Document),
            "archive" => Some(Self::Archive),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// View-model for one displayed file row.
///
/// The `id` is the row's stable identity (its index in the startup
/// snapshot); the filter engine works exclusively on ids, and only the DOM
/// layer maps them back to row elements. This keeps ordering logic
/// independent of the presentation and testable without a browser.
#[derive(Clone, Debug, PartialEq)]
pub struct FileRow {
    /// Stable identifier assigned at snapshot time.
    pub id: usize,
    /// Displayed file name.
    pub name: String,
    /// Parsed `dateAdded` timestamp in milliseconds; `None` when the date
    /// text did not parse. Undated rows sort after all dated rows.
    pub date_added: Option<f64>,
}

impl FileRow {
    /// Category of this row, derived from the file name.
    pub fn category(&self) -> Category {
        Category::from_name(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_name() {
        assert_eq!(Category::from_name("photo.jpg"), Category::Image);
        assert_eq!(Category::from_name("photo.JPEG"), Category::Image);
        assert_eq!(Category::from_name("report.pdf"), Category::Document);
        assert_eq!(Category::from_name("notes.txt"), Category::Document);
        assert_eq!(Category::from_name("backup.zip"), Category::Archive);
        assert_eq!(Category::from_name("data.csv"), Category::Other);
        assert_eq!(Category::from_name("README"), Category::Other);
    }

    #[test]
    fn test_candidate_extension() {
        let file = |name: &str| CandidateFile {
            name: name.to_string(),
            size_bytes: 0,
            mime_type: String::new(),
        };
        assert_eq!(file("a.PDF").extension().as_deref(), Some("pdf"));
        assert_eq!(file("archive.tar.gz").extension().as_deref(), Some("gz"));
        assert_eq!(file("Makefile").extension(), None);
        // A trailing dot yields an empty extension, not a missing one.
        assert_eq!(file("odd.").extension().as_deref(), Some(""));
    }
}
