//! Filter criteria read from the search/sort/category controls.

use super::Category;

/// Sort order for the file table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Name, A to Z.
    NameAsc,
    /// Name, Z to A.
    NameDesc,
    /// Oldest first.
    DateAsc,
    /// Newest first (the page's default).
    #[default]
    DateDesc,
}

impl SortKey {
    /// Parse a sort control value, falling back to the default order.
    pub fn from_control_value(value: &str) -> Self {
        match value {
            "name_asc" => Self::NameAsc,
            "name_desc" => Self::NameDesc,
            "date_asc" => Self::DateAsc,
            _ => Self::DateDesc,
        }
    }
}

/// The three independent criteria driving the file table view.
///
/// Recomputed from the current control values on every relevant input
/// event; never persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against the row name.
    pub search: String,
    /// Category restriction; `None` means all categories.
    pub category: Option<Category>,
    /// Display order.
    pub sort: SortKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!(SortKey::from_control_value("name_asc"), SortKey::NameAsc);
        assert_eq!(SortKey::from_control_value("name_desc"), SortKey::NameDesc);
        assert_eq!(SortKey::from_control_value("date_asc"), SortKey::DateAsc);
        assert_eq!(SortKey::from_control_value("date_desc"), SortKey::DateDesc);
        assert_eq!(SortKey::from_control_value(""), SortKey::DateDesc);
    }

    #[test]
    fn test_category_control_values() {
        assert_eq!(Category::from_control_value("image"), Some(Category::Image));
        assert_eq!(Category::from_control_value("all"), None);
        assert_eq!(Category::from_control_value(""), None);
    }
}
