//! Plain data types shared between the pure core and the DOM layer.

mod criteria;
mod file;
mod theme;

pub use criteria::{FilterCriteria, SortKey};
pub use file::{CandidateFile, Category, FileRow};
pub use theme::{Theme, ThemePreference};
