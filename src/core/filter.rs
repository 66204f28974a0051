//! File table filtering and ordering.
//!
//! The engine works on [`FileRow`] snapshots and returns row ids in display
//! order; it never touches the DOM. The component layer owns the mapping
//! from ids to row elements and commits the new order in a single pass, so
//! element identity (and any attached listeners) survives every re-sort.

use std::cmp::Ordering;

use crate::models::{FileRow, FilterCriteria, SortKey};

/// Compute the ids of rows surviving `criteria`, in display order.
///
/// Rows are kept when the name contains the search term
/// (case-insensitively) and the category restriction matches. The sort is
/// stable: rows comparing equal keep their prior relative order. Ids are a
/// subset of the input; nothing is duplicated or fabricated.
pub fn apply(rows: &[FileRow], criteria: &FilterCriteria) -> Vec<usize> {
    let search = criteria.search.to_lowercase();

    let mut kept: Vec<&FileRow> = rows
        .iter()
        .filter(|row| {
            let matches_search = search.is_empty() || row.name.to_lowercase().contains(&search);
            let matches_category = criteria
                .category
                .is_none_or(|category| row.category() == category);
            matches_search && matches_category
        })
        .collect();

    kept.sort_by(|a, b| compare(a, b, criteria.sort));
    kept.into_iter().map(|row| row.id).collect()
}

/// Order two rows under the given sort key.
fn compare(a: &FileRow, b: &FileRow, sort: SortKey) -> Ordering {
    match sort {
        SortKey::NameAsc => compare_names(a, b),
        SortKey::NameDesc => compare_names(b, a),
        SortKey::DateAsc => compare_dates(a.date_added, b.date_added, false),
        SortKey::DateDesc => compare_dates(a.date_added, b.date_added, true),
    }
}

/// Case-insensitive name comparison with the raw name as tiebreak.
fn compare_names(a: &FileRow, b: &FileRow) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
}

/// Date comparison. Undated rows (unparsable `dateAdded` text) order after
/// every dated row regardless of direction and stay stable among
/// themselves.
fn compare_dates(a: Option<f64>, b: Option<f64>, newest_first: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => {
            let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
            if newest_first { ord.reverse() } else { ord }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn row(id: usize, name: &str, date_added: Option<f64>) -> FileRow {
        FileRow {
            id,
            name: name.to_string(),
            date_added,
        }
    }

    fn sample_rows() -> Vec<FileRow> {
        vec![
            row(0, "b.txt", Some(2_000.0)),
            row(1, "a.pdf", Some(3_000.0)),
            row(2, "c.zip", Some(1_000.0)),
        ]
    }

    fn criteria(search: &str, category: Option<Category>, sort: SortKey) -> FilterCriteria {
        FilterCriteria {
            search: search.to_string(),
            category,
            sort,
        }
    }

    #[test]
    fn test_name_ascending() {
        let order = apply(&sample_rows(), &criteria("", None, SortKey::NameAsc));
        // a.pdf, b.txt, c.zip
        assert_eq!(order, vec![1, 0, 2]);
    }

    #[test]
    fn test_name_descending_reverses_ascending() {
        let rows = sample_rows();
        let mut asc = apply(&rows, &criteria("", None, SortKey::NameAsc));
        let desc = apply(&rows, &criteria("", None, SortKey::NameDesc));
        asc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_date_orders() {
        let rows = sample_rows();
        assert_eq!(
            apply(&rows, &criteria("", None, SortKey::DateAsc)),
            vec![2, 0, 1]
        );
        assert_eq!(
            apply(&rows, &criteria("", None, SortKey::DateDesc)),
            vec![1, 0, 2]
        );
    }

    #[test]
    fn test_empty_criteria_keeps_every_row() {
        let rows = sample_rows();
        let order = apply(&rows, &criteria("", None, SortKey::DateDesc));
        assert_eq!(order.len(), rows.len());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let rows = vec![
            row(0, "Quarterly Report.pdf", None),
            row(1, "holiday.png", None),
            row(2, "REPORT-final.docx", None),
        ];
        let order = apply(&rows, &criteria("report", None, SortKey::NameAsc));
        assert_eq!(order, vec![0, 2]);
    }

    #[test]
    fn test_category_filter() {
        let order = apply(
            &sample_rows(),
            &criteria("", Some(Category::Document), SortKey::NameAsc),
        );
        // a.pdf and b.txt are documents; c.zip is excluded.
        assert_eq!(order, vec![1, 0]);
    }

    #[test]
    fn test_search_and_category_compose() {
        let rows = vec![
            row(0, "summer.jpg", None),
            row(1, "summer-notes.txt", None),
            row(2, "winter.jpg", None),
        ];
        let order = apply(&rows, &criteria("summer", Some(Category::Image), SortKey::NameAsc));
        assert_eq!(order, vec![0]);
    }

    #[test]
    fn test_idempotent_under_same_criteria() {
        let rows = sample_rows();
        let c = criteria("", None, SortKey::NameAsc);
        let once = apply(&rows, &c);
        // Re-applying to the already-ordered snapshot yields the same order.
        let reordered: Vec<FileRow> = once.iter().map(|&id| rows[id].clone()).collect();
        let twice = apply(&reordered, &c);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_undated_rows_sort_last_in_both_directions() {
        let rows = vec![
            row(0, "undated-a.txt", None),
            row(1, "new.txt", Some(5_000.0)),
            row(2, "undated-b.txt", None),
            row(3, "old.txt", Some(1_000.0)),
        ];
        assert_eq!(
            apply(&rows, &criteria("", None, SortKey::DateAsc)),
            vec![3, 1, 0, 2]
        );
        assert_eq!(
            apply(&rows, &criteria("", None, SortKey::DateDesc)),
            vec![1, 3, 0, 2]
        );
    }

    #[test]
    fn test_equal_names_keep_prior_order() {
        let rows = vec![
            row(0, "dup.txt", Some(1.0)),
            row(1, "dup.txt", Some(2.0)),
            row(2, "dup.txt", Some(3.0)),
        ];
        assert_eq!(
            apply(&rows, &criteria("", None, SortKey::NameAsc)),
            vec![0, 1, 2]
        );
    }
}
