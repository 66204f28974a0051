//! File table search, category filter, and sorting.
//!
//! The table rows are server-rendered; this controller snapshots them once
//! at startup into [`FileRow`] view-models, recomputes the visible order
//! through the pure engine on every control event, and commits the result
//! by re-appending the surviving row elements in one pass. Elements are
//! reordered, never recreated, so their attached state survives.

use std::rc::Rc;

use web_sys::{Element, Event, HtmlInputElement, HtmlSelectElement};

use crate::config::{EMPTY_STATE_SELECTOR, FILE_TABLE_BODY_SELECTOR, element_ids};
use crate::core::filter;
use crate::models::{Category, FileRow, FilterCriteria, SortKey};
use crate::utils::dom;

/// Startup snapshot of the table plus the controls driving it.
struct FileTable {
    body: Element,
    /// View-models, indexed by id.
    rows: Vec<FileRow>,
    /// Row elements, indexed by the same ids.
    elements: Vec<Element>,
    search: Option<HtmlInputElement>,
    sort: Option<HtmlSelectElement>,
    category: Option<HtmlSelectElement>,
}

/// Wire the table controls. No-op unless at least one control and the row
/// container exist.
pub fn init() -> Option<()> {
    let search = dom::typed_element_by_id::<HtmlInputElement>(element_ids::SEARCH_INPUT);
    let sort = dom::typed_element_by_id::<HtmlSelectElement>(element_ids::SORT_SELECT);
    let category = dom::typed_element_by_id::<HtmlSelectElement>(element_ids::FILTER_SELECT);
    if search.is_none() && sort.is_none() && category.is_none() {
        return None;
    }

    let body = dom::query(FILE_TABLE_BODY_SELECTOR)?;
    let table = Rc::new(FileTable::snapshot(body, search, sort, category));

    if let Some(input) = &table.search {
        let table = table.clone();
        dom::listen::<Event>(input.as_ref(), "input", move |_| table.refresh());
    }
    if let Some(select) = &table.sort {
        let table = table.clone();
        dom::listen::<Event>(select.as_ref(), "change", move |_| table.refresh());
    }
    if let Some(select) = &table.category {
        let table = table.clone();
        dom::listen::<Event>(select.as_ref(), "change", move |_| table.refresh());
    }

    Some(())
}

impl FileTable {
    /// Capture the rendered rows. The name comes from the first cell, the
    /// date from the second; a date that does not parse is kept as `None`
    /// and ordered after every dated row.
    fn snapshot(
        body: Element,
        search: Option<HtmlInputElement>,
        sort: Option<HtmlSelectElement>,
        category: Option<HtmlSelectElement>,
    ) -> Self {
        let elements = dom::query_all("tbody tr");
        let rows = elements
            .iter()
            .enumerate()
            .map(|(id, element)| FileRow {
                id,
                name: cell_text(element, "td:first-child"),
                date_added: parse_date(&cell_text(element, "td:nth-child(2)")),
            })
            .collect();

        Self {
            body,
            rows,
            elements,
            search,
            sort,
            category,
        }
    }

    /// Criteria as currently expressed by the controls. Missing controls
    /// contribute their neutral value.
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search: self.search.as_ref().map(|s| s.value()).unwrap_or_default(),
            category: self
                .category
                .as_ref()
                .and_then(|s| Category::from_control_value(&s.value())),
            sort: self
                .sort
                .as_ref()
                .map(|s| SortKey::from_control_value(&s.value()))
                .unwrap_or_default(),
        }
    }

    /// Recompute against the full snapshot and commit the new order in a
    /// single pass, so no partially-reordered state is ever observable.
    fn refresh(&self) {
        let order = filter::apply(&self.rows, &self.criteria());

        for element in &self.elements {
            element.remove();
        }
        for id in &order {
            let _ = self.body.append_child(&self.elements[*id]);
        }

        set_empty_state_visible(order.is_empty());
    }
}

fn cell_text(row: &Element, selector: &str) -> String {
    row.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|cell| cell.text_content())
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}

/// Parse a free-text date cell into epoch milliseconds.
fn parse_date(text: &str) -> Option<f64> {
    let parsed = js_sys::Date::parse(text);
    if parsed.is_nan() { None } else { Some(parsed) }
}

fn set_empty_state_visible(visible: bool) {
    if let Some(indicator) = dom::query(EMPTY_STATE_SELECTOR) {
        if visible {
            dom::show(&indicator);
        } else {
            dom::hide(&indicator);
        }
    }
}
