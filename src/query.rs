//! Derives the display sequence from store state. Never mutates the store.

use std::cmp::Ordering;

use crate::domain::Employee;
use crate::store::{DirectoryState, SortDirection, ViewState};

/// Filtered and sorted records for the current view parameters.
pub fn visible_employees(state: &DirectoryState) -> Vec<Employee> {
    let needle = state.view.search_term.to_lowercase();
    let mut rows: Vec<Employee> = state
        .employees
        .iter()
        .filter(|e| matches(e, &state.view, &needle))
        .cloned()
        .collect();

    if state.view.sort_field.is_some() {
        rows.sort_by(|a, b| compare(a, b, &state.view));
    }

    rows
}

/// Whether `employee` passes the search term and both filters.
///
/// `needle` is the search term already lowercased.
pub fn matches(employee: &Employee, view: &ViewState, needle: &str) -> bool {
    let matches_search = needle.is_empty()
        || [&employee.first_name, &employee.last_name, &employee.email, &employee.id]
            .iter()
            .any(|value| value.to_lowercase().contains(needle));

    let matches_department = view.department_filter.map_or(true, |d| d == employee.department);
    let matches_role = view.role_filter.map_or(true, |r| r == employee.role);

    matches_search && matches_department && matches_role
}

/// Ordering of two records on the active sort, `Equal` when unsorted.
pub fn compare(a: &Employee, b: &Employee, view: &ViewState) -> Ordering {
    match view.sort_field {
        None => Ordering::Equal,
        Some(field) => {
            let ord = a.field_text(field).cmp(b.field_text(field));
            match view.sort_direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        }
    }
}
