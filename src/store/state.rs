use serde::{Deserialize, Serialize};

use crate::domain::{Department, Employee, EmployeeField, Role};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// A sort column and its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: EmployeeField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(field: EmployeeField) -> Self {
        Self { field, direction: SortDirection::Ascending }
    }

    pub fn descending(field: EmployeeField) -> Self {
        Self { field, direction: SortDirection::Descending }
    }
}

/// Search, filter and sort parameters. Ephemeral: never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub search_term: String,
    pub department_filter: Option<Department>,
    pub role_filter: Option<Role>,
    pub sort_field: Option<EmployeeField>,
    pub sort_direction: SortDirection,
}

impl ViewState {
    pub fn sort(&self) -> Option<SortSpec> {
        self.sort_field.map(|field| SortSpec {
            field,
            direction: self.sort_direction,
        })
    }

    /// The sort a header click on `field` should produce.
    pub fn toggled_sort(&self, field: EmployeeField) -> SortSpec {
        match self.sort() {
            Some(current) if current.field == field && current.direction == SortDirection::Ascending => {
                SortSpec::descending(field)
            }
            _ => SortSpec::ascending(field),
        }
    }
}

/// Everything the store owns: the canonical record list plus view parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryState {
    pub employees: Vec<Employee>,
    pub view: ViewState,
}

impl DirectoryState {
    pub fn new(employees: Vec<Employee>) -> Self {
        Self {
            employees,
            view: ViewState::default(),
        }
    }

    pub fn seeded() -> Self {
        Self::new(crate::domain::sample_employees())
    }

    /// First record whose id matches.
    pub fn find(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_sort() {
        let mut view = ViewState::default();
        assert_eq!(view.toggled_sort(EmployeeField::Id), SortSpec::ascending(EmployeeField::Id));

        view.sort_field = Some(EmployeeField::Id);
        assert_eq!(view.toggled_sort(EmployeeField::Id), SortSpec::descending(EmployeeField::Id));

        view.sort_direction = SortDirection::Descending;
        assert_eq!(view.toggled_sort(EmployeeField::Id), SortSpec::ascending(EmployeeField::Id));
        assert_eq!(view.toggled_sort(EmployeeField::Role), SortSpec::ascending(EmployeeField::Role));
    }

    #[test]
    fn test_seeded_state_defaults() {
        let state = DirectoryState::seeded();
        assert_eq!(state.len(), 12);
        assert_eq!(state.view, ViewState::default());
        assert_eq!(state.view.sort_direction, SortDirection::Ascending);
        assert_eq!(state.find("EMP009").map(|e| e.last_name.as_str()), Some("Taylor"));
    }
}
