use crate::domain::{Department, Employee, EmployeeField, Role};

use super::SortDirection;

/// Instructions dispatched to the store.
///
/// The three record commands expect already-validated records; the store never
/// re-checks them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddEmployee(Employee),
    UpdateEmployee(Employee),
    DeleteEmployee(String),
    SetSearchTerm(String),
    SetDepartmentFilter(Option<Department>),
    SetRoleFilter(Option<Role>),
    SetSort {
        field: EmployeeField,
        direction: SortDirection,
    },
}

impl Command {
    /// Short name used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Command::AddEmployee(_) => "add_employee",
            Command::UpdateEmployee(_) => "update_employee",
            Command::DeleteEmployee(_) => "delete_employee",
            Command::SetSearchTerm(_) => "set_search_term",
            Command::SetDepartmentFilter(_) => "set_department_filter",
            Command::SetRoleFilter(_) => "set_role_filter",
            Command::SetSort { .. } => "set_sort",
        }
    }
}

/// What a dispatched command did. Purely informational.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added,
    Updated,
    /// Every record the delete took out, in list order. Never empty.
    Deleted { removed: Vec<Employee> },
    /// An update or delete named an id that is not in the list.
    NotFound,
    ViewChanged,
}
