//! The store's transition function.
//!
//! `apply` is total over (state, command): unmatched updates and deletes leave
//! the record list untouched rather than failing.

use super::{Command, DirectoryState, Outcome};

/// Computes the next state for `command`.
pub fn apply(state: DirectoryState, command: Command) -> DirectoryState {
    apply_with_outcome(state, command).0
}

/// Like [`apply`], also reporting what the command did.
pub fn apply_with_outcome(mut state: DirectoryState, command: Command) -> (DirectoryState, Outcome) {
    let outcome = match command {
        Command::AddEmployee(employee) => {
            state.employees.push(employee);
            Outcome::Added
        }
        Command::UpdateEmployee(employee) => {
            match state.employees.iter_mut().find(|e| e.id == employee.id) {
                Some(slot) => {
                    *slot = employee;
                    Outcome::Updated
                }
                None => Outcome::NotFound,
            }
        }
        Command::DeleteEmployee(id) => {
            let (removed, kept): (Vec<_>, Vec<_>) =
                std::mem::take(&mut state.employees).into_iter().partition(|e| e.id == id);
            state.employees = kept;
            if removed.is_empty() {
                Outcome::NotFound
            } else {
                Outcome::Deleted { removed }
            }
        }
        Command::SetSearchTerm(term) => {
            state.view.search_term = term;
            Outcome::ViewChanged
        }
        Command::SetDepartmentFilter(department) => {
            state.view.department_filter = department;
            Outcome::ViewChanged
        }
        Command::SetRoleFilter(role) => {
            state.view.role_filter = role;
            Outcome::ViewChanged
        }
        Command::SetSort { field, direction } => {
            state.view.sort_field = Some(field);
            state.view.sort_direction = direction;
            Outcome::ViewChanged
        }
    };
    (state, outcome)
}
