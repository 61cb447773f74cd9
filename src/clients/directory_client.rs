use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::domain::{Department, Employee, EmployeeDraft, EmployeeField, Role};
use crate::error::DirectoryError;
use crate::store::{Command, DirectoryState, Outcome, SortDirection, SortSpec};
use crate::store_actor::StoreHandle;
use crate::validation::{random_employee_id, validate_existing, validate_new};

/// User-facing acknowledgement of a successful record change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub title: &'static str,
    pub description: String,
    pub employee: Employee,
    pub outcome: Outcome,
}

impl Confirmation {
    fn new(title: &'static str, verb: &str, employee: Employee, outcome: Outcome) -> Self {
        let description = format!("{} has been {verb} successfully.", employee.full_name());
        Self {
            title,
            description,
            employee,
            outcome,
        }
    }
}

/// Orchestrates what the directory's forms, filters and table headers do:
/// validate first, then dispatch to the store.
#[derive(Clone)]
pub struct DirectoryClient {
    store: StoreHandle,
    next_id: Arc<dyn Fn() -> String + Send + Sync>,
}

impl DirectoryClient {
    pub fn new(store: StoreHandle) -> Self {
        Self::with_id_generator(store, random_employee_id)
    }

    pub fn with_id_generator(store: StoreHandle, next_id: impl Fn() -> String + Send + Sync + 'static) -> Self {
        Self {
            store,
            next_id: Arc::new(next_id),
        }
    }

    pub fn store(&self) -> &StoreHandle {
        &self.store
    }

    /// Validates `draft` and appends it. A missing id is generated.
    #[instrument(skip(self, draft), fields(employee_id = draft.id.as_deref().unwrap_or("<new>")))]
    pub async fn add_employee(&self, draft: EmployeeDraft) -> Result<Confirmation, DirectoryError> {
        debug!("Validating new employee");
        let employee = validate_new(draft, || (self.next_id)())?;
        let outcome = self.store.dispatch(Command::AddEmployee(employee.clone())).await?;
        let confirmation = Confirmation::new("Employee Added", "added", employee, outcome);
        info!(employee_id = %confirmation.employee.id, "{}", confirmation.description);
        Ok(confirmation)
    }

    /// Validates `draft` and replaces the first record with the same id.
    ///
    /// Returns `None` when no record has that id; the list is left unchanged.
    #[instrument(skip(self, draft), fields(employee_id = draft.id.as_deref().unwrap_or("")))]
    pub async fn update_employee(&self, draft: EmployeeDraft) -> Result<Option<Confirmation>, DirectoryError> {
        debug!("Validating edited employee");
        let employee = validate_existing(draft)?;
        match self.store.dispatch(Command::UpdateEmployee(employee.clone())).await? {
            Outcome::NotFound => {
                warn!("No employee with this id; nothing updated");
                Ok(None)
            }
            outcome => {
                let confirmation = Confirmation::new("Employee Updated", "updated", employee, outcome);
                info!("{}", confirmation.description);
                Ok(Some(confirmation))
            }
        }
    }

    /// Removes every record with `id`, returning a confirmation naming the
    /// first one removed, or `None` if the id was unknown.
    #[instrument(skip(self))]
    pub async fn delete_employee(&self, id: &str) -> Result<Option<Confirmation>, DirectoryError> {
        match self.store.dispatch(Command::DeleteEmployee(id.to_string())).await? {
            Outcome::Deleted { removed } => match removed.first().cloned() {
                Some(employee) => {
                    let outcome = Outcome::Deleted { removed };
                    let confirmation = Confirmation::new("Employee Deleted", "deleted", employee, outcome);
                    info!("{}", confirmation.description);
                    Ok(Some(confirmation))
                }
                None => Ok(None),
            },
            _ => {
                debug!("No employee with this id; nothing deleted");
                Ok(None)
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn search(&self, term: &str) -> Result<(), DirectoryError> {
        self.store.dispatch(Command::SetSearchTerm(term.to_string())).await?;
        Ok(())
    }

    /// Filters by department label; an empty label clears the filter.
    #[instrument(skip(self))]
    pub async fn filter_department(&self, label: &str) -> Result<(), DirectoryError> {
        let department = parse_filter::<Department>("department", label)?;
        self.store.dispatch(Command::SetDepartmentFilter(department)).await?;
        Ok(())
    }

    /// Filters by role label; an empty label clears the filter.
    #[instrument(skip(self))]
    pub async fn filter_role(&self, label: &str) -> Result<(), DirectoryError> {
        let role = parse_filter::<Role>("role", label)?;
        self.store.dispatch(Command::SetRoleFilter(role)).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn sort_by(&self, field: EmployeeField, direction: SortDirection) -> Result<(), DirectoryError> {
        self.store.dispatch(Command::SetSort { field, direction }).await?;
        Ok(())
    }

    /// Column-header click: flips to descending when `field` is already sorted
    /// ascending, otherwise sorts ascending by `field`.
    #[instrument(skip(self))]
    pub async fn toggle_sort(&self, field: EmployeeField) -> Result<SortSpec, DirectoryError> {
        let state = self.store.get_state().await?;
        let next = state.view.toggled_sort(field);
        self.sort_by(next.field, next.direction).await?;
        Ok(next)
    }

    pub async fn visible(&self) -> Result<Vec<Employee>, DirectoryError> {
        self.store.visible().await
    }

    pub async fn state(&self) -> Result<DirectoryState, DirectoryError> {
        self.store.get_state().await
    }

    /// "N employees found" line for the current view.
    pub async fn result_summary(&self) -> Result<String, DirectoryError> {
        let count = self.store.visible().await?.len();
        Ok(result_summary(count))
    }
}

pub fn result_summary(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} employee{plural} found")
}

fn parse_filter<T: FromStr>(kind: &'static str, label: &str) -> Result<Option<T>, DirectoryError> {
    if label.is_empty() {
        return Ok(None);
    }
    T::from_str(label)
        .map(Some)
        .map_err(|_| DirectoryError::UnknownFilterValue {
            kind,
            value: label.to_string(),
        })
}
