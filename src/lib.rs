//! In-memory employee directory: a record store driven by tagged commands, a
//! query view that filters and sorts it, and the validation gate in front of it.
//!
//! ```no_run
//! use employee_directory::{app_system::DirectorySystem, config::DirectoryConfig};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let system = DirectorySystem::new(&DirectoryConfig::default());
//! system.client.filter_department("Engineering").await?;
//! let rows = system.client.visible().await?;
//! assert_eq!(rows.len(), 3);
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod app_system;
pub mod clients;
pub mod config;
pub mod domain;
pub mod error;
pub mod query;
pub mod store;
pub mod store_actor;
pub mod validation;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
mod mock_framework;

pub use domain::{Department, Employee, EmployeeDraft, EmployeeField, Role};
pub use error::{DirectoryError, FieldError, ValidationError};
pub use query::visible_employees;
pub use store::{apply, Command, DirectoryState, SortDirection};
