//! Field checks applied to a candidate record before it is dispatched to the store.
//!
//! All checks run independently; a failing candidate reports every bad field at
//! once. Id uniqueness is deliberately not checked here or anywhere else.

use std::str::FromStr;

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use tracing::debug;
use validator::ValidateEmail;

use crate::domain::{Department, Employee, EmployeeDraft, EmployeeField, Role};
use crate::error::{FieldError, ValidationError};

pub const ID_PREFIX: &str = "EMP";
pub const ID_SUFFIX_LEN: usize = 6;
pub const MIN_NAME_LEN: usize = 2;

const ID_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Dotted domain with an alphabetic TLD of two or more letters; the local part
/// may not start or end with a dot or contain consecutive dots.
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[a-z0-9_'+\-]([a-z0-9_'+\-]|\.[a-z0-9_'+\-])*@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .unwrap_or_else(|e| panic!("email pattern must compile: {e}"))
});

/// Syntax check: `validator`'s RFC check, narrowed to the shape above.
pub fn is_valid_email(email: &str) -> bool {
    email.validate_email() && EMAIL_SHAPE.is_match(email)
}

/// Generates `EMP` followed by six uppercase alphanumerics from the thread RNG.
///
/// Non-cryptographic and unchecked against existing ids.
pub fn random_employee_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!("{ID_PREFIX}{suffix}")
}

/// Validates a record on the add path, generating an id when the draft has none.
pub fn validate_new(
    draft: EmployeeDraft,
    next_id: impl FnOnce() -> String,
) -> Result<Employee, ValidationError> {
    let mut draft = draft;
    if draft.id.is_none() {
        let id = next_id();
        debug!(employee_id = %id, "Generated employee id");
        draft.id = Some(id);
    }
    validate(draft)
}

/// Validates a record on the edit path. The id must be supplied.
pub fn validate_existing(draft: EmployeeDraft) -> Result<Employee, ValidationError> {
    validate(draft)
}

fn validate(draft: EmployeeDraft) -> Result<Employee, ValidationError> {
    let mut errors = Vec::new();

    let id = match draft.id {
        Some(id) if !id.is_empty() => Some(id),
        _ => {
            errors.push(FieldError::new(EmployeeField::Id, "Employee ID is required"));
            None
        }
    };

    check_name(&draft.first_name, EmployeeField::FirstName, "First name", &mut errors);
    check_name(&draft.last_name, EmployeeField::LastName, "Last name", &mut errors);

    if !is_valid_email(&draft.email) {
        errors.push(FieldError::new(EmployeeField::Email, "Invalid email format"));
    }

    let department = Department::from_str(&draft.department)
        .map_err(|_| {
            errors.push(FieldError::new(
                EmployeeField::Department,
                format!("Invalid department '{}'", draft.department),
            ))
        })
        .ok();

    let role = Role::from_str(&draft.role)
        .map_err(|_| {
            errors.push(FieldError::new(
                EmployeeField::Role,
                format!("Invalid role '{}'", draft.role),
            ))
        })
        .ok();

    match (id, department, role) {
        (Some(id), Some(department), Some(role)) if errors.is_empty() => Ok(Employee {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            department,
            role,
        }),
        _ => {
            debug!(error_count = errors.len(), "Employee draft rejected");
            Err(ValidationError { errors })
        }
    }
}

fn check_name(value: &str, field: EmployeeField, label: &str, errors: &mut Vec<FieldError>) {
    // Counts chars, so a single astral-plane character (one emoji) is length 1.
    if value.chars().count() < MIN_NAME_LEN {
        errors.push(FieldError::new(
            field,
            format!("{label} must be at least {MIN_NAME_LEN} characters"),
        ));
    }
}
