use super::{Department, Employee, Role};

/// The twelve sample records the directory starts with.
pub fn sample_employees() -> Vec<Employee> {
    use Department::*;
    use Role::*;

    vec![
        Employee::new("EMP001", "John", "Doe", "john.doe@company.com", Engineering, Developer),
        Employee::new("EMP002", "Jane", "Smith", "jane.smith@company.com", Marketing, Manager),
        Employee::new("EMP003", "Michael", "Johnson", "michael.johnson@company.com", Sales, Director),
        Employee::new("EMP004", "Sarah", "Williams", "sarah.williams@company.com", HR, Coordinator),
        Employee::new("EMP005", "David", "Brown", "david.brown@company.com", Finance, Analyst),
        Employee::new("EMP006", "Emily", "Davis", "emily.davis@company.com", Engineering, Designer),
        Employee::new("EMP007", "Robert", "Miller", "robert.miller@company.com", Marketing, Analyst),
        Employee::new("EMP008", "Lisa", "Wilson", "lisa.wilson@company.com", Sales, Manager),
        Employee::new("EMP009", "James", "Taylor", "james.taylor@company.com", Engineering, Developer),
        Employee::new("EMP010", "Amanda", "Anderson", "amanda.anderson@company.com", Finance, Director),
        Employee::new("EMP011", "Christopher", "Thomas", "christopher.thomas@company.com", HR, Manager),
        Employee::new("EMP012", "Jessica", "Jackson", "jessica.jackson@company.com", Marketing, Designer),
    ]
}
