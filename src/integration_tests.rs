#[cfg(test)]
mod tests {
    use crate::app_system::DirectorySystem;
    use crate::config::DirectoryConfig;
    use crate::domain::{EmployeeDraft, EmployeeField};
    use crate::error::DirectoryError;
    use crate::store::{Outcome, SortDirection};

    fn last_names(rows: &[crate::domain::Employee]) -> Vec<&str> {
        rows.iter().map(|e| e.last_name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_engineering_filter_then_sort_scenario() {
        let system = DirectorySystem::new(&DirectoryConfig::default());
        let client = system.client.clone();

        client.filter_department("Engineering").await.unwrap();
        let rows = client.visible().await.unwrap();
        let ids: Vec<_> = rows.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["EMP001", "EMP006", "EMP009"]);

        client.sort_by(EmployeeField::LastName, SortDirection::Ascending).await.unwrap();
        let rows = client.visible().await.unwrap();
        assert_eq!(last_names(&rows), vec!["Davis", "Doe", "Taylor"]);
        assert_eq!(client.result_summary().await.unwrap(), "3 employees found");

        drop(client);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_crud_round_trip_through_client() {
        let config = DirectoryConfig::default();
        let system = DirectorySystem::new(&config);
        let client = system.client.clone();

        let added = client
            .add_employee(EmployeeDraft::new("Grace", "Hopper", "grace.hopper@company.com", "Engineering", "Director"))
            .await
            .unwrap();
        assert_eq!(added.outcome, Outcome::Added);
        assert!(added.employee.id.starts_with("EMP"));
        assert_eq!(client.state().await.unwrap().len(), 13);

        let mut edit = EmployeeDraft::from(&added.employee);
        edit.role = "Manager".into();
        let updated = client.update_employee(edit).await.unwrap().expect("Expected confirmation");
        assert_eq!(updated.outcome, Outcome::Updated);

        let missing = client.update_employee(EmployeeDraft::from(&added.employee).with_id("EMP999")).await.unwrap();
        assert_eq!(missing, None);

        client.search("hopper").await.unwrap();
        let rows = client.visible().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].role.to_string(), "Manager");

        let deleted = client.delete_employee(&added.employee.id).await.unwrap().expect("Expected confirmation");
        assert_eq!(deleted.employee.last_name, "Hopper");
        assert_eq!(deleted.description, "Grace Hopper has been deleted successfully.");
        assert!(client.visible().await.unwrap().is_empty());
        assert_eq!(client.result_summary().await.unwrap(), "0 employees found");

        assert!(client.delete_employee("EMP999").await.unwrap().is_none());
        assert_eq!(client.state().await.unwrap().len(), 12);

        drop(client);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_rejected_submission_leaves_store_untouched() {
        let system = DirectorySystem::new(&DirectoryConfig::default());
        let before = system.client.state().await.unwrap();

        let err = system
            .client
            .add_employee(EmployeeDraft::new("A", "Lovelace", "ada@company.com", "Engineering", "Developer"))
            .await
            .unwrap_err();
        assert!(matches!(err, DirectoryError::Validation(ref v) if v.has_field(EmployeeField::FirstName)));
        assert_eq!(system.client.state().await.unwrap(), before);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_start_without_seed() {
        let config = DirectoryConfig {
            seed_sample_data: false,
            ..DirectoryConfig::default()
        };
        let system = DirectorySystem::new(&config);
        assert!(system.client.visible().await.unwrap().is_empty());
        system.shutdown().await.unwrap();
    }
}
