use tracing::{error, info, Instrument};

use employee_directory::app_system::{setup_tracing, DirectorySystem};
use employee_directory::config::DirectoryConfig;
use employee_directory::{EmployeeDraft, EmployeeField, SortDirection};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), String> {
    let config = DirectoryConfig::from_env().map_err(|e| e.to_string())?;
    setup_tracing(&config);

    info!("Starting employee directory");

    let system = DirectorySystem::new(&config);
    let client = system.client.clone();

    let span = tracing::info_span!("engineering_view");
    async {
        client.filter_department("Engineering").await?;
        client.sort_by(EmployeeField::LastName, SortDirection::Ascending).await?;
        let rows = client.visible().await?;
        let names: Vec<String> = rows.iter().map(|e| e.full_name()).collect();
        let summary = client.result_summary().await?;
        info!(employees = ?names, "{summary}");
        Ok::<_, employee_directory::DirectoryError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("edit_round");
    let result = async {
        let added = client
            .add_employee(EmployeeDraft::new("Grace", "Hopper", "grace.hopper@company.com", "Engineering", "Director"))
            .await?;

        let mut edit = EmployeeDraft::from(&added.employee);
        edit.role = "Manager".to_string();
        client.update_employee(edit).await?;

        // Rejected before it reaches the store
        if let Err(e) = client
            .add_employee(EmployeeDraft::new("A", "Lovelace", "not-an-email", "Engineering", "Developer"))
            .await
        {
            info!(error = %e, "Submission rejected");
        }

        client.delete_employee("EMP006").await?;
        Ok::<_, employee_directory::DirectoryError>(())
    }
    .instrument(span)
    .await;

    if let Err(e) = result {
        error!(error = %e, "Edit round failed");
    }

    let rows = client.visible().await.map_err(|e| e.to_string())?;
    let snapshot = serde_json::to_string_pretty(&rows).map_err(|e| e.to_string())?;
    println!("{snapshot}");

    drop(client);
    system.shutdown().await?;

    info!("Employee directory finished");
    Ok(())
}
