use contracts::domain::a003_work_order::{WorkOrder, WorkOrderStatus};

use crate::shared::api::{ApiClient, ApiError, Endpoint, HttpTransport};

/// List work orders, optionally filtered by project and/or status
pub async fn get_work_orders<T: HttpTransport>(
    client: &ApiClient<T>,
    project_id: Option<&str>,
    status: Option<WorkOrderStatus>,
) -> Result<Vec<WorkOrder>, ApiError> {
    let endpoint = Endpoint::new("/workorders")
        .param_opt("project_id", project_id)
        .param_opt("status", status.map(|s| s.code()));
    client.fetch_json(&endpoint).await
}

/// Get a work order by ID
pub async fn get_work_order<T: HttpTransport>(
    client: &ApiClient<T>,
    id: &str,
) -> Result<WorkOrder, ApiError> {
    let endpoint = Endpoint::new(format!("/workorders/{}", urlencoding::encode(id)));
    client.fetch_json(&endpoint).await
}
