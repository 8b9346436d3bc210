use contracts::domain::a002_investigation::{Investigation, InvestigationStatus};

use crate::shared::api::{ApiClient, ApiError, Endpoint, HttpTransport};

/// List investigations, optionally filtered by project and/or status
pub async fn get_investigations<T: HttpTransport>(
    client: &ApiClient<T>,
    project_id: Option<&str>,
    status: Option<InvestigationStatus>,
) -> Result<Vec<Investigation>, ApiError> {
    let endpoint = Endpoint::new("/investigations")
        .param_opt("project_id", project_id)
        .param_opt("status", status.map(|s| s.code()));
    client.fetch_json(&endpoint).await
}

/// Get an investigation by ID
pub async fn get_investigation<T: HttpTransport>(
    client: &ApiClient<T>,
    id: &str,
) -> Result<Investigation, ApiError> {
    let endpoint = Endpoint::new(format!("/investigations/{}", urlencoding::encode(id)));
    client.fetch_json(&endpoint).await
}
