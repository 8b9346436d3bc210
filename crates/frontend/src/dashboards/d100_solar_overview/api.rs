use contracts::dashboards::d100_solar_overview::DashboardSummary;

use crate::shared::api::{ApiClient, ApiError, Endpoint, HttpTransport};

/// Get the dashboard summary counters
pub async fn get_dashboard_summary<T: HttpTransport>(
    client: &ApiClient<T>,
) -> Result<DashboardSummary, ApiError> {
    client.fetch_json(&Endpoint::new("/dashboard/summary")).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::{client_for, FakeTransport};
    use futures::executor::block_on;

    #[test]
    fn test_summary_server_error() {
        let transport = FakeTransport::default();
        transport.respond("/dashboard/summary", 500, "Internal Server Error");
        let client = client_for(&transport);

        let err = block_on(get_dashboard_summary(&client)).unwrap_err();
        assert_eq!(err.status, 500);
        assert_eq!(err.message, "HTTP error! status: 500");
    }

    #[test]
    fn test_summary_decodes() {
        let transport = FakeTransport::default();
        transport.respond(
            "/dashboard/summary",
            200,
            r#"{"totalProjects":3,"activeInvestigations":1,"completedInvestigations":2,"activeWorkOrders":2,"completedWorkOrders":0}"#,
        );
        let client = client_for(&transport);

        let summary = block_on(get_dashboard_summary(&client)).unwrap();
        assert_eq!(summary.total_projects, 3);
        assert_eq!(summary.completed_investigations, 2);
    }
}
