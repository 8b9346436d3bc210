use crate::dashboards::d100_solar_overview::api::get_dashboard_summary;
use crate::dashboards::d100_solar_overview::state::{DashboardData, DashboardState, DashboardStore};
use crate::domain::a001_project::api::get_projects;
use crate::domain::a002_investigation::api::get_investigations;
use crate::domain::a003_work_order::api::get_work_orders;
use crate::shared::api::{ApiClient, HttpTransport};

/// Fetch the four dashboard resources concurrently
///
/// Waits until every request has settled. If any failed, the first failure in
/// the order projects, investigations, work orders, summary is returned and
/// the successful results are discarded.
pub async fn load_dashboard<T: HttpTransport>(client: &ApiClient<T>) -> anyhow::Result<DashboardData> {
    let (projects, investigations, work_orders, summary) = futures::join!(
        get_projects(client, None),
        get_investigations(client, None, None),
        get_work_orders(client, None, None),
        get_dashboard_summary(client),
    );

    Ok(DashboardData {
        projects: projects?,
        investigations: investigations?,
        work_orders: work_orders?,
        summary: Some(summary?),
    })
}

/// One refresh cycle: mark loading, fetch everything, publish the outcome
///
/// Errors end here; they are only visible through the state's `error`.
/// Overlapping cycles are not coordinated, the last one to finish wins.
pub async fn run_refresh_cycle<T, S>(client: &ApiClient<T>, store: &S)
where
    T: HttpTransport,
    S: DashboardStore,
{
    if !store.apply(DashboardState::begin_refresh) {
        log::debug!("Dashboard state is gone, refresh skipped");
        return;
    }

    let outcome = load_dashboard(client).await;
    match &outcome {
        Ok(data) => log::info!(
            "Dashboard refreshed: {} projects, {} investigations, {} work orders",
            data.projects.len(),
            data.investigations.len(),
            data.work_orders.len()
        ),
        Err(e) => log::error!("Dashboard refresh failed: {:#}", e),
    }

    if !store.apply(|state| state.finish_refresh(outcome)) {
        log::debug!("Dashboard state disposed before refresh completed");
    }
}
