use serde::{Deserialize, Serialize};

/// Counters shown in the header of the solar overview dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_projects: u32,
    /// Investigations still running
    pub active_investigations: u32,
    pub completed_investigations: u32,
    /// Approved or in-progress work orders
    pub active_work_orders: u32,
    pub completed_work_orders: u32,
}
