use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkOrderStatus {
    Draft,
    Approved,
    InProgress,
    Completed,
}

impl WorkOrderStatus {
    pub fn code(&self) -> &'static str {
        match self {
            WorkOrderStatus::Draft => "draft",
            WorkOrderStatus::Approved => "approved",
            WorkOrderStatus::InProgress => "in-progress",
            WorkOrderStatus::Completed => "completed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WorkOrderStatus::Draft => "Draft",
            WorkOrderStatus::Approved => "Approved",
            WorkOrderStatus::InProgress => "In progress",
            WorkOrderStatus::Completed => "Completed",
        }
    }

    pub fn all() -> Vec<WorkOrderStatus> {
        vec![
            WorkOrderStatus::Draft,
            WorkOrderStatus::Approved,
            WorkOrderStatus::InProgress,
            WorkOrderStatus::Completed,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

/// Installation work order derived from an investigation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrder {
    pub id: String,
    pub project_id: String,
    pub title: String,
    pub description: String,
    pub tasks: Vec<String>,
    /// Free-form estimate, e.g. "2-3 weeks"
    pub timeline: String,
    pub status: WorkOrderStatus,
    pub created_at: String,
}
