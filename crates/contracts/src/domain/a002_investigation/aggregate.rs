use serde::{Deserialize, Serialize};

/// Outcome state of an investigation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvestigationStatus {
    Completed,
    InProgress,
    Failed,
}

impl InvestigationStatus {
    pub fn code(&self) -> &'static str {
        match self {
            InvestigationStatus::Completed => "completed",
            InvestigationStatus::InProgress => "in-progress",
            InvestigationStatus::Failed => "failed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            InvestigationStatus::Completed => "Completed",
            InvestigationStatus::InProgress => "In progress",
            InvestigationStatus::Failed => "Failed",
        }
    }

    pub fn all() -> Vec<InvestigationStatus> {
        vec![
            InvestigationStatus::Completed,
            InvestigationStatus::InProgress,
            InvestigationStatus::Failed,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

/// One step recorded while the investigation agent was running
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedEvent {
    pub title: String,
    pub data: String,
}

/// Site investigation attached to a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investigation {
    pub id: String,
    pub project_id: String,
    pub title: String,
    pub summary: String,
    pub findings: Vec<String>,
    pub recommendations: Vec<String>,
    pub status: InvestigationStatus,
    pub created_at: String,
    pub processed_events: Vec<ProcessedEvent>,
    /// Raw agent answer, null until the agent has responded
    #[serde(default)]
    pub ai_response: Option<String>,
}
