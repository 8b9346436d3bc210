use serde::{Deserialize, Serialize};

// ============================================================================
// Enums
// ============================================================================

/// Lifecycle stage of a solar project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Planning,
    Investigation,
    Approved,
    InProgress,
    Completed,
}

impl ProjectStatus {
    /// Wire code, also used as the `status` query value
    pub fn code(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::Investigation => "investigation",
            ProjectStatus::Approved => "approved",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Completed => "completed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::Investigation => "Investigation",
            ProjectStatus::Approved => "Approved",
            ProjectStatus::InProgress => "In progress",
            ProjectStatus::Completed => "Completed",
        }
    }

    pub fn all() -> Vec<ProjectStatus> {
        vec![
            ProjectStatus::Planning,
            ProjectStatus::Investigation,
            ProjectStatus::Approved,
            ProjectStatus::InProgress,
            ProjectStatus::Completed,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

/// Kind of installation site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Residential,
    Commercial,
    Industrial,
}

impl ProjectType {
    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectType::Residential => "Residential",
            ProjectType::Commercial => "Commercial",
            ProjectType::Industrial => "Industrial",
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Solar installation project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub address: String,
    pub customer: String,
    pub status: ProjectStatus,
    /// Date in format "YYYY-MM-DD"
    pub created_at: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_round_trip_is_identity() {
        let body = json!({
            "id": "p1",
            "name": "Roof A",
            "address": "123 Oak Street, Sacramento, CA",
            "customer": "John Smith",
            "status": "planning",
            "createdAt": "2025-06-08",
            "type": "residential"
        });

        let project: Project = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(project.status, ProjectStatus::Planning);
        assert_eq!(project.project_type, ProjectType::Residential);
        assert_eq!(serde_json::to_value(&project).unwrap(), body);
    }

    #[test]
    fn test_status_codes() {
        for status in ProjectStatus::all() {
            assert_eq!(ProjectStatus::from_code(status.code()), Some(status));
            let encoded = serde_json::to_value(status).unwrap();
            assert_eq!(encoded, json!(status.code()));
        }
        assert_eq!(ProjectStatus::from_code("cancelled"), None);
    }
}
