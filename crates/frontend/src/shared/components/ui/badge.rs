use contracts::domain::a001_project::ProjectStatus;
use contracts::domain::a002_investigation::InvestigationStatus;
use contracts::domain::a003_work_order::WorkOrderStatus;
use leptos::prelude::*;

/// Visual variant of a status badge
pub trait BadgeStatus {
    fn label(&self) -> &'static str;
    /// "primary", "success", "warning", "error" or "neutral"
    fn variant(&self) -> &'static str;
}

impl BadgeStatus for ProjectStatus {
    fn label(&self) -> &'static str {
        self.display_name()
    }

    fn variant(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "neutral",
            ProjectStatus::Investigation => "warning",
            ProjectStatus::Approved => "primary",
            ProjectStatus::InProgress => "primary",
            ProjectStatus::Completed => "success",
        }
    }
}

impl BadgeStatus for InvestigationStatus {
    fn label(&self) -> &'static str {
        self.display_name()
    }

    fn variant(&self) -> &'static str {
        match self {
            InvestigationStatus::Completed => "success",
            InvestigationStatus::InProgress => "warning",
            InvestigationStatus::Failed => "error",
        }
    }
}

impl BadgeStatus for WorkOrderStatus {
    fn label(&self) -> &'static str {
        self.display_name()
    }

    fn variant(&self) -> &'static str {
        match self {
            WorkOrderStatus::Draft => "neutral",
            WorkOrderStatus::Approved => "primary",
            WorkOrderStatus::InProgress => "warning",
            WorkOrderStatus::Completed => "success",
        }
    }
}

/// Status badge for any entity status
#[component]
pub fn StatusBadge<S: BadgeStatus + 'static>(status: S) -> impl IntoView {
    let class = format!("badge badge--{}", status.variant());
    view! { <span class=class>{status.label()}</span> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_investigation_is_error() {
        assert_eq!(InvestigationStatus::Failed.variant(), "error");
        assert_eq!(WorkOrderStatus::Completed.variant(), "success");
        assert_eq!(ProjectStatus::InProgress.label(), "In progress");
    }
}
