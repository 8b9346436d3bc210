use std::cell::RefCell;
use std::rc::{Rc, Weak};

use contracts::dashboards::d100_solar_overview::DashboardSummary;
use contracts::domain::a001_project::Project;
use contracts::domain::a002_investigation::Investigation;
use contracts::domain::a003_work_order::WorkOrder;
use leptos::prelude::*;

use crate::shared::api::ApiError;

/// Shown when a failed cycle carries no message of its own
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to fetch dashboard data";

/// Everything one refresh cycle fetched. Always replaced as a whole.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub projects: Vec<Project>,
    pub investigations: Vec<Investigation>,
    pub work_orders: Vec<WorkOrder>,
    pub summary: Option<DashboardSummary>,
}

/// What the dashboard UI observes
///
/// `error` and `data` can both be set: a failed refresh keeps the data of the
/// last successful one on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub is_loading: bool,
    pub error: Option<String>,
    pub data: DashboardData,
}

impl Default for DashboardState {
    fn default() -> Self {
        // The first cycle starts as soon as the state exists
        Self {
            is_loading: true,
            error: None,
            data: DashboardData::default(),
        }
    }
}

impl DashboardState {
    /// Start of a cycle. Previous data stays visible.
    pub fn begin_refresh(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// End of a cycle, successful or not
    pub fn finish_refresh(&mut self, outcome: anyhow::Result<DashboardData>) {
        match outcome {
            Ok(data) => {
                self.data = data;
                self.error = None;
            }
            Err(e) => {
                self.error = Some(describe_error(&e));
            }
        }
        self.is_loading = false;
    }
}

/// Display string for a failed cycle
pub fn describe_error(err: &anyhow::Error) -> String {
    if let Some(api_error) = err.downcast_ref::<ApiError>() {
        return format!("API Error ({}): {}", api_error.status, api_error.message);
    }

    let message = err.to_string();
    if message.trim().is_empty() {
        FALLBACK_ERROR_MESSAGE.to_string()
    } else {
        message
    }
}

/// Container a refresh cycle writes its state transitions into
pub trait DashboardStore {
    /// Apply `f` to the state. Returns `false` if the container no longer exists.
    fn apply<F: FnOnce(&mut DashboardState)>(&self, f: F) -> bool;
}

impl DashboardStore for RwSignal<DashboardState> {
    fn apply<F: FnOnce(&mut DashboardState)>(&self, f: F) -> bool {
        // disposed together with its owner; a late write is dropped
        self.try_update(f).is_some()
    }
}

impl DashboardStore for Rc<RefCell<DashboardState>> {
    fn apply<F: FnOnce(&mut DashboardState)>(&self, f: F) -> bool {
        f(&mut self.borrow_mut());
        true
    }
}

impl DashboardStore for Weak<RefCell<DashboardState>> {
    fn apply<F: FnOnce(&mut DashboardState)>(&self, f: F) -> bool {
        match self.upgrade() {
            Some(state) => state.apply(f),
            None => false,
        }
    }
}
