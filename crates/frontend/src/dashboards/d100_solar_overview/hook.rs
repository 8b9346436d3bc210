use leptos::prelude::*;
use leptos::task::spawn_local;

use super::loader::run_refresh_cycle;
use super::state::{DashboardData, DashboardState};
use crate::shared::api::{ApiClient, GlooTransport, HttpTransport};

/// Handle returned by [`use_dashboard_data`]
///
/// Owned by the reactive owner that created it. Once that owner is disposed,
/// in-flight cycles finish without touching anything.
pub struct DashboardResource<T: 'static = GlooTransport> {
    state: RwSignal<DashboardState>,
    client: StoredValue<ApiClient<T>, LocalStorage>,
}

impl<T: 'static> Clone for DashboardResource<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for DashboardResource<T> {}

/// Dashboard data for the current page, loaded through the browser client
pub fn use_dashboard_data() -> DashboardResource {
    use_dashboard_data_with(ApiClient::browser())
}

/// Same as [`use_dashboard_data`] with an explicit client.
/// Starts the first refresh cycle immediately.
pub fn use_dashboard_data_with<T>(client: ApiClient<T>) -> DashboardResource<T>
where
    T: HttpTransport + Clone + 'static,
{
    let resource = DashboardResource {
        state: RwSignal::new(DashboardState::default()),
        client: StoredValue::new_local(client),
    };
    resource.refresh_detached();
    resource
}

impl<T> DashboardResource<T>
where
    T: HttpTransport + Clone + 'static,
{
    pub fn is_loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_loading))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error.clone()))
    }

    pub fn data(&self) -> Signal<DashboardData> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.data.clone()))
    }

    /// Run a full refresh cycle; resolves once the state has been updated
    pub async fn refresh(self) {
        let Some(client) = self.client.try_get_value() else {
            return;
        };
        run_refresh_cycle(&client, &self.state).await;
    }

    /// Fire-and-forget [`refresh`](Self::refresh) for event handlers
    pub fn refresh_detached(self) {
        spawn_local(self.refresh());
    }
}
