use crate::dashboards::SolarOverviewDashboard;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app-shell">
            <SolarOverviewDashboard />
        </main>
    }
}
