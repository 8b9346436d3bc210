use contracts::dashboards::d100_solar_overview::DashboardSummary;
use leptos::prelude::*;

use crate::dashboards::d100_solar_overview::hook::use_dashboard_data;
use crate::shared::components::ui::StatusBadge;
use crate::shared::components::{PageHeader, StatCard};
use crate::shared::date_utils::format_date;

/// Solar overview dashboard component
#[component]
pub fn SolarOverviewDashboard() -> impl IntoView {
    let dashboard = use_dashboard_data();
    let is_loading = dashboard.is_loading();
    let error = dashboard.error();
    let data = dashboard.data();

    let summary = Signal::derive(move || data.with(|d| d.summary));
    let counter = move |pick: fn(&DashboardSummary) -> u32| {
        Signal::derive(move || summary.get().map(|s| pick(&s)))
    };

    view! {
        <div id="d100_solar_overview--dashboard" class="d100-dashboard">
            <PageHeader title="Solar projects" subtitle="Projects, investigations and work orders">
                <button
                    type="button"
                    class="button button--secondary"
                    disabled=move || is_loading.get()
                    on:click=move |_| dashboard.refresh_detached()
                >
                    {move || if is_loading.get() { "Refreshing..." } else { "Refresh" }}
                </button>
            </PageHeader>

            {move || {
                if is_loading.get() {
                    view! {
                        <div class="d100-loading">
                            <span>"Loading dashboard..."</span>
                        </div>
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            // stale data stays visible under the error
            {move || {
                if let Some(err) = error.get() {
                    view! {
                        <div class="d100-error">
                            <strong>"\u{26a0} Error: "</strong>
                            {err}
                        </div>
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            <div class="d100-summary">
                <StatCard label="Projects" value=counter(|s| s.total_projects) />
                <StatCard label="Active investigations" value=counter(|s| s.active_investigations) variant="warning" />
                <StatCard label="Completed investigations" value=counter(|s| s.completed_investigations) variant="success" />
                <StatCard label="Active work orders" value=counter(|s| s.active_work_orders) variant="warning" />
                <StatCard label="Completed work orders" value=counter(|s| s.completed_work_orders) variant="success" />
            </div>

            <section class="d100-section">
                <h2>"Projects"</h2>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Customer"</th>
                            <th>"Address"</th>
                            <th>"Type"</th>
                            <th>"Status"</th>
                            <th>"Created"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || data.with(|d| {
                            d.projects.iter().map(|p| view! {
                                <tr>
                                    <td>{p.name.clone()}</td>
                                    <td>{p.customer.clone()}</td>
                                    <td>{p.address.clone()}</td>
                                    <td>{p.project_type.display_name()}</td>
                                    <td><StatusBadge status=p.status /></td>
                                    <td>{format_date(&p.created_at)}</td>
                                </tr>
                            }).collect_view()
                        })}
                    </tbody>
                </table>
            </section>

            <section class="d100-section">
                <h2>"Investigations"</h2>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Title"</th>
                            <th>"Project"</th>
                            <th>"Findings"</th>
                            <th>"Status"</th>
                            <th>"Created"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || data.with(|d| {
                            d.investigations.iter().map(|i| view! {
                                <tr title=i.summary.clone()>
                                    <td>{i.title.clone()}</td>
                                    <td>{i.project_id.clone()}</td>
                                    <td>{i.findings.len()}</td>
                                    <td><StatusBadge status=i.status /></td>
                                    <td>{format_date(&i.created_at)}</td>
                                </tr>
                            }).collect_view()
                        })}
                    </tbody>
                </table>
            </section>

            <section class="d100-section">
                <h2>"Work orders"</h2>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Title"</th>
                            <th>"Project"</th>
                            <th>"Tasks"</th>
                            <th>"Timeline"</th>
                            <th>"Status"</th>
                            <th>"Created"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || data.with(|d| {
                            d.work_orders.iter().map(|w| view! {
                                <tr title=w.description.clone()>
                                    <td>{w.title.clone()}</td>
                                    <td>{w.project_id.clone()}</td>
                                    <td>{w.tasks.len()}</td>
                                    <td>{w.timeline.clone()}</td>
                                    <td><StatusBadge status=w.status /></td>
                                    <td>{format_date(&w.created_at)}</td>
                                </tr>
                            }).collect_view()
                        })}
                    </tbody>
                </table>
            </section>
        </div>
    }
}
