//! Dashboard Page
//!
//! Aggregate overview: headline counters, occupancy summary, today's
//! visitor statistics, expiring subscriptions, and system alerts.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{Loading, StatCard};
use crate::context::AppContext;
use crate::format;
use crate::models::{Alert, DashboardStats, ExpiringSubscription, VisitorStats};

const EXPIRING_WINDOW_DAYS: u32 = 7;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (stats, set_stats) = signal(DashboardStats::default());
    let (expiring, set_expiring) = signal(Vec::<ExpiringSubscription>::new());
    let (visitor_stats, set_visitor_stats) = signal(VisitorStats::default());
    let (alerts, set_alerts) = signal(Vec::<Alert>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            match api::get_dashboard_stats().await {
                Ok(loaded) => set_stats.set(loaded),
                Err(e) => {
                    web_sys::console::error_1(&format!("[dashboard] stats fetch failed: {e}").into())
                }
            }
            match api::get_expiring_subscriptions(EXPIRING_WINDOW_DAYS).await {
                Ok(loaded) => set_expiring.set(loaded),
                Err(e) => web_sys::console::error_1(
                    &format!("[dashboard] expiring fetch failed: {e}").into(),
                ),
            }
            match api::get_visitor_stats().await {
                Ok(loaded) => set_visitor_stats.set(loaded),
                Err(e) => web_sys::console::error_1(
                    &format!("[dashboard] visitor stats fetch failed: {e}").into(),
                ),
            }
            match api::get_alerts().await {
                Ok(loaded) => set_alerts.set(loaded),
                Err(e) => {
                    web_sys::console::error_1(&format!("[dashboard] alerts fetch failed: {e}").into())
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Dashboard"</h1>
                <p>"Parking management overview"</p>
            </div>

            <Show when=move || loading.get()>
                <Loading />
            </Show>

            <Show when=move || !loading.get()>
                <div class="stat-grid">
                    <StatCard
                        title="Active Subscriptions"
                        value=Signal::derive(move || stats.get().active_subscriptions.to_string())
                    />
                    <StatCard
                        title="Current Visitors"
                        value=Signal::derive(move || stats.get().current_visitors.to_string())
                    />
                    <StatCard
                        title="Today's Revenue"
                        value=Signal::derive(move || format::vnd(stats.get().today_visitor_revenue))
                    />
                    <StatCard
                        title="Expiring Soon"
                        value=Signal::derive(move || stats.get().expiring_soon.to_string())
                        subtitle="Within 7 days".to_string()
                    />
                </div>

                <div class="panel-grid">
                    <div class="card">
                        <h2>"Parking Occupancy"</h2>
                        <div class="occupancy-summary">
                            <div class="occupancy-row">
                                <span>"Occupied"</span>
                                <span class="cell-strong">
                                    {move || stats.get().current_occupied_spaces}
                                </span>
                            </div>
                            <div class="occupancy-row">
                                <span>"Available"</span>
                                <span class="cell-strong">
                                    {move || stats.get().total_available_spaces}
                                </span>
                            </div>
                            <div class="occupancy-bar">
                                <div
                                    class="occupancy-fill"
                                    style:width=move || {
                                        let s = stats.get();
                                        let total = s.current_occupied_spaces + s.total_available_spaces;
                                        if total == 0 {
                                            "0%".to_string()
                                        } else {
                                            format!(
                                                "{}%",
                                                s.current_occupied_spaces * 100 / total,
                                            )
                                        }
                                    }
                                ></div>
                            </div>
                        </div>
                    </div>

                    <div class="card">
                        <h2>"Visitor Statistics (Today)"</h2>
                        <div class="occupancy-summary">
                            <div class="occupancy-row">
                                <span>"Total Visitors"</span>
                                <span class="cell-strong">
                                    {move || visitor_stats.get().total_visitors_today}
                                </span>
                            </div>
                            <div class="occupancy-row">
                                <span>"Currently Parked"</span>
                                <span class="cell-strong">
                                    {move || visitor_stats.get().currently_parked}
                                </span>
                            </div>
                            <div class="occupancy-row">
                                <span>"Total Revenue"</span>
                                <span class="cell-money">
                                    {move || format::vnd(visitor_stats.get().total_revenue_today)}
                                </span>
                            </div>
                        </div>
                    </div>
                </div>

                <Show when=move || !expiring.get().is_empty()>
                    <div class="card">
                        <h2>"Subscriptions Expiring Soon"</h2>
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Resident"</th>
                                    <th>"License Plate"</th>
                                    <th>"Type"</th>
                                    <th>"Expiration Date"</th>
                                    <th>"Contact"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || {
                                        expiring.get().into_iter().take(5).collect::<Vec<_>>()
                                    }
                                    key=|s| s.subscription_id
                                    children=move |sub| {
                                        view! {
                                            <tr>
                                                <td class="cell-strong">
                                                    {sub
                                                        .resident_name
                                                        .clone()
                                                        .unwrap_or_else(|| "N/A".to_string())}
                                                </td>
                                                <td class="cell-mono">
                                                    {sub.license_plate.clone().unwrap_or_default()}
                                                </td>
                                                <td>
                                                    <span class="pill">
                                                        {sub
                                                            .subscription_type
                                                            .clone()
                                                            .unwrap_or_else(|| "N/A".to_string())}
                                                    </span>
                                                </td>
                                                <td>{format::date(sub.expiration_date.as_deref())}</td>
                                                <td>
                                                    {sub.email.clone().unwrap_or_else(|| "N/A".to_string())}
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </Show>

                <Show when=move || !alerts.get().is_empty()>
                    <div class="card">
                        <h2>"System Alerts"</h2>
                        {move || {
                            alerts
                                .get()
                                .into_iter()
                                .take(5)
                                .map(|alert| {
                                    view! {
                                        <div class="alert-row">
                                            <p class="cell-strong">
                                                {alert.alert_type.replace('_', " ")}
                                            </p>
                                            <p class="cell-muted">{alert.message}</p>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </Show>
        </div>
    }
}
