//! Supervisors Page
//!
//! Shift schedules and fee-collection tracking: supervisors, monthly
//! financial reports, and recent shifts, each independently paginated.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{Loading, Pagination, StatCard};
use crate::context::AppContext;
use crate::format;
use crate::models::{Shift, Supervisor, SupervisorReport};
use crate::paging::{CollectionView, FieldAccessor};

const PAGE_SIZE: usize = 20;

// These tables have no search box; the accessors are empty and the empty
// term matches every row.
const SUPERVISOR_FIELDS: &[FieldAccessor<Supervisor>] = &[];
const REPORT_FIELDS: &[FieldAccessor<SupervisorReport>] = &[];
const SHIFT_FIELDS: &[FieldAccessor<Shift>] = &[];

fn opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "N/A".to_string())
}

/// A shift is active today when it has checked in but not out, and the
/// check-in falls on the current date.
fn is_active_today(shift: &Shift) -> bool {
    match (&shift.check_in_time, &shift.check_out_time) {
        (Some(check_in), None) => format::is_today(check_in),
        _ => false,
    }
}

#[component]
pub fn SupervisorsPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (supervisors, set_supervisors) = signal(Vec::<Supervisor>::new());
    let (shifts, set_shifts) = signal(Vec::<Shift>::new());
    let (reports, set_reports) = signal(Vec::<SupervisorReport>::new());
    let (loading, set_loading) = signal(true);

    let supervisors_view = RwSignal::new(CollectionView::new(PAGE_SIZE));
    let reports_view = RwSignal::new(CollectionView::new(PAGE_SIZE));
    let shifts_view = RwSignal::new(CollectionView::new(PAGE_SIZE));

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            match api::get_supervisors().await {
                Ok(loaded) => {
                    supervisors_view.update(|cv| cv.sync(&loaded, SUPERVISOR_FIELDS));
                    set_supervisors.set(loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[supervisors] fetch failed: {e}").into())
                }
            }
            match api::get_all_shifts().await {
                Ok(loaded) => {
                    shifts_view.update(|cv| cv.sync(&loaded, SHIFT_FIELDS));
                    set_shifts.set(loaded);
                }
                Err(e) => web_sys::console::error_1(
                    &format!("[supervisors] shift fetch failed: {e}").into(),
                ),
            }
            match api::get_monthly_reports().await {
                Ok(loaded) => {
                    reports_view.update(|cv| cv.sync(&loaded, REPORT_FIELDS));
                    set_reports.set(loaded);
                }
                Err(e) => web_sys::console::error_1(
                    &format!("[supervisors] report fetch failed: {e}").into(),
                ),
            }
            set_loading.set(false);
        });
    });

    let supervisors_window =
        Memo::new(move |_| supervisors_view.get().window(&supervisors.get(), SUPERVISOR_FIELDS));
    let reports_window =
        Memo::new(move |_| reports_view.get().window(&reports.get(), REPORT_FIELDS));
    let shifts_window = Memo::new(move |_| shifts_view.get().window(&shifts.get(), SHIFT_FIELDS));

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Supervisor Management"</h1>
                <p>"Monitor shift schedules and fee collection tracking"</p>
            </div>

            <Show when=move || loading.get()>
                <Loading />
            </Show>

            <Show when=move || !loading.get()>
                <div class="stat-grid">
                    <StatCard
                        title="Total Supervisors"
                        value=Signal::derive(move || supervisors.get().len().to_string())
                    />
                    <StatCard
                        title="Active Shifts Today"
                        value=Signal::derive(move || {
                            shifts.get().iter().filter(|s| is_active_today(s)).count().to_string()
                        })
                    />
                    <StatCard
                        title="Total Collection (Month)"
                        value=Signal::derive(move || {
                            let total: f64 =
                                reports.get().iter().map(|r| r.total_money_made).sum();
                            format::vnd(total)
                        })
                    />
                </div>

                <div class="card">
                    <h2>"All Supervisors"</h2>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"Name"</th>
                                <th>"Phone"</th>
                                <th>"Email"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || supervisors_window.get().page_items
                                key=|s| s.supervisor_id
                                children=move |supervisor| {
                                    view! {
                                        <tr>
                                            <td>{supervisor.supervisor_id}</td>
                                            <td class="cell-strong">{opt(&supervisor.name)}</td>
                                            <td>{opt(&supervisor.phone_number)}</td>
                                            <td>{opt(&supervisor.email)}</td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>

                    <Pagination
                        meta=Signal::derive(move || supervisors_window.get().meta())
                        on_page_change=Callback::new(move |page: usize| {
                            let total = supervisors_window.get().total_pages;
                            supervisors_view.update(|cv| cv.set_page(page, total));
                        })
                    />
                </div>

                <Show when=move || !reports.get().is_empty()>
                    <div class="card">
                        <h2>"Monthly Financial Report"</h2>
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Supervisor"</th>
                                    <th>"Total Shifts"</th>
                                    <th>"Money Collected"</th>
                                    <th>"Salary"</th>
                                    <th>"Report Month"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || {
                                        reports_window.get().page_items.into_iter().enumerate().collect::<Vec<_>>()
                                    }
                                    key=|(idx, r)| (r.supervisor_report_id, *idx)
                                    children=move |(_, report)| {
                                        view! {
                                            <tr>
                                                <td class="cell-strong">{opt(&report.supervisor_name)}</td>
                                                <td>
                                                    <span class="pill">
                                                        {format!("{} shifts", report.total_shifts_made)}
                                                    </span>
                                                </td>
                                                <td class="cell-money">
                                                    {format::vnd(report.total_money_made)}
                                                </td>
                                                <td>{format::vnd(report.salary)}</td>
                                                <td>{format::date(report.month.as_deref())}</td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>

                        <Pagination
                            meta=Signal::derive(move || reports_window.get().meta())
                            on_page_change=Callback::new(move |page: usize| {
                                let total = reports_window.get().total_pages;
                                reports_view.update(|cv| cv.set_page(page, total));
                            })
                        />
                    </div>
                </Show>

                <div class="card">
                    <h2>"Recent Shifts"</h2>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Shift ID"</th>
                                <th>"Supervisor"</th>
                                <th>"Day"</th>
                                <th>"Check In"</th>
                                <th>"Check Out"</th>
                                <th>"Money Collected"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || shifts_window.get().page_items
                                key=|s| s.shift_id
                                children=move |shift| {
                                    view! {
                                        <tr>
                                            <td>{shift.shift_id}</td>
                                            <td class="cell-strong">{opt(&shift.supervisor_name)}</td>
                                            <td>
                                                {shift
                                                    .day
                                                    .as_deref()
                                                    .map(|d| d.trim().to_string())
                                                    .unwrap_or_else(|| "N/A".to_string())}
                                            </td>
                                            <td>{format::datetime(shift.check_in_time.as_deref())}</td>
                                            <td>
                                                {match shift.check_out_time.as_deref() {
                                                    Some(t) => view! {
                                                        <span>{format::datetime(Some(t))}</span>
                                                    }
                                                        .into_any(),
                                                    None => view! {
                                                        <span class="cell-active">"Active"</span>
                                                    }
                                                        .into_any(),
                                                }}
                                            </td>
                                            <td class="cell-money">
                                                {format::vnd(shift.total_money_collected.unwrap_or(0.0))}
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>

                    <Pagination
                        meta=Signal::derive(move || shifts_window.get().meta())
                        on_page_change=Callback::new(move |page: usize| {
                            let total = shifts_window.get().total_pages;
                            shifts_view.update(|cv| cv.set_page(page, total));
                        })
                    />
                </div>
            </Show>
        </div>
    }
}
