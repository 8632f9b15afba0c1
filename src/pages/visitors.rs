//! Visitors Page
//!
//! Entry/exit recording, today's visitor stats, the currently-parked
//! table, and the searchable, paginated visit history.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, VisitorEntryArgs};
use crate::components::{Loading, Pagination, SearchBar, StatCard};
use crate::context::AppContext;
use crate::format;
use crate::models::{VisitorRecord, VisitorStats};
use crate::paging::{CollectionView, FieldAccessor};

const PAGE_SIZE: usize = 20;

const VISITOR_FIELDS: &[FieldAccessor<VisitorRecord>] = &[|v| v.license_plate.clone()];

#[component]
pub fn VisitorsPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (visitors, set_visitors) = signal(Vec::<VisitorRecord>::new());
    let (active_visitors, set_active_visitors) = signal(Vec::<VisitorRecord>::new());
    let (stats, set_stats) = signal(VisitorStats::default());
    let (loading, set_loading) = signal(true);
    let (show_entry_form, set_show_entry_form) = signal(false);
    let (show_exit_form, set_show_exit_form) = signal(false);

    let history_view = RwSignal::new(CollectionView::new(PAGE_SIZE));

    let (entry_plate, set_entry_plate) = signal(String::new());
    let (entry_space, set_entry_space) = signal(String::new());
    let (exit_plate, set_exit_plate) = signal(String::new());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            match api::get_visitors(50, 0).await {
                Ok(loaded) => {
                    history_view.update(|cv| cv.sync(&loaded, VISITOR_FIELDS));
                    set_visitors.set(loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[visitors] fetch failed: {e}").into())
                }
            }
            match api::get_active_visitors().await {
                Ok(loaded) => set_active_visitors.set(loaded),
                Err(e) => {
                    web_sys::console::error_1(&format!("[visitors] active fetch failed: {e}").into())
                }
            }
            match api::get_visitor_stats().await {
                Ok(loaded) => set_stats.set(loaded),
                Err(e) => {
                    web_sys::console::error_1(&format!("[visitors] stats fetch failed: {e}").into())
                }
            }
            set_loading.set(false);
        });
    });

    let history_window =
        Memo::new(move |_| history_view.get().window(&visitors.get(), VISITOR_FIELDS));

    let on_entry = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let plate = entry_plate.get();
        let Ok(space_id) = entry_space.get().trim().parse::<u32>() else {
            web_sys::console::error_1(&"[visitors] space id must be a number".into());
            return;
        };
        if plate.is_empty() {
            return;
        }
        spawn_local(async move {
            let args = VisitorEntryArgs { license_plate: &plate, space_id };
            match api::record_visitor_entry(&args).await {
                Ok(()) => {
                    web_sys::console::log_1(&format!("[visitors] entry recorded for {plate}").into());
                    set_show_entry_form.set(false);
                    set_entry_plate.set(String::new());
                    set_entry_space.set(String::new());
                    ctx.reload();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[visitors] entry failed: {e}").into())
                }
            }
        });
    };

    let on_exit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let plate = exit_plate.get();
        if plate.is_empty() {
            return;
        }
        spawn_local(async move {
            match api::record_visitor_exit(&plate).await {
                Ok(receipt) => {
                    let fee = receipt.parking_fee.unwrap_or(0.0);
                    web_sys::console::log_1(
                        &format!("[visitors] exit recorded, fee {}", format::vnd(fee)).into(),
                    );
                    set_show_exit_form.set(false);
                    set_exit_plate.set(String::new());
                    ctx.reload();
                }
                Err(e) => web_sys::console::error_1(&format!("[visitors] exit failed: {e}").into()),
            }
        });
    };

    view! {
        <div class="page">
            <div class="page-header">
                <div>
                    <h1>"Visitor Parking"</h1>
                    <p>"Manage visitor entries, exits, and fee calculation"</p>
                </div>
                <div class="header-actions">
                    <button
                        class="btn-primary"
                        on:click=move |_| set_show_entry_form.update(|v| *v = !*v)
                    >
                        "Record Entry"
                    </button>
                    <button
                        class="btn-secondary"
                        on:click=move |_| set_show_exit_form.update(|v| *v = !*v)
                    >
                        "Record Exit"
                    </button>
                </div>
            </div>

            <Show when=move || loading.get()>
                <Loading />
            </Show>

            <Show when=move || !loading.get()>
                <div class="stat-grid">
                    <StatCard
                        title="Total Visitors Today"
                        value=Signal::derive(move || stats.get().total_visitors_today.to_string())
                    />
                    <StatCard
                        title="Currently Parked"
                        value=Signal::derive(move || stats.get().currently_parked.to_string())
                    />
                    <StatCard
                        title="Today's Revenue"
                        value=Signal::derive(move || format::vnd(stats.get().total_revenue_today))
                    />
                </div>

                <Show when=move || show_entry_form.get()>
                    <div class="card">
                        <h2>"Record Visitor Entry"</h2>
                        <form class="form-grid" on:submit=on_entry>
                            <label>
                                "License Plate"
                                <input
                                    type="text"
                                    class="input-field"
                                    placeholder="e.g., 29A-12345"
                                    prop:value=move || entry_plate.get()
                                    on:input=move |ev| set_entry_plate.set(event_target_value(&ev))
                                    required=true
                                />
                            </label>
                            <label>
                                "Parking Space ID"
                                <input
                                    type="number"
                                    class="input-field"
                                    prop:value=move || entry_space.get()
                                    on:input=move |ev| set_entry_space.set(event_target_value(&ev))
                                    required=true
                                />
                            </label>
                            <div class="form-actions">
                                <button
                                    type="button"
                                    class="btn-secondary"
                                    on:click=move |_| set_show_entry_form.set(false)
                                >
                                    "Cancel"
                                </button>
                                <button type="submit" class="btn-primary">
                                    "Record Entry"
                                </button>
                            </div>
                        </form>
                    </div>
                </Show>

                <Show when=move || show_exit_form.get()>
                    <div class="card">
                        <h2>"Record Visitor Exit & Calculate Fee"</h2>
                        <form class="form-grid" on:submit=on_exit>
                            <label>
                                "License Plate"
                                <input
                                    type="text"
                                    class="input-field"
                                    placeholder="e.g., 29A-12345"
                                    prop:value=move || exit_plate.get()
                                    on:input=move |ev| set_exit_plate.set(event_target_value(&ev))
                                    required=true
                                />
                            </label>
                            <p class="cell-muted">
                                "Fee: Day rate (6:00-18:00) 15,000 VND/hour | Night rate (18:00-6:00) 10,000 VND/hour"
                            </p>
                            <div class="form-actions">
                                <button
                                    type="button"
                                    class="btn-secondary"
                                    on:click=move |_| set_show_exit_form.set(false)
                                >
                                    "Cancel"
                                </button>
                                <button type="submit" class="btn-primary">
                                    "Calculate & Record Exit"
                                </button>
                            </div>
                        </form>
                    </div>
                </Show>

                <Show when=move || !active_visitors.get().is_empty()>
                    <div class="card">
                        <h2>
                            "Currently Parked Visitors ("
                            {move || active_visitors.get().len()}
                            ")"
                        </h2>
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Record ID"</th>
                                    <th>"License Plate"</th>
                                    <th>"Space ID"</th>
                                    <th>"Arrival Time"</th>
                                    <th>"Duration"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || active_visitors.get()
                                    key=|v| v.record_id
                                    children=move |visitor| {
                                        let minutes = visitor
                                            .arrival_time
                                            .as_deref()
                                            .map(format::minutes_since)
                                            .unwrap_or(0);
                                        view! {
                                            <tr>
                                                <td>{visitor.record_id}</td>
                                                <td class="cell-mono">
                                                    {visitor
                                                        .license_plate
                                                        .clone()
                                                        .unwrap_or_else(|| "N/A".to_string())}
                                                </td>
                                                <td>
                                                    {visitor
                                                        .space_id
                                                        .map(|s| s.to_string())
                                                        .unwrap_or_else(|| "N/A".to_string())}
                                                </td>
                                                <td>{format::datetime(visitor.arrival_time.as_deref())}</td>
                                                <td>
                                                    <span class="pill pill-green">
                                                        {format!("{minutes} mins")}
                                                    </span>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </Show>

                <div class="card">
                    <SearchBar
                        placeholder="Search history by license plate..."
                        value=Signal::derive(move || history_view.get().term().to_string())
                        on_change=Callback::new(move |term: String| {
                            history_view.update(|cv| cv.set_term(term))
                        })
                    />

                    <h2>"Recent Visitor History"</h2>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Record ID"</th>
                                <th>"License Plate"</th>
                                <th>"Arrival"</th>
                                <th>"Departure"</th>
                                <th>"Fee (VND)"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || history_window.get().page_items
                                key=|v| v.record_id
                                children=move |visitor| {
                                    view! {
                                        <tr>
                                            <td>{visitor.record_id}</td>
                                            <td class="cell-mono">
                                                {visitor
                                                    .license_plate
                                                    .clone()
                                                    .unwrap_or_else(|| "N/A".to_string())}
                                            </td>
                                            <td>{format::datetime(visitor.arrival_time.as_deref())}</td>
                                            <td>
                                                {match visitor.departure_time.as_deref() {
                                                    Some(t) => view! {
                                                        <span>{format::datetime(Some(t))}</span>
                                                    }
                                                        .into_any(),
                                                    None => view! {
                                                        <span class="cell-active">"Still parked"</span>
                                                    }
                                                        .into_any(),
                                                }}
                                            </td>
                                            <td>
                                                {match visitor.parking_fee {
                                                    Some(fee) => format::vnd(fee),
                                                    None => "-".to_string(),
                                                }}
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>

                    <Pagination
                        meta=Signal::derive(move || history_window.get().meta())
                        on_page_change=Callback::new(move |page: usize| {
                            let total = history_window.get().total_pages;
                            history_view.update(|cv| cv.set_page(page, total));
                        })
                    />
                </div>
            </Show>
        </div>
    }
}
