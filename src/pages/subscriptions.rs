//! Subscriptions Page
//!
//! Create and renew parking subscriptions; expiring-soon banner plus the
//! full searchable, paginated table with expiry highlighting.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, CreateSubscriptionArgs};
use crate::components::{Loading, Pagination, SearchBar};
use crate::context::AppContext;
use crate::format;
use crate::models::{ExpiringSubscription, Subscription};
use crate::paging::{CollectionView, FieldAccessor};

const PAGE_SIZE: usize = 20;
const EXPIRING_WINDOW_DAYS: u32 = 7;

const SUBSCRIPTION_FIELDS: &[FieldAccessor<Subscription>] =
    &[|s| s.resident_name.clone(), |s| s.license_plate.clone()];

fn renew(id: u32, ctx: AppContext) {
    spawn_local(async move {
        match api::renew_subscription(id).await {
            Ok(()) => {
                web_sys::console::log_1(&format!("[subscriptions] renewed #{id}").into());
                ctx.reload();
            }
            Err(e) => {
                web_sys::console::error_1(&format!("[subscriptions] renew failed: {e}").into())
            }
        }
    });
}

#[component]
pub fn SubscriptionsPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (subscriptions, set_subscriptions) = signal(Vec::<Subscription>::new());
    let (expiring, set_expiring) = signal(Vec::<ExpiringSubscription>::new());
    let (loading, set_loading) = signal(true);
    let (show_form, set_show_form) = signal(false);

    let subs_view = RwSignal::new(CollectionView::new(PAGE_SIZE));

    let (form_vehicle, set_form_vehicle) = signal(String::new());
    let (form_resident, set_form_resident) = signal(String::new());
    let (form_type, set_form_type) = signal(String::from("monthly"));
    let (form_cost, set_form_cost) = signal(String::new());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            match api::get_subscriptions(100, 0).await {
                Ok(loaded) => {
                    subs_view.update(|cv| cv.sync(&loaded, SUBSCRIPTION_FIELDS));
                    set_subscriptions.set(loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[subscriptions] fetch failed: {e}").into())
                }
            }
            match api::get_expiring_subscriptions(EXPIRING_WINDOW_DAYS).await {
                Ok(loaded) => set_expiring.set(loaded),
                Err(e) => web_sys::console::error_1(
                    &format!("[subscriptions] expiring fetch failed: {e}").into(),
                ),
            }
            set_loading.set(false);
        });
    });

    let subs_window =
        Memo::new(move |_| subs_view.get().window(&subscriptions.get(), SUBSCRIPTION_FIELDS));

    let on_create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Ok(vehicle_id) = form_vehicle.get().trim().parse::<u32>() else {
            web_sys::console::error_1(&"[subscriptions] vehicle id must be a number".into());
            return;
        };
        let Ok(resident_id) = form_resident.get().trim().parse::<u32>() else {
            web_sys::console::error_1(&"[subscriptions] resident id must be a number".into());
            return;
        };
        let Ok(cost) = form_cost.get().trim().parse::<f64>() else {
            web_sys::console::error_1(&"[subscriptions] cost must be a number".into());
            return;
        };
        let subscription_type = form_type.get();
        spawn_local(async move {
            let args = CreateSubscriptionArgs {
                vehicle_id,
                resident_id,
                subscription_type: &subscription_type,
                cost,
            };
            match api::create_subscription(&args).await {
                Ok(()) => {
                    web_sys::console::log_1(&"[subscriptions] subscription created".into());
                    set_show_form.set(false);
                    set_form_vehicle.set(String::new());
                    set_form_resident.set(String::new());
                    set_form_type.set(String::from("monthly"));
                    set_form_cost.set(String::new());
                    ctx.reload();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[subscriptions] create failed: {e}").into())
                }
            }
        });
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Parking Subscriptions"</h1>
                <p>"Manage and renew parking subscriptions"</p>
            </div>

            <Show when=move || loading.get()>
                <Loading />
            </Show>

            <Show when=move || !loading.get()>
                <button class="btn-primary" on:click=move |_| set_show_form.update(|v| *v = !*v)>
                    "+ New Subscription"
                </button>

                <Show when=move || show_form.get()>
                    <div class="card">
                        <h2>"Create Subscription"</h2>
                        <form class="form-grid" on:submit=on_create>
                            <label>
                                "Vehicle ID"
                                <input
                                    type="number"
                                    class="input-field"
                                    prop:value=move || form_vehicle.get()
                                    on:input=move |ev| set_form_vehicle.set(event_target_value(&ev))
                                    required=true
                                />
                            </label>
                            <label>
                                "Resident ID"
                                <input
                                    type="number"
                                    class="input-field"
                                    prop:value=move || form_resident.get()
                                    on:input=move |ev| set_form_resident.set(event_target_value(&ev))
                                    required=true
                                />
                            </label>
                            <label>
                                "Subscription Type"
                                <select
                                    class="input-field"
                                    prop:value=move || form_type.get()
                                    on:change=move |ev| set_form_type.set(event_target_value(&ev))
                                >
                                    <option value="monthly">"Monthly"</option>
                                    <option value="quarterly">"Quarterly"</option>
                                    <option value="yearly">"Yearly"</option>
                                </select>
                            </label>
                            <label>
                                "Cost (VND)"
                                <input
                                    type="number"
                                    class="input-field"
                                    prop:value=move || form_cost.get()
                                    on:input=move |ev| set_form_cost.set(event_target_value(&ev))
                                    required=true
                                />
                            </label>
                            <div class="form-actions">
                                <button
                                    type="button"
                                    class="btn-secondary"
                                    on:click=move |_| set_show_form.set(false)
                                >
                                    "Cancel"
                                </button>
                                <button type="submit" class="btn-primary">
                                    "Create Subscription"
                                </button>
                            </div>
                        </form>
                    </div>
                </Show>

                <Show when=move || !expiring.get().is_empty()>
                    <div class="card banner-warning">
                        <h3>
                            {move || {
                                let n = expiring.get().len();
                                if n == 1 {
                                    "1 Subscription Expiring Soon".to_string()
                                } else {
                                    format!("{n} Subscriptions Expiring Soon")
                                }
                            }}
                        </h3>
                        <p>
                            "These subscriptions will expire within 7 days. Contact residents to renew."
                        </p>
                        <For
                            each={move || expiring.get().into_iter().take(3).collect::<Vec<_>>()}
                            key=|s| s.subscription_id
                            children=move |sub| {
                                let id = sub.subscription_id;
                                view! {
                                    <div class="banner-row">
                                        <div>
                                            <p class="cell-strong">
                                                {sub.resident_name.clone().unwrap_or_else(|| "N/A".to_string())}
                                            </p>
                                            <p class="cell-muted">
                                                {sub.license_plate.clone().unwrap_or_default()}
                                                " | Expires: "
                                                {format::date(sub.expiration_date.as_deref())}
                                            </p>
                                        </div>
                                        <button
                                            class="btn-secondary"
                                            on:click=move |_| renew(id, ctx)
                                        >
                                            "Renew"
                                        </button>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>

                <div class="card">
                    <SearchBar
                        placeholder="Search by resident or license plate..."
                        value=Signal::derive(move || subs_view.get().term().to_string())
                        on_change=Callback::new(move |term: String| {
                            subs_view.update(|cv| cv.set_term(term))
                        })
                    />

                    <h2>
                        "All Subscriptions ("
                        {move || subs_window.get().total_items}
                        ")"
                    </h2>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"Resident"</th>
                                <th>"License Plate"</th>
                                <th>"Type"</th>
                                <th>"Start Date"</th>
                                <th>"Expiration"</th>
                                <th>"Cost"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || subs_window.get().page_items
                                key=|s| s.subscription_id
                                children=move |sub| {
                                    let id = sub.subscription_id;
                                    let days_left = sub
                                        .expiration_date
                                        .as_deref()
                                        .map(format::days_until);
                                    let row_class = match days_left {
                                        Some(d) if d < 0.0 => "row-expired",
                                        Some(d) if d < 7.0 => "row-expiring",
                                        _ => "",
                                    };
                                    view! {
                                        <tr class=row_class>
                                            <td>{sub.subscription_id}</td>
                                            <td class="cell-strong">
                                                {sub.resident_name.clone().unwrap_or_else(|| "N/A".to_string())}
                                            </td>
                                            <td class="cell-mono">
                                                {sub.license_plate.clone().unwrap_or_else(|| "N/A".to_string())}
                                            </td>
                                            <td>
                                                <span class="pill">{sub.type_label()}</span>
                                            </td>
                                            <td>{format::date(sub.start_date.as_deref())}</td>
                                            <td>{format::date(sub.expiration_date.as_deref())}</td>
                                            <td>{format::vnd(sub.cost.unwrap_or(0.0))}</td>
                                            <td>
                                                <button
                                                    class="icon-btn"
                                                    title="Renew subscription"
                                                    on:click=move |_| renew(id, ctx)
                                                >
                                                    "⟳"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>

                    <Pagination
                        meta=Signal::derive(move || subs_window.get().meta())
                        on_page_change=Callback::new(move |page: usize| {
                            let total = subs_window.get().total_pages;
                            subs_view.update(|cv| cv.set_page(page, total));
                        })
                    />
                </div>
            </Show>
        </div>
    }
}
