//! Residents Page
//!
//! Two tabs: resident records and vehicle registrations, each a
//! searchable, paginated table with a create form and row deletion.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, CreateResidentArgs, CreateVehicleArgs};
use crate::components::{DeleteConfirmButton, Loading, Pagination, SearchBar};
use crate::context::AppContext;
use crate::models::{Resident, Vehicle};
use crate::paging::{CollectionView, FieldAccessor};

const PAGE_SIZE: usize = 20;

const RESIDENT_FIELDS: &[FieldAccessor<Resident>] =
    &[|r| Some(r.name.clone()), |r| r.email.clone()];

const VEHICLE_FIELDS: &[FieldAccessor<Vehicle>] =
    &[|v| Some(v.license_plate.clone()), |v| v.resident_name.clone()];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Residents,
    Vehicles,
}

fn opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "N/A".to_string())
}

#[component]
pub fn ResidentsPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (residents, set_residents) = signal(Vec::<Resident>::new());
    let (vehicles, set_vehicles) = signal(Vec::<Vehicle>::new());
    let (loading, set_loading) = signal(true);
    let (active_tab, set_active_tab) = signal(Tab::Residents);
    let (show_resident_form, set_show_resident_form) = signal(false);
    let (show_vehicle_form, set_show_vehicle_form) = signal(false);

    // Each table owns its own filter term and current page.
    let residents_view = RwSignal::new(CollectionView::new(PAGE_SIZE));
    let vehicles_view = RwSignal::new(CollectionView::new(PAGE_SIZE));

    // Resident form
    let (res_apartment, set_res_apartment) = signal(String::new());
    let (res_name, set_res_name) = signal(String::new());
    let (res_phone, set_res_phone) = signal(String::new());
    let (res_email, set_res_email) = signal(String::new());

    // Vehicle form
    let (veh_resident, set_veh_resident) = signal(String::new());
    let (veh_plate, set_veh_plate) = signal(String::new());
    let (veh_type, set_veh_type) = signal(String::from("Car"));

    // Load both collections on mount and whenever a mutation bumps the trigger
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            match api::get_residents(100, 0).await {
                Ok(loaded) => {
                    residents_view.update(|cv| cv.sync(&loaded, RESIDENT_FIELDS));
                    set_residents.set(loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[residents] fetch failed: {e}").into())
                }
            }
            match api::get_vehicles(100, 0).await {
                Ok(loaded) => {
                    vehicles_view.update(|cv| cv.sync(&loaded, VEHICLE_FIELDS));
                    set_vehicles.set(loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[residents] vehicle fetch failed: {e}").into())
                }
            }
            set_loading.set(false);
        });
    });

    let residents_window =
        Memo::new(move |_| residents_view.get().window(&residents.get(), RESIDENT_FIELDS));
    let vehicles_window =
        Memo::new(move |_| vehicles_view.get().window(&vehicles.get(), VEHICLE_FIELDS));

    let on_create_resident = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Ok(apartment_id) = res_apartment.get().trim().parse::<u32>() else {
            web_sys::console::error_1(&"[residents] apartment id must be a number".into());
            return;
        };
        let name = res_name.get();
        let phone = res_phone.get();
        let email = res_email.get();
        if name.is_empty() {
            return;
        }
        spawn_local(async move {
            let args = CreateResidentArgs {
                apartment_id,
                name: &name,
                phone_number: &phone,
                email: &email,
            };
            match api::create_resident(&args).await {
                Ok(()) => {
                    web_sys::console::log_1(&"[residents] resident created".into());
                    set_show_resident_form.set(false);
                    set_res_apartment.set(String::new());
                    set_res_name.set(String::new());
                    set_res_phone.set(String::new());
                    set_res_email.set(String::new());
                    ctx.reload();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[residents] create failed: {e}").into())
                }
            }
        });
    };

    let on_create_vehicle = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Ok(resident_id) = veh_resident.get().trim().parse::<u32>() else {
            web_sys::console::error_1(&"[residents] resident id must be a number".into());
            return;
        };
        let plate = veh_plate.get();
        let vehicle_type = veh_type.get();
        if plate.is_empty() {
            return;
        }
        spawn_local(async move {
            let args = CreateVehicleArgs {
                resident_id,
                license_plate: &plate,
                vehicle_type: &vehicle_type,
            };
            match api::create_vehicle(&args).await {
                Ok(()) => {
                    web_sys::console::log_1(&"[residents] vehicle registered".into());
                    set_show_vehicle_form.set(false);
                    set_veh_resident.set(String::new());
                    set_veh_plate.set(String::new());
                    set_veh_type.set(String::from("Car"));
                    ctx.reload();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[residents] register failed: {e}").into())
                }
            }
        });
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Residents & Vehicles"</h1>
                <p>"Manage resident information and vehicle registrations"</p>
            </div>

            <Show when=move || loading.get()>
                <Loading />
            </Show>

            <Show when=move || !loading.get()>
                <div class="tabs-container">
                    <button
                        class=move || {
                            if active_tab.get() == Tab::Residents { "tab-btn active" } else { "tab-btn" }
                        }
                        on:click=move |_| set_active_tab.set(Tab::Residents)
                    >
                        "Residents"
                    </button>
                    <button
                        class=move || {
                            if active_tab.get() == Tab::Vehicles { "tab-btn active" } else { "tab-btn" }
                        }
                        on:click=move |_| set_active_tab.set(Tab::Vehicles)
                    >
                        "Vehicles"
                    </button>
                </div>

                <Show when=move || active_tab.get() == Tab::Residents>
                    <button
                        class="btn-secondary"
                        on:click=move |_| set_show_resident_form.update(|v| *v = !*v)
                    >
                        "+ Add Resident"
                    </button>

                    <div class="card">
                        <SearchBar
                            placeholder="Search by name or email..."
                            value=Signal::derive(move || residents_view.get().term().to_string())
                            on_change=Callback::new(move |term: String| {
                                residents_view.update(|cv| cv.set_term(term))
                            })
                        />
                    </div>

                    <Show when=move || show_resident_form.get()>
                        <div class="card">
                            <h2>"New Resident"</h2>
                            <form class="form-grid" on:submit=on_create_resident>
                                <label>
                                    "Apartment ID"
                                    <input
                                        type="number"
                                        class="input-field"
                                        prop:value=move || res_apartment.get()
                                        on:input=move |ev| set_res_apartment.set(event_target_value(&ev))
                                        required=true
                                    />
                                </label>
                                <label>
                                    "Full Name"
                                    <input
                                        type="text"
                                        class="input-field"
                                        prop:value=move || res_name.get()
                                        on:input=move |ev| set_res_name.set(event_target_value(&ev))
                                        required=true
                                    />
                                </label>
                                <label>
                                    "Phone Number"
                                    <input
                                        type="text"
                                        class="input-field"
                                        prop:value=move || res_phone.get()
                                        on:input=move |ev| set_res_phone.set(event_target_value(&ev))
                                        required=true
                                    />
                                </label>
                                <label>
                                    "Email"
                                    <input
                                        type="email"
                                        class="input-field"
                                        prop:value=move || res_email.get()
                                        on:input=move |ev| set_res_email.set(event_target_value(&ev))
                                        required=true
                                    />
                                </label>
                                <div class="form-actions">
                                    <button
                                        type="button"
                                        class="btn-secondary"
                                        on:click=move |_| set_show_resident_form.set(false)
                                    >
                                        "Cancel"
                                    </button>
                                    <button type="submit" class="btn-primary">
                                        "Create Resident"
                                    </button>
                                </div>
                            </form>
                        </div>
                    </Show>

                    <div class="card">
                        <h2>
                            "Residents ("
                            {move || residents_window.get().total_items}
                            ")"
                        </h2>
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"ID"</th>
                                    <th>"Name"</th>
                                    <th>"Building"</th>
                                    <th>"Floor"</th>
                                    <th>"Phone"</th>
                                    <th>"Email"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || residents_window.get().page_items
                                    key=|r| r.resident_id
                                    children=move |resident| {
                                        let id = resident.resident_id;
                                        view! {
                                            <tr>
                                                <td>{resident.resident_id}</td>
                                                <td class="cell-strong">{resident.name.clone()}</td>
                                                <td>
                                                    {resident
                                                        .building_id
                                                        .map(|b| b.to_string())
                                                        .unwrap_or_else(|| "N/A".to_string())}
                                                </td>
                                                <td>
                                                    {resident
                                                        .floor
                                                        .map(|f| f.to_string())
                                                        .unwrap_or_else(|| "N/A".to_string())}
                                                </td>
                                                <td>{opt(&resident.phone_number)}</td>
                                                <td>{opt(&resident.email)}</td>
                                                <td>
                                                    <DeleteConfirmButton
                                                        subject="resident"
                                                        on_confirm=Callback::new(move |_| {
                                                            spawn_local(async move {
                                                                match api::delete_resident(id).await {
                                                                    Ok(()) => ctx.reload(),
                                                                    Err(e) => {
                                                                        web_sys::console::error_1(
                                                                            &format!("[residents] delete failed: {e}").into(),
                                                                        )
                                                                    }
                                                                }
                                                            });
                                                        })
                                                    />
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>

                        <Pagination
                            meta=Signal::derive(move || residents_window.get().meta())
                            on_page_change=Callback::new(move |page: usize| {
                                let total = residents_window.get().total_pages;
                                residents_view.update(|cv| cv.set_page(page, total));
                            })
                        />
                    </div>
                </Show>

                <Show when=move || active_tab.get() == Tab::Vehicles>
                    <button
                        class="btn-secondary"
                        on:click=move |_| set_show_vehicle_form.update(|v| *v = !*v)
                    >
                        "+ Register Vehicle"
                    </button>

                    <div class="card">
                        <SearchBar
                            placeholder="Search by license plate or owner..."
                            value=Signal::derive(move || vehicles_view.get().term().to_string())
                            on_change=Callback::new(move |term: String| {
                                vehicles_view.update(|cv| cv.set_term(term))
                            })
                        />
                    </div>

                    <Show when=move || show_vehicle_form.get()>
                        <div class="card">
                            <h2>"Register Vehicle"</h2>
                            <form class="form-grid" on:submit=on_create_vehicle>
                                <label>
                                    "Resident ID"
                                    <input
                                        type="number"
                                        class="input-field"
                                        prop:value=move || veh_resident.get()
                                        on:input=move |ev| set_veh_resident.set(event_target_value(&ev))
                                        required=true
                                    />
                                </label>
                                <label>
                                    "License Plate"
                                    <input
                                        type="text"
                                        class="input-field"
                                        placeholder="e.g., 29A-12345"
                                        prop:value=move || veh_plate.get()
                                        on:input=move |ev| set_veh_plate.set(event_target_value(&ev))
                                        required=true
                                    />
                                </label>
                                <label>
                                    "Vehicle Type"
                                    <select
                                        class="input-field"
                                        prop:value=move || veh_type.get()
                                        on:change=move |ev| set_veh_type.set(event_target_value(&ev))
                                    >
                                        <option value="Car">"Car"</option>
                                        <option value="Motorcycle">"Motorcycle"</option>
                                        <option value="EV_Car">"EV Car"</option>
                                        <option value="EV_Motorcycle">"EV Motorcycle"</option>
                                    </select>
                                </label>
                                <div class="form-actions">
                                    <button
                                        type="button"
                                        class="btn-secondary"
                                        on:click=move |_| set_show_vehicle_form.set(false)
                                    >
                                        "Cancel"
                                    </button>
                                    <button type="submit" class="btn-primary">
                                        "Register Vehicle"
                                    </button>
                                </div>
                            </form>
                        </div>
                    </Show>

                    <div class="card">
                        <h2>
                            "Vehicles ("
                            {move || vehicles_window.get().total_items}
                            ")"
                        </h2>
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"ID"</th>
                                    <th>"License Plate"</th>
                                    <th>"Type"</th>
                                    <th>"Owner"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || vehicles_window.get().page_items
                                    key=|v| v.vehicle_id
                                    children=move |vehicle| {
                                        let id = vehicle.vehicle_id;
                                        view! {
                                            <tr>
                                                <td>{vehicle.vehicle_id}</td>
                                                <td class="cell-mono">{vehicle.license_plate.clone()}</td>
                                                <td>
                                                    <span class="pill">{vehicle.vehicle_type.clone()}</span>
                                                </td>
                                                <td>{opt(&vehicle.resident_name)}</td>
                                                <td>
                                                    <DeleteConfirmButton
                                                        subject="vehicle"
                                                        on_confirm=Callback::new(move |_| {
                                                            spawn_local(async move {
                                                                match api::delete_vehicle(id).await {
                                                                    Ok(()) => ctx.reload(),
                                                                    Err(e) => {
                                                                        web_sys::console::error_1(
                                                                            &format!("[residents] vehicle delete failed: {e}").into(),
                                                                        )
                                                                    }
                                                                }
                                                            });
                                                        })
                                                    />
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>

                        <Pagination
                            meta=Signal::derive(move || vehicles_window.get().meta())
                            on_page_change=Callback::new(move |page: usize| {
                                let total = vehicles_window.get().total_pages;
                                vehicles_view.update(|cv| cv.set_page(page, total));
                            })
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
