//! Parking Admin App
//!
//! Root component: navbar plus the page for the current route. Switching
//! routes drops the old page outright, so every table starts back at an
//! empty filter and page 1.

use leptos::prelude::*;

use crate::components::{Navbar, Route};
use crate::context::AppContext;
use crate::pages::{
    DashboardPage, ResidentsPage, SubscriptionsPage, SupervisorsPage, VisitorsPage,
};

#[component]
pub fn App() -> impl IntoView {
    let (route, set_route) = signal(Route::Dashboard);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    provide_context(AppContext::new((reload_trigger, set_reload_trigger)));

    view! {
        <div class="app-shell">
            <Navbar route=route set_route=set_route />

            <main class="page-container">
                {move || match route.get() {
                    Route::Dashboard => view! { <DashboardPage /> }.into_any(),
                    Route::Residents => view! { <ResidentsPage /> }.into_any(),
                    Route::Subscriptions => view! { <SubscriptionsPage /> }.into_any(),
                    Route::Visitors => view! { <VisitorsPage /> }.into_any(),
                    Route::Supervisors => view! { <SupervisorsPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
