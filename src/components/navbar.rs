//! Navbar Component
//!
//! Top navigation bar switching between the dashboard's pages.

use leptos::prelude::*;

/// Top-level pages of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Residents,
    Subscriptions,
    Visitors,
    Supervisors,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Dashboard,
        Route::Residents,
        Route::Subscriptions,
        Route::Visitors,
        Route::Supervisors,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Residents => "Residents",
            Route::Subscriptions => "Subscriptions",
            Route::Visitors => "Visitors",
            Route::Supervisors => "Supervisors",
        }
    }
}

/// Navigation bar component
#[component]
pub fn Navbar(route: ReadSignal<Route>, set_route: WriteSignal<Route>) -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar-brand" on:click=move |_| set_route.set(Route::Dashboard)>
                <span class="navbar-logo">"P"</span>
                <div class="navbar-title">
                    <span class="navbar-name">"Parking System"</span>
                    <span class="navbar-subtitle">"Smart Management Dashboard"</span>
                </div>
            </div>

            <div class="navbar-links">
                {Route::ALL
                    .iter()
                    .map(|&item| {
                        let link_class = move || {
                            if route.get() == item { "nav-link active" } else { "nav-link" }
                        };
                        view! {
                            <button class=link_class on:click=move |_| set_route.set(item)>
                                {item.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="navbar-status">
                <span class="status-dot"></span>
                "System Online"
            </div>
        </nav>
    }
}
