//! Stat Card Component

use leptos::prelude::*;

/// Single headline figure with a label, used on the dashboard grids
#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    value: Signal<String>,
    #[prop(into, optional)] subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <p class="stat-card-label">{title}</p>
            <p class="stat-card-value">{move || value.get()}</p>
            {subtitle.map(|s| view! { <p class="stat-card-subtitle">{s}</p> })}
        </div>
    }
}
