//! Loading Spinner Component

use leptos::prelude::*;

/// Centered spinner shown while a page's first fetch is in flight
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading-wrap">
            <div class="loading-spinner"></div>
        </div>
    }
}
