//! Search Bar Component

use leptos::prelude::*;

/// Free-text filter input for a table view
#[component]
pub fn SearchBar(
    #[prop(into)] placeholder: String,
    value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="search-bar">
            <span class="search-icon">"⌕"</span>
            <input
                type="text"
                class="input-field"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
        </div>
    }
}
