//! Pagination Component
//!
//! Renders the navigation plan from `paging::nav_plan` plus the
//! "Showing X to Y of Z" footer. Absent entirely for single-page
//! collections.

use leptos::prelude::*;

use crate::paging::{nav_plan, NavEntry, PageMeta};

#[component]
pub fn Pagination(
    meta: Signal<PageMeta>,
    #[prop(into)] on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when={move || meta.get().total_pages > 1}>
            <div class="table-pagination">
                <div class="page-info">
                    {move || {
                        let m = meta.get();
                        format!(
                            "Showing {} to {} of {} items",
                            m.start_index + 1,
                            m.end_index.min(m.total_items),
                            m.total_items,
                        )
                    }}
                </div>

                <div class="page-controls">
                    {move || {
                        let m = meta.get();
                        nav_plan(m.current_page, m.total_pages)
                            .into_iter()
                            .map(|entry| match entry {
                                NavEntry::Prev { enabled } => {
                                    let target = m.current_page.saturating_sub(1).max(1);
                                    view! {
                                        <button
                                            class="page-btn"
                                            disabled=!enabled
                                            on:click=move |_| on_page_change.run(target)
                                        >
                                            "Previous"
                                        </button>
                                    }
                                        .into_any()
                                }
                                NavEntry::Page { number, current } => {
                                    let btn_class =
                                        if current { "page-btn active" } else { "page-btn" };
                                    view! {
                                        <button
                                            class=btn_class
                                            on:click=move |_| on_page_change.run(number)
                                        >
                                            {number}
                                        </button>
                                    }
                                        .into_any()
                                }
                                NavEntry::Ellipsis => {
                                    view! { <span class="page-ellipsis">"..."</span> }.into_any()
                                }
                                NavEntry::Next { enabled } => {
                                    let target = (m.current_page + 1).min(m.total_pages);
                                    view! {
                                        <button
                                            class="page-btn"
                                            disabled=!enabled
                                            on:click=move |_| on_page_change.run(target)
                                        >
                                            "Next"
                                        </button>
                                    }
                                        .into_any()
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </Show>
    }
}
