//! Category Sidebar Component
//!
//! Fixed list of inventory categories with item counts.

use leptos::prelude::*;
use wardrobe_core::views::SidebarEntry;

#[component]
pub fn CategorySidebar(
    entries: Signal<Vec<SidebarEntry>>,
    on_select: Callback<&'static str>,
) -> impl IntoView {
    view! {
        <div class="category-sidebar">
            <h3>"Category"</h3>
            <For
                each=move || entries.get()
                key=|entry| (entry.label, entry.count, entry.active)
                children=move |entry| {
                    let label = entry.label;
                    view! {
                        <div
                            class=if entry.active { "category-item active" } else { "category-item" }
                            on:click=move |_| {
                                log::debug!("[CategorySidebar] Clicked: {}", label);
                                on_select.run(label);
                            }
                        >
                            <span class="category-name">{label}</span>
                            <span class="category-count">{entry.count}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
