//! Size Selector Component
//!
//! Row of toggle buttons for the garment size.

use leptos::prelude::*;
use wardrobe_core::Size;

/// Size buttons, XS through XXL
#[component]
pub fn SizeSelector(
    current_size: Signal<Size>,
    on_change: impl Fn(Size) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="size-selector">
            {Size::ALL.iter().map(|&size| {
                let is_selected = move || current_size.get() == size;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "size-btn active" } else { "size-btn" }
                        on:click=move |_| on_change(size)
                    >
                        {size.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
