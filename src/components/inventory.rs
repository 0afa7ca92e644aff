//! Inventory Page
//!
//! Search box, category sidebar and garment grid, with a floating button
//! that opens the add-item wizard.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wardrobe_core::views::{item_icon, InventoryEvent, InventoryView};
use wardrobe_core::{Garment, GarmentApi};

use crate::components::{AddItemModal, CategorySidebar};
use crate::context::use_app_context;

/// One card in the grid
#[component]
fn ItemCard(garment: Garment) -> impl IntoView {
    view! {
        <div class="item-card">
            <div class="item-image">
                <span class="item-icon">{item_icon(&garment.category_name)}</span>
            </div>
            <div class="item-info">
                <h4 class="item-name">{garment.name.clone()}</h4>
                <p class="item-details">{garment.details_line()}</p>
                <p class="item-price">{garment.display_price()}</p>
            </div>
            <div class="item-actions">
                <button class="action-btn">"⋯"</button>
            </div>
        </div>
    }
}

#[component]
pub fn Inventory() -> impl IntoView {
    let ctx = use_app_context();

    let inventory = StoredValue::new_local(InventoryView::new(ctx.inventory_options));
    let version = RwSignal::new(0u64);
    inventory.update_value(|v| {
        v.subscribe(move |_: &InventoryEvent| version.update(|n| *n += 1));
    });

    let refresh = move || {
        inventory.update_value(|v| v.begin_refresh());
        let api = ctx.api();
        spawn_local(async move {
            let result = api.get_garments().await;
            let notice = inventory.try_update_value(|v| {
                v.finish_refresh(result);
                v.take_notice()
            });
            ctx.notices.show_opt(notice.flatten());
        });
    };

    // Load once on mount
    Effect::new(move |_| refresh());

    let modal_open = RwSignal::new(false);
    let on_item_added = Callback::new(move |_: ()| {
        log::info!("[Inventory] Item added, reloading");
        refresh();
    });

    // Reloads after an add keep the current grid on screen
    let first_load = move || {
        version.get();
        inventory.with_value(|v| v.is_loading() && v.items().is_empty())
    };
    let search_term = move || {
        version.get();
        inventory.with_value(|v| v.search_term().to_string())
    };
    let sidebar = Signal::derive(move || {
        version.get();
        inventory.with_value(|v| v.sidebar())
    });
    let on_select = Callback::new(move |label: &'static str| {
        inventory.update_value(|v| v.select_category(label));
    });
    let visible_items = move || {
        version.get();
        inventory.with_value(|v| v.filtered_items().into_iter().cloned().collect::<Vec<_>>())
    };

    view! {
        <div class="inventory-container">
            <div class="main-content">
                <header class="header">
                    <h1>"Inventory"</h1>
                    <div class="header-actions">
                        <div class="search-box">
                            <input
                                type="text"
                                class="search-input"
                                placeholder="Search items..."
                                prop:value=search_term
                                on:input=move |ev| {
                                    let term = event_target_value(&ev);
                                    inventory.update_value(|v| v.set_search_term(&term));
                                }
                            />
                            <span class="search-icon">"🔍"</span>
                        </div>
                    </div>
                </header>

                <Show
                    when=move || !first_load()
                    fallback=|| view! { <div class="loading">"Loading inventory..."</div> }
                >
                    <div class="content-area">
                        <CategorySidebar entries=sidebar on_select=on_select />
                        <div class="items-section">
                            <div class="items-grid">
                                <For
                                    each=visible_items
                                    key=|garment| garment.id
                                    children=|garment| view! { <ItemCard garment=garment /> }
                                />
                            </div>
                        </div>
                    </div>
                </Show>
            </div>

            <button class="add-item-button" title="Add new item" on:click=move |_| modal_open.set(true)>
                "+"
            </button>

            <AddItemModal open=modal_open on_item_added=on_item_added />
        </div>
    }
}
