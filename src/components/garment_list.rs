//! Garment List Page
//!
//! Backend status banner plus a plain card list of everything the backend
//! returns.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wardrobe_core::views::{GarmentListEvent, GarmentListView, LOADING_LABEL};
use wardrobe_core::GarmentApi;

use crate::context::use_app_context;

#[component]
pub fn GarmentList() -> impl IntoView {
    let ctx = use_app_context();

    let list = StoredValue::new_local(GarmentListView::new());
    let version = RwSignal::new(0u64);
    list.update_value(|l| {
        l.subscribe(move |_: &GarmentListEvent| version.update(|n| *n += 1));
    });

    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            let probe = api.test_connection().await;
            if list.try_update_value(|l| l.finish_probe(probe)) == Some(true) {
                let garments = api.get_garments().await;
                list.try_update_value(|l| l.finish_fetch(garments));
            }
        });
    });

    let is_loading = move || {
        version.get();
        list.with_value(|l| l.is_loading())
    };
    let status = move || {
        version.get();
        list.with_value(|l| l.status().label())
    };
    let error = move || {
        version.get();
        list.with_value(|l| l.error().map(|notice| notice.message.clone()))
    };
    let garments = move || {
        version.get();
        list.with_value(|l| l.garments().to_vec())
    };

    view! {
        <Show
            when=move || !is_loading()
            fallback=|| view! { <div class="loading"><div>{LOADING_LABEL}</div></div> }
        >
            <div class="container">
                <div class="page-header">
                    <h1>"Garmently App"</h1>
                    <p class="subtitle">"Wardrobe backend integration"</p>
                    <div class="status-box">
                        <strong>"Backend Status:"</strong> " " {status}
                    </div>
                </div>

                {move || match error() {
                    Some(message) => view! { <div class="error-box">{message}</div> }.into_any(),
                    None => view! {
                        <div>
                            <h2>"Available Garments"</h2>
                            <div class="grid">
                                <For
                                    each=garments
                                    key=|garment| garment.id
                                    children=|garment| view! {
                                        <div class="card">
                                            <h3>{garment.name.clone()}</h3>
                                            <div class="card-details">
                                                <p><strong>"Type: "</strong>{garment.garment_type.clone().unwrap_or_default()}</p>
                                                <p><strong>"Color: "</strong>{garment.color.clone()}</p>
                                                <p><strong>"Size: "</strong>{garment.size.clone()}</p>
                                                <p class="price">{garment.display_price()}</p>
                                            </div>
                                        </div>
                                    }
                                />
                            </div>
                        </div>
                    }.into_any(),
                }}
            </div>
        </Show>
    }
}
