//! Wardrobe Frontend App
//!
//! Top-level layout: navigation, the active page and the notice toast.

use leptos::prelude::*;
use wardrobe_core::views::InventoryOptions;
use wardrobe_core::HttpGarmentApi;

use crate::components::{GarmentList, Inventory, NoticeHandle, NoticeToast};
use crate::context::AppContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Inventory,
    BackendStatus,
}

impl Page {
    const ALL: [Page; 2] = [Page::Inventory, Page::BackendStatus];

    fn label(self) -> &'static str {
        match self {
            Page::Inventory => "Wardrobe",
            Page::BackendStatus => "Backend Status",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Page::Inventory => "👔",
            Page::BackendStatus => "🔌",
        }
    }
}

#[component]
pub fn App(api: HttpGarmentApi, options: InventoryOptions) -> impl IntoView {
    let notices = NoticeHandle::new();
    provide_context(AppContext::new(api, options, notices));

    let (page, set_page) = signal(Page::Inventory);

    view! {
        <div class="app-layout">
            <nav class="sidebar">
                <div class="logo">
                    <div class="logo-icon">"👗"</div>
                    <span class="logo-text">"DRESS CODE"</span>
                </div>
                <div class="sidebar-nav">
                    {Page::ALL.iter().map(|&p| view! {
                        <div
                            class=move || if page.get() == p { "nav-item active" } else { "nav-item" }
                            on:click=move |_| set_page.set(p)
                        >
                            <span class="nav-icon">{p.icon()}</span>
                            <span class="nav-label">{p.label()}</span>
                        </div>
                    }).collect_view()}
                </div>
            </nav>

            <main class="page">
                {move || match page.get() {
                    Page::Inventory => view! { <Inventory /> }.into_any(),
                    Page::BackendStatus => view! { <GarmentList /> }.into_any(),
                }}
            </main>

            <NoticeToast notices=notices />
        </div>
    }
}
