//! Notice Toast
//!
//! Dismissable banner for success and error notices. Replaces itself when a
//! new notice arrives and hides on its own after a few seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wardrobe_core::views::{Notice, NoticeLevel};

const AUTO_DISMISS_MS: u32 = 4_000;

/// Shared handle for showing notices from any component
#[derive(Clone, Copy)]
pub struct NoticeHandle {
    current: RwSignal<Option<Notice>>,
    /// Bumped per notice so an old timer cannot hide a newer one
    generation: RwSignal<u64>,
}

impl Default for NoticeHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl NoticeHandle {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            generation: RwSignal::new(0),
        }
    }

    pub fn show(&self, notice: Notice) {
        if notice.is_error() {
            log::warn!("[Notice] {}", notice);
        } else {
            log::info!("[Notice] {}", notice);
        }
        self.current.set(Some(notice));
        self.generation.update(|g| *g += 1);

        let shown = self.generation.get_untracked();
        let handle = *self;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            if handle.generation.get_untracked() == shown {
                handle.dismiss();
            }
        });
    }

    pub fn show_opt(&self, notice: Option<Notice>) {
        if let Some(notice) = notice {
            self.show(notice);
        }
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }
}

/// Renders the current notice, if any
#[component]
pub fn NoticeToast(notices: NoticeHandle) -> impl IntoView {
    view! {
        {move || notices.current.get().map(|notice| {
            let class = match notice.level {
                NoticeLevel::Success => "toast toast-success",
                NoticeLevel::Error => "toast toast-error",
            };
            view! {
                <div class=class role="status">
                    <span class="toast-message">{notice.message}</span>
                    <button class="toast-close" on:click=move |_| notices.dismiss()>"×"</button>
                </div>
            }
        })}
    }
}
