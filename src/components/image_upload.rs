//! Image Upload Component
//!
//! Click-to-pick or drag-and-drop area for one garment photo, with a preview
//! of the chosen image.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;
use web_sys::{DragEvent, File};

use wardrobe_core::views::{
    ImageRejected, ImageUploadView, Notice, PreviewTicket, UploadEvent, CHANGE_IMAGE_OVERLAY, UPLOAD_HINT,
    UPLOAD_PLACEHOLDER,
};
use wardrobe_core::ImageFile;

use crate::context::use_app_context;

/// Read a browser file into memory
async fn read_file(file: File) -> Result<ImageFile, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{:?}", e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(ImageFile::new(file.name(), file.type_(), bytes))
}

/// Image picker with drop support
#[component]
pub fn ImageUpload(
    /// Called with every accepted image
    on_image_select: Callback<ImageFile>,
    /// Image to show before anything is picked
    #[prop(default = None)]
    current_image_url: Option<String>,
    #[prop(optional, into)]
    class_name: String,
) -> impl IntoView {
    let ctx = use_app_context();

    let widget = StoredValue::new_local(
        ImageUploadView::new(move |file| on_image_select.run(file))
            .with_current_image_url(current_image_url)
            .with_class_name(class_name),
    );
    let version = RwSignal::new(0u64);
    widget.update_value(|w| {
        w.subscribe(move |_: &UploadEvent| version.update(|v| *v += 1));
    });

    let input_ref = NodeRef::<html::Input>::new();

    let start_read = move |file: File, ticket: PreviewTicket| {
        spawn_local(async move {
            let image = match read_file(file).await {
                Ok(image) => image,
                Err(e) => {
                    log::error!("[ImageUpload] Failed to read file: {}", e);
                    return;
                }
            };
            log::debug!("[ImageUpload] Read {} ({} bytes)", image.name, image.len());
            widget.try_update_value(|w| w.finish_read(ticket, image));
        });
    };

    let on_checked = move |file: File, checked: Option<Result<PreviewTicket, ImageRejected>>| match checked {
        Some(Ok(ticket)) => start_read(file, ticket),
        Some(Err(rejected)) => ctx.notices.show(Notice::error(rejected.to_string())),
        None => {}
    };

    let handle_file = move |file: File| {
        let checked = widget.try_update_value(|w| w.begin_read(&file.name(), &file.type_()));
        on_checked(file, checked);
    };

    let on_change = move |_| {
        let file = input_ref
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            handle_file(file);
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        widget.update_value(|w| w.drag_over());
    };

    let on_dragleave = move |ev: DragEvent| {
        ev.prevent_default();
        widget.update_value(|w| w.drag_leave());
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        match file {
            Some(file) => {
                let checked = widget.try_update_value(|w| w.drop_file(&file.name(), &file.type_()));
                on_checked(file, checked);
            }
            None => widget.update_value(|w| w.drag_leave()),
        }
    };

    let open_picker = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let preview = move || {
        version.get();
        widget.with_value(|w| w.preview().map(str::to_string))
    };

    view! {
        <div class=move || { version.get(); widget.with_value(|w| w.container_class()) }>
            <div
                class=move || { version.get(); widget.with_value(|w| w.area_class()) }
                on:click=open_picker
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:drop=on_drop
            >
                {move || match preview() {
                    Some(src) => view! {
                        <div class="preview-container">
                            <img src=src alt="Preview" class="preview-image" />
                            <div class="preview-overlay">
                                <span>{CHANGE_IMAGE_OVERLAY}</span>
                            </div>
                        </div>
                    }.into_any(),
                    None => view! {
                        <div class="upload-placeholder">
                            <div class="upload-icon">"📷"</div>
                            <p class="upload-text">{UPLOAD_PLACEHOLDER}</p>
                            <p class="upload-hint">{UPLOAD_HINT}</p>
                        </div>
                    }.into_any(),
                }}
            </div>
            <input
                node_ref=input_ref
                type="file"
                accept="image/*"
                style="display: none"
                on:change=on_change
            />
        </div>
    }
}
