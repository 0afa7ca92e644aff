//! Add Item Modal Component
//!
//! Four-step wizard for adding a garment: photo, overview, description and
//! review. Owns an [`AddItemWizard`] and redraws whenever it reports a change.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wardrobe_core::views::{AddItemWizard, PendingSubmit, StepIndicator, WizardEvent, WizardStep};
use wardrobe_core::{Category, DraftField, GarmentApi, ImageFile, Size};

use crate::components::{ImageUpload, SizeSelector};
use crate::context::use_app_context;

type WizardHandle = StoredValue<AddItemWizard, LocalStorage>;

/// Text input bound to one draft field
#[component]
fn DraftInput(
    wizard: WizardHandle,
    version: RwSignal<u64>,
    field: DraftField,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <input
            type=input_type
            class="form-input"
            placeholder=placeholder
            step=(input_type == "number").then_some("0.01")
            prop:value=move || {
                version.get();
                wizard.with_value(|w| w.draft().field_value(field))
            }
            on:input=move |ev| {
                let value = event_target_value(&ev);
                wizard.update_value(|w| w.set_field(field, &value));
            }
        />
    }
}

/// Preview column shown next to the form steps
#[component]
fn PreviewBox(preview: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <div class="image-preview-section">
            {move || match preview.get() {
                Some(src) => view! {
                    <div class="image-preview-box">
                        <img src=src alt="Preview" class="preview-image" />
                    </div>
                }.into_any(),
                None => view! {
                    <div class="image-placeholder-box">
                        <div class="placeholder-icon">"📷"</div>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

/// Modal wrapping the add-item wizard
#[component]
pub fn AddItemModal(
    /// Set by the owner to open the modal; cleared when the wizard closes
    open: RwSignal<bool>,
    /// Called after the backend accepted a new item
    on_item_added: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();

    let wizard: WizardHandle = StoredValue::new_local(AddItemWizard::new());
    let version = RwSignal::new(0u64);
    let preview = RwSignal::new(None::<String>);

    wizard.update_value(|w| {
        w.subscribe(move |event| match event {
            WizardEvent::Changed => version.update(|v| *v += 1),
            WizardEvent::ItemAdded => on_item_added.run(()),
            WizardEvent::Closed => {
                preview.set(None);
                open.set(false);
            }
        });
    });

    Effect::new(move |_| {
        if open.get() {
            wizard.update_value(|w| w.open());
        }
    });

    let step = Memo::new(move |_| {
        version.get();
        wizard.with_value(|w| w.current_step())
    });

    let on_image_select = Callback::new(move |file: ImageFile| {
        preview.set(Some(file.data_url()));
        wizard.update_value(|w| w.set_image(file));
    });

    let close = move |_| wizard.update_value(|w| w.close());
    let next = move |_| wizard.update_value(|w| w.next());
    let prev = move |_| wizard.update_value(|w| w.prev());

    let submit = move |_| match wizard.try_update_value(|w| w.begin_submit()) {
        Some(Ok(PendingSubmit { ticket, upload })) => {
            let api = ctx.api();
            log::info!("[AddItemModal] Submitting {:?}", upload.name);
            spawn_local(async move {
                let result = api.upload_garment(&upload).await;
                if let Some(outcome) = wizard.try_update_value(|w| w.finish_submit(ticket, result)) {
                    ctx.notices.show_opt(outcome.notice());
                }
            });
        }
        Some(Err(outcome)) => ctx.notices.show_opt(outcome.notice()),
        None => {}
    };

    let is_submitting = move || {
        version.get();
        wizard.with_value(|w| w.is_submitting())
    };
    let submit_label = move || {
        version.get();
        wizard.with_value(|w| w.submit_label())
    };

    let current_size = Signal::derive(move || {
        version.get();
        wizard.with_value(|w| w.draft().size)
    });
    let set_size = move |size: Size| wizard.update_value(|w| w.set_field(DraftField::Size, size.label()));

    let step_content = move || match step.get() {
        WizardStep::UploadImage => view! {
            <div class="step-content">
                <div class="upload-section">
                    <h3>"Upload Image"</h3>
                    <p class="form-note">"Add a photo of your clothing item"</p>
                    <ImageUpload
                        on_image_select=on_image_select
                        current_image_url=preview.get_untracked()
                        class_name="modal-image-upload"
                    />
                </div>
            </div>
        }.into_any(),
        WizardStep::ItemOverview => view! {
            <div class="step-content">
                <div class="form-section">
                    <h3>{WizardStep::ItemOverview.description()}</h3>
                    <p class="form-note">"Fields with " <span class="required">"*"</span> " are required"</p>
                    <div class="form-grid">
                        <DraftInput wizard=wizard version=version field=DraftField::Name placeholder="Item Name *" />
                        <select
                            class="form-input"
                            prop:value=move || {
                                version.get();
                                wizard.with_value(|w| w.draft().field_value(DraftField::Category))
                            }
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                wizard.update_value(|w| w.set_field(DraftField::Category, &value));
                            }
                        >
                            <option value="">"Category *"</option>
                            {Category::ALL.iter().map(|category| view! {
                                <option value=category.label()>{category.label()}</option>
                            }).collect_view()}
                        </select>
                        <DraftInput wizard=wizard version=version field=DraftField::Color placeholder="Color" />
                        <DraftInput wizard=wizard version=version field=DraftField::Material placeholder="Material" />
                        <DraftInput wizard=wizard version=version field=DraftField::Brand placeholder="Brand" />
                    </div>
                </div>
                <PreviewBox preview=preview />
            </div>
        }.into_any(),
        WizardStep::ItemDescription => view! {
            <div class="step-content">
                <div class="form-section">
                    <h3>{WizardStep::ItemDescription.description()}</h3>
                    <div class="description-form">
                        <textarea
                            class="description-textarea"
                            placeholder="Description"
                            rows=8
                            prop:value=move || {
                                version.get();
                                wizard.with_value(|w| w.draft().field_value(DraftField::Description))
                            }
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                wizard.update_value(|w| w.set_field(DraftField::Description, &value));
                            }
                        />
                        <div class="form-row">
                            <SizeSelector current_size=current_size on_change=set_size />
                            <DraftInput
                                wizard=wizard
                                version=version
                                field=DraftField::Price
                                placeholder="Price"
                                input_type="number"
                            />
                        </div>
                    </div>
                </div>
                <PreviewBox preview=preview />
            </div>
        }.into_any(),
        WizardStep::Review => view! {
            <div class="step-content">
                <div class="review-section">
                    <div class="review-details">
                        {move || {
                            version.get();
                            wizard.with_value(|w| w.review_lines())
                                .into_iter()
                                .map(|(label, value)| view! {
                                    <div class="review-field">
                                        <strong>{label} ":"</strong> " " {value}
                                    </div>
                                })
                                .collect_view()
                        }}
                    </div>
                </div>
                <PreviewBox preview=preview />
            </div>
        }.into_any(),
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay">
                <div class="modal-container">
                    <div class="modal-header">
                        <div>
                            <h2>{move || step.get().title()}</h2>
                            <p class="step-description">{move || step.get().description()}</p>
                        </div>
                        <button class="close-btn" on:click=close>"×"</button>
                    </div>

                    <div class="modal-body">{step_content}</div>

                    <div class="modal-footer">
                        <div class="step-indicators">
                            {move || {
                                version.get();
                                wizard.with_value(|w| w.step_indicators())
                                    .into_iter()
                                    .map(|(_, indicator)| {
                                        let class = match indicator {
                                            StepIndicator::Active => "step-dot active",
                                            StepIndicator::Completed => "step-dot completed",
                                            StepIndicator::Upcoming => "step-dot",
                                        };
                                        view! { <div class=class /> }
                                    })
                                    .collect_view()
                            }}
                        </div>

                        <div class="modal-actions">
                            <Show when=move || step.get().prev().is_some()>
                                <button class="prev-btn" on:click=prev>"← Previous"</button>
                            </Show>
                            <Show
                                when=move || step.get().is_last()
                                fallback=move || view! {
                                    <button class="next-btn" on:click=next>"Next →"</button>
                                }
                            >
                                <button class="submit-btn" disabled=is_submitting on:click=submit>
                                    {submit_label}
                                </button>
                            </Show>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
