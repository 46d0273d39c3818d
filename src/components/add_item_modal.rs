//! Add-item dialog: name, price, and up to five pictures arriving by
//! drag-and-drop or the file picker.

use leptos::prelude::*;
use leptos::task::spawn_local;
use send_wrapper::SendWrapper;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, File, FileList, HtmlInputElement, MouseEvent};

use crate::api::{ApiClient, ApiError, FailureKind, Multipart};
use crate::components::icons::{Upload, X};
use crate::validate::{draft_rejection, selection_rejection};
use crate::web::ObjectUrl;

/// One accepted picture: the file that will be uploaded and the object
/// URL previewing it. Dropping the value revokes the preview URL.
struct PicturePreview {
    file: SendWrapper<File>,
    preview: ObjectUrl,
}

impl PicturePreview {
    fn new(file: File) -> Result<Self, String> {
        let preview = ObjectUrl::for_blob(&file)?;
        Ok(Self {
            file: SendWrapper::new(file),
            preview,
        })
    }
}

/// The in-progress draft. `RwSignal` fields make the whole thing `Copy`,
/// so it moves into every closure without ceremony.
#[derive(Clone, Copy)]
struct DraftState {
    name: RwSignal<String>,
    price: RwSignal<String>,
    pictures: RwSignal<Vec<PicturePreview>>,
    warning: RwSignal<Option<&'static str>>,
    submitting: RwSignal<bool>,
}

impl DraftState {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            pictures: RwSignal::new(Vec::new()),
            warning: RwSignal::new(None),
            submitting: RwSignal::new(false),
        }
    }

    /// Back to an empty draft. Dropping the previews revokes their
    /// object URLs.
    fn reset(&self) {
        self.name.set(String::new());
        self.price.set(String::new());
        self.pictures.set(Vec::new());
        self.warning.set(None);
    }

    /// Replaces the picture set, if the selection passes the size gate;
    /// a too-large selection leaves the current set untouched.
    fn accept_files(&self, files: Vec<File>) {
        if let Some(msg) = selection_rejection(files.len()) {
            self.warning.set(Some(msg));
            return;
        }
        self.warning.set(None);
        let previews = files
            .into_iter()
            .filter_map(|file| match PicturePreview::new(file) {
                Ok(preview) => Some(preview),
                Err(err) => {
                    leptos::logging::warn!("Preview failed: {err}");
                    None
                }
            })
            .collect();
        self.pictures.set(previews);
    }

    fn remove_picture(&self, index: usize) {
        self.pictures.update(|pictures| {
            if index < pictures.len() {
                pictures.remove(index);
            }
        });
    }

    /// Multipart body for `POST /items`.
    fn to_form(&self) -> Result<Multipart, ApiError> {
        let form = Multipart::new()?
            .text("name", &self.name.get())?
            .text("price", &self.price.get())?;
        self.pictures.with(|pictures| {
            pictures
                .iter()
                .try_fold(form, |form, picture| form.file("images", &picture.file))
        })
    }
}

fn files_from(list: FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

#[component]
pub fn AddItemModal(
    api: ApiClient,
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_success: Callback<()>,
    #[prop(into)] on_failure: Callback<()>,
) -> impl IntoView {
    let draft = DraftState::new();
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    // Keep the native <dialog> in step with the open signal; closing it
    // (by whatever route) resets the draft and frees the previews.
    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else {
                if dialog.open() {
                    dialog.close();
                }
                draft.reset();
            }
        }
    });

    let browse = move |_: MouseEvent| {
        if let Some(input) = file_input_ref.get() {
            input.click();
        }
    };

    let on_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok());
        if let Some(list) = input.and_then(|input| input.files()) {
            draft.accept_files(files_from(list));
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        if let Some(list) = ev.data_transfer().and_then(|dt| dt.files()) {
            draft.accept_files(files_from(list));
        }
    };

    let on_drag_over = move |ev: DragEvent| ev.prevent_default();

    let submit = move |_: MouseEvent| {
        let rejection = draft_rejection(
            &draft.name.get(),
            &draft.price.get(),
            draft.pictures.with(|p| p.len()),
        );
        if let Some(msg) = rejection {
            draft.warning.set(Some(msg));
            return;
        }

        draft.submitting.set(true);
        let api = api.clone();
        spawn_local(async move {
            let posted = match draft.to_form() {
                Ok(form) => api.post_form("/items", form).await,
                Err(err) => Err(err),
            };
            draft.submitting.set(false);
            match posted {
                Ok(201) => {
                    draft.reset();
                    on_success.run(());
                }
                // Any other 2xx is not the created answer; the draft
                // stays put.
                Ok(_) => {}
                Err(err) if err.kind() == FailureKind::SessionInvalid => {
                    draft.warning.set(None);
                    on_failure.run(());
                }
                Err(_) => {
                    draft
                        .warning
                        .set(Some("Failed to add item. Please check your connection."));
                }
            }
        });
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| on_close.run(())>
            <div class="modal-box">
                <h2 class="font-bold text-lg">"Add New Item"</h2>

                <div class="form-control mt-2">
                    <label class="label" for="item-name">
                        <span class="label-text">"Name"</span>
                    </label>
                    <input
                        id="item-name"
                        type="text"
                        class="input input-bordered w-full"
                        prop:value=draft.name
                        on:input=move |ev| draft.name.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-control mt-2">
                    <label class="label" for="item-price">
                        <span class="label-text">"Price"</span>
                    </label>
                    <input
                        id="item-price"
                        type="number"
                        class="input input-bordered w-full"
                        prop:value=draft.price
                        on:input=move |ev| draft.price.set(event_target_value(&ev))
                    />
                </div>

                <div
                    class="drag-drop border border-dashed border-base-content/30 rounded-lg p-4 mt-4 cursor-pointer text-center"
                    on:click=browse
                    on:drop=on_drop
                    on:dragover=on_drag_over
                >
                    <Upload attr:class="h-6 w-6 mx-auto opacity-60" />
                    <p class="text-sm mt-2">"Click or drag and drop up to 5 images here"</p>
                    <input
                        type="file"
                        multiple
                        accept="image/*"
                        class="hidden"
                        node_ref=file_input_ref
                        on:change=on_file_select
                    />

                    <Show when=move || draft.pictures.with(|p| !p.is_empty())>
                        <div class="preview flex flex-wrap justify-center gap-2 mt-4">
                            {move || {
                                draft
                                    .pictures
                                    .with(|pictures| {
                                        pictures
                                            .iter()
                                            .enumerate()
                                            .map(|(index, picture)| {
                                                preview_tile(draft, index, picture)
                                            })
                                            .collect_view()
                                    })
                            }}
                        </div>
                    </Show>
                </div>

                <Show when=move || draft.warning.get().is_some()>
                    <div role="alert" class="alert alert-error text-sm py-2 mt-4">
                        <span>{move || draft.warning.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <div class="modal-action">
                    <button
                        class="btn btn-primary"
                        disabled=move || draft.submitting.get()
                        on:click=submit
                    >
                        {move || if draft.submitting.get() {
                            view! {
                                <span class="loading loading-spinner"></span>
                                "Submitting..."
                            }
                                .into_any()
                        } else {
                            "Submit".into_any()
                        }}
                    </button>
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}

fn preview_tile(draft: DraftState, index: usize, picture: &PicturePreview) -> impl IntoView + use<> {
    let url = picture.preview.as_str().to_string();
    // Removing must not bubble into the zone's click, which would pop
    // the file picker.
    let remove = move |ev: MouseEvent| {
        ev.stop_propagation();
        draft.remove_picture(index);
    };

    view! {
        <div class="preview-item relative">
            <img
                src=url
                alt=format!("Preview {}", index + 1)
                class="w-20 h-20 object-cover rounded"
            />
            <button
                type="button"
                class="btn btn-xs btn-circle absolute top-0 right-0"
                on:click=remove
            >
                <X attr:class="h-3 w-3" />
            </button>
        </div>
    }
}
