//! Uploader Component
//!
//! Drag-drop / file-picker upload of an X-ray image. A local preview
//! is shown immediately; the file is sent to the classification
//! endpoint and the result handed to the caller.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::api;
use crate::api::PredictionResult;

/// Upload lifecycle. A failed upload returns to `Uploading` on the
/// next file selection.
#[derive(Clone, Debug, PartialEq)]
enum UploadPhase {
    Idle,
    Uploading,
    Failed(String),
}

/// Uploader component
#[component]
pub fn Uploader(
    /// Called with the prediction when an upload succeeds
    #[prop(into)]
    on_result: Callback<PredictionResult>,
    /// Image URL from a history selection; overrides the local preview
    #[prop(into)]
    external_image_url: Signal<Option<String>>,
) -> impl IntoView {
    let (phase, set_phase) = create_signal(UploadPhase::Idle);
    let (drag_active, set_drag_active) = create_signal(false);
    let (preview_url, set_preview_url) = create_signal(None::<String>);
    let input_ref = create_node_ref::<html::Input>();

    let uploading = move || phase.get() == UploadPhase::Uploading;
    let error = move || match phase.get() {
        UploadPhase::Failed(message) => Some(message),
        _ => None,
    };

    let handle_files = move |files: Option<web_sys::FileList>| {
        let Some(file) = files.and_then(|list| list.get(0)) else {
            return;
        };

        // Preview straight from the selected file, before the upload
        // has any outcome
        if let Ok(url) = web_sys::Url::create_object_url_with_blob(&file) {
            set_preview_url.set(Some(url));
        }

        set_phase.set(UploadPhase::Uploading);
        spawn_local(async move {
            match api::predict_image(&file).await {
                Ok(result) => {
                    set_phase.set(UploadPhase::Idle);
                    on_result.call(result);
                }
                Err(e) => {
                    set_phase.set(UploadPhase::Failed(e.message));
                }
            }
        });
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_drag_active.set(false);
        handle_files(ev.data_transfer().and_then(|dt| dt.files()));
    };

    let on_change = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = ev.target().unwrap().dyn_into().unwrap();
        handle_files(input.files());
    };

    let browse = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    // A history image that fails to fetch is surfaced like any other
    // failure at this view
    let on_preview_error = move |_| {
        set_phase.set(UploadPhase::Failed("Failed to load image preview".to_string()));
    };

    let display_url = move || external_image_url.get().or_else(|| preview_url.get());

    view! {
        <div class="w-full">
            <div
                on:dragenter=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    set_drag_active.set(true);
                }
                on:dragover=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    set_drag_active.set(true);
                }
                on:dragleave=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    set_drag_active.set(false);
                }
                on:drop=on_drop
                class=move || {
                    let base = "border-2 border-dashed rounded-lg p-6 text-center transition-colors";
                    if drag_active.get() {
                        format!("{} border-primary-500 bg-gray-700", base)
                    } else {
                        format!("{} border-gray-600", base)
                    }
                }
            >
                <input
                    node_ref=input_ref
                    type="file"
                    accept="image/*"
                    class="hidden"
                    on:change=on_change
                />
                <div class="space-y-2">
                    <p class="font-medium">"Drag and drop an X-ray image here"</p>
                    <p class="text-sm text-gray-400">"or"</p>
                    <button
                        on:click=browse
                        disabled=uploading
                        class="border border-gray-600 rounded px-3 py-2 hover:bg-gray-700
                               disabled:cursor-not-allowed disabled:text-gray-500 transition-colors"
                    >
                        {move || if uploading() { "Uploading..." } else { "Browse files" }}
                    </button>
                </div>
            </div>

            {move || {
                display_url().map(|url| view! {
                    <div class="mt-4">
                        <img
                            src=url
                            alt="Preview"
                            class="w-full max-h-80 object-contain rounded border border-gray-700"
                            on:error=on_preview_error
                        />
                    </div>
                })
            }}

            {move || {
                error().map(|message| view! {
                    <p class="text-sm mt-2 bg-red-900/40 text-red-200 px-3 py-2 rounded">
                        {message}
                    </p>
                })
            }}
        </div>
    }
}
