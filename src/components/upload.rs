//! Image upload dropzone.
//!
//! Presents a drop target and a hidden file picker. The dropzone only
//! hands the picked file to its caller; the actual upload happens in
//! the wizard's analysis step.

use leptos::*;
use web_sys::{DragEvent, Event, HtmlInputElement};

use crate::config::ACCEPTED_IMAGE_TYPES;

/// Drag & drop target with click-to-pick fallback.
///
/// Accepts exactly one image file and passes it to `on_file_selected`.
/// The dragging state is purely cosmetic.
#[component]
pub fn UploadDropzone(
    /// Called with the picked file
    #[prop(into)]
    on_file_selected: Callback<web_sys::File>,
) -> impl IntoView {
    let (is_dragging, set_is_dragging) = create_signal(false);

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(false);
        let file = ev
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            on_file_selected.call(file);
        }
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(true);
    };

    let on_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_file_selected.call(file);
        }
    };

    view! {
        <label
            for="file-upload"
            class="upload-dropzone"
            class:dragging=move || is_dragging.get()
            on:drop=on_drop
            on:dragover=on_drag_over
            on:dragleave=move |_| set_is_dragging.set(false)
        >
            <input
                id="file-upload"
                type="file"
                accept=ACCEPTED_IMAGE_TYPES
                style="display:none"
                on:change=on_change
            />
            <p class="upload-hint">
                <strong>"Datei hierher ziehen"</strong>
                " oder klicken zum Hochladen"
            </p>
        </label>
    }
}
