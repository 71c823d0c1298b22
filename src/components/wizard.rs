//! The wizard page.
//!
//! Owns all step state and drives the four-step flow: every advance
//! button triggers the step's backend calls, wrapped in the blocking
//! overlay guard, and the step only moves forward once those calls
//! succeeded. Failures are logged and leave the user where they are,
//! with their data intact; pressing the button again retries.

use std::future::Future;

use leptos::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, File, HtmlInputElement, Url};

use gloo_timers::future::TimeoutFuture;

use crate::components::{BlockingOverlay, StepIndicator, UploadDropzone};
use crate::config::BLOCKING_MIN_MS;
use crate::services::{
    fetch_ad_process, fetch_comparables, generate_listing, identify, suggest_price, upload_image,
    ApiClient,
};
use crate::state::{overlay_close_delay, WizardState, WizardStep, STEPS};

/// Overlay message while the image is analyzed.
const MSG_IDENTIFY: &str =
    "Die KI analysiert dein Bild und erkennt Marke, Modell sowie Kategorie...";
/// Overlay message while comparables and the suggestion are fetched.
const MSG_PRICE: &str = "Die KI analysiert Vergleichsangebote für dein Produkt...";
/// Overlay message while the ad copy is generated.
const MSG_LISTING: &str = "Die KI generiert deine Verkaufsanzeige...";

/// Condition terms offered in the attributes form.
const CONDITIONS: [&str; 5] = ["Neu", "Sehr Gut", "Gut", "In Ordnung", "Defekt"];

/// Run `action` behind the blocking overlay.
///
/// The overlay shows `message` for at least [`BLOCKING_MIN_MS`]: an
/// action that settles early waits out the remainder, a slow one closes
/// the overlay as soon as it finishes. The overlay always comes down,
/// whether the action succeeded or not.
async fn run_blocking<F>(
    set_blocking_message: WriteSignal<Option<String>>,
    message: &str,
    action: F,
) where
    F: Future<Output = ()>,
{
    set_blocking_message.set(Some(message.to_string()));
    let started = js_sys::Date::now();
    action.await;
    let delay = overlay_close_delay(js_sys::Date::now() - started, BLOCKING_MIN_MS);
    if delay > 0 {
        TimeoutFuture::new(delay).await;
    }
    set_blocking_message.set(None);
}

/// Copy a field's text to the system clipboard, fire-and-forget.
fn copy_to_clipboard(text: String) {
    let clipboard = window().navigator().clipboard();
    spawn_local(async move {
        if let Err(e) = JsFuture::from(clipboard.write_text(&text)).await {
            log::warn!("Clipboard write failed: {:?}", e);
        }
    });
}

#[component]
pub fn Wizard() -> impl IntoView {
    let client = store_value(ApiClient::new());

    let state = create_rw_signal(WizardState::new());
    let (selected_file, set_selected_file) = create_signal(None::<File>);
    let (preview_url, set_preview_url) = create_signal(None::<String>);
    let (loading, set_loading) = create_signal(false);
    let (price_loading, set_price_loading) = create_signal(false);
    let (listing_loading, set_listing_loading) = create_signal(false);
    let (blocking_message, set_blocking_message) = create_signal(None::<String>);

    let current_step = Signal::derive(move || state.with(|s| s.step_index()));

    // Drop the old preview handle before replacing it
    let on_file_selected = Callback::new(move |file: File| {
        if let Some(old) = preview_url.get_untracked() {
            let _ = Url::revoke_object_url(&old);
        }
        match Url::create_object_url_with_blob(&file) {
            Ok(url) => set_preview_url.set(Some(url)),
            Err(e) => {
                log::error!("Failed to create preview URL: {:?}", e);
                set_preview_url.set(None);
            }
        }
        set_selected_file.set(Some(file));
    });

    // Step 0 → 1: upload the image, then identify it
    let start_analysis = move |_| {
        if blocking_message.get_untracked().is_some() {
            return;
        }
        let Some(file) = selected_file.get_untracked() else {
            log::warn!("No file selected, nothing to analyze");
            return;
        };
        let run = state.with_untracked(|s| s.generation);
        let existing_id = state.with_untracked(|s| s.ad_process_id.clone());

        spawn_local(async move {
            run_blocking(set_blocking_message, MSG_IDENTIFY, async move {
                set_loading.set(true);
                let client = client.get_value();
                let result = async {
                    let image_url = upload_image(&client, &file).await?;
                    identify(&client, image_url, existing_id).await
                }
                .await;
                match result {
                    Ok(resp) => {
                        if state.with_untracked(|s| s.generation) == run {
                            state.update(|s| {
                                if !s.apply_identification(resp) {
                                    log::warn!("Identify response ignored: wizard already moved on");
                                }
                            });
                        } else {
                            log::debug!("Discarding identify response from a previous run");
                        }
                    }
                    Err(e) => log::error!("Identify failed: {}", e),
                }
                set_loading.set(false);
            })
            .await;
        });
    };

    // Step 1 → 2: collect comparables, then fetch the suggestion
    let fetch_price_suggestion = move |_| {
        if blocking_message.get_untracked().is_some() {
            return;
        }
        let Some(id) = state.with_untracked(|s| s.ad_process_id.clone()) else {
            log::warn!("No ad process id, cannot fetch a price suggestion");
            return;
        };
        let run = state.with_untracked(|s| s.generation);

        spawn_local(async move {
            run_blocking(set_blocking_message, MSG_PRICE, async move {
                set_price_loading.set(true);
                let client = client.get_value();
                let result = async {
                    fetch_comparables(&client, &id).await?;
                    suggest_price(&client, &id).await
                }
                .await;
                match result {
                    Ok(resp) => {
                        if state.with_untracked(|s| s.generation) == run {
                            state.update(|s| {
                                if !s.apply_suggestion(resp) {
                                    log::warn!("Suggest response ignored: wizard already moved on");
                                }
                            });
                        } else {
                            log::debug!("Discarding suggest response from a previous run");
                        }
                    }
                    Err(e) => log::error!("Price suggestion failed: {}", e),
                }
                set_price_loading.set(false);
            })
            .await;
        });
    };

    // Step 2 → 3: generate the listing, then fetch it
    let fetch_listing = move |_| {
        if blocking_message.get_untracked().is_some() {
            return;
        }
        let Some(id) = state.with_untracked(|s| s.ad_process_id.clone()) else {
            log::warn!("No ad process id, cannot generate a listing");
            return;
        };
        let run = state.with_untracked(|s| s.generation);

        spawn_local(async move {
            run_blocking(set_blocking_message, MSG_LISTING, async move {
                set_listing_loading.set(true);
                let client = client.get_value();
                let result = async {
                    generate_listing(&client, &id).await?;
                    fetch_ad_process(&client, &id).await
                }
                .await;
                match result {
                    Ok(resp) => match resp.listing {
                        Some(listing) if state.with_untracked(|s| s.generation) == run => {
                            state.update(|s| {
                                if !s.apply_listing(listing) {
                                    log::warn!("Listing ignored: wizard already moved on");
                                }
                            });
                        }
                        Some(_) => {
                            log::debug!("Discarding listing from a previous run");
                        }
                        None => log::error!("Ad process {} has no listing yet", id),
                    },
                    Err(e) => log::error!("Listing fetch failed: {}", e),
                }
                set_listing_loading.set(false);
            })
            .await;
        });
    };

    // Final → Upload: wipe everything
    let restart = move |_| {
        if let Some(url) = preview_url.get_untracked() {
            let _ = Url::revoke_object_url(&url);
        }
        set_selected_file.set(None);
        set_preview_url.set(None);
        set_loading.set(false);
        set_price_loading.set(false);
        set_listing_loading.set(false);
        state.update(|s| s.reset());
        log::info!("Wizard reset, starting over");
    };

    view! {
        <div class="wizard">
            <Show when=move || blocking_message.get().is_some() fallback=|| view! {}>
                <BlockingOverlay message=blocking_message.get().unwrap_or_default()/>
            </Show>

            <h1 class="wizard-title">"Kleinanzeigen KI-Wizard"</h1>
            <StepIndicator steps=&STEPS[..] current_step=current_step/>

            // Step 0: Upload
            <Show when=move || current_step.get() == WizardStep::Upload.index()>
                <Show when=move || !loading.get()>
                    <UploadDropzone on_file_selected=on_file_selected/>
                </Show>
                <Show when=move || preview_url.get().is_some()>
                    <div class="preview">
                        <img
                            src=move || preview_url.get().unwrap_or_default()
                            alt="Vorschau"
                            class="preview-image"
                        />
                    </div>
                </Show>
                <div class="wizard-actions">
                    <button
                        class="btn btn-primary"
                        on:click=start_analysis
                        disabled=move || selected_file.get().is_none() || loading.get()
                    >
                        {move || if loading.get() { "Analysiere..." } else { "KI-Analyse starten" }}
                    </button>
                </div>
            </Show>

            // Step 1: Attributes
            <Show when=move || current_step.get() == WizardStep::Attributes.index()>
                <div class="attribute-form">
                    <div class="form-field">
                        <label>"Marke"</label>
                        <input
                            type="text"
                            prop:value=move || state.with(|s| s.attributes.brand.clone())
                            on:input=move |ev: Event| {
                                let input: HtmlInputElement = event_target(&ev);
                                state.update(|s| s.attributes.brand = input.value());
                            }
                        />
                    </div>
                    <div class="form-field">
                        <label>"Modell oder Typ"</label>
                        <input
                            type="text"
                            prop:value=move || state.with(|s| s.attributes.model_or_type.clone())
                            on:input=move |ev: Event| {
                                let input: HtmlInputElement = event_target(&ev);
                                state.update(|s| s.attributes.model_or_type = input.value());
                            }
                        />
                    </div>
                    <div class="form-field">
                        <label>"Kategorie"</label>
                        <input
                            type="text"
                            prop:value=move || state.with(|s| s.attributes.category.clone())
                            on:input=move |ev: Event| {
                                let input: HtmlInputElement = event_target(&ev);
                                state.update(|s| s.attributes.category = input.value());
                            }
                        />
                    </div>
                    <div class="form-field">
                        <label>"Farbe"</label>
                        <input
                            type="text"
                            prop:value=move || state.with(|s| s.attributes.color.clone())
                            on:input=move |ev: Event| {
                                let input: HtmlInputElement = event_target(&ev);
                                state.update(|s| s.attributes.color = input.value());
                            }
                        />
                    </div>
                    <div class="form-field">
                        <label>"Zustand"</label>
                        <select
                            prop:value=move || state.with(|s| s.attributes.condition.clone())
                            on:change=move |ev: Event| {
                                state.update(|s| s.attributes.condition = event_target_value(&ev));
                            }
                        >
                            {CONDITIONS
                                .iter()
                                .map(|condition| view! { <option>{*condition}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-field">
                        <label>"Hinweise"</label>
                        <textarea
                            prop:value=move || state.with(|s| s.attributes.special_notes.clone())
                            on:input=move |ev: Event| {
                                state.update(|s| s.attributes.special_notes = event_target_value(&ev));
                            }
                        ></textarea>
                    </div>
                </div>
                <div class="wizard-actions">
                    <button
                        class="btn btn-primary"
                        on:click=fetch_price_suggestion
                        disabled=move || price_loading.get()
                    >
                        {move || {
                            if price_loading.get() {
                                "Preisvorschlag wird ermittelt..."
                            } else {
                                "Preisvorschlag ermitteln"
                            }
                        }}
                    </button>
                </div>
            </Show>

            // Step 2: Price suggestion
            <Show when=move || current_step.get() == WizardStep::Price.index()>
                <div class="price-suggestion">
                    <h2>"Preisvorschlag"</h2>
                    <div class="price-row">
                        <strong>"Preisvorschlag: "</strong>
                        {move || state.with(|s| s.price.clone())}
                    </div>
                    <div class="price-row">
                        <strong>"Erklärung: "</strong>
                        {move || state.with(|s| s.suggestion.explanation.clone())}
                    </div>
                </div>
                <div class="wizard-actions">
                    <button
                        class="btn btn-primary"
                        on:click=fetch_listing
                        disabled=move || listing_loading.get()
                    >
                        {move || {
                            if listing_loading.get() {
                                "Verkaufsanzeige wird generiert..."
                            } else {
                                "Verkaufsanzeige generieren"
                            }
                        }}
                    </button>
                </div>
            </Show>

            // Step 3: Final review
            <Show when=move || current_step.get() == WizardStep::Final.index()>
                <h2 class="final-title">"Abschluss"</h2>
                <Show when=move || preview_url.get().is_some()>
                    <div class="preview">
                        <img
                            src=move || preview_url.get().unwrap_or_default()
                            alt="Vorschau"
                            class="preview-thumbnail"
                        />
                    </div>
                </Show>
                <div class="review-list">
                    <For
                        each=move || {
                            state.with(|s| {
                                vec![
                                    ("Titel", s.attributes.title.clone()),
                                    ("Beschreibung", s.attributes.description.clone()),
                                    ("Kategorie", s.attributes.category.clone()),
                                    ("Zustand", s.attributes.condition.clone()),
                                    ("Preis", s.price.clone()),
                                ]
                            })
                        }
                        key=|(label, _)| *label
                        children=move |(label, value)| {
                            let clipboard_value = value.clone();
                            view! {
                                <div class="review-row">
                                    <div class="review-field">
                                        <label>{label}</label>
                                        <p class="review-value">{value}</p>
                                    </div>
                                    <button
                                        class="btn-copy"
                                        title="In Zwischenablage kopieren"
                                        on:click=move |_| copy_to_clipboard(clipboard_value.clone())
                                    >
                                        "⧉"
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>
                <div class="wizard-actions">
                    <button class="btn btn-restart" on:click=restart>
                        "Neustart"
                    </button>
                </div>
            </Show>
        </div>
    }
}
