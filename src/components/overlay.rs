//! Full-screen blocking overlay.

use leptos::*;

/// Full-viewport modal with a spinner and a progress message.
///
/// Blocks all interaction beneath it while mounted. Has no timer of its
/// own; the wizard controls when it appears and disappears.
#[component]
pub fn BlockingOverlay(
    /// Message shown under the spinner
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="blocking-overlay">
            <div class="blocking-spinner"></div>
            <p class="blocking-message">{message}</p>
        </div>
    }
}
