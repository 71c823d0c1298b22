//! Landing page.

use leptos::*;
use leptos_router::A;

#[component]
pub fn Welcome() -> impl IntoView {
    view! {
        <main class="welcome">
            <div class="welcome-content">
                <h1>"Willkommen zur KI-Kleinanzeigen-App"</h1>
                <p class="welcome-subtitle">"Hier beginnt deine Reise."</p>
                <A href="/wizard" class="welcome-start">
                    "Starte den Wizard"
                </A>
            </div>
        </main>
    }
}
