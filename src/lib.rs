//! Kleinanzeigen KI-Wizard - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that walks a user through listing an item
//! for sale: upload a photo, review the AI-recognized attributes,
//! accept a price suggestion and review the generated ad.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App (Router)                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Welcome ("/", "/welcome")                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Wizard ("/wizard")                                          │
//! │  ├── StepIndicator (progress for the four steps)            │
//! │  ├── BlockingOverlay (while a backend action runs)          │
//! │  ├── UploadDropzone (step 0)                                │
//! │  └── per-step views (attributes form, price, final review)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - backend URL, overlay timing, logging flags
//! - [`types`] - attributes, price and API payload types
//! - [`format`] - German-locale price formatting
//! - [`state`] - the pure wizard state machine
//! - [`components`] - UI components
//! - [`services`] - backend communication

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod format;
pub mod services;
pub mod state;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Formatting
pub use format::{format_amount, format_price, format_price_value};

// State machine
pub use state::{overlay_close_delay, step_status, StepStatus, WizardState, WizardStep, STEPS};

// Types
pub use types::{
    // Attributes
    Attributes, AttributesPatch,
    // Prices
    PriceSuggestion, PriceValue,
    // API
    AdProcessRequest, AdProcessResponse, IdentifyRequest, IdentifyResponse, Listing,
    SuggestResponse, UploadResponse,
    // Step labels
    LabelToken, StepLabel,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 KI-Wizard - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=Welcome/>
                    <Route path="/welcome" view=Welcome/>
                    <Route path="/wizard" view=Wizard/>
                </Routes>
            </main>
        </Router>
    }
}
