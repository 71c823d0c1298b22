//! Wizard state machine.
//!
//! All step state lives here, kept free of any DOM or signal types so
//! the transition rules can be tested natively. The flow is strictly
//! forward-only:
//!
//! ```text
//! Upload(0) ──identify──▶ Attributes(1) ──suggest──▶ Price(2) ──listing──▶ Final(3)
//!    ▲                                                                        │
//!    └────────────────────────────── reset ──────────────────────────────────┘
//! ```
//!
//! Each `apply_*` transition only fires from its source step and only
//! after the corresponding backend calls succeeded; the component layer
//! never advances the step on its own.

use crate::format::{format_price, format_price_value};
use crate::types::{
    Attributes, AttributesPatch, IdentifyResponse, LabelToken, Listing, PriceSuggestion,
    StepLabel, SuggestResponse,
};

/// The four wizard steps, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardStep {
    /// Step 0: pick and upload an image
    Upload,
    /// Step 1: review/edit the recognized attributes
    Attributes,
    /// Step 2: review the price suggestion
    Price,
    /// Step 3: review the generated ad
    Final,
}

impl WizardStep {
    /// Zero-based index used by the step indicator.
    pub fn index(self) -> usize {
        match self {
            WizardStep::Upload => 0,
            WizardStep::Attributes => 1,
            WizardStep::Price => 2,
            WizardStep::Final => 3,
        }
    }
}

/// Display status of one entry in the step indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    /// Already completed
    Done,
    /// The step the user is on
    Active,
    /// Not reached yet
    Pending,
}

/// Status of the step at `index` when the wizard is on `current`.
pub fn step_status(index: usize, current: usize) -> StepStatus {
    if index < current {
        StepStatus::Done
    } else if index == current {
        StepStatus::Active
    } else {
        StepStatus::Pending
    }
}

/// The step labels, in wizard order.
///
/// "Preisvorschlag" carries a hyphenation point so it can break on
/// narrow screens.
pub static STEPS: [StepLabel; 4] = [
    StepLabel {
        tokens: &[LabelToken::Text("Upload")],
    },
    StepLabel {
        tokens: &[LabelToken::Text("Merkmale prüfen")],
    },
    StepLabel {
        tokens: &[
            LabelToken::Text("Preis"),
            LabelToken::SoftHyphen,
            LabelToken::Text("vorschlag"),
        ],
    },
    StepLabel {
        tokens: &[LabelToken::Text("Abschluss")],
    },
];

/// Remaining overlay display time in milliseconds.
///
/// The blocking overlay stays up for at least `min_ms` per action; an
/// action that settles early waits out the difference, a slow one
/// closes the overlay immediately.
pub fn overlay_close_delay(elapsed_ms: f64, min_ms: u32) -> u32 {
    let remaining = f64::from(min_ms) - elapsed_ms;
    if remaining > 0.0 {
        remaining as u32
    } else {
        0
    }
}

/// All transient wizard state for one run.
///
/// Created empty at mount, mutated by the transition methods below and
/// wiped by [`reset`](WizardState::reset). Nothing survives the
/// component.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WizardState {
    step_index: usize,
    /// Backend correlation id; set by the first successful identify
    /// call and reused for every later call in the same run.
    pub ad_process_id: Option<String>,
    pub attributes: Attributes,
    pub suggestion: PriceSuggestion,
    /// Display-formatted price ("49,99 €"), empty until step 2.
    pub price: String,
    /// Run identifier; bumped on every reset so responses from a
    /// previous run can be recognized and discarded.
    pub generation: u64,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        match self.step_index {
            0 => WizardStep::Upload,
            1 => WizardStep::Attributes,
            2 => WizardStep::Price,
            _ => WizardStep::Final,
        }
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    /// Upload → Attributes, after a successful identify call.
    ///
    /// The process id is set at most once per run; a second identify in
    /// the same run keeps the original id. Returns `false` without
    /// touching anything when the wizard is not on the Upload step.
    pub fn apply_identification(&mut self, resp: IdentifyResponse) -> bool {
        if self.step() != WizardStep::Upload {
            return false;
        }
        if self.ad_process_id.is_none() {
            self.ad_process_id = Some(resp.ad_process_id);
        }
        self.attributes.apply_patch(resp.identification);
        self.step_index = WizardStep::Attributes.index();
        true
    }

    /// Attributes → Price, after comparables + suggest succeeded.
    pub fn apply_suggestion(&mut self, resp: SuggestResponse) -> bool {
        if self.step() != WizardStep::Attributes {
            return false;
        }
        let suggestion = PriceSuggestion::from(resp);
        self.price = format_price(&suggestion.suggested_price);
        self.suggestion = suggestion;
        self.step_index = WizardStep::Price.index();
        true
    }

    /// Price → Final, after generate + fetch succeeded.
    ///
    /// Merges the listing's title/description/condition/category into
    /// the attributes; fields the listing omits keep their prior values.
    pub fn apply_listing(&mut self, listing: Listing) -> bool {
        if self.step() != WizardStep::Price {
            return false;
        }
        self.price = format_price_value(listing.price.as_ref());
        self.attributes.apply_patch(AttributesPatch {
            title: listing.title,
            description: listing.description,
            condition: listing.condition,
            category: listing.category,
            ..Default::default()
        });
        self.step_index = WizardStep::Final.index();
        true
    }

    /// Clear every field back to the initial empty state and return to
    /// Upload. The generation counter survives (incremented), so
    /// responses still in flight from the old run no longer match.
    pub fn reset(&mut self) {
        let generation = self.generation + 1;
        *self = WizardState::default();
        self.generation = generation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PriceValue;

    fn identify_response(id: &str, brand: &str) -> IdentifyResponse {
        IdentifyResponse {
            ad_process_id: id.to_string(),
            identification: AttributesPatch {
                brand: Some(brand.to_string()),
                ..Default::default()
            },
        }
    }

    #[test]
    fn steps_have_stable_indices() {
        assert_eq!(WizardStep::Upload.index(), 0);
        assert_eq!(WizardStep::Attributes.index(), 1);
        assert_eq!(WizardStep::Price.index(), 2);
        assert_eq!(WizardStep::Final.index(), 3);
        assert_eq!(STEPS.len(), 4);
    }

    #[test]
    fn step_status_counts() {
        let current = 2;
        let statuses: Vec<_> = (0..STEPS.len())
            .map(|i| step_status(i, current))
            .collect();

        let done = statuses.iter().filter(|s| **s == StepStatus::Done).count();
        let active = statuses.iter().filter(|s| **s == StepStatus::Active).count();
        let pending = statuses
            .iter()
            .filter(|s| **s == StepStatus::Pending)
            .count();

        assert_eq!(done, current);
        assert_eq!(active, 1);
        assert_eq!(pending, STEPS.len() - current - 1);
    }

    #[test]
    fn overlay_close_delay_pads_fast_actions() {
        assert_eq!(overlay_close_delay(1200.0, 5000), 3800);
        assert_eq!(overlay_close_delay(0.0, 5000), 5000);
    }

    #[test]
    fn overlay_close_delay_is_zero_for_slow_actions() {
        assert_eq!(overlay_close_delay(5000.0, 5000), 0);
        assert_eq!(overlay_close_delay(9999.0, 5000), 0);
    }

    #[test]
    fn identification_advances_and_stores_process_id() {
        let mut state = WizardState::new();
        assert!(state.apply_identification(identify_response("p1", "Sony")));

        assert_eq!(state.step(), WizardStep::Attributes);
        assert_eq!(state.ad_process_id.as_deref(), Some("p1"));
        assert_eq!(state.attributes.brand, "Sony");
    }

    #[test]
    fn process_id_is_set_at_most_once_per_run() {
        let mut state = WizardState::new();
        state.apply_identification(identify_response("p1", "Sony"));

        // A second identify in the same run must not replace the id
        state.step_index = WizardStep::Upload.index();
        state.apply_identification(identify_response("p2", "Nintendo"));

        assert_eq!(state.ad_process_id.as_deref(), Some("p1"));
    }

    #[test]
    fn transitions_reject_wrong_source_step() {
        let mut state = WizardState::new();

        // Not on Attributes yet: suggestion must not apply
        let before = state.clone();
        assert!(!state.apply_suggestion(SuggestResponse {
            suggested_price: Some("49.99".to_string()),
            explanation: Some("...".to_string()),
        }));
        assert_eq!(state, before);

        // Not on Price yet: listing must not apply
        assert!(!state.apply_listing(Listing {
            title: Some("X".to_string()),
            description: None,
            condition: None,
            category: None,
            price: Some(PriceValue::Number(55.0)),
        }));
        assert_eq!(state, before);
    }

    #[test]
    fn suggestion_formats_the_price() {
        let mut state = WizardState::new();
        state.apply_identification(identify_response("p1", "Sony"));

        assert!(state.apply_suggestion(SuggestResponse {
            suggested_price: Some("49.99".to_string()),
            explanation: Some("Vergleichbare Angebote liegen bei 45-55 €".to_string()),
        }));

        assert_eq!(state.step(), WizardStep::Price);
        assert_eq!(state.price, "49,99 €");
        assert_eq!(state.suggestion.suggested_price, "49.99");
    }

    #[test]
    fn listing_merge_keeps_unmentioned_attributes() {
        let mut state = WizardState::new();
        state.apply_identification(identify_response("p1", "Sony"));
        state.apply_suggestion(SuggestResponse {
            suggested_price: Some("49.99".to_string()),
            explanation: None,
        });

        assert!(state.apply_listing(Listing {
            title: Some("X".to_string()),
            description: None,
            condition: None,
            category: None,
            price: Some(PriceValue::Number(55.0)),
        }));

        assert_eq!(state.step(), WizardStep::Final);
        assert_eq!(state.price, "55,00 €");
        assert_eq!(state.attributes.title, "X");
        // The identify result is still there
        assert_eq!(state.attributes.brand, "Sony");
    }

    #[test]
    fn reset_clears_everything_and_bumps_generation() {
        let mut state = WizardState::new();
        state.apply_identification(identify_response("p1", "Sony"));
        state.apply_suggestion(SuggestResponse {
            suggested_price: Some("49.99".to_string()),
            explanation: Some("...".to_string()),
        });

        let old_generation = state.generation;
        state.reset();

        assert_eq!(state.step(), WizardStep::Upload);
        assert_eq!(state.ad_process_id, None);
        assert_eq!(state.attributes, Attributes::default());
        assert_eq!(state.suggestion, PriceSuggestion::default());
        assert_eq!(state.price, "");
        assert_eq!(state.generation, old_generation + 1);
    }

    /// The end-to-end sequence from the wizard's happy path.
    #[test]
    fn full_run_through_all_steps() {
        let mut state = WizardState::new();

        assert!(state.apply_identification(identify_response("p1", "Sony")));
        assert_eq!(state.step_index(), 1);
        assert_eq!(state.attributes.brand, "Sony");

        assert!(state.apply_suggestion(SuggestResponse {
            suggested_price: Some("49.99".to_string()),
            explanation: Some("...".to_string()),
        }));
        assert_eq!(state.step_index(), 2);
        assert_eq!(state.price, "49,99 €");

        assert!(state.apply_listing(Listing {
            title: Some("X".to_string()),
            description: Some("Beschreibung".to_string()),
            condition: Some("Gut".to_string()),
            category: Some("Elektronik/Audio & Hifi".to_string()),
            price: Some(PriceValue::Number(55.0)),
        }));
        assert_eq!(state.step_index(), 3);
        assert_eq!(state.price, "55,00 €");
        assert_eq!(state.ad_process_id.as_deref(), Some("p1"));
    }
}
