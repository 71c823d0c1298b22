//! Wizard progress indicator.

use leptos::*;

use crate::state::{step_status, StepStatus};
use crate::types::{LabelToken, StepLabel};

/// Render a label's tokens to plain text.
///
/// Labels are built from a closed token set instead of raw markup, so
/// nothing here ever reaches the DOM unescaped. The soft hyphen token
/// becomes U+00AD, which the browser treats as an optional break point.
fn label_text(label: &StepLabel) -> String {
    label
        .tokens
        .iter()
        .map(|token| match token {
            LabelToken::Text(text) => *text,
            LabelToken::SoftHyphen => "\u{AD}",
        })
        .collect()
}

/// Stateless progress bar: one numbered circle per step, styled as
/// done, active or pending relative to the current step.
#[component]
pub fn StepIndicator(
    /// The steps, in order
    steps: &'static [StepLabel],
    /// Zero-based index of the step the user is on
    #[prop(into)]
    current_step: Signal<usize>,
) -> impl IntoView {
    view! {
        <div class="step-indicator">
            {steps
                .iter()
                .enumerate()
                .map(|(index, step)| {
                    let label = label_text(step);
                    view! {
                        <div class="step">
                            <div
                                class="step-circle"
                                class:active=move || {
                                    step_status(index, current_step.get()) == StepStatus::Active
                                }
                                class:done=move || {
                                    step_status(index, current_step.get()) == StepStatus::Done
                                }
                            >
                                {index + 1}
                            </div>
                            <span class="step-label">{label}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::STEPS;

    #[test]
    fn soft_hyphen_renders_as_break_point() {
        // "Preisvorschlag" with the hyphenation point in the middle
        assert_eq!(label_text(&STEPS[2]), "Preis\u{AD}vorschlag");
        assert_eq!(label_text(&STEPS[0]), "Upload");
    }
}
