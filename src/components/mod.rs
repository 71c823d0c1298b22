//! UI Components for the KI-Wizard application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Pages
//! - [`Welcome`] - Landing page with the wizard entry link
//! - [`Wizard`] - The four-step wizard (owns all step state)
//!
//! # Wizard children
//! - [`UploadDropzone`] - Image file picker with drag & drop
//! - [`StepIndicator`] - Progress visualization for the four steps
//! - [`BlockingOverlay`] - Full-screen modal during async actions

mod overlay;
mod step_indicator;
mod upload;
mod welcome;
mod wizard;

pub use overlay::*;
pub use step_indicator::*;
pub use upload::*;
pub use welcome::*;
pub use wizard::*;
