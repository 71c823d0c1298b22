//! Backend communication services.
//!
//! This module provides services for talking to the KI-Wizard backend:
//!
//! # Services
//!
//! - [`api`] - thin HTTP client for JSON and multipart requests
//! - [`ad_process`] - one function per backend endpoint of the wizard flow

pub mod ad_process;
pub mod api;

pub use ad_process::*;
pub use api::*;
