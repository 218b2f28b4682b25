//! Client SDK for the Beacon Youth Initiative backend API.
//!
//! The crate covers the full client-side workflow of the organization's
//! site: validated form submission (enrollment, volunteer application,
//! contact, and the one-shot engagement forms), public blog reads with
//! graceful fallback, admin list views with pagination and CSV export, and
//! the CSV-driven admission mailer.
//!
//! Layering, leaves first:
//!
//! - [`client`]: the single point of HTTP communication; typed envelopes,
//!   bearer auth as an explicit [`client::AdminSession`] argument.
//! - [`forms`]: per-form controllers with client-side validation and the
//!   idle / submitting / submitted lifecycle.
//! - [`listing`]: paginated admin collections with page-scoped filtering,
//!   confirmed deletes, and export helpers in [`export`].
//! - [`content`]: public blog views.
//! - [`mailer`]: the four-stage admission mailer workflow.

pub mod client;
pub mod content;
pub mod error;
pub mod export;
pub mod forms;
pub mod listing;
pub mod mailer;

pub use client::{AdminSession, ApiClient};
pub use error::ApiError;

/// Re-export of the shared wire types.
pub use beacon_api_types as api_types;
