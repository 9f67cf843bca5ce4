//! # raqt
//!
//! The Society for Risk Analysis "Risk Analysis Quality Test" as a survey.
//! Backend-agnostic.
//!
//! This crate bundles the question battery with the types needed to collect
//! and export answers:
//!
//! ```rust
//! use raqt::{AnswerValue, Session, SurveyEvent, aqt};
//!
//! let mut session = Session::new();
//! session.apply(SurveyEvent::SetAnswer {
//!     id: "A1".into(),
//!     value: AnswerValue::Yes,
//!     justification: None,
//! });
//!
//! let snapshot = session.snapshot(aqt());
//! assert_eq!(snapshot.answers.len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`aqt`](mod@aqt) - The 65 questions in 15 categories (A-O)
//! - [`pedigree`] - NUSAP pedigree matrices, reference data only
//! - [`overview`] - Introduction, goals and instructions shown with the survey
//!
//! ## Backends
//!
//! Backends are separate crates:
//! - `raqt-html` - Renders a session as an HTML page
//! - `raqt-server` - Serves the page and collects answers over HTTP

// Re-export all types from raqt-types
pub use raqt_types::*;

pub mod aqt;
pub use aqt::aqt;

pub mod overview;
pub mod pedigree;

// Test backend for driving sessions without user interaction
mod test_backend;
pub use test_backend::{TestBackend, TestBackendError};
