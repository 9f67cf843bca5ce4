//! # raqt-server
//!
//! Serves the survey as a web page. Every browser gets its own [`Session`]
//! (identified by the `raqt_session` cookie); category forms post back to the
//! server, which applies them as [`SurveyEvent`]s and redirects to the page.
//!
//! [`Session`]: raqt::Session
//! [`SurveyEvent`]: raqt::SurveyEvent

pub mod config;
pub mod server;
pub mod sessions;

pub use config::ServerConfig;
pub use server::{AppState, ServerError, create_router};
pub use sessions::{SESSION_COOKIE, SessionStore};
