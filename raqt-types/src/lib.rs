//! Core types for the raqt crate.
//!
//! This crate provides the foundational types for running the Risk Analysis
//! Quality Test survey:
//! - `Catalog`, `Question` and `Category` - The immutable question table
//! - `AnswerStore`, `Answer` and `AnswerValue` - Collected answers keyed by `QuestionId`
//! - `SurveySnapshot` and `export_snapshot` - Exportable views of the answers
//! - `Session` and `SurveyEvent` - Per-session state and the events that change it
//! - `SurveyBackend` and `Renderer` traits - For driving and presenting sessions

mod question_id;
pub use question_id::QuestionId;

mod answer_value;
pub use answer_value::{AnswerValue, ParseAnswerError};

mod answers;
pub use answers::{Answer, AnswerStore};

mod question;
pub use question::{Category, Question};

mod catalog;
pub use catalog::{Catalog, CatalogError};

mod snapshot;
pub use snapshot::{SurveySnapshot, export_snapshot};

mod session;
pub use session::{GOAL_COUNT, Session, SubmittedAnswer, SurveyEvent};

mod traits;
pub use traits::{Renderer, SurveyBackend};
