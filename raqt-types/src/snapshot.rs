use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{AnswerStore, AnswerValue, Catalog, QuestionId};

/// A point-in-time export of a session's answers.
///
/// `questions` and `categories` are present only when the snapshot was taken
/// with questions included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveySnapshot {
    /// Selected value per question id.
    pub answers: BTreeMap<QuestionId, AnswerValue>,

    /// Justification text per question id, for NA answers that have one.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub justifications: BTreeMap<QuestionId, String>,

    /// Prompt text per question id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions: Option<BTreeMap<QuestionId, String>>,

    /// Display name per category letter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<BTreeMap<char, String>>,
}

impl SurveySnapshot {
    /// Render the snapshot as indented JSON text.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Export the contents of an answer store.
///
/// With `include_questions` the whole catalog (every prompt and every
/// category name) is merged in; without it no prompt text appears.
pub fn export_snapshot(store: &AnswerStore, catalog: &Catalog, include_questions: bool) -> SurveySnapshot {
    let mut snapshot = SurveySnapshot::default();

    for (id, answer) in store {
        snapshot.answers.insert(id.clone(), answer.value());
        if let Some(text) = answer.justification() {
            snapshot.justifications.insert(id.clone(), text.to_string());
        }
    }

    if include_questions {
        snapshot.questions = Some(
            catalog
                .questions()
                .iter()
                .map(|q| (q.id().clone(), q.prompt().to_string()))
                .collect(),
        );
        snapshot.categories = Some(
            catalog
                .categories()
                .iter()
                .map(|c| (c.letter(), c.name().to_string()))
                .collect(),
        );
    }

    tracing::debug!(
        answers = snapshot.answers.len(),
        include_questions,
        "snapshot exported"
    );
    snapshot
}
