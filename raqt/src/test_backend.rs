//! Test backend for driving sessions without user interaction.
//!
//! `TestBackend` replays pre-defined answers and events into a session, the
//! same way a browser would submit category forms. This is useful for testing
//! exports and renderers.
//!
//! # Example
//!
//! ```rust
//! use raqt::{AnswerValue, QuestionId, Session, SurveyBackend, TestBackend, aqt};
//!
//! let mut session = Session::new();
//! TestBackend::new()
//!     .with_answer("A1", AnswerValue::Yes)
//!     .with_na("G2", "insufficient data")
//!     .collect(aqt(), &mut session)
//!     .unwrap();
//!
//! assert_eq!(session.answers().value_of(&QuestionId::new("A1")), AnswerValue::Yes);
//! ```

use std::collections::BTreeMap;

use crate::{AnswerValue, Catalog, QuestionId, Session, SubmittedAnswer, SurveyBackend, SurveyEvent};

/// A test backend that submits pre-configured answers.
#[derive(Debug, Clone, Default)]
pub struct TestBackend {
    answers: BTreeMap<QuestionId, (AnswerValue, Option<String>)>,
    events: Vec<SurveyEvent>,
    strict: bool,
}

/// Error type for TestBackend.
#[derive(Debug, thiserror::Error)]
pub enum TestBackendError {
    #[error("Question {0} is not in the catalog")]
    UnknownQuestion(QuestionId),

    #[error("Question {0} has no category letter")]
    MissingCategory(QuestionId),
}

impl TestBackend {
    /// Create a new empty test backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject answers for ids that the catalog does not define.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Add an answer for a question.
    pub fn with_answer(mut self, id: impl Into<QuestionId>, value: AnswerValue) -> Self {
        self.answers.insert(id.into(), (value, None));
        self
    }

    /// Add an NA answer with its justification.
    pub fn with_na(mut self, id: impl Into<QuestionId>, justification: impl Into<String>) -> Self {
        self.answers.insert(
            id.into(),
            (AnswerValue::NotApplicable, Some(justification.into())),
        );
        self
    }

    /// Add an event to apply after all answers have been submitted.
    pub fn with_event(mut self, event: SurveyEvent) -> Self {
        self.events.push(event);
        self
    }
}

impl SurveyBackend for TestBackend {
    type Error = TestBackendError;

    fn collect(&self, catalog: &Catalog, session: &mut Session) -> Result<(), Self::Error> {
        // One form submission per category, like a user working down the page.
        let mut forms: BTreeMap<char, Vec<SubmittedAnswer>> = BTreeMap::new();
        for (id, (value, justification)) in &self.answers {
            if self.strict && !catalog.contains(id) {
                return Err(TestBackendError::UnknownQuestion(id.clone()));
            }
            let category = id
                .category()
                .ok_or_else(|| TestBackendError::MissingCategory(id.clone()))?;
            forms.entry(category).or_default().push(SubmittedAnswer::new(
                id.clone(),
                *value,
                justification.clone(),
            ));
        }

        for (category, answers) in forms {
            session.apply(SurveyEvent::SubmitCategory { category, answers });
        }
        for event in &self.events {
            session.apply(event.clone());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aqt;

    #[test]
    fn strict_rejects_unknown_ids() {
        let mut session = Session::new();
        let result = TestBackend::new()
            .strict()
            .with_answer("Z9", AnswerValue::Yes)
            .collect(aqt(), &mut session);
        assert!(matches!(result, Err(TestBackendError::UnknownQuestion(_))));
        assert!(session.answers().is_empty());
    }

    #[test]
    fn lenient_accepts_unknown_ids() {
        let mut session = Session::new();
        TestBackend::new()
            .with_answer("Z9", AnswerValue::Yes)
            .collect(aqt(), &mut session)
            .unwrap();
        assert_eq!(session.answers().len(), 1);
    }

    #[test]
    fn empty_id_has_no_category() {
        let mut session = Session::new();
        let result = TestBackend::new()
            .with_answer("", AnswerValue::Yes)
            .collect(aqt(), &mut session);
        assert!(matches!(result, Err(TestBackendError::MissingCategory(_))));
    }

    #[test]
    fn events_follow_answers() {
        let mut session = Session::new();
        TestBackend::new()
            .with_answer("B2", AnswerValue::No)
            .with_event(SurveyEvent::SetExport(true))
            .collect(aqt(), &mut session)
            .unwrap();
        assert!(session.export_enabled());
        assert_eq!(session.answers().value_of(&QuestionId::new("B2")), AnswerValue::No);
    }
}
