use std::collections::BTreeSet;

use crate::{Answer, AnswerStore, AnswerValue, Catalog, QuestionId, SurveySnapshot, export_snapshot};

/// Number of entries in the goals checklist.
pub const GOAL_COUNT: usize = 4;

/// One answer as submitted with a category form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedAnswer {
    pub id: QuestionId,
    pub value: AnswerValue,
    pub justification: Option<String>,
}

impl SubmittedAnswer {
    pub fn new(id: impl Into<QuestionId>, value: AnswerValue, justification: Option<String>) -> Self {
        Self {
            id: id.into(),
            value,
            justification,
        }
    }
}

/// A user action that changes session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurveyEvent {
    /// Select an option for one question.
    SetAnswer {
        id: QuestionId,
        value: AnswerValue,
        justification: Option<String>,
    },

    /// Submit the form of one category.
    ///
    /// Only answers that change what is stored are recorded, so radios left at
    /// "not answered" never introduce new keys.
    SubmitCategory {
        category: char,
        answers: Vec<SubmittedAnswer>,
    },

    /// Show or hide a category's form.
    ShowCategory { category: char, visible: bool },

    /// Tick or untick an entry of the goals checklist.
    SetGoal { index: usize, checked: bool },

    /// Toggle the export panel.
    SetExport(bool),

    /// Toggle merging the catalog into the export.
    SetIncludeQuestions(bool),
}

/// State of one browser session: the collected answers plus view toggles.
///
/// All changes go through [`Session::apply`]; renderers only read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    answers: AnswerStore,
    hidden_categories: BTreeSet<char>,
    goals: [bool; GOAL_COUNT],
    export: bool,
    include_questions: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A fresh session: no answers, every category visible, the first two
    /// goals ticked, export off.
    pub fn new() -> Self {
        Self {
            answers: AnswerStore::new(),
            hidden_categories: BTreeSet::new(),
            goals: [true, true, false, false],
            export: false,
            include_questions: false,
        }
    }

    /// Apply one event.
    pub fn apply(&mut self, event: SurveyEvent) {
        match event {
            SurveyEvent::SetAnswer {
                id,
                value,
                justification,
            } => self.answers.set_answer(id, value, justification),

            SurveyEvent::SubmitCategory { category, answers } => {
                self.submit_category(category, answers)
            }

            SurveyEvent::ShowCategory { category, visible } => {
                if visible {
                    self.hidden_categories.remove(&category);
                } else {
                    self.hidden_categories.insert(category);
                }
            }

            SurveyEvent::SetGoal { index, checked } => match self.goals.get_mut(index) {
                Some(goal) => *goal = checked,
                None => tracing::warn!(index, "ignoring unknown goal"),
            },

            SurveyEvent::SetExport(enabled) => self.export = enabled,

            SurveyEvent::SetIncludeQuestions(enabled) => self.include_questions = enabled,
        }
    }

    fn submit_category(&mut self, category: char, answers: Vec<SubmittedAnswer>) {
        let mut recorded = 0usize;
        for submitted in answers {
            if !submitted.id.belongs_to(category) {
                tracing::debug!(id = %submitted.id, %category, "answer outside submitted category ignored");
                continue;
            }

            let answer = Answer::new(submitted.value, submitted.justification);
            let changed = match self.answers.get(&submitted.id) {
                Some(existing) => existing != &answer,
                None => answer.value().is_answered(),
            };
            if changed {
                let justification = answer.justification().map(str::to_string);
                self.answers
                    .set_answer(submitted.id, answer.value(), justification);
                recorded += 1;
            }
        }
        tracing::debug!(%category, recorded, "category submitted");
    }

    /// The collected answers.
    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    pub fn is_category_visible(&self, letter: char) -> bool {
        !self.hidden_categories.contains(&letter)
    }

    pub fn goals(&self) -> &[bool; GOAL_COUNT] {
        &self.goals
    }

    pub fn export_enabled(&self) -> bool {
        self.export
    }

    pub fn include_questions(&self) -> bool {
        self.include_questions
    }

    /// Export the answers, merging in the catalog if the session asks for it.
    pub fn snapshot(&self, catalog: &Catalog) -> SurveySnapshot {
        export_snapshot(&self.answers, catalog, self.include_questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit(category: char, answers: &[(&str, AnswerValue)]) -> SurveyEvent {
        SurveyEvent::SubmitCategory {
            category,
            answers: answers
                .iter()
                .map(|(id, value)| SubmittedAnswer::new(*id, *value, None))
                .collect(),
        }
    }

    #[test]
    fn defaults() {
        let session = Session::new();
        assert!(session.answers().is_empty());
        assert!(session.is_category_visible('A'));
        assert_eq!(session.goals(), &[true, true, false, false]);
        assert!(!session.export_enabled());
        assert!(!session.include_questions());
    }

    #[test]
    fn untouched_form_introduces_no_keys() {
        let mut session = Session::new();
        session.apply(submit(
            'A',
            &[("A1", AnswerValue::NotAnswered), ("A2", AnswerValue::NotAnswered)],
        ));
        assert!(session.answers().is_empty());
    }

    #[test]
    fn submit_records_changes_only() {
        let mut session = Session::new();
        session.apply(submit('A', &[("A1", AnswerValue::Yes), ("A2", AnswerValue::NotAnswered)]));
        assert_eq!(session.answers().len(), 1);

        session.apply(submit('A', &[("A1", AnswerValue::NotAnswered)]));
        assert_eq!(
            session.answers().value_of(&QuestionId::new("A1")),
            AnswerValue::NotAnswered
        );
    }

    #[test]
    fn submit_ignores_other_categories() {
        let mut session = Session::new();
        session.apply(submit('A', &[("B1", AnswerValue::Yes)]));
        assert!(session.answers().is_empty());
    }

    #[test]
    fn view_toggles() {
        let mut session = Session::new();
        session.apply(SurveyEvent::ShowCategory {
            category: 'C',
            visible: false,
        });
        session.apply(SurveyEvent::SetGoal {
            index: 3,
            checked: true,
        });
        session.apply(SurveyEvent::SetGoal {
            index: 9,
            checked: true,
        });
        session.apply(SurveyEvent::SetExport(true));
        session.apply(SurveyEvent::SetIncludeQuestions(true));

        assert!(!session.is_category_visible('C'));
        assert_eq!(session.goals(), &[true, true, false, true]);
        assert!(session.export_enabled());
        assert!(session.include_questions());

        session.apply(SurveyEvent::ShowCategory {
            category: 'C',
            visible: true,
        });
        assert!(session.is_category_visible('C'));
    }
}
