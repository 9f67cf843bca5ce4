use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{AnswerValue, Catalog, QuestionId};

/// The answer recorded for one question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    value: AnswerValue,

    /// Free-text reason, kept only for NA answers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    justification: Option<String>,
}

impl Answer {
    /// Create an answer. A justification is attached only when the value is
    /// NA and the text is non-empty; otherwise it is dropped.
    pub fn new(value: AnswerValue, justification: Option<String>) -> Self {
        let justification = justification
            .filter(|text| value.wants_justification() && !text.trim().is_empty());
        Self {
            value,
            justification,
        }
    }

    pub fn value(&self) -> AnswerValue {
        self.value
    }

    pub fn justification(&self) -> Option<&str> {
        self.justification.as_deref()
    }
}

impl From<AnswerValue> for Answer {
    fn from(value: AnswerValue) -> Self {
        Self::new(value, None)
    }
}

/// Answers collected during one session, keyed by question id.
///
/// Any id is accepted; the store does not check it against a catalog.
/// Setting an answer twice keeps the last one. Iteration is in natural id
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerStore {
    answers: BTreeMap<QuestionId, Answer>,
}

impl AnswerStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            answers: BTreeMap::new(),
        }
    }

    /// Record or overwrite the answer for a question.
    pub fn set_answer(
        &mut self,
        id: impl Into<QuestionId>,
        value: AnswerValue,
        justification: Option<String>,
    ) {
        let id = id.into();
        tracing::trace!(%id, %value, "answer recorded");
        self.answers.insert(id, Answer::new(value, justification));
    }

    /// Get the answer recorded for a question.
    pub fn get(&self, id: &QuestionId) -> Option<&Answer> {
        self.answers.get(id)
    }

    /// The recorded value for a question, or `NotAnswered` if nothing was recorded.
    pub fn value_of(&self, id: &QuestionId) -> AnswerValue {
        self.get(id).map(Answer::value).unwrap_or_default()
    }

    /// Check if an answer exists for the given id.
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.answers.contains_key(id)
    }

    /// All answers whose id starts with the given category letter.
    pub fn answers_for_category(&self, letter: char) -> impl Iterator<Item = (&QuestionId, &Answer)> {
        self.answers
            .iter()
            .filter(move |(id, _)| id.belongs_to(letter))
    }

    /// Ids that have an answer but are not defined in the catalog.
    pub fn unknown_ids<'a>(&'a self, catalog: &'a Catalog) -> impl Iterator<Item = &'a QuestionId> {
        self.answers.keys().filter(|id| !catalog.contains(id))
    }

    /// Get an iterator over all id-answer pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &Answer)> {
        self.answers.iter()
    }

    /// Get the number of answers.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl<'a> IntoIterator for &'a AnswerStore {
    type Item = (&'a QuestionId, &'a Answer);
    type IntoIter = std::collections::btree_map::Iter<'a, QuestionId, Answer>;

    fn into_iter(self) -> Self::IntoIter {
        self.answers.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, Question};

    #[test]
    fn set_and_get() {
        let mut store = AnswerStore::new();
        store.set_answer("A1", AnswerValue::Yes, None);

        let answer = store.get(&QuestionId::new("A1")).unwrap();
        assert_eq!(answer.value(), AnswerValue::Yes);
        assert_eq!(answer.justification(), None);
    }

    #[test]
    fn last_write_wins() {
        let mut store = AnswerStore::new();
        store.set_answer("A1", AnswerValue::Yes, None);
        store.set_answer("A1", AnswerValue::No, None);

        assert_eq!(store.len(), 1);
        assert_eq!(store.value_of(&QuestionId::new("A1")), AnswerValue::No);
    }

    #[test]
    fn justification_kept_only_for_na() {
        let mut store = AnswerStore::new();
        store.set_answer("G2", AnswerValue::NotApplicable, Some("insufficient data".into()));
        store.set_answer("G3", AnswerValue::Yes, Some("ignored".into()));
        store.set_answer("G4", AnswerValue::NotApplicable, Some("   ".into()));

        assert_eq!(
            store.get(&QuestionId::new("G2")).unwrap().justification(),
            Some("insufficient data")
        );
        assert_eq!(store.get(&QuestionId::new("G3")).unwrap().justification(), None);
        assert_eq!(store.get(&QuestionId::new("G4")).unwrap().justification(), None);
    }

    #[test]
    fn filter_by_category() {
        let mut store = AnswerStore::new();
        store.set_answer("A1", AnswerValue::Yes, None);
        store.set_answer("A10", AnswerValue::No, None);
        store.set_answer("B1", AnswerValue::Yes, None);

        let ids: Vec<_> = store
            .answers_for_category('A')
            .map(|(id, _)| id.as_str())
            .collect();
        assert_eq!(ids, vec!["A1", "A10"]);
    }

    #[test]
    fn unknown_ids_are_accepted_and_reported() {
        let catalog = Catalog::new(
            vec![Category::new('A', "Framing")],
            vec![Question::new("A1", "Is the goal clear?")],
        )
        .unwrap();

        let mut store = AnswerStore::new();
        store.set_answer("A1", AnswerValue::Yes, None);
        store.set_answer("Z99", AnswerValue::No, None);

        assert_eq!(store.len(), 2);
        let unknown: Vec<_> = store.unknown_ids(&catalog).collect();
        assert_eq!(unknown, vec![&QuestionId::new("Z99")]);
    }

    #[test]
    fn unrecorded_value_defaults_to_not_answered() {
        let store = AnswerStore::new();
        assert_eq!(store.value_of(&QuestionId::new("A1")), AnswerValue::NotAnswered);
    }
}
