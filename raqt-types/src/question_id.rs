use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a question, e.g. `"A1"` or `"J17"`.
///
/// The first character is the category letter, the rest is the question
/// number within that category. Any string is accepted: the answer store does
/// not enforce that an id exists in the catalog.
///
/// Ids order naturally, so `A2` sorts before `A10`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId {
    id: String,
}

impl QuestionId {
    /// Create a new id from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.id
    }

    /// Check if the id is empty.
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }

    /// The category letter, i.e. the first character of the id.
    pub fn category(&self) -> Option<char> {
        self.id.chars().next()
    }

    /// The question number following the category letter, if it is numeric.
    pub fn number(&self) -> Option<u32> {
        let letter = self.category()?;
        self.id[letter.len_utf8()..].parse().ok()
    }

    /// Check whether this id belongs to the category with the given letter.
    pub fn belongs_to(&self, letter: char) -> bool {
        self.category() == Some(letter)
    }

    /// Key of the form field carrying this question's answer.
    pub fn answer_field(&self) -> String {
        format!("{}_answer", self.id)
    }

    /// Key of the form field carrying this question's NA justification.
    pub fn description_field(&self) -> String {
        format!("{}_description", self.id)
    }
}

impl Ord for QuestionId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category()
            .cmp(&other.category())
            .then_with(|| match (self.number(), other.number()) {
                (Some(a), Some(b)) => a.cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for QuestionId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for QuestionId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&String> for QuestionId {
    fn from(s: &String) -> Self {
        Self::new(s.clone())
    }
}

impl From<&QuestionId> for QuestionId {
    fn from(id: &QuestionId) -> Self {
        id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_and_number() {
        let id = QuestionId::new("J17");
        assert_eq!(id.category(), Some('J'));
        assert_eq!(id.number(), Some(17));
        assert!(id.belongs_to('J'));
        assert!(!id.belongs_to('A'));
    }

    #[test]
    fn empty_id_has_no_category() {
        let id = QuestionId::new("");
        assert!(id.is_empty());
        assert_eq!(id.category(), None);
        assert_eq!(id.number(), None);
    }

    #[test]
    fn non_numeric_suffix() {
        let id = QuestionId::new("Axyz");
        assert_eq!(id.category(), Some('A'));
        assert_eq!(id.number(), None);
    }

    #[test]
    fn natural_ordering() {
        let mut ids: Vec<QuestionId> = ["A10", "B1", "A2", "A1"].into_iter().map(Into::into).collect();
        ids.sort();
        let sorted: Vec<_> = ids.iter().map(QuestionId::as_str).collect();
        assert_eq!(sorted, vec!["A1", "A2", "A10", "B1"]);
    }

    #[test]
    fn form_field_names() {
        let id = QuestionId::new("G2");
        assert_eq!(id.answer_field(), "G2_answer");
        assert_eq!(id.description_field(), "G2_description");
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", QuestionId::new("C2")), "C2");
    }
}
