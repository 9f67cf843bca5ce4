use std::collections::HashMap;

use crate::{Category, Question, QuestionId};

/// Error raised when a catalog's questions and categories are inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Duplicate question id: {0}")]
    DuplicateQuestion(QuestionId),

    #[error("Duplicate category letter: {0}")]
    DuplicateCategory(char),

    #[error("Question {0} does not belong to any category")]
    OrphanQuestion(QuestionId),
}

/// The immutable set of questions and categories making up a survey.
///
/// Lookup by id is O(1) through a hash index. Iteration preserves the order
/// in which questions were given, and can be narrowed to one category.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    questions: Vec<Question>,
    index: HashMap<QuestionId, usize>,
}

impl Catalog {
    /// Build a catalog, checking that ids and letters are unique and that
    /// every question's letter matches exactly one category.
    pub fn new(categories: Vec<Category>, questions: Vec<Question>) -> Result<Self, CatalogError> {
        for (i, category) in categories.iter().enumerate() {
            if categories[..i].iter().any(|c| c.letter() == category.letter()) {
                return Err(CatalogError::DuplicateCategory(category.letter()));
            }
        }

        let mut index = HashMap::with_capacity(questions.len());
        for (position, question) in questions.iter().enumerate() {
            if !categories.iter().any(|c| c.owns(question.id())) {
                return Err(CatalogError::OrphanQuestion(question.id().clone()));
            }
            if index.insert(question.id().clone(), position).is_some() {
                return Err(CatalogError::DuplicateQuestion(question.id().clone()));
            }
        }

        Ok(Self {
            categories,
            questions,
            index,
        })
    }

    /// Get a question by id.
    pub fn get(&self, id: &QuestionId) -> Option<&Question> {
        self.index.get(id).map(|&position| &self.questions[position])
    }

    /// Check if the catalog defines a question with this id.
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.index.contains_key(id)
    }

    /// Get the prompt text of a question.
    pub fn prompt(&self, id: &QuestionId) -> Option<&str> {
        self.get(id).map(Question::prompt)
    }

    /// All questions, in catalog order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Questions belonging to the category with the given letter.
    pub fn questions_in(&self, letter: char) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(move |q| q.id().belongs_to(letter))
    }

    /// All categories, in catalog order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Get a category by letter.
    pub fn category(&self, letter: char) -> Option<&Category> {
        self.categories.iter().find(|c| c.letter() == letter)
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Check if the catalog has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
