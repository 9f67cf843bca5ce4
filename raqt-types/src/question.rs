use crate::QuestionId;

/// A single question in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// The id this question's answer is stored under.
    id: QuestionId,

    /// The prompt text shown to the user.
    prompt: String,
}

impl Question {
    /// Create a new question.
    pub fn new(id: impl Into<QuestionId>, prompt: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
        }
    }

    /// Get the question id.
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    /// Get the prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The letter of the category this question belongs to.
    pub fn category(&self) -> Option<char> {
        self.id.category()
    }
}

/// A lettered group of questions.
///
/// A category owns exactly the questions whose id starts with its letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    letter: char,
    name: String,
}

impl Category {
    /// Create a new category.
    pub fn new(letter: char, name: impl Into<String>) -> Self {
        Self {
            letter,
            name: name.into(),
        }
    }

    /// The single-letter identifier, e.g. `'A'`.
    pub fn letter(&self) -> char {
        self.letter
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check whether a question id belongs to this category.
    pub fn owns(&self, id: &QuestionId) -> bool {
        id.belongs_to(self.letter)
    }
}
