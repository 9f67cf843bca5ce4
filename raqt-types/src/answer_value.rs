use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The option selected for a question.
///
/// On the wire and in exports the options are the literal strings
/// `yes`, `no`, `NA` and `not answered`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnswerValue {
    #[serde(rename = "yes")]
    Yes,

    #[serde(rename = "no")]
    No,

    /// Not applicable. Should be accompanied by a justification.
    #[serde(rename = "NA")]
    NotApplicable,

    #[default]
    #[serde(rename = "not answered")]
    NotAnswered,
}

/// Error returned when a string is not one of the four answer literals.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a valid answer (expected one of: yes, no, NA, not answered)")]
pub struct ParseAnswerError(pub String);

impl AnswerValue {
    /// All options, in the order they are offered to the user.
    pub const ALL: [AnswerValue; 4] = [Self::Yes, Self::No, Self::NotApplicable, Self::NotAnswered];

    /// The literal string for this option.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::NotApplicable => "NA",
            Self::NotAnswered => "not answered",
        }
    }

    /// Whether this option requires a justification in practice.
    pub fn wants_justification(&self) -> bool {
        matches!(self, Self::NotApplicable)
    }

    pub fn is_answered(&self) -> bool {
        !matches!(self, Self::NotAnswered)
    }
}

impl FromStr for AnswerValue {
    type Err = ParseAnswerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|value| value.as_str() == s)
            .ok_or_else(|| ParseAnswerError(s.to_string()))
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_literals() {
        assert_eq!("yes".parse::<AnswerValue>(), Ok(AnswerValue::Yes));
        assert_eq!("no".parse::<AnswerValue>(), Ok(AnswerValue::No));
        assert_eq!("NA".parse::<AnswerValue>(), Ok(AnswerValue::NotApplicable));
        assert_eq!(
            "not answered".parse::<AnswerValue>(),
            Ok(AnswerValue::NotAnswered)
        );
    }

    #[test]
    fn parse_is_literal() {
        assert!("Yes".parse::<AnswerValue>().is_err());
        assert!("na".parse::<AnswerValue>().is_err());
        assert!(" yes".parse::<AnswerValue>().is_err());
    }

    #[test]
    fn default_is_not_answered() {
        assert_eq!(AnswerValue::default(), AnswerValue::NotAnswered);
        assert!(!AnswerValue::default().is_answered());
    }

    #[test]
    fn serializes_as_literal() {
        let json = serde_json::to_string(&AnswerValue::NotApplicable).unwrap();
        assert_eq!(json, "\"NA\"");
        let value: AnswerValue = serde_json::from_str("\"not answered\"").unwrap();
        assert_eq!(value, AnswerValue::NotAnswered);
    }
}
