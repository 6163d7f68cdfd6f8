//! Errors surfaced by question generation and quiz sessions.
//!
//! Storage problems never show up here: stats reads fall back to an empty map
//! and failed writes are logged by the stats store.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    /// The item pool has no entries.
    #[error("item pool is empty")]
    EmptyPool,

    /// The pool is too small to build a full set of options.
    #[error("item pool has {len} item(s), need at least {min}")]
    PoolTooSmall { len: usize, min: usize },

    /// Two items in the pool share an id.
    #[error("duplicate item id in pool: {0}")]
    DuplicateId(String),

    /// No three distinct wrong options exist for this item.
    #[error("could not build three distinct wrong options for {id}")]
    DistractorsExhausted { id: String },

    /// The chosen option index is outside the option list.
    #[error("option index {index} out of range (0..{len})")]
    OptionOutOfRange { index: usize, len: usize },

    /// There is no question to answer yet.
    #[error("no question has been generated")]
    NoQuestion,

    /// The current question was already answered.
    #[error("question already answered")]
    AlreadyAnswered,
}

impl QuizError {
    /// Configuration errors come from the pool itself and will recur on
    /// every call until the pool changes.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            QuizError::EmptyPool | QuizError::PoolTooSmall { .. } | QuizError::DuplicateId(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_errors_are_configuration_errors() {
        assert!(QuizError::EmptyPool.is_configuration());
        assert!(QuizError::PoolTooSmall { len: 1, min: 2 }.is_configuration());
        assert!(QuizError::DuplicateId("go".into()).is_configuration());
    }

    #[test]
    fn test_session_and_exhaustion_errors_are_not_configuration() {
        assert!(!QuizError::DistractorsExhausted { id: "go".into() }.is_configuration());
        assert!(!QuizError::NoQuestion.is_configuration());
        assert!(!QuizError::AlreadyAnswered.is_configuration());
        assert!(!QuizError::OptionOutOfRange { index: 4, len: 4 }.is_configuration());
    }

    #[test]
    fn test_messages_name_the_problem() {
        assert_eq!(
            QuizError::PoolTooSmall { len: 1, min: 2 }.to_string(),
            "item pool has 1 item(s), need at least 2"
        );
        assert_eq!(
            QuizError::DuplicateId("go".into()).to_string(),
            "duplicate item id in pool: go"
        );
    }
}
