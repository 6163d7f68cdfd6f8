pub mod deck;
pub mod verb_forms;
pub mod vocabulary;

use std::collections::HashSet;

use crate::engine::StatsMap;
use crate::engine::item::Item;
use crate::error::QuizError;

/// Every question offers exactly this many options.
pub const OPTION_COUNT: usize = 4;

/// One multiple-choice question. `options[correct_option_index]` is the
/// target's answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question<T, A> {
    pub target: T,
    pub options: Vec<A>,
    pub correct_option_index: usize,
}

impl<T, A> Question<T, A> {
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_option_index
    }

    pub fn correct_option(&self) -> &A {
        &self.options[self.correct_option_index]
    }
}

pub trait QuestionGenerator {
    type Item: Item;
    type Answer;

    fn pool(&self) -> &[Self::Item];

    fn generate(
        &mut self,
        stats: &StatsMap,
    ) -> Result<Question<Self::Item, Self::Answer>, QuizError>;
}

/// Rejects pools that are empty, smaller than `min`, or carry a repeated id.
pub fn validate_pool<T: Item>(pool: &[T], min: usize) -> Result<(), QuizError> {
    if pool.is_empty() {
        return Err(QuizError::EmptyPool);
    }
    if pool.len() < min {
        return Err(QuizError::PoolTooSmall {
            len: pool.len(),
            min,
        });
    }
    let mut seen = HashSet::with_capacity(pool.len());
    for item in pool {
        if !seen.insert(item.id()) {
            return Err(QuizError::DuplicateId(item.id().to_string()));
        }
    }
    Ok(())
}
