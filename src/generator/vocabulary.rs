use rand::Rng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::engine::StatsMap;
use crate::engine::item::{Item, Word};
use crate::engine::weighting::pick_weighted;
use crate::error::QuizError;
use crate::generator::{OPTION_COUNT, Question, QuestionGenerator, validate_pool};

/// Definition shown as the prompt, four words offered as answers.
pub type VocabularyQuestion = Question<Word, Word>;

pub const MIN_VOCABULARY_POOL: usize = OPTION_COUNT;

pub fn generate_vocabulary_question<R: Rng + ?Sized>(
    pool: &[Word],
    stats: Option<&StatsMap>,
    rng: &mut R,
) -> Result<VocabularyQuestion, QuizError> {
    validate_pool(pool, MIN_VOCABULARY_POOL)?;
    let empty = StatsMap::new();
    build_question(pool, stats.unwrap_or(&empty), rng)
}

fn build_question<R: Rng + ?Sized>(
    pool: &[Word],
    stats: &StatsMap,
    rng: &mut R,
) -> Result<VocabularyQuestion, QuizError> {
    let target = pick_weighted(pool, stats, rng).ok_or(QuizError::EmptyPool)?;

    // Ids are unique and the pool holds at least OPTION_COUNT words, so this
    // fills up.
    let mut options = vec![target.clone()];
    while options.len() < OPTION_COUNT {
        let word = &pool[rng.gen_range(0..pool.len())];
        if !options.iter().any(|o| o.id() == word.id()) {
            options.push(word.clone());
        }
    }
    options.shuffle(rng);

    let correct_option_index = options
        .iter()
        .position(|o| o.id() == target.id())
        .unwrap_or_default();

    Ok(Question {
        target: target.clone(),
        options,
        correct_option_index,
    })
}

pub struct VocabularyGenerator<R: Rng = SmallRng> {
    pool: Vec<Word>,
    rng: R,
}

impl<R: Rng> VocabularyGenerator<R> {
    pub fn new(pool: Vec<Word>, rng: R) -> Result<Self, QuizError> {
        validate_pool(&pool, MIN_VOCABULARY_POOL)?;
        Ok(Self { pool, rng })
    }
}

impl<R: Rng> QuestionGenerator for VocabularyGenerator<R> {
    type Item = Word;
    type Answer = Word;

    fn pool(&self) -> &[Word] {
        &self.pool
    }

    fn generate(&mut self, stats: &StatsMap) -> Result<VocabularyQuestion, QuizError> {
        build_question(&self.pool, stats, &mut self.rng)
    }
}
