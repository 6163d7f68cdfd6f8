use crate::engine::StatsMap;
use crate::engine::item::Item;
use crate::engine::outcome::count_mastered;
use crate::error::QuizError;
use crate::generator::{Question, QuestionGenerator};
use crate::store::{KeyValueStore, StatsStore};

pub type SessionQuestion<G> =
    Question<<G as QuestionGenerator>::Item, <G as QuestionGenerator>::Answer>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_index: usize,
    pub score: u32,
    pub finished: bool,
}

/// One run through a deck: ask, record, repeat until the goal is reached.
pub struct QuizSession<G: QuestionGenerator, S: KeyValueStore> {
    generator: G,
    store: StatsStore<S>,
    stats: StatsMap,
    current: Option<SessionQuestion<G>>,
    answered: bool,
    goal: u32,
    pub score: u32,
    pub attempts: u32,
}

impl<G: QuestionGenerator, S: KeyValueStore> QuizSession<G, S> {
    pub fn new(generator: G, store: StatsStore<S>, goal: u32) -> Self {
        let stats = store.load();
        Self {
            generator,
            store,
            stats,
            current: None,
            answered: false,
            goal,
            score: 0,
            attempts: 0,
        }
    }

    pub fn next_question(&mut self) -> Result<&SessionQuestion<G>, QuizError> {
        let question = self.generator.generate(&self.stats)?;
        self.answered = false;
        Ok(&*self.current.insert(question))
    }

    pub fn current(&self) -> Option<&SessionQuestion<G>> {
        self.current.as_ref()
    }

    pub fn answer(&mut self, index: usize) -> Result<AnswerOutcome, QuizError> {
        let question = self.current.as_ref().ok_or(QuizError::NoQuestion)?;
        if self.answered {
            return Err(QuizError::AlreadyAnswered);
        }
        if index >= question.options.len() {
            return Err(QuizError::OptionOutOfRange {
                index,
                len: question.options.len(),
            });
        }

        let correct = question.is_correct(index);
        let correct_index = question.correct_option_index;
        self.stats = self.store.record_outcome(question.target.id(), correct);
        self.answered = true;
        self.attempts += 1;
        if correct {
            self.score += 1;
        }

        Ok(AnswerOutcome {
            correct,
            correct_index,
            score: self.score,
            finished: self.is_finished(),
        })
    }

    pub fn is_finished(&self) -> bool {
        self.score >= self.goal
    }

    pub fn goal(&self) -> u32 {
        self.goal
    }

    pub fn stats(&self) -> &StatsMap {
        &self.stats
    }

    /// (mastered, total) over this session's pool.
    pub fn mastery(&self) -> (usize, usize) {
        let pool = self.generator.pool();
        (count_mastered(pool, &self.stats), pool.len())
    }

    pub fn accuracy(&self) -> f64 {
        if self.attempts == 0 {
            return 100.0;
        }
        self.score as f64 / self.attempts as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::OutcomeCounter;
    use crate::engine::item::Verb;
    use crate::generator::verb_forms::VerbFormGenerator;
    use crate::store::MemoryStore;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn make_session(
        backend: &MemoryStore,
        goal: u32,
    ) -> QuizSession<VerbFormGenerator, &MemoryStore> {
        let pool = vec![
            Verb::new("go", "went", "gone"),
            Verb::new("see", "saw", "seen"),
            Verb::new("take", "took", "taken"),
        ];
        let generator = VerbFormGenerator::new(pool, SmallRng::seed_from_u64(42)).unwrap();
        QuizSession::new(generator, StatsStore::new(backend), goal)
    }

    fn wrong_index(question: &SessionQuestion<VerbFormGenerator>) -> usize {
        (question.correct_option_index + 1) % question.options.len()
    }

    #[test]
    fn test_answer_before_question_fails() {
        let backend = MemoryStore::new();
        let mut session = make_session(&backend, 10);
        assert_eq!(session.answer(0), Err(QuizError::NoQuestion));
    }

    #[test]
    fn test_current_tracks_latest_question() {
        let backend = MemoryStore::new();
        let mut session = make_session(&backend, 10);
        assert!(session.current().is_none());

        let asked = session.next_question().unwrap().clone();
        assert_eq!(session.current(), Some(&asked));

        session.answer(asked.correct_option_index).unwrap();
        assert_eq!(session.current(), Some(&asked));
    }

    #[test]
    fn test_correct_answer_scores_and_records() {
        let backend = MemoryStore::new();
        let mut session = make_session(&backend, 10);
        let question = session.next_question().unwrap();
        let index = question.correct_option_index;
        let id = question.target.infinitive.clone();

        let outcome = session.answer(index).unwrap();
        assert!(outcome.correct);
        assert_eq!(outcome.score, 1);
        assert!(!outcome.finished);
        assert_eq!(session.stats().counter(&id), OutcomeCounter::new(1, 0));
        assert_eq!(
            StatsStore::new(&backend).load().counter(&id),
            OutcomeCounter::new(1, 0)
        );
    }

    #[test]
    fn test_wrong_answer_records_miss() {
        let backend = MemoryStore::new();
        let mut session = make_session(&backend, 10);
        let question = session.next_question().unwrap();
        let index = wrong_index(question);
        let id = question.target.infinitive.clone();

        let outcome = session.answer(index).unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.score, 0);
        assert_eq!(session.stats().counter(&id), OutcomeCounter::new(0, 1));
        assert_eq!(session.accuracy(), 0.0);
    }

    #[test]
    fn test_each_question_answers_once() {
        let backend = MemoryStore::new();
        let mut session = make_session(&backend, 10);
        session.next_question().unwrap();
        session.answer(0).unwrap();
        assert_eq!(session.answer(1), Err(QuizError::AlreadyAnswered));
        assert_eq!(session.attempts, 1);
    }

    #[test]
    fn test_out_of_range_answer() {
        let backend = MemoryStore::new();
        let mut session = make_session(&backend, 10);
        session.next_question().unwrap();
        assert_eq!(
            session.answer(4),
            Err(QuizError::OptionOutOfRange { index: 4, len: 4 })
        );
        assert!(session.answer(3).is_ok());
    }

    #[test]
    fn test_session_finishes_at_goal() {
        let backend = MemoryStore::new();
        let mut session = make_session(&backend, 3);
        let mut last = None;
        for _ in 0..3 {
            let index = session.next_question().unwrap().correct_option_index;
            last = Some(session.answer(index).unwrap());
        }
        assert!(last.unwrap().finished);
        assert!(session.is_finished());
        assert_eq!(session.accuracy(), 100.0);
    }

    #[test]
    fn test_session_survives_write_failure() {
        let backend = MemoryStore::new();
        backend.set_fail_writes(true);
        let mut session = make_session(&backend, 10);
        let index = session.next_question().unwrap().correct_option_index;
        let outcome = session.answer(index).unwrap();
        assert!(outcome.correct);
        assert_eq!(session.stats().len(), 1);
        assert!(backend.raw(crate::store::stats_store::STATS_KEY).is_none());
    }

    #[test]
    fn test_mastery_tracks_pool() {
        let backend = MemoryStore::new();
        let mut seeded = StatsMap::new();
        seeded.counters.insert("go".into(), OutcomeCounter::new(5, 1));
        StatsStore::new(&backend).save(&seeded);

        let session = make_session(&backend, 10);
        assert_eq!(session.mastery(), (1, 3));
    }
}
