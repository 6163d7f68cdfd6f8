//! Adaptive multiple-choice drills for irregular verbs and vocabulary.
//!
//! Items a learner keeps missing come up more often; each question pairs the
//! right answer with three plausible wrong ones.

pub mod config;
pub mod engine;
pub mod error;
pub mod generator;
pub mod session;
pub mod store;

pub use engine::item::{Item, Verb, VerbForms, Word};
pub use engine::outcome::{OutcomeCounter, StatsMap, count_mastered, is_mastered};
pub use error::QuizError;
pub use generator::verb_forms::generate_question;
pub use generator::{Question, QuestionGenerator};
pub use store::{KeyValueStore, StatsStore};
