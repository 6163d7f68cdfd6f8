use rand::Rng;
use rand::rngs::SmallRng;

use crate::engine::StatsMap;
use crate::engine::item::{Item, Verb, VerbForms};
use crate::engine::weighting::pick_weighted;
use crate::error::QuizError;
use crate::generator::{OPTION_COUNT, Question, QuestionGenerator, validate_pool};

pub type VerbQuestion = Question<Verb, VerbForms>;

/// A verb quiz needs at least one neighbor to borrow forms from.
pub const MIN_VERB_POOL: usize = 2;

const DISTRACTOR_COUNT: usize = OPTION_COUNT - 1;
const MAX_DRAWS: usize = 64;
const NEIGHBOR_PROBABILITY: f64 = 0.5;

/// The learner's over-regularized guess: "go" -> "goed", "make" -> "maked".
pub fn fake_regularization(base: &str) -> String {
    if base.ends_with('e') {
        format!("{base}d")
    } else {
        format!("{base}ed")
    }
}

/// Build one question from `pool`, treating missing stats as empty.
pub fn generate_question<R: Rng + ?Sized>(
    pool: &[Verb],
    stats: Option<&StatsMap>,
    rng: &mut R,
) -> Result<VerbQuestion, QuizError> {
    validate_pool(pool, MIN_VERB_POOL)?;
    let empty = StatsMap::new();
    build_question(pool, stats.unwrap_or(&empty), rng)
}

fn build_question<R: Rng + ?Sized>(
    pool: &[Verb],
    stats: &StatsMap,
    rng: &mut R,
) -> Result<VerbQuestion, QuizError> {
    let target = pick_weighted(pool, stats, rng).ok_or(QuizError::EmptyPool)?;
    let correct = target.forms();

    let mut options = synthesize_distractors(pool, target, &correct, rng)?;
    let correct_option_index = rng.gen_range(0..OPTION_COUNT);
    options.insert(correct_option_index, correct);

    Ok(Question {
        target: target.clone(),
        options,
        correct_option_index,
    })
}

fn synthesize_distractors<R: Rng + ?Sized>(
    pool: &[Verb],
    target: &Verb,
    correct: &VerbForms,
    rng: &mut R,
) -> Result<Vec<VerbForms>, QuizError> {
    let mut distractors = Vec::with_capacity(OPTION_COUNT);
    let mut neighbor: Option<&Verb> = None;

    let mut draws = 0;
    while distractors.len() < DISTRACTOR_COUNT && draws < MAX_DRAWS {
        draws += 1;
        let random = &pool[rng.gen_range(0..pool.len())];
        if random.id() == target.id() {
            continue;
        }
        neighbor = Some(random);

        // The coin only picks the strategy; the fake form always comes from
        // the target, never from the neighbor that was drawn.
        let candidate = if rng.gen_bool(NEIGHBOR_PROBABILITY) {
            random.forms()
        } else {
            let fake = fake_regularization(&target.infinitive);
            VerbForms::new(fake.clone(), fake)
        };
        push_unique(&mut distractors, correct, candidate);
    }

    if distractors.len() < DISTRACTOR_COUNT {
        let neighbor = neighbor.or_else(|| pool.iter().find(|v| v.id() != target.id()));
        for candidate in mixed_forms(target, neighbor) {
            if distractors.len() == DISTRACTOR_COUNT {
                break;
            }
            push_unique(&mut distractors, correct, candidate);
        }
    }

    if distractors.len() < DISTRACTOR_COUNT {
        return Err(QuizError::DistractorsExhausted {
            id: target.id().to_string(),
        });
    }
    Ok(distractors)
}

/// Half-right pairs for pools too small to fill the options by sampling.
fn mixed_forms(target: &Verb, neighbor: Option<&Verb>) -> Vec<VerbForms> {
    let fake = fake_regularization(&target.infinitive);
    let mut forms = Vec::with_capacity(4);
    if let Some(neighbor) = neighbor {
        forms.push(VerbForms::new(&target.past_simple, &neighbor.past_participle));
        forms.push(VerbForms::new(&neighbor.past_simple, &target.past_participle));
    }
    forms.push(VerbForms::new(&fake, &target.past_participle));
    forms.push(VerbForms::new(&target.past_simple, &fake));
    forms
}

fn push_unique(distractors: &mut Vec<VerbForms>, correct: &VerbForms, candidate: VerbForms) {
    if candidate != *correct && !distractors.contains(&candidate) {
        distractors.push(candidate);
    }
}

/// Verb-form quiz over a fixed pool. Holds its own random source so tests can
/// seed it.
pub struct VerbFormGenerator<R: Rng = SmallRng> {
    pool: Vec<Verb>,
    rng: R,
}

impl<R: Rng> VerbFormGenerator<R> {
    pub fn new(pool: Vec<Verb>, rng: R) -> Result<Self, QuizError> {
        validate_pool(&pool, MIN_VERB_POOL)?;
        Ok(Self { pool, rng })
    }
}

impl<R: Rng> QuestionGenerator for VerbFormGenerator<R> {
    type Item = Verb;
    type Answer = VerbForms;

    fn pool(&self) -> &[Verb] {
        &self.pool
    }

    fn generate(&mut self, stats: &StatsMap) -> Result<VerbQuestion, QuizError> {
        build_question(&self.pool, stats, &mut self.rng)
    }
}
