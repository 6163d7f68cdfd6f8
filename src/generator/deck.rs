use crate::engine::StatsMap;
use crate::engine::item::{Verb, Word};
use crate::engine::outcome::count_mastered;

const IRREGULAR_VERBS: &str = include_str!("../../assets/irregular_verbs.json");
const NOUNS: &str = include_str!("../../assets/nouns.json");
const REGULAR_VERBS: &str = include_str!("../../assets/regular_verbs.json");
const INTERVIEW_WORDS: &str = include_str!("../../assets/interview_words.json");
const INTERVIEW_PHRASES: &str = include_str!("../../assets/interview_phrases.json");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Deck {
    IrregularVerbs,
    Nouns,
    RegularVerbs,
    InterviewWords,
    InterviewPhrases,
}

pub const ALL_DECKS: &[Deck] = &[
    Deck::IrregularVerbs,
    Deck::Nouns,
    Deck::RegularVerbs,
    Deck::InterviewWords,
    Deck::InterviewPhrases,
];

/// Which question shape a deck is drilled with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeckPool {
    Verbs(Vec<Verb>),
    Words(Vec<Word>),
}

impl DeckPool {
    pub fn len(&self) -> usize {
        match self {
            DeckPool::Verbs(verbs) => verbs.len(),
            DeckPool::Words(words) => words.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn count_mastered(&self, stats: &StatsMap) -> usize {
        match self {
            DeckPool::Verbs(verbs) => count_mastered(verbs, stats),
            DeckPool::Words(words) => count_mastered(words, stats),
        }
    }
}

impl Deck {
    pub fn key(self) -> &'static str {
        match self {
            Deck::IrregularVerbs => "irregular",
            Deck::Nouns => "nouns",
            Deck::RegularVerbs => "verbs",
            Deck::InterviewWords => "interview-words",
            Deck::InterviewPhrases => "interview-phrases",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        ALL_DECKS.iter().copied().find(|deck| deck.key() == key)
    }

    pub fn keys() -> Vec<&'static str> {
        ALL_DECKS.iter().map(|deck| deck.key()).collect()
    }

    pub fn title(self) -> &'static str {
        match self {
            Deck::IrregularVerbs => "Irregular Verbs",
            Deck::Nouns => "Top Nouns",
            Deck::RegularVerbs => "Top Verbs",
            Deck::InterviewWords => "Job Interview Words",
            Deck::InterviewPhrases => "Job Interview Phrases",
        }
    }

    pub fn instruction(self) -> &'static str {
        match self {
            Deck::IrregularVerbs => "Select the past simple and past participle:",
            Deck::InterviewPhrases => "Select the matching phrase:",
            _ => "Select the matching word:",
        }
    }

    /// Parse the embedded pool. A broken asset yields an empty pool, which
    /// the generators reject.
    pub fn load(self) -> DeckPool {
        match self {
            Deck::IrregularVerbs => {
                DeckPool::Verbs(serde_json::from_str(IRREGULAR_VERBS).unwrap_or_default())
            }
            Deck::Nouns => DeckPool::Words(parse_words(NOUNS)),
            Deck::RegularVerbs => DeckPool::Words(parse_words(REGULAR_VERBS)),
            Deck::InterviewWords => DeckPool::Words(parse_words(INTERVIEW_WORDS)),
            Deck::InterviewPhrases => DeckPool::Words(parse_words(INTERVIEW_PHRASES)),
        }
    }
}

fn parse_words(json: &str) -> Vec<Word> {
    serde_json::from_str(json).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::OutcomeCounter;
    use crate::generator::validate_pool;
    use crate::generator::verb_forms::MIN_VERB_POOL;
    use crate::generator::vocabulary::MIN_VOCABULARY_POOL;

    #[test]
    fn test_every_deck_loads_a_valid_pool() {
        for &deck in ALL_DECKS {
            match deck.load() {
                DeckPool::Verbs(verbs) => {
                    assert!(validate_pool(&verbs, MIN_VERB_POOL).is_ok(), "{deck:?}");
                    assert!(verbs.iter().all(|v| !v.example.is_empty()));
                }
                DeckPool::Words(words) => {
                    assert!(validate_pool(&words, MIN_VOCABULARY_POOL).is_ok(), "{deck:?}");
                    assert!(words.iter().all(|w| !w.definition.is_empty()));
                }
            }
        }
    }

    #[test]
    fn test_keys_round_trip() {
        for &deck in ALL_DECKS {
            assert_eq!(Deck::from_key(deck.key()), Some(deck));
        }
        assert_eq!(Deck::from_key("adjectives"), None);
    }

    #[test]
    fn test_keys_list_every_deck_once() {
        let keys = Deck::keys();
        assert_eq!(keys.len(), ALL_DECKS.len());
        assert_eq!(keys[0], "irregular");
        assert!(keys.contains(&"interview-phrases"));
    }

    #[test]
    fn test_only_irregular_deck_uses_verb_forms() {
        assert!(matches!(Deck::IrregularVerbs.load(), DeckPool::Verbs(_)));
        assert!(matches!(Deck::Nouns.load(), DeckPool::Words(_)));
    }

    #[test]
    fn test_count_mastered_per_deck() {
        let pool = Deck::IrregularVerbs.load();
        let mut stats = StatsMap::new();
        stats.counters.insert("go".into(), OutcomeCounter::new(3, 0));
        stats.counters.insert("see".into(), OutcomeCounter::new(3, 2));
        assert_eq!(pool.count_mastered(&stats), 1);
        assert_eq!(Deck::Nouns.load().count_mastered(&stats), 0);
    }
}
