use serde::{Deserialize, Serialize};

/// Anything that can be drilled. The id doubles as the stats key.
pub trait Item {
    fn id(&self) -> &str;
}

/// The two inflected forms shown together as one selectable option.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerbForms {
    pub past_simple: String,
    pub past_participle: String,
}

impl VerbForms {
    pub fn new(past_simple: impl Into<String>, past_participle: impl Into<String>) -> Self {
        Self {
            past_simple: past_simple.into(),
            past_participle: past_participle.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verb {
    pub infinitive: String,
    pub past_simple: String,
    pub past_participle: String,
    #[serde(default)]
    pub example: String,
    #[serde(default)]
    pub translation: Option<String>,
}

impl Verb {
    pub fn new(infinitive: &str, past_simple: &str, past_participle: &str) -> Self {
        Self {
            infinitive: infinitive.to_string(),
            past_simple: past_simple.to_string(),
            past_participle: past_participle.to_string(),
            example: String::new(),
            translation: None,
        }
    }

    pub fn forms(&self) -> VerbForms {
        VerbForms::new(&self.past_simple, &self.past_participle)
    }
}

impl Item for Verb {
    fn id(&self) -> &str {
        &self.infinitive
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub word: String,
    pub definition: String,
}

impl Word {
    pub fn new(word: &str, definition: &str) -> Self {
        Self {
            word: word.to_string(),
            definition: definition.to_string(),
        }
    }
}

impl Item for Word {
    fn id(&self) -> &str {
        &self.word
    }
}
