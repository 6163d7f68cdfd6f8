pub mod item;
pub mod outcome;
pub mod weighting;

pub use outcome::{OutcomeCounter, StatsMap};
