// Text signal extraction — word statistics, topic flags, position weights.

pub mod context;
pub mod frequency;
pub mod position;

pub use context::{AuxiliarySignals, ContextualSignals, TopicPatterns};
pub use frequency::{important_keywords, word_frequency, StopWordSet, StopWords, WordFrequency};
pub use position::{position_weight, PositionWeights};
