// Core algorithm exports
pub mod compatibility;
pub mod ranker;
pub mod vibes;
pub mod zodiac;

pub use compatibility::calculate_compatibility;
pub use ranker::{RankResult, Ranker};
pub use vibes::{contains_word, count_cross_matches, VIBE_KEYWORDS};
pub use zodiac::{element_of, elements_harmonize, Element};
