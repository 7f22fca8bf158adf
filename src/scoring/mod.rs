// Category scoring and selection.
//
// category    — literal keyword hits weighted by importance and position
// multiplier  — topic-driven boosts per category
// semantic    — containment / stem overlap with the text's top words
// select      — relative confidences and the fallback ladder
// subcategory — best sub-category for each selected category

pub mod category;
pub mod multiplier;
pub mod select;
pub mod semantic;
pub mod subcategory;

pub use category::{CategoryScore, CompiledCategory, KeywordHit, TextContext};
pub use select::{Pick, Selection, SelectionRule};
