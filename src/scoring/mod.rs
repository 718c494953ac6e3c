//! Deterministic scorers.
//!
//! Every function here is pure: it takes a domain string, normalizes it through
//! [`crate::domain::DomainName`] and reads only the shared [`crate::lexicon::Lexicon`].

pub mod brandability;
pub mod demand;
pub mod pronounce;
pub mod segment;
pub mod similarity;
pub mod trademark;
pub mod valuation;

pub use brandability::{detect_offensive, score_brandability};
pub use demand::{demand_label, detect_niche, score_keyword_demand};
pub use pronounce::score_pronounceability;
pub use segment::{segment, Segmentation};
pub use similarity::{find_comparables, semantic_similarity, Comparable};
pub use trademark::{check_trademark_risk, edit_distance};
pub use valuation::{format_band, quick_valuation, tier_for, ValueTier, FLOOR_TIER, VALUE_TIERS};
