//! Domain Appraiser - domain scoring and valuation engine
//!
//! Turns a bare domain string into investment signals: brandability,
//! pronounceability, trademark risk, keyword demand (optionally blended with a
//! trend snapshot) and a quick price band. All scorers are pure and total.

pub mod config;
pub mod domain;
pub mod error;
pub mod lexicon;
pub mod report;
pub mod scoring;
pub mod trend;
pub mod types;

// Re-export commonly used types
pub use config::TrendConfig;
pub use domain::DomainName;
pub use error::{AppraiserError, Result};
pub use lexicon::Lexicon;
pub use report::{appraise, appraise_with_trend_window, appraise_with_trends, DomainReport};
pub use types::{
    BrandDimension, BrandGrade, BrandabilityResult, Confidence, Grade, KeywordDemandResult,
    NicheMatch, OffensiveContent, OffensiveSeverity, PronounceGrade, PronounceabilityResult,
    QuickValuationResult, ScoreFactor, TrademarkCheck, TrademarkRisk, TrendBoost,
};

// Re-export main functionality
pub use scoring::{
    check_trademark_risk, find_comparables, quick_valuation, score_brandability,
    score_keyword_demand, score_pronounceability, semantic_similarity, Comparable,
};
pub use trend::{
    apply_trend_boost, compute_trend_boost, compute_trend_boost_at, default_stale_after,
    score_keyword_demand_with_trends, TrendCache, TrendEnrichment, TrendService, TrendSource,
};
#[cfg(feature = "http")]
pub use trend::HttpTrendSource;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
