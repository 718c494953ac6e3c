//! Core result types returned by the scorers

use serde::{Deserialize, Serialize};

/// A single named contribution to a composite score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreFactor {
    pub label: String,
    pub points: i32,
    pub detail: String,
}

impl ScoreFactor {
    pub fn new(label: impl Into<String>, points: i32, detail: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            points,
            detail: detail.into(),
        }
    }
}

/// Letter grade for keyword demand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// A >= 70, B >= 55, C >= 40, D >= 25, else F
    pub fn from_score(score: u32) -> Self {
        match score {
            70.. => Grade::A,
            55..=69 => Grade::B,
            40..=54 => Grade::C,
            25..=39 => Grade::D,
            _ => Grade::F,
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grade::A => write!(f, "A"),
            Grade::B => write!(f, "B"),
            Grade::C => write!(f, "C"),
            Grade::D => write!(f, "D"),
            Grade::F => write!(f, "F"),
        }
    }
}

/// Letter grade for brandability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrandGrade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    F,
}

impl BrandGrade {
    /// A+ >= 90, A >= 80, B >= 65, C >= 50, D >= 35, else F
    pub fn from_score(score: u32) -> Self {
        match score {
            90.. => BrandGrade::APlus,
            80..=89 => BrandGrade::A,
            65..=79 => BrandGrade::B,
            50..=64 => BrandGrade::C,
            35..=49 => BrandGrade::D,
            _ => BrandGrade::F,
        }
    }
}

impl std::fmt::Display for BrandGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrandGrade::APlus => write!(f, "A+"),
            BrandGrade::A => write!(f, "A"),
            BrandGrade::B => write!(f, "B"),
            BrandGrade::C => write!(f, "C"),
            BrandGrade::D => write!(f, "D"),
            BrandGrade::F => write!(f, "F"),
        }
    }
}

/// Verbal grade for pronounceability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PronounceGrade {
    Excellent,
    Good,
    Fair,
    Poor,
    #[serde(rename = "Very Poor")]
    VeryPoor,
}

impl PronounceGrade {
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => PronounceGrade::Excellent,
            65..=79 => PronounceGrade::Good,
            50..=64 => PronounceGrade::Fair,
            35..=49 => PronounceGrade::Poor,
            _ => PronounceGrade::VeryPoor,
        }
    }
}

impl std::fmt::Display for PronounceGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PronounceGrade::Excellent => write!(f, "Excellent"),
            PronounceGrade::Good => write!(f, "Good"),
            PronounceGrade::Fair => write!(f, "Fair"),
            PronounceGrade::Poor => write!(f, "Poor"),
            PronounceGrade::VeryPoor => write!(f, "Very Poor"),
        }
    }
}

/// Trademark risk tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrademarkRisk {
    None,
    Low,
    Medium,
    High,
}

impl std::fmt::Display for TrademarkRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrademarkRisk::None => write!(f, "none"),
            TrademarkRisk::Low => write!(f, "low"),
            TrademarkRisk::Medium => write!(f, "medium"),
            TrademarkRisk::High => write!(f, "high"),
        }
    }
}

/// Confidence in a niche classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confidence::High => write!(f, "High"),
            Confidence::Medium => write!(f, "Medium"),
            Confidence::Low => write!(f, "Low"),
        }
    }
}

/// Pronounceability score with its explanation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PronounceabilityResult {
    pub score: u32,
    pub grade: PronounceGrade,
    /// Factors ranked by absolute impact, largest first
    pub factors: Vec<ScoreFactor>,
}

/// Result of the trademark screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrademarkCheck {
    pub risk_level: TrademarkRisk,
    pub matched_brand: Option<String>,
}

/// One weighted brandability dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandDimension {
    pub name: String,
    pub score: u32,
    pub weight: f64,
    pub detail: String,
    pub icon: String,
}

/// How strongly offensive content dampens brandability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffensiveSeverity {
    Mild,
    Moderate,
    Severe,
}

impl OffensiveSeverity {
    pub fn multiplier(self) -> f64 {
        match self {
            OffensiveSeverity::Severe => 0.15,
            OffensiveSeverity::Moderate => 0.35,
            OffensiveSeverity::Mild => 0.55,
        }
    }
}

/// Offensive words found in a name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OffensiveContent {
    pub words: Vec<String>,
    pub severity: OffensiveSeverity,
    pub multiplier: f64,
}

/// Brandability composite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandabilityResult {
    pub overall: u32,
    pub grade: BrandGrade,
    pub dimensions: Vec<BrandDimension>,
    pub trademark_risk: TrademarkRisk,
    pub summary: String,
    pub domain_name: String,
    pub offensive: Option<OffensiveContent>,
}

/// Detected market niche
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NicheMatch {
    pub niche: String,
    pub label: String,
    pub multiplier: f64,
    pub confidence: Confidence,
}

impl NicheMatch {
    pub fn general() -> Self {
        Self {
            niche: "general".to_string(),
            label: "General".to_string(),
            multiplier: 1.0,
            confidence: Confidence::Low,
        }
    }

    pub fn is_general(&self) -> bool {
        self.niche == "general"
    }
}

/// Keyword demand composite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordDemandResult {
    pub score: u32,
    pub label: String,
    pub grade: Grade,
    pub trending_keywords: Vec<String>,
    pub niche: NicheMatch,
    pub factors: Vec<ScoreFactor>,
    /// Segmented words, fed to trend blending
    pub words: Vec<String>,
}

impl KeywordDemandResult {
    /// Forced to the floor by a penalty keyword
    pub fn is_toxic(&self) -> bool {
        self.factors.iter().any(|f| f.label == "Penalty Keyword")
    }
}

/// Quick valuation band
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickValuationResult {
    pub band: String,
    pub score: u32,
    pub value_min: u64,
    pub value_max: u64,
}

/// Signed adjustment derived from trend enrichment
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrendBoost {
    pub boost: i32,
    pub factors: Vec<ScoreFactor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demand_grade_boundaries() {
        assert_eq!(Grade::from_score(100), Grade::A);
        assert_eq!(Grade::from_score(70), Grade::A);
        assert_eq!(Grade::from_score(69), Grade::B);
        assert_eq!(Grade::from_score(55), Grade::B);
        assert_eq!(Grade::from_score(54), Grade::C);
        assert_eq!(Grade::from_score(40), Grade::C);
        assert_eq!(Grade::from_score(39), Grade::D);
        assert_eq!(Grade::from_score(25), Grade::D);
        assert_eq!(Grade::from_score(24), Grade::F);
        assert_eq!(Grade::from_score(1), Grade::F);
    }

    #[test]
    fn test_brand_grade_boundaries() {
        assert_eq!(BrandGrade::from_score(90), BrandGrade::APlus);
        assert_eq!(BrandGrade::from_score(89), BrandGrade::A);
        assert_eq!(BrandGrade::from_score(65), BrandGrade::B);
        assert_eq!(BrandGrade::from_score(50), BrandGrade::C);
        assert_eq!(BrandGrade::from_score(35), BrandGrade::D);
        assert_eq!(BrandGrade::from_score(34), BrandGrade::F);
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_string(&BrandGrade::APlus).unwrap(), "\"A+\"");
        assert_eq!(serde_json::to_string(&TrademarkRisk::None).unwrap(), "\"none\"");
        assert_eq!(TrademarkRisk::Medium.to_string(), "medium");
        assert_eq!(format!("{}", PronounceGrade::VeryPoor), "Very Poor");
    }

    #[test]
    fn test_risk_ordering() {
        assert!(TrademarkRisk::High > TrademarkRisk::Medium);
        assert!(TrademarkRisk::Low > TrademarkRisk::None);
    }
}
