//! Brandability: six weighted dimensions, dampened by offensive content.

use std::time::Instant;

use super::pronounce::pronounceability_of;
use super::segment::{segment, Segmentation};
use super::trademark::{check_name, safety_score};
use crate::domain::DomainName;
use crate::lexicon::{Lexicon, BENIGN_CONTAINERS, OFFENSIVE_WORDS};
use crate::types::{
    BrandDimension, BrandGrade, BrandabilityResult, OffensiveContent, OffensiveSeverity,
    TrademarkRisk,
};

const PRONOUNCE_WEIGHT: f64 = 0.25;
const LENGTH_WEIGHT: f64 = 0.15;
const STRUCTURE_WEIGHT: f64 = 0.15;
const TRADEMARK_WEIGHT: f64 = 0.15;
const MEMORABILITY_WEIGHT: f64 = 0.15;
const VISUAL_WEIGHT: f64 = 0.15;

/// Floor for the pronounceability dimension of premium 2-3 letter names
const SHORT_NAME_PRONOUNCE_FLOOR: u32 = 85;

/// Score how well a domain works as a brand
pub fn score_brandability(domain: &str) -> BrandabilityResult {
    let start = Instant::now();
    let name = DomainName::parse(domain);

    if name.is_empty() {
        return BrandabilityResult {
            overall: 0,
            grade: BrandGrade::F,
            dimensions: Vec::new(),
            trademark_risk: TrademarkRisk::None,
            summary: "No brandable name found.".to_string(),
            domain_name: name.display(),
            offensive: None,
        };
    }

    let segmentation = segment(&name.cleaned);
    let trademark = check_name(&name.compact());

    let dimensions = vec![
        pronounce_dimension(&name, &segmentation),
        length_dimension(&name),
        structure_dimension(&name, &segmentation),
        trademark_dimension(trademark.risk_level, trademark.matched_brand.as_deref()),
        memorability_dimension(&name, &segmentation),
        visual_dimension(&name),
    ];

    let offensive = detect_offensive(&name.cleaned);
    let multiplier = offensive.as_ref().map_or(1.0, |o| o.multiplier);

    let weighted: f64 = dimensions.iter().map(|d| d.score as f64 * d.weight).sum();
    let overall = (weighted * multiplier).round().clamp(0.0, 100.0) as u32;

    tracing::debug!(
        domain = %name,
        overall,
        duration_ms = %start.elapsed().as_millis(),
        "brandability scored"
    );

    BrandabilityResult {
        overall,
        grade: BrandGrade::from_score(overall),
        dimensions,
        trademark_risk: trademark.risk_level,
        summary: summarize(overall, offensive.as_ref()),
        domain_name: name.display(),
        offensive,
    }
}

fn dimension(name: &str, score: i32, weight: f64, detail: String, icon: &str) -> BrandDimension {
    BrandDimension {
        name: name.to_string(),
        score: score.clamp(0, 100) as u32,
        weight,
        detail,
        icon: icon.to_string(),
    }
}

fn pronounce_dimension(name: &DomainName, segmentation: &Segmentation) -> BrandDimension {
    let mut score = pronounceability_of(&name.cleaned, segmentation).score;
    let mut detail = format!("pronounceability {score}/100");

    let lexicon = Lexicon::global();
    let premium_short = name.cleaned.len() <= 3
        && segmentation.is_single_word()
        && (lexicon.is_premium(&name.cleaned) || lexicon.is_trending(&name.cleaned));
    if premium_short && score < SHORT_NAME_PRONOUNCE_FLOOR {
        score = SHORT_NAME_PRONOUNCE_FLOOR;
        detail = format!("premium short name '{}'", name.cleaned);
    }

    dimension("Pronounceability", score as i32, PRONOUNCE_WEIGHT, detail, "mic")
}

fn length_dimension(name: &DomainName) -> BrandDimension {
    let len = name.len();
    let score = match len {
        2..=3 => 100,
        4 => 95,
        5 => 90,
        6 => 82,
        7 => 72,
        8 => 62,
        9..=10 => 50,
        11..=12 => 38,
        13..=15 => 25,
        0..=1 => 40,
        _ => 12,
    };
    dimension("Length", score, LENGTH_WEIGHT, format!("{len} characters"), "ruler")
}

fn structure_dimension(name: &DomainName, segmentation: &Segmentation) -> BrandDimension {
    let lexicon = Lexicon::global();
    let mut score = (segmentation.coverage() * 60.0).round() as i32 + 20;
    let mut notes = vec![format!("{:.0}% real words", segmentation.coverage() * 100.0)];

    if segmentation.is_single_word() {
        score += 20;
        notes.push("single word".to_string());
    }
    if segmentation.words.iter().any(|w| lexicon.is_premium(w)) {
        score += 10;
        notes.push("premium keyword".to_string());
    }
    if name.has_hyphen() {
        score -= 30;
        notes.push("hyphenated".to_string());
    }

    dimension("Word Structure", score, STRUCTURE_WEIGHT, notes.join(", "), "puzzle")
}

fn trademark_dimension(risk: TrademarkRisk, brand: Option<&str>) -> BrandDimension {
    let detail = match brand {
        Some(brand) => format!("{risk} risk: resembles '{brand}'"),
        None => "no known brand conflicts".to_string(),
    };
    dimension(
        "Trademark Safety",
        safety_score(risk) as i32,
        TRADEMARK_WEIGHT,
        detail,
        "shield",
    )
}

fn memorability_dimension(name: &DomainName, segmentation: &Segmentation) -> BrandDimension {
    let len = name.len();
    let mut score = match len {
        0..=4 => 90,
        5..=6 => 80,
        7..=8 => 68,
        9..=10 => 55,
        11..=14 => 40,
        _ => 25,
    };
    let mut notes = Vec::new();

    match segmentation.word_count() {
        1 if segmentation.is_single_word() => {
            score += 10;
            notes.push("real word");
        }
        2 if segmentation.is_full_compound() => {
            score += 5;
            notes.push("two-word combo");
        }
        n if n >= 4 => {
            score -= 10;
            notes.push("too many words");
        }
        _ => {}
    }
    if segmentation.coverage() < 0.3 && name.cleaned.len() > 3 {
        score -= 45;
        notes.push("gibberish");
    }
    if name.has_hyphen() {
        score -= 25;
        notes.push("hyphen");
    }
    if name.has_digit() {
        score -= 15;
        notes.push("digits");
    }

    let detail = if notes.is_empty() {
        format!("{len} characters")
    } else {
        format!("{len} characters, {}", notes.join(", "))
    };
    dimension("Memorability", score, MEMORABILITY_WEIGHT, detail, "brain")
}

fn visual_dimension(name: &DomainName) -> BrandDimension {
    let label = &name.label;
    let len = name.len();
    let mut score = 60;
    let mut notes = Vec::new();

    if has_repeated_run(label, 3) {
        score -= 25;
        notes.push("repeated characters");
    }
    let has_alpha = label.chars().any(|c| c.is_ascii_alphabetic());
    if name.has_digit() && has_alpha {
        score -= 20;
        notes.push("mixes digits and letters");
    }
    if name.has_hyphen() {
        score -= 20;
        notes.push("hyphen");
    }
    if label.chars().all(|c| c.is_ascii_alphabetic()) {
        score += 20;
        notes.push("clean letters only");
    }
    if (4..=10).contains(&len) {
        score += 15;
        notes.push("compact");
    } else if len > 15 {
        score -= 15;
        notes.push("long");
    }

    dimension("Visual Appeal", score, VISUAL_WEIGHT, notes.join(", "), "eye")
}

fn has_repeated_run(text: &str, run: usize) -> bool {
    let chars: Vec<char> = text.chars().collect();
    chars.windows(run).any(|w| w.iter().all(|c| *c == w[0]))
}

/// Find offensive words in a cleaned name
pub fn detect_offensive(cleaned: &str) -> Option<OffensiveContent> {
    let mut masked = cleaned.to_string();
    for benign in BENIGN_CONTAINERS {
        if masked.contains(benign) {
            masked = masked.replace(benign, &"_".repeat(benign.len()));
        }
    }

    let hits: Vec<&str> = OFFENSIVE_WORDS
        .iter()
        .copied()
        .filter(|w| masked.contains(w))
        .collect();
    // "poo" inside "poop" is one word, not two
    let words: Vec<String> = hits
        .iter()
        .filter(|w| !hits.iter().any(|other| other != *w && other.contains(*w)))
        .map(|w| w.to_string())
        .collect();

    if words.is_empty() {
        return None;
    }

    let severity = if words.len() >= 2 {
        OffensiveSeverity::Severe
    } else {
        match words[0].len() {
            5.. => OffensiveSeverity::Severe,
            4 => OffensiveSeverity::Moderate,
            _ => OffensiveSeverity::Mild,
        }
    };

    Some(OffensiveContent {
        words,
        severity,
        multiplier: severity.multiplier(),
    })
}

fn summarize(overall: u32, offensive: Option<&OffensiveContent>) -> String {
    let mut summary = match overall {
        80.. => "Exceptional brand potential: short, clear and easy to remember.",
        65..=79 => "Strong brandable name with broad appeal.",
        50..=64 => "Decent brand candidate with a few trade-offs.",
        35..=49 => "Weak brand fit. A shorter or clearer name would do better.",
        _ => "Poor brand potential.",
    }
    .to_string();

    if let Some(offensive) = offensive {
        summary.push_str(&format!(
            " Contains offensive content ({}), which limits commercial use.",
            offensive.words.join(", ")
        ));
    }
    summary
}
