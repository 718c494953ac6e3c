//! Category-based semantic similarity and comparable-domain ranking.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::segment::segment;
use crate::domain::DomainName;
use crate::lexicon::Lexicon;

/// Jaccard similarity of the category sets two word lists map to.
///
/// Returns 0.0 when either side maps to no category.
pub fn semantic_similarity<A, B>(words_a: &[A], words_b: &[B]) -> f64
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let a = category_set(words_a);
    let b = category_set(words_b);
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let intersection = a.intersection(&b).count();
    let union = a.union(&b).count();
    intersection as f64 / union as f64
}

fn category_set<W: AsRef<str>>(words: &[W]) -> BTreeSet<&'static str> {
    let lexicon = Lexicon::global();
    words
        .iter()
        .flat_map(|w| lexicon.categories_of(&w.as_ref().to_lowercase()).iter().copied())
        .collect()
}

/// A candidate domain ranked against a target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparable {
    pub domain: String,
    pub similarity: f64,
}

/// Rank candidates by semantic similarity to `target`.
///
/// Candidates scoring below `min_similarity` are dropped; at most `limit` are
/// returned, best first. Equal scores keep their input order.
pub fn find_comparables<S: AsRef<str>>(
    target: &str,
    candidates: &[S],
    min_similarity: f64,
    limit: usize,
) -> Vec<Comparable> {
    let target_words = words_of(target);

    let mut ranked: Vec<Comparable> = candidates
        .iter()
        .map(|c| Comparable {
            domain: c.as_ref().to_string(),
            similarity: semantic_similarity(&target_words, &words_of(c.as_ref())),
        })
        .filter(|c| c.similarity > 0.0 && c.similarity >= min_similarity)
        .collect();

    // stable sort keeps input order among ties
    ranked.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    ranked.truncate(limit);
    ranked
}

fn words_of(domain: &str) -> Vec<String> {
    segment(&DomainName::parse(domain).cleaned).words
}
