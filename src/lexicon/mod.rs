//! Canonical lexicon shared by every scorer.
//!
//! The raw tables live in the submodules as `const` slices; [`Lexicon`] indexes
//! them once into hash sets and maps. Use [`Lexicon::global`] to get the
//! process-wide instance. It is never mutated after construction.

mod brands;
mod categories;
mod keywords;
mod tlds;
mod words;

pub use brands::KNOWN_BRANDS;
pub use categories::{Category, CATEGORIES};
pub use keywords::{
    BENIGN_CONTAINERS, GOOD_BIGRAMS, OFFENSIVE_WORDS, PENALTY_KEYWORDS, PREMIUM_KEYWORDS,
    TRENDING_KEYWORDS,
};
pub use tlds::{TldProfile, OBSCURE_TLD, TLD_TABLE};
pub use words::{DICTIONARY_WORDS, SHORT_WORDS};

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

static GLOBAL: LazyLock<Lexicon> = LazyLock::new(Lexicon::new);

/// Shortest category keyword recognized inside a longer name
pub const MIN_FRAGMENT_LEN: usize = 4;

/// Indexed, read-only view over the word and keyword tables.
#[derive(Debug)]
pub struct Lexicon {
    dictionary: HashSet<&'static str>,
    short_words: HashSet<&'static str>,
    segment_words: HashSet<&'static str>,
    premium: HashSet<&'static str>,
    trending: HashMap<&'static str, f64>,
    brands: HashSet<&'static str>,
    bigrams: HashSet<&'static str>,
    tlds: HashMap<&'static str, TldProfile>,
    word_categories: HashMap<&'static str, Vec<&'static str>>,
    max_segment_len: usize,
}

impl Lexicon {
    /// Build the lexicon from the built-in tables
    pub fn new() -> Self {
        let dictionary: HashSet<&'static str> = DICTIONARY_WORDS.iter().copied().collect();
        let short_words: HashSet<&'static str> = SHORT_WORDS.iter().copied().collect();
        let premium: HashSet<&'static str> = PREMIUM_KEYWORDS.iter().copied().collect();
        let trending: HashMap<&'static str, f64> = TRENDING_KEYWORDS.iter().copied().collect();

        // What segmentation may recognize inside longer names: real words and
        // scored keywords at any length, category keywords only from
        // MIN_FRAGMENT_LEN up. The short-word set is reserved for names of
        // three letters or fewer.
        let mut segment_words: HashSet<&'static str> = HashSet::new();
        segment_words.extend(dictionary.iter().copied());
        segment_words.extend(premium.iter().copied());
        segment_words.extend(trending.keys().copied());
        for category in CATEGORIES {
            segment_words.extend(
                category
                    .keywords
                    .iter()
                    .copied()
                    .filter(|k| k.len() >= MIN_FRAGMENT_LEN),
            );
        }
        segment_words.retain(|w| w.len() >= 2);
        let max_segment_len = segment_words.iter().map(|w| w.len()).max().unwrap_or(0);

        let mut word_categories: HashMap<&'static str, Vec<&'static str>> = HashMap::new();
        for category in CATEGORIES {
            for keyword in category.keywords {
                let keys = word_categories.entry(*keyword).or_default();
                if !keys.contains(&category.key) {
                    keys.push(category.key);
                }
            }
        }

        Self {
            dictionary,
            short_words,
            segment_words,
            premium,
            trending,
            brands: KNOWN_BRANDS.iter().copied().collect(),
            bigrams: GOOD_BIGRAMS.iter().copied().collect(),
            tlds: TLD_TABLE.iter().map(|t| (t.tld, *t)).collect(),
            word_categories,
            max_segment_len,
        }
    }

    /// The process-wide lexicon
    pub fn global() -> &'static Lexicon {
        &GLOBAL
    }

    pub fn is_dictionary_word(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    /// Curated 2-3 letter word or abbreviation
    pub fn is_short_word(&self, word: &str) -> bool {
        self.short_words.contains(word)
    }

    /// Any word segmentation may emit for names longer than three letters
    pub fn is_segment_word(&self, word: &str) -> bool {
        self.segment_words.contains(word)
    }

    pub fn max_segment_len(&self) -> usize {
        self.max_segment_len
    }

    pub fn is_premium(&self, word: &str) -> bool {
        self.premium.contains(word)
    }

    /// Heat weight of a statically trending keyword
    pub fn trending_weight(&self, word: &str) -> Option<f64> {
        self.trending.get(word).copied()
    }

    pub fn is_trending(&self, word: &str) -> bool {
        self.trending.contains_key(word)
    }

    pub fn is_brand(&self, name: &str) -> bool {
        self.brands.contains(name)
    }

    pub fn brands(&self) -> impl Iterator<Item = &'static str> {
        KNOWN_BRANDS.iter().copied()
    }

    pub fn is_good_bigram(&self, pair: &str) -> bool {
        self.bigrams.contains(pair)
    }

    /// First penalty keyword contained in `cleaned`, if any
    pub fn find_penalty(&self, cleaned: &str) -> Option<&'static str> {
        PENALTY_KEYWORDS.iter().copied().find(|k| cleaned.contains(k))
    }

    /// TLD profile, falling back to the obscure-TLD row
    pub fn tld_profile(&self, tld: &str) -> TldProfile {
        self.tlds.get(tld).copied().unwrap_or(OBSCURE_TLD)
    }

    /// Category keys a word belongs to, in table order
    pub fn categories_of(&self, word: &str) -> &[&'static str] {
        self.word_categories
            .get(word)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn category(&self, key: &str) -> Option<&'static Category> {
        CATEGORIES.iter().find(|c| c.key == key)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_lexicon_lookups() {
        let lexicon = Lexicon::global();
        assert!(lexicon.is_dictionary_word("power"));
        assert!(lexicon.is_short_word("ai"));
        assert!(!lexicon.is_short_word("xq"));
        assert_eq!(lexicon.trending_weight("ai"), Some(2.0));
        assert!(lexicon.is_brand("google"));
        assert_eq!(lexicon.find_penalty("buyviagra"), Some("viagra"));
        assert_eq!(lexicon.find_penalty("cloudpower"), None);
    }

    #[test]
    fn test_segment_words_cover_category_keywords() {
        let lexicon = Lexicon::global();
        for category in CATEGORIES {
            for keyword in category.keywords.iter().filter(|k| k.len() >= MIN_FRAGMENT_LEN) {
                assert!(lexicon.is_segment_word(keyword), "{keyword} not segmentable");
            }
        }
    }

    #[test]
    fn test_short_fragments_stay_out_of_segmentation() {
        let lexicon = Lexicon::global();
        // curated abbreviations and short category keywords
        for fragment in ["to", "in", "me", "it", "go", "med", "pet", "eat"] {
            assert!(!lexicon.is_segment_word(fragment), "{fragment} should not segment");
        }
        // short words that are scored keywords still count
        for word in ["ai", "pay", "bot", "app"] {
            assert!(lexicon.is_segment_word(word), "{word} should segment");
        }
    }

    #[test]
    fn test_benign_containers_are_dictionary_words() {
        let lexicon = Lexicon::global();
        for word in BENIGN_CONTAINERS {
            assert!(lexicon.is_dictionary_word(word), "{word} missing from dictionary");
        }
    }

    #[test]
    fn test_word_in_multiple_categories() {
        let lexicon = Lexicon::global();
        let cats = lexicon.categories_of("wallet");
        assert!(cats.contains(&"crypto"));
        assert!(cats.contains(&"fintech"));
        assert!(lexicon.categories_of("zebra").is_empty());
    }

    #[test]
    fn test_unknown_tld_is_obscure() {
        let lexicon = Lexicon::global();
        assert_eq!(lexicon.tld_profile("museum"), OBSCURE_TLD);
        assert_eq!(lexicon.tld_profile("com").demand_points, 15);
    }
}
