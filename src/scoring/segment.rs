//! Word segmentation.
//!
//! Splits a cleaned alphabetic name into known words, maximizing the number of
//! covered characters. Among equally covering splits the one with fewer (so
//! longer) words wins, and remaining ties go to the longest word at the
//! earliest position. Unmatched characters are skipped one at a time.

use crate::lexicon::Lexicon;

/// Shortest word segmentation will emit for names longer than three letters
const MIN_SEGMENT_LEN: usize = 2;

/// Names up to this length use the short-word lookup instead of segmentation
const SHORT_NAME_MAX: usize = 3;

/// Outcome of segmenting one name
#[derive(Debug, Clone, PartialEq)]
pub struct Segmentation {
    /// Recognized words in order of appearance
    pub words: Vec<String>,
    /// Characters explained by `words`
    pub covered: usize,
    /// Length of the input
    pub length: usize,
}

impl Segmentation {
    fn empty(length: usize) -> Self {
        Self {
            words: Vec::new(),
            covered: 0,
            length,
        }
    }

    /// Fraction of characters covered by recognized words, 0.0 to 1.0
    pub fn coverage(&self) -> f64 {
        if self.length <= 1 {
            return 0.0;
        }
        self.covered as f64 / self.length as f64
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Exactly one recognized word spanning the whole name
    pub fn is_single_word(&self) -> bool {
        self.words.len() == 1 && self.covered == self.length
    }

    /// Two or more words with no leftover characters
    pub fn is_full_compound(&self) -> bool {
        self.words.len() >= 2 && self.covered == self.length
    }
}

/// Segment a cleaned (lowercase a-z) name against the global lexicon
pub fn segment(cleaned: &str) -> Segmentation {
    segment_with(Lexicon::global(), cleaned)
}

/// Segment against an explicit lexicon
pub fn segment_with(lexicon: &Lexicon, cleaned: &str) -> Segmentation {
    let n = cleaned.len();
    if n <= 1 || !cleaned.bytes().all(|b| b.is_ascii_lowercase()) {
        return Segmentation::empty(n);
    }

    if n <= SHORT_NAME_MAX {
        return if lexicon.is_short_word(cleaned) {
            Segmentation {
                words: vec![cleaned.to_string()],
                covered: n,
                length: n,
            }
        } else {
            Segmentation::empty(n)
        };
    }

    // best[i] = (covered, words) for the suffix starting at i; step[i] = word
    // length chosen at i, 0 meaning "skip one character".
    let mut best = vec![(0usize, 0usize); n + 1];
    let mut step = vec![0usize; n + 1];

    for i in (0..n).rev() {
        let mut chosen: Option<((usize, usize), usize)> = None;

        let max_len = (n - i).min(lexicon.max_segment_len());
        for len in (MIN_SEGMENT_LEN..=max_len).rev() {
            if !lexicon.is_segment_word(&cleaned[i..i + len]) {
                continue;
            }
            let (covered, words) = best[i + len];
            let candidate = (covered + len, words + 1);
            if chosen.map_or(true, |(current, _)| is_better(candidate, current)) {
                chosen = Some((candidate, len));
            }
        }

        let skip = best[i + 1];
        match chosen {
            Some((current, _)) if !is_better(skip, current) => {}
            _ => chosen = Some((skip, 0)),
        }

        if let Some((score, len)) = chosen {
            best[i] = score;
            step[i] = len;
        }
    }

    let mut words = Vec::with_capacity(best[0].1);
    let mut i = 0;
    while i < n {
        match step[i] {
            0 => i += 1,
            len => {
                words.push(cleaned[i..i + len].to_string());
                i += len;
            }
        }
    }

    Segmentation {
        words,
        covered: best[0].0,
        length: n,
    }
}

fn is_better(candidate: (usize, usize), current: (usize, usize)) -> bool {
    candidate.0 > current.0 || (candidate.0 == current.0 && candidate.1 < current.1)
}
