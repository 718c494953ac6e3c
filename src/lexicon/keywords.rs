//! Keyword tables: premium, penalty, offensive and trending keywords.

/// Generic high-value keywords. Credited even when they are not trending.
pub const PREMIUM_KEYWORDS: &[&str] = &[
    "ai", "cloud", "bank", "pay", "shop", "store", "home", "health", "money", "cash",
    "insure", "insurance", "travel", "hotel", "hotels", "market", "trade", "invest",
    "capital", "loans", "credit", "law", "legal", "car", "food", "game", "games",
    "finance", "estate", "realty", "power", "energy", "solar", "crypto", "data",
    "tech", "app", "apps", "smart", "care", "clinic", "dental", "pharmacy", "coin",
    "gold", "vault", "secure", "wallet", "fund", "funds", "wealth", "studio", "labs",
    "hub", "pro", "prime", "global", "direct", "world", "digital", "online", "media",
    "music", "video", "photo", "design", "fashion", "beauty", "fitness", "yoga",
    "pets", "baby", "kids", "coffee", "pizza", "auction", "exchange", "deal",
    "deals", "sale", "sales", "jobs", "hire", "rent", "homes", "house", "bet",
];

/// Toxic keywords. Any substring hit forces the minimum demand score.
pub const PENALTY_KEYWORDS: &[&str] = &[
    "viagra", "cialis", "porn", "xxx", "scam", "fraud", "phish", "malware", "warez",
    "torrent", "escort", "nude", "hentai", "replica", "counterfeit", "steroid",
    "payday", "spyware", "ransom",
];

/// Crude or offensive words that dampen brandability.
pub const OFFENSIVE_WORDS: &[&str] = &[
    "fuck", "shit", "piss", "crap", "turd", "fart", "poop", "poo", "stain", "puke",
    "vomit", "bitch", "slut", "whore", "wank", "twat", "dick", "snot", "booger",
    "jizz", "cunt", "bastard",
];

/// Innocent words that happen to contain an offensive substring.
///
/// Occurrences are masked out before the offensive scan.
pub const BENIGN_CONTAINERS: &[&str] = &[
    "pool", "spoon", "shampoo", "poodle", "poor", "scrap", "scrappy", "dickens",
    "sustain", "stainless", "whirlpool", "carpool", "spook",
];

/// Trending keywords and their heat weight (1.0 = baseline demand).
pub const TRENDING_KEYWORDS: &[(&str, f64)] = &[
    // AI & automation
    ("ai", 2.0),
    ("gpt", 1.9),
    ("llm", 1.8),
    ("agent", 1.6),
    ("agents", 1.6),
    ("neural", 1.5),
    ("bot", 1.4),
    ("robot", 1.4),
    ("robotics", 1.5),
    ("automate", 1.3),
    ("vision", 1.1),
    ("model", 1.2),
    ("models", 1.2),
    ("tensor", 1.3),
    ("quantum", 1.7),
    // Crypto & finance
    ("crypto", 1.5),
    ("token", 1.3),
    ("chain", 1.3),
    ("block", 1.2),
    ("defi", 1.4),
    ("coin", 1.3),
    ("bitcoin", 1.4),
    ("wallet", 1.2),
    ("fintech", 1.5),
    ("pay", 1.3),
    ("vault", 1.2),
    ("nft", 1.0),
    ("dao", 1.1),
    // Cloud & data
    ("cloud", 1.3),
    ("data", 1.2),
    ("cyber", 1.3),
    ("secure", 1.1),
    ("stack", 1.1),
    ("api", 1.2),
    ("dev", 1.1),
    ("labs", 1.1),
    ("edge", 1.1),
    // Energy & climate
    ("solar", 1.4),
    ("battery", 1.3),
    ("carbon", 1.2),
    ("hydro", 1.2),
    ("green", 1.2),
    ("energy", 1.2),
    ("ev", 1.3),
    ("climate", 1.2),
    // Health & bio
    ("bio", 1.3),
    ("biotech", 1.4),
    ("genomics", 1.3),
    ("health", 1.2),
    ("wellness", 1.1),
    // Frontier
    ("drone", 1.3),
    ("drones", 1.3),
    ("space", 1.2),
    ("vr", 1.2),
    ("xr", 1.2),
    ("meta", 1.2),
    ("smart", 1.1),
];

/// Adjacent-letter pairs that flow naturally in English.
pub const GOOD_BIGRAMS: &[&str] = &[
    "th", "he", "in", "er", "an", "re", "on", "at", "en", "nd", "ti", "es", "or",
    "te", "of", "ed", "is", "it", "al", "ar", "st", "to", "nt", "ng", "se", "ha",
    "as", "ou", "io", "le", "ve", "co", "me", "de", "hi", "ri", "ro", "ic", "ne",
    "ea", "ra", "ce", "li", "ch", "ll", "be", "ma", "si", "om", "ur", "ca", "el",
    "ta", "la", "ns", "di", "fo", "ho", "pe", "ec", "pr", "no", "ct", "us", "ac",
    "ot", "il", "tr", "ly", "nc", "et", "ut", "ss", "so", "rs", "un", "lo", "wa",
    "ge", "ie", "wh", "ee", "wi", "em", "ad", "ol", "rt", "po", "we", "na", "ul",
    "ni", "ts", "mo", "ow", "pa", "im", "mi", "ai", "sh", "ir", "su", "id", "os",
    "iv", "ia", "am", "fi", "ci", "vi", "pl", "ig", "tu", "ev", "ld", "ry", "mp",
    "fe", "bl", "ab", "ty", "op", "wo", "sa", "ay", "ex", "ke", "fr", "oo", "av",
    "ag", "ap", "gr", "od", "bo", "sp", "rd", "do", "uc", "bu", "ov", "by", "rm",
    "ep", "oc", "fa", "ef", "cu", "rn", "sc", "gi", "da", "yo", "cr", "cl", "du",
    "ga", "qu", "ue", "ff", "ba", "ey", "ls", "va", "um", "ua", "up", "lu", "go",
    "ru", "ds", "lt", "pi", "rc", "eg", "au", "ck", "ew", "mu", "br", "bi", "ak",
    "pu", "ki", "rk", "ob", "fu", "ph", "og", "ud", "ip", "ub", "oi", "gu", "dr",
    "tw", "ft", "nu", "yp", "pt", "oa", "ey", "ze", "za", "zo", "ya", "ve", "ke",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trending_weights_in_range() {
        for (keyword, weight) in TRENDING_KEYWORDS {
            assert!(
                (1.0..=2.5).contains(weight),
                "{keyword} has out-of-range weight {weight}"
            );
        }
    }

    #[test]
    fn test_bigrams_are_pairs() {
        assert!(GOOD_BIGRAMS.iter().all(|b| b.len() == 2));
    }

    #[test]
    fn test_benign_containers_hold_an_offensive_word() {
        for benign in BENIGN_CONTAINERS {
            assert!(
                OFFENSIVE_WORDS.iter().any(|w| benign.contains(w)),
                "{benign} masks nothing"
            );
        }
    }
}
