//! Semantic categories shared by niche detection and semantic similarity.

/// A market niche and the keywords that signal it.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    /// Stable key (`ai_tech`, `fintech`, ...)
    pub key: &'static str,
    /// Display label
    pub label: &'static str,
    /// Demand multiplier for domains in this niche
    pub multiplier: f64,
    pub keywords: &'static [&'static str],
}

/// Category table. Order matters: earlier entries win niche ties.
pub const CATEGORIES: &[Category] = &[
    Category {
        key: "ai_tech",
        label: "AI & Machine Learning",
        multiplier: 1.6,
        keywords: &[
            "ai", "gpt", "llm", "agent", "agents", "neural", "bot", "robot", "robots",
            "robotics", "automate", "model", "models", "tensor", "brain", "mind",
            "genius", "predict", "vision", "logic", "think", "learn", "ml", "vector",
            "matrix", "insight", "insights",
        ],
    },
    Category {
        key: "crypto",
        label: "Crypto & Web3",
        multiplier: 1.4,
        keywords: &[
            "crypto", "token", "tokens", "chain", "block", "ledger", "defi", "coin",
            "coins", "bitcoin", "ether", "wallet", "nft", "dao", "mining", "miner",
            "meta", "verse", "vault",
        ],
    },
    Category {
        key: "fintech",
        label: "Finance & Fintech",
        multiplier: 1.4,
        keywords: &[
            "pay", "bank", "banking", "money", "cash", "fund", "funds", "finance",
            "fintech", "invest", "investor", "capital", "credit", "loans", "wealth",
            "trade", "trader", "trading", "stock", "stocks", "asset", "assets", "equity",
            "profit", "income", "budget", "payment", "payments", "tax", "insure",
            "insurance", "wallet", "exchange", "coin", "gold", "silver", "rich",
        ],
    },
    Category {
        key: "health",
        label: "Health & Wellness",
        multiplier: 1.3,
        keywords: &[
            "health", "healthy", "care", "clinic", "doctor", "doctors", "nurse", "medic",
            "medical", "med", "pharmacy", "therapy", "dental", "vital", "vitals",
            "wellness", "fitness", "fit", "yoga", "body", "calm", "sleep", "mental",
            "nutrition", "diet", "vegan", "organic", "protein", "cure", "heal",
            "healing", "gym",
        ],
    },
    Category {
        key: "biotech",
        label: "Biotech & Life Science",
        multiplier: 1.3,
        keywords: &[
            "bio", "biotech", "genome", "genomics", "gene", "genes", "cell", "cells",
            "protein", "lab", "labs", "cure",
        ],
    },
    Category {
        key: "energy",
        label: "Clean Energy",
        multiplier: 1.3,
        keywords: &[
            "solar", "energy", "power", "wind", "hydro", "carbon", "climate", "battery",
            "electric", "charge", "volt", "grid", "fuel", "green", "eco", "ev", "sun",
        ],
    },
    Category {
        key: "saas",
        label: "Software & Cloud",
        multiplier: 1.3,
        keywords: &[
            "cloud", "data", "stack", "api", "dev", "code", "coder", "coding", "app",
            "apps", "software", "server", "sync", "node", "cache", "query", "index",
            "graph", "script", "program", "compute", "computer", "platform", "interface",
            "analytics", "metric", "metrics", "stream", "socket", "router", "network",
            "system", "systems", "digital", "online", "tech", "byte", "bytes", "web",
            "hub", "edge", "crm", "erp", "iot",
        ],
    },
    Category {
        key: "security",
        label: "Cybersecurity",
        multiplier: 1.3,
        keywords: &[
            "cyber", "secure", "shield", "cipher", "vault", "guard", "lock", "unlock",
            "trust", "safe", "vpn", "key", "hash",
        ],
    },
    Category {
        key: "ecommerce",
        label: "E-commerce & Retail",
        multiplier: 1.2,
        keywords: &[
            "shop", "shops", "store", "cart", "checkout", "retail", "commerce", "deal",
            "deals", "sale", "sales", "price", "prices", "cheap", "buy", "order",
            "orders", "market", "markets", "auction", "bid", "bids", "offer", "offers",
            "supply", "brand", "brands",
        ],
    },
    Category {
        key: "real_estate",
        label: "Real Estate",
        multiplier: 1.2,
        keywords: &[
            "home", "homes", "house", "estate", "realty", "property", "rent", "rental",
            "mortgage", "broker", "land", "nest", "haven",
        ],
    },
    Category {
        key: "gaming",
        label: "Gaming & Esports",
        multiplier: 1.2,
        keywords: &[
            "game", "games", "play", "gg", "quest", "arena", "pixel", "vr", "xr",
            "dragon", "titan", "bet",
        ],
    },
    Category {
        key: "space",
        label: "Space & Frontier Tech",
        multiplier: 1.2,
        keywords: &[
            "space", "orbit", "rocket", "galaxy", "planet", "cosmic", "astro", "stellar",
            "satellite", "launch", "quantum", "drone", "drones", "photon",
        ],
    },
    Category {
        key: "travel",
        label: "Travel & Hospitality",
        multiplier: 1.1,
        keywords: &[
            "travel", "trip", "trips", "tour", "tours", "hotel", "hotels", "flight",
            "flights", "ride", "road", "maps", "map", "island", "explore", "navigate",
            "compass", "journey",
        ],
    },
    Category {
        key: "food",
        label: "Food & Beverage",
        multiplier: 1.1,
        keywords: &[
            "food", "foods", "chef", "kitchen", "coffee", "pizza", "burger", "bakery",
            "recipe", "recipes", "tea", "juice", "spice", "honey", "sugar", "cream",
            "eat", "apple", "mango", "lemon", "berry",
        ],
    },
    Category {
        key: "education",
        label: "Education",
        multiplier: 1.1,
        keywords: &[
            "learn", "teach", "coach", "guide", "tutor", "school", "academy", "college",
            "lesson", "lessons", "course", "courses", "study", "book", "books",
        ],
    },
    Category {
        key: "media",
        label: "Media & Creative",
        multiplier: 1.1,
        keywords: &[
            "media", "audio", "video", "music", "movie", "movies", "photo", "photos",
            "camera", "studio", "art", "arts", "design", "designs", "blog", "stream",
            "pixel", "fashion", "style", "beauty",
        ],
    },
    Category {
        key: "pets",
        label: "Pets & Animals",
        multiplier: 1.1,
        keywords: &[
            "pet", "pets", "puppy", "kitty", "dog", "vet", "fish", "bird", "horse",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<_> = CATEGORIES.iter().map(|c| c.key).collect();
        assert_eq!(keys.len(), CATEGORIES.len());
    }

    #[test]
    fn test_multipliers_above_baseline() {
        assert!(CATEGORIES.iter().all(|c| c.multiplier > 1.0));
    }
}
