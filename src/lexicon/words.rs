//! Dictionary word lists used by segmentation and the word-quality heuristics.
//!
//! Every entry is lowercase ASCII. Lists may overlap; the `Lexicon` dedupes them.

/// General dictionary words that read as real words in a domain.
pub const DICTIONARY_WORDS: &[&str] = &[
    // Tech & Digital
    "cloud", "cyber", "pixel", "media", "audio", "video", "smart", "power", "spark",
    "flash", "boost", "prime", "nexus", "alpha", "omega", "ultra", "micro", "macro",
    "quick", "swift", "rapid", "turbo", "hyper", "super", "stack", "scale", "scope",
    "space", "pulse", "surge", "forge", "craft", "build", "maker", "works", "logic",
    "brain", "think", "learn", "teach", "coach", "guide", "laser", "radar", "code",
    "data", "byte", "bytes", "link", "node", "port", "sync", "ping", "scan", "hash",
    "blog", "wiki", "mail", "chat", "call", "text", "send", "load", "save", "edit",
    "file", "disk", "chip", "wire", "tech", "soft", "apps", "game", "games", "play",
    "tune", "robot", "robots", "drone", "drones", "digital", "online", "network",
    "system", "systems", "software", "hardware", "server", "signal", "vision",
    "neural", "quantum", "crypto", "token", "tokens", "chain", "block", "ledger",
    "wallet", "vault", "secure", "shield", "cipher", "agent", "agents", "engine",
    "matrix", "vector", "tensor", "model", "models", "mind", "genius", "labs",
    "studio", "device", "gadget", "mobile", "phone", "screen", "click", "cursor",
    "portal", "socket", "router", "stream", "cache", "query", "index", "graph",
    "script", "coder", "coding", "program", "compute", "computer", "analytics",
    "insight", "insights", "metric", "metrics", "predict", "automate", "robotics",
    "virtual", "reality", "future", "fusion", "photon", "orbit", "rocket", "galaxy",
    "planet", "cosmic", "astro", "stellar", "satellite", "launch", "meta", "verse",
    "bitcoin", "ether", "mining", "miner", "defi", "fintech", "platform", "interface",

    // Business & Finance
    "money", "funds", "fund", "trade", "trader", "trading", "stock", "stocks", "asset",
    "assets", "value", "worth", "trust", "brand", "brands", "sales", "deals", "deal",
    "price", "prices", "cheap", "store", "shop", "shops", "yield", "gains", "bonus",
    "prize", "award", "elite", "bank", "banking", "cash", "coin", "coins", "gold",
    "silver", "sale", "work", "task", "desk", "book", "books", "note", "notes",
    "docs", "form", "plan", "goal", "team", "club", "crew", "market", "markets",
    "capital", "invest", "investor", "equity", "credit", "loans", "finance",
    "wealth", "rich", "profit", "income", "budget", "account", "payment", "payments",
    "checkout", "order", "orders", "cart", "retail", "commerce", "business",
    "company", "office", "agency", "partner", "partners", "venture", "ventures",
    "startup", "founder", "leader", "expert", "experts", "pro", "consult", "legal",
    "lawyer", "insure", "insurance", "estate", "realty", "property", "home",
    "homes", "house", "rent", "rental", "mortgage", "broker", "exchange", "auction",
    "bid", "bids", "offer", "offers", "supply", "direct", "global", "local",
    "world", "nation", "union", "center", "central", "hub", "point", "source",
    "solution", "solutions", "service", "services", "support", "success", "growth",
    "scale", "pay", "paid", "tax", "taxes", "hire", "jobs", "career", "careers",
    "talent", "people",

    // Nature & Energy
    "green", "fresh", "bloom", "flora", "fauna", "earth", "ocean", "river", "storm",
    "sunny", "clear", "light", "shine", "flame", "water", "stone", "pearl", "amber",
    "coral", "maple", "glow", "solar", "energy", "wind", "windy", "hydro", "carbon",
    "climate", "nature", "natural", "forest", "garden", "leaf", "tree", "trees",
    "rain", "snow", "wave", "waves", "moon", "star", "stars", "sand", "rock",
    "island", "mountain", "valley", "desert", "sky", "sun", "fire", "ice",
    "battery", "electric", "charge", "volt", "grid", "fuel", "planet", "eco",

    // Health & Life
    "health", "healthy", "care", "clinic", "doctor", "doctors", "nurse", "medic",
    "medical", "pharmacy", "therapy", "dental", "vital", "vitals", "wellness",
    "fitness", "yoga", "body", "life", "live", "living", "love", "soul", "heart",
    "calm", "sleep", "mental", "nutrition", "diet", "vegan", "organic", "protein",
    "genome", "genomics", "biotech", "cure", "heal", "healing", "gene", "genes",
    "cell", "cells",

    // Food, Travel & Lifestyle
    "apple", "grape", "lemon", "melon", "berry", "mango", "peach", "olive", "honey",
    "sugar", "spice", "cream", "toast", "juice", "blend", "coffee", "kitchen",
    "chef", "food", "foods", "pizza", "burger", "bakery", "recipe", "recipes",
    "ride", "trip", "trips", "tour", "tours", "travel", "hotel", "hotels", "flight",
    "flights", "path", "road", "maps", "zone", "land", "city", "town", "fashion",
    "style", "beauty", "wear", "shoes", "jewel", "jewelry", "pets", "puppy",
    "kitty", "family", "baby", "kids", "wedding", "party", "music", "movie",
    "movies", "photo", "photos", "camera", "art", "arts", "design", "designs",
    "sport", "sports", "golf", "tennis", "soccer", "racing", "school", "academy",
    "college", "tutor", "lesson", "lessons", "course", "courses", "study",

    // Positive & Action
    "happy", "lucky", "magic", "dream", "dreams", "vivid", "alive", "awake", "begin",
    "start", "first", "final", "quest", "reach", "climb", "speed", "agile", "focus",
    "sharp", "exact", "ideal", "soar", "jump", "rush", "dash", "bolt", "zoom",
    "spin", "flip", "turn", "push", "pull", "snap", "grab", "pick", "drop", "kick",
    "boom", "blast", "cool", "warm", "fast", "slim", "safe", "pure", "easy",
    "flex", "next", "peak", "mega", "mini", "plus", "zero", "full", "free",
    "true", "real", "best", "better", "bright", "brilliant", "simple", "clever",
    "bold", "brave", "noble", "grand", "royal", "titan", "giant", "solid", "sleek",
    "crisp", "clean", "navigate", "explore", "discover", "create", "connect",
    "share", "grow", "rise", "lift", "move", "shift", "open", "unlock", "track",
    "trace", "match", "select", "choice", "daily", "early", "ready", "steady",

    // Modern & Abstract
    "delta", "sigma", "gamma", "theta", "metro", "urban", "civic", "vibe", "aura",
    "echo", "flow", "flux", "drift", "glide", "chaos", "unity", "merge", "fuse",
    "spot", "nest", "haven", "harbor", "anchor", "beacon", "bridge", "compass",
    "summit", "pinnacle", "horizon", "frontier", "pioneer", "legacy", "origin",
    "atlas", "apex", "zenith", "vertex", "element", "essence", "icon", "idea",
    "ideas", "example", "sample", "domain", "domains", "name", "names", "word",
    "words", "label", "brandable",

    // Everyday words, including those that hide an offensive fragment
    "pool", "spoon", "shampoo", "poodle", "poor", "scrap", "scrappy", "dickens",
    "sustain", "stainless", "whirlpool", "carpool", "spook", "together", "meditate",
    "carpet", "toolbox", "tool", "tools", "today", "tomorrow", "forever", "always",
    "inside", "outside", "within", "into", "onto", "upon", "meet", "meeting",
    "pilot", "plant", "plants", "table", "chair", "window", "door", "basket",
    "pocket", "ticket", "button", "candle", "paper", "pencil", "letter", "number",
    "corner", "summer", "winter", "spring", "autumn", "season", "weekend",
    "morning", "evening", "night", "dream", "dreams", "magic", "wonder", "happy",
    "lucky", "friend", "friends", "party", "place", "places", "music", "photo",
    "design", "flower", "flowers", "kingdom", "castle", "village", "harvest",

    // Places
    "seattle", "boston", "austin", "denver", "dallas", "miami", "chicago", "london",
    "paris", "tokyo", "berlin", "sydney", "toronto", "dublin",

    // Animals
    "tiger", "eagle", "shark", "whale", "raven", "panda", "koala", "otter", "horse",
    "zebra", "cobra", "viper", "wolf", "fox", "bear", "lion", "hawk", "falcon",
    "phoenix", "dragon", "fish", "bird", "duck", "deer", "frog", "crab", "bee",
    "owl",
];

/// Curated two- and three-letter words and abbreviations.
///
/// Names of three characters or fewer are only credited when they appear here.
pub const SHORT_WORDS: &[&str] = &[
    // Two letters
    "ai", "io", "go", "my", "we", "be", "do", "up", "on", "in", "to", "so", "ex",
    "re", "co", "hi", "ok", "me", "us", "it", "tv", "vr", "ar", "ev", "hq", "pr",
    "id", "ux", "ui", "pc", "bi", "ad", "fx", "gg",
    // Three letters
    "app", "bot", "box", "buy", "car", "dev", "doc", "eye", "fit", "fly", "get",
    "hub", "job", "key", "lab", "map", "net", "pay", "pet", "pod", "run", "set",
    "sky", "spy", "tag", "tap", "top", "try", "van", "vet", "web", "win", "wow",
    "zen", "zip", "zoo", "ace", "aid", "aim", "air", "art", "ask", "bay", "bed",
    "bet", "big", "bit", "biz", "bus", "cab", "cam", "cap", "cut", "day", "dig",
    "dog", "dot", "duo", "eat", "eco", "ego", "end", "era", "fan", "fee", "fin",
    "fix", "fun", "gap", "gas", "gem", "geo", "gig", "gym", "hat", "hex", "hit",
    "hot", "ice", "ink", "ion", "jam", "jet", "joy", "kit", "law", "led", "log",
    "lot", "low", "lux", "max", "med", "mix", "mob", "mod", "nav", "neo", "new",
    "now", "oak", "oil", "one", "orb", "owl", "own", "pad", "pan", "pen", "pie",
    "pin", "pix", "pop", "pot", "pro", "pub", "rad", "ray", "red", "rev", "sea",
    "sip", "six", "sol", "spa", "sub", "sum", "sun", "tab", "tax", "tea", "ten",
    "tip", "ton", "toy", "two", "uno", "use", "via", "vid", "vip", "vox", "way",
    "wit", "wiz", "yes", "you", "zap", "fox", "bee", "bio", "gpt", "llm", "nft",
    "api", "seo", "crm", "erp", "vpn", "dao", "xr", "iot", "ml",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_are_lowercase_ascii() {
        for word in DICTIONARY_WORDS.iter().chain(SHORT_WORDS) {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "bad entry: {word}"
            );
        }
    }

    #[test]
    fn test_short_words_are_short() {
        for word in SHORT_WORDS {
            assert!((2..=3).contains(&word.len()), "bad short word: {word}");
        }
    }
}
