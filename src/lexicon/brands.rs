//! Well-known brand names screened by the trademark check.
//!
//! Brands shorter than four characters only ever match exactly.

pub const KNOWN_BRANDS: &[&str] = &[
    // Technology
    "google", "alphabet", "youtube", "android", "gmail", "microsoft",
    "xbox", "linkedin", "github", "apple", "iphone", "ipad", "macbook",
    "itunes", "amazon", "alexa", "kindle", "facebook", "instagram", "whatsapp",
    "oculus", "twitter", "tiktok", "snapchat", "pinterest", "reddit", "netflix",
    "spotify", "hulu", "disney", "pixar", "marvel", "adobe", "photoshop", "oracle",
    "salesforce", "dropbox", "shopify", "stripe", "paypal", "venmo",
    "coinbase", "binance", "openai", "chatgpt", "anthropic", "nvidia",
    "samsung", "sony", "playstation", "nintendo", "lenovo", "huawei",
    "xiaomi", "cisco", "ibm", "hp", "uber", "lyft", "airbnb", "tesla",
    "spacex", "yahoo", "ebay", "etsy", "alibaba", "tencent", "baidu",
    "wechat", "telegram", "discord", "twitch", "roblox", "fortnite",
    "minecraft", "wordpress", "mozilla", "firefox", "skype", "zillow", "expedia",
    "tripadvisor", "yelp", "doordash", "grubhub", "instacart",
    // Consumer & retail
    "nike", "adidas", "puma", "reebok", "gucci", "prada", "chanel", "hermes",
    "rolex", "cartier", "tiffany", "walmart", "costco", "ikea", "zara",
    "sephora", "lego", "mattel", "hasbro", "starbucks", "mcdonalds", "burgerking",
    "dominos", "pepsi", "cocacola", "redbull", "nestle", "heineken",
    "budweiser", "colgate", "gillette", "pampers", "loreal",
    // Automotive & travel
    "toyota", "honda", "nissan", "chevrolet", "ferrari", "porsche",
    "lamborghini", "bmw", "mercedes", "volkswagen", "hyundai", "volvo",
    "boeing", "airbus", "emirates", "hilton", "marriott",
    // Finance & media
    "mastercard", "amex", "citibank", "barclays", "hsbc",
    "goldman", "blackrock", "fidelity", "vanguard", "robinhood", "bloomberg",
    "reuters", "forbes", "cnn", "espn", "hbo", "fedex", "ups", "dhl",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brands_lowercase() {
        assert!(KNOWN_BRANDS
            .iter()
            .all(|b| b.chars().all(|c| c.is_ascii_lowercase())));
    }
}
