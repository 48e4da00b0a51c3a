//! Keyword tables driving extraction, intent scoring and search expansion
//!
//! All tables are ordered `Vec`s, not maps: extraction is first-match-wins
//! and the table order is the tie-break policy, so iteration order must be
//! explicit and stable. The defaults below are the production tables; a
//! deployment can override any of them from TOML since the whole struct
//! is serde with per-field defaults.

use serde::{Deserialize, Serialize};

/// One category with its keyword set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryEntry {
    /// Canonical category name, e.g. "phone"
    pub canonical: String,
    /// Keywords and synonyms that map to this category
    pub keywords: Vec<String>,
}

impl CategoryEntry {
    fn new(canonical: &str, keywords: &[&str]) -> Self {
        Self {
            canonical: canonical.to_string(),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Whether `term` is the canonical name or one of the keywords
    pub fn contains(&self, term: &str) -> bool {
        self.canonical == term || self.keywords.iter().any(|k| k == term)
    }
}

/// The full keyword lexicon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    /// Search-side synonym expansion: user term -> all terms to search
    pub category_expansion: Vec<CategoryEntry>,
    /// Extraction-side category keywords (narrower than the search set)
    pub item_keywords: Vec<CategoryEntry>,
    /// Location nouns that anchor the location context capture
    pub location_keywords: Vec<String>,
    pub colors: Vec<String>,
    pub brands: Vec<String>,
    pub lost_keywords: Vec<String>,
    pub found_keywords: Vec<String>,
    pub help_keywords: Vec<String>,
    pub identity_keywords: Vec<String>,
    pub greeting_keywords: Vec<String>,
    pub browse_keywords: Vec<String>,
    pub closure_keywords: Vec<String>,
    pub safety_keywords: Vec<String>,
    pub recovery_keywords: Vec<String>,
    pub next_steps_keywords: Vec<String>,
    /// Topics refused outright, regardless of other signals
    pub disallowed_topics: Vec<String>,
    /// Topics answerable briefly in the general-knowledge mode
    pub general_knowledge_keywords: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            category_expansion: vec![
                CategoryEntry::new("phone", &["phone", "mobile", "smartphone", "iphone", "android", "cell", "handset"]),
                CategoryEntry::new("wallet", &["wallet", "purse", "billfold", "batua", "pocketbook"]),
                CategoryEntry::new("bag", &["bag", "backpack", "handbag", "satchel", "tote", "rucksack", "sling"]),
                CategoryEntry::new("ring", &["ring", "finger ring", "gold ring", "silver ring"]),
                CategoryEntry::new("laptop", &["laptop", "notebook", "macbook", "chromebook", "computer"]),
                CategoryEntry::new("keys", &["keys", "key", "keychain", "car key", "bike key", "chabi"]),
                CategoryEntry::new("earphones", &["earphones", "earbuds", "headphones", "airpods", "headset"]),
                CategoryEntry::new("glasses", &["glasses", "spectacles", "eyeglasses", "sunglasses", "chasma"]),
                CategoryEntry::new("watch", &["watch", "wristwatch", "smartwatch", "ghadi"]),
                CategoryEntry::new("bottle", &["bottle", "water bottle", "flask", "sipper", "tumbler"]),
                CategoryEntry::new("charger", &["charger", "adapter", "power bank", "cable"]),
                CategoryEntry::new("card", &["card", "id card", "aadhar", "pan card", "credit card", "debit card"]),
                CategoryEntry::new("umbrella", &["umbrella", "parasol", "chhatri"]),
                CategoryEntry::new("jewelry", &["jewelry", "jewellery", "necklace", "chain", "bracelet", "earring", "pendant"]),
            ],
            item_keywords: vec![
                CategoryEntry::new("phone", &["phone", "mobile", "smartphone", "iphone", "android", "cell"]),
                CategoryEntry::new("wallet", &["wallet", "purse", "batua", "pocketbook"]),
                CategoryEntry::new("bag", &["bag", "backpack", "handbag", "laptop bag", "school bag"]),
                CategoryEntry::new("ring", &["ring", "anguthi", "gold ring", "silver ring"]),
                CategoryEntry::new("laptop", &["laptop", "macbook", "notebook"]),
                CategoryEntry::new("keys", &["key", "keys", "chabi", "keychain"]),
                CategoryEntry::new("earphones", &["earphone", "earphones", "earbuds", "airpods", "headphone"]),
                CategoryEntry::new("glasses", &["glasses", "chasma", "spectacles", "sunglasses"]),
                CategoryEntry::new("watch", &["watch", "ghadi", "smartwatch"]),
                CategoryEntry::new("bottle", &["bottle", "water bottle", "flask", "sipper"]),
                CategoryEntry::new("charger", &["charger", "cable", "powerbank", "adapter"]),
                CategoryEntry::new("card", &["card", "id card", "aadhar", "pan", "license"]),
                CategoryEntry::new("umbrella", &["umbrella", "chhatri"]),
                CategoryEntry::new("jewelry", &["jewelry", "necklace", "chain", "bracelet", "earring", "pendant"]),
            ],
            location_keywords: strings(&[
                "library", "canteen", "cafeteria", "classroom", "class", "lab", "hostel", "mess",
                "ground", "parking", "bus stop", "gate", "corridor", "washroom", "auditorium",
                "gym", "office", "block", "building", "floor", "room", "near", "malad", "andheri",
                "bandra", "dadar", "station", "mall", "market", "park", "metro", "railway",
                "platform", "shop", "restaurant", "east", "west", "north", "south", "nagar",
                "colony", "sector",
            ]),
            colors: strings(&[
                "black", "white", "red", "blue", "green", "yellow", "brown", "grey", "gray",
                "pink", "gold", "silver", "kala", "safed", "lal", "neela",
            ]),
            brands: strings(&[
                "apple", "samsung", "xiaomi", "redmi", "oneplus", "oppo", "vivo", "realme",
                "nokia", "iphone", "boat", "jbl", "fossil", "titan", "casio",
            ]),
            lost_keywords: strings(&[
                "lost", "missing", "kho gaya", "kho gayi", "kho di", "gum", "gum ho gaya",
                "bhul gaya", "chhut gaya", "nahi mil raha", "can't find", "cannot find",
                "left behind", "misplaced", "kho", "mera", "meri", "lose",
            ]),
            found_keywords: strings(&[
                "found", "picked", "mila", "mil gaya", "mil gayi", "paaya", "dekha",
                "someone left", "lying", "unclaimed", "picked up", "discovered",
            ]),
            help_keywords: strings(&["help", "how", "kaise", "what", "kya karna", "guide", "madad"]),
            identity_keywords: strings(&["kisne banaya", "who made", "who built", "who created", "rehan"]),
            greeting_keywords: strings(&["hello", "hi", "hey", "namaste"]),
            browse_keywords: strings(&["browse", "show", "list", "dikhao", "all items", "recent"]),
            closure_keywords: strings(&[
                "close", "remove", "delete", "hatao", "band karo", "listing close", "resolved",
                "mil gaya mujhe", "wapas mila",
            ]),
            safety_keywords: strings(&[
                "safe", "safety", "meet", "meeting", "milna", "danger", "secure", "trust",
            ]),
            recovery_keywords: strings(&[
                "increase", "improve", "better", "chances", "recovery", "tips", "advice",
            ]),
            next_steps_keywords: strings(&[
                "next", "aage", "what now", "ab kya", "what should", "kya karun", "what do",
            ]),
            disallowed_topics: strings(&[
                "politics", "religion", "ideology", "nsfw", "legal advice", "medical advice",
                "hacking", "code", "coding", "programming", "debate", "controversial",
            ]),
            general_knowledge_keywords: strings(&[
                "science", "technology", "motivation", "productivity", "explain", "what is",
                "how does", "why", "meaning", "definition", "history", "fact",
            ]),
        }
    }
}

impl Lexicon {
    /// Whether the lowercased text contains any keyword from `set`
    pub fn any_in(set: &[String], lower_text: &str) -> bool {
        set.iter().any(|kw| lower_text.contains(kw.as_str()))
    }

    /// First keyword from `set` contained in the lowercased text
    pub fn first_in<'a>(set: &'a [String], lower_text: &str) -> Option<&'a str> {
        set.iter().find(|kw| lower_text.contains(kw.as_str())).map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables_populated() {
        let lex = Lexicon::default();
        assert!(!lex.category_expansion.is_empty());
        assert_eq!(lex.category_expansion.len(), lex.item_keywords.len());
        assert!(lex.location_keywords.contains(&"andheri".to_string()));
        assert!(lex.disallowed_topics.contains(&"politics".to_string()));
    }

    #[test]
    fn test_entry_contains_canonical_and_keyword() {
        let lex = Lexicon::default();
        let wallet = &lex.category_expansion[1];
        assert_eq!(wallet.canonical, "wallet");
        assert!(wallet.contains("wallet"));
        assert!(wallet.contains("batua"));
        assert!(!wallet.contains("phone"));
    }

    #[test]
    fn test_any_in_and_first_in() {
        let lex = Lexicon::default();
        assert!(Lexicon::any_in(&lex.lost_keywords, "i lost my bag"));
        assert!(!Lexicon::any_in(&lex.found_keywords, "i misplaced my bag"));
        assert_eq!(Lexicon::first_in(&lex.colors, "a black and white case"), Some("black"));
    }

    #[test]
    fn test_table_order_is_stable() {
        // First-match-wins extraction depends on this order
        let lex = Lexicon::default();
        assert_eq!(lex.item_keywords[0].canonical, "phone");
        assert_eq!(lex.item_keywords[1].canonical, "wallet");
        assert_eq!(lex.location_keywords[0], "library");
    }

    #[test]
    fn test_partial_toml_override_keeps_defaults() {
        let text = r#"colors = ["maroon"]"#;
        let lex: Lexicon = toml::from_str(text).unwrap();
        assert_eq!(lex.colors, vec!["maroon".to_string()]);
        // Untouched tables fall back to the defaults
        assert!(!lex.lost_keywords.is_empty());
    }
}
