//! Localized canned replies
//!
//! Every static response the assistant can give, as English/Hindi pairs.
//! Deployments can reword any of them from TOML; the defaults are the
//! production texts.

use serde::{Deserialize, Serialize};

use findit_core::Language;

/// An English/Hindi string pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Localized {
    pub en: String,
    pub hi: String,
}

impl Localized {
    fn new(en: &str, hi: &str) -> Self {
        Self { en: en.to_string(), hi: hi.to_string() }
    }

    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::English => &self.en,
            Language::Hindi => &self.hi,
        }
    }
}

/// All canned reply templates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseTemplates {
    pub identity: Localized,
    pub greeting: Localized,
    pub help: Localized,
    pub need_more_info: Localized,
    pub no_results: Localized,
    pub disallowed_topic: Localized,
    pub store_error: Localized,
    pub review_carefully: Localized,
    /// Two-part clarification; `{category}` is substituted
    pub ask_location_features: Localized,
    pub closure_guide: Localized,
    pub safety_tips: Localized,
    pub recovery_tips: Localized,
    pub next_steps: Localized,
    pub mode_redirect: Localized,
    pub ai_unavailable: Localized,
    pub location_hint: Localized,
    pub results_header: Localized,
    /// `{count}` is substituted with the number of unrendered results
    pub more_results: Localized,
    pub verify_footer: Localized,
}

impl ResponseTemplates {
    /// The two-part clarification asking for location and features in one
    /// message, personalized with the known category.
    pub fn ask_location_features(&self, lang: Language, category: &str) -> String {
        self.ask_location_features.get(lang).replace("{category}", category)
    }

    /// Suffix noting how many further results exist beyond the rendered list
    pub fn more_results(&self, lang: Language, count: usize) -> String {
        self.more_results.get(lang).replace("{count}", &count.to_string())
    }
}

impl Default for ResponseTemplates {
    fn default() -> Self {
        Self {
            identity: Localized::new(
                "Mujhe Rehan bhai ne banaya hai!\n\nI'm FindIt AI – your Lost & Found Investigator. I help with search, recovery guidance, and listing management. I can also answer general knowledge questions briefly. What can I help you with?",
                "Mujhe Rehan bhai ne banaya hai!\n\nMain FindIt AI hoon – aapka Lost & Found Investigator. Search, recovery guidance, aur listing management mein help karta hoon. General knowledge questions ka bhi briefly answer de sakta hoon. Kya madad chahiye?",
            ),
            greeting: Localized::new(
                "FindIt AI – Lost & Found Investigator ready.\n\nI can help you:\n• Search for lost/found items\n• Understand search results\n• Guide recovery steps\n• Manage your listings\n• Answer general questions briefly\n\nWhat happened?",
                "FindIt AI – Lost & Found Investigator ready.\n\nMain help kar sakta hoon:\n• Lost/found items search\n• Results samjhana\n• Recovery guidance\n• Listings manage karna\n• General questions ka brief answer\n\nKya hua?",
            ),
            help: Localized::new(
                "I'm your Lost & Found Investigator. Here's how I can help:\n\n• Describe what you lost/found – I'll search immediately\n• Ask about search results – I'll explain matches\n• Need recovery tips? Just ask\n• Want to close a listing? I'll guide you\n• General questions? I can help briefly\n\nExample: 'lost my black phone in library yesterday'",
                "Main aapka Lost & Found Investigator hoon. Yeh kar sakta hoon:\n\n• Batao kya khoya/mila – turant search karunga\n• Results ke baare mein pucho – explain karunga\n• Recovery tips chahiye? Bas pucho\n• Listing close karni hai? Guide karunga\n• General questions? Brief answer dunga\n\nExample: 'kal library mein mera black phone kho gaya'",
            ),
            need_more_info: Localized::new(
                "To investigate, I need details. What item are you looking for?\n\nCommon: phone, wallet, bag, keys, ring, laptop, watch",
                "Investigate karne ke liye details chahiye. Kya item dhundh rahe ho?\n\nCommon: phone, wallet, bag, keys, ring, laptop, watch",
            ),
            no_results: Localized::new(
                "No matches found yet.\n\nPossible reasons:\n• Generic keywords – try adding brand/color\n• Location mismatch – specify exact area\n• Item not yet reported\n\nWant me to help refine your search?",
                "Abhi koi match nahi mila.\n\nPossible reasons:\n• Generic keywords – brand/color add karo\n• Location mismatch – exact area batao\n• Item abhi report nahi hua\n\nSearch refine karne mein help chahiye?",
            ),
            disallowed_topic: Localized::new(
                "I can help with general knowledge briefly, but not this topic. I'm best at helping with lost & found items. How can I assist with that?",
                "General knowledge mein briefly help kar sakta hoon, lekin yeh topic nahi. Lost & found items mein best help kar sakta hoon. Usme kaise madad karun?",
            ),
            store_error: Localized::new(
                "Search temporarily unavailable. Please try again in a moment.",
                "Search abhi temporarily unavailable hai. Thodi der mein try karo.",
            ),
            review_carefully: Localized::new(
                "Review these matches carefully. Verify details before contacting.",
                "Matches dhyan se dekho. Contact karne se pehle details verify karo.",
            ),
            ask_location_features: Localized::new(
                "Noted – {category}.\n\nTo narrow the search:\n1. Which area/location?\n2. Any distinguishing features (color, brand, marks)?",
                "Samjha – {category}.\n\nSearch narrow karne ke liye:\n1. Kahan tha?\n2. Koi identifying features (color, brand, marks)?",
            ),
            closure_guide: Localized::new(
                "To close your listing, you'll need to select a reason:\n\n• Item found by owner\n• Item returned to owner\n• Duplicate listing\n• Posted by mistake\n• No longer relevant\n• Other\n\nClosed listings help maintain platform trust and analytics. The data is preserved for records.",
                "Listing close karne ke liye reason select karna hoga:\n\n• Owner ko mil gaya\n• Owner ko return ho gaya\n• Duplicate listing\n• Galti se post kiya\n• Ab relevant nahi\n• Other\n\nClosed listings platform trust aur analytics ke liye help karti hain. Data records ke liye preserve hota hai.",
            ),
            safety_tips: Localized::new(
                "Safety tips for meeting a finder/claimant:\n\n• Meet in a public place\n• Bring someone with you\n• Verify item details before handover\n• Don't share personal info until verified\n• Trust your instincts",
                "Finder/claimant se milne ke safety tips:\n\n• Public jagah milo\n• Kisi ko saath lao\n• Handover se pehle item verify karo\n• Verify hone tak personal info share mat karo\n• Apni instincts pe trust karo",
            ),
            recovery_tips: Localized::new(
                "To increase recovery chances:\n\n• Add detailed description with brand/color\n• Include specific location\n• Check regularly for new matches\n• Respond quickly to potential matches\n• Consider expanding search area",
                "Recovery chances badhane ke liye:\n\n• Detailed description add karo (brand/color)\n• Specific location include karo\n• Regularly new matches check karo\n• Potential matches ko jaldi respond karo\n• Search area expand karo",
            ),
            next_steps: Localized::new(
                "What to do next:\n\n• Review any matches shown\n• Add more details if no matches\n• Check back regularly for new listings\n• Respond to claims promptly\n• Close listing when resolved",
                "Aage kya karna hai:\n\n• Matches review karo\n• No matches to details add karo\n• Regularly new listings check karo\n• Claims ko jaldi respond karo\n• Resolve hone pe listing close karo",
            ),
            mode_redirect: Localized::new(
                "In Normal Mode, I only help with Lost & Found items. For general questions, click the 'General Mode' button.\n\nOr tell me – what did you lose or find?",
                "Normal Mode mein sirf Lost & Found items ki help karta hoon. General questions ke liye 'General Mode' button click karo.\n\nYa fir batao – kya khoya ya mila?",
            ),
            ai_unavailable: Localized::new(
                "AI is currently unavailable. Please try again.",
                "AI abhi unavailable hai. Thodi der mein try karo.",
            ),
            location_hint: Localized::new(
                "Add location for better results.",
                "Location add karo better results ke liye.",
            ),
            results_header: Localized::new("Investigation Results:", "Investigation Results:"),
            more_results: Localized::new(
                " (+{count} more results available)",
                " (+{count} aur results available)",
            ),
            verify_footer: Localized::new(
                "Need help verifying or want more details? Just ask.",
                "Verify karna hai ya details chahiye? Just ask.",
            ),
        }
    }
}
