/// Emoji used when no rule matches
pub const DEFAULT_EMOJI: &str = "🤖";

pub struct EmojiRule {
    pub emoji: &'static str,
    pub keywords: &'static [&'static str],
}

/// Keyword groups in priority order; the first group with a keyword
/// contained in the label wins
pub const EMOJI_RULES: &[EmojiRule] = &[
    EmojiRule {
        emoji: "🐶",
        keywords: &["dog", "retriever", "terrier"],
    },
    EmojiRule {
        emoji: "🐱",
        keywords: &["cat", "tabby"],
    },
    EmojiRule {
        emoji: "🚗",
        keywords: &["car", "vehicle"],
    },
    EmojiRule {
        emoji: "☕",
        keywords: &["coffee", "cup", "espresso"],
    },
    EmojiRule {
        emoji: "🍔",
        keywords: &["food", "burger", "pizza"],
    },
];

/// Pick the emoji for a class label (case-insensitive substring match)
pub fn emoji_for(label: &str) -> &'static str {
    let label = label.to_lowercase();

    EMOJI_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| label.contains(kw)))
        .map(|rule| rule.emoji)
        .unwrap_or(DEFAULT_EMOJI)
}
