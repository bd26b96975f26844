//! Query preprocessing: raw question → ordered keyword tokens.

/// Closed stop-word list: articles, auxiliaries, pronouns, question words
/// and conversational filler.
pub const STOP_WORDS: &[&str] = &[
    "any", "the", "and", "or", "have", "we", "seen", "about", "with", "for", "from", "recently",
    "latest", "show", "me", "get", "find", "how", "many", "what", "when", "where", "why", "is",
    "are", "be", "been", "do", "does", "dont", "can", "could", "should", "would", "may", "might",
    "must", "will", "shall", "in", "on", "at", "to", "by", "as", "of", "if", "that", "this", "it",
    "it's", "you", "they", "them", "their", "your", "our",
];

/// Characters trimmed from both ends of each token.
const EDGE_PUNCTUATION: &[char] = &[
    '?', ',', ';', ':', '.', '!', '"', '\'', '(', ')', '[', ']', '{', '}',
];

/// Tokens of this many characters or fewer are dropped.
const MAX_DROPPED_TOKEN_CHARS: usize = 2;

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// Lowercase, split on whitespace, trim edge punctuation, drop stop words
/// and short tokens. Original order is kept and nothing is capped here.
pub fn extract_keywords(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(|token| token.trim_matches(EDGE_PUNCTUATION))
        .filter(|token| !is_stop_word(token))
        .filter(|token| token.chars().count() > MAX_DROPPED_TOKEN_CHARS)
        .map(str::to_string)
        .collect()
}
