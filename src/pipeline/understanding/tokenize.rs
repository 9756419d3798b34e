use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Normalized significant terms of a text.
pub type TermSet = HashSet<String>;

/// Maximal runs of word characters (alphanumeric plus underscore).
static WORD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("Invalid word regex"));

/// Articles, pronouns, auxiliaries and question words: no topical signal.
static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "an", "the", "is", "are", "am", "i", "you", "he", "she", "it", "we", "they", "of",
        "for", "to", "in", "on", "and", "or", "but", "with", "at", "from", "this", "that",
        "these", "those", "about", "what", "how", "when", "why", "do", "does", "did", "my",
        "your", "his", "her", "their", "our", "have", "has", "had", "me", "be", "been", "was",
        "were",
    ]
    .into_iter()
    .collect()
});

fn is_stopword(term: &str) -> bool {
    STOP_WORDS.contains(term)
}

/// Lower-case `text`, split it into word runs and drop stopwords.
pub fn tokenize(text: &str) -> TermSet {
    let lower = text.to_lowercase();
    WORD_RUN
        .find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|term| !is_stopword(term))
        .map(str::to_owned)
        .collect()
}
