//! Free-text query classification.

/// Words that mark a query as an airport search.
const AIRPORT_KEYWORDS: &[&str] = &["airport", "intl", "international", "int'l", "terminal"];

/// What a query looks like, which decides sources, filters and ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryClass {
    /// Contains a digit, so probably a street address
    pub looks_like_address: bool,
    /// Mentions an airport or is a short acronym like "DFW"
    pub looks_like_airport: bool,
}

/// Classify a search query.
///
/// Any 2-4 letter word counts as an airport code, so short place names
/// such as "Zion" are classified as airport queries too.
pub fn classify(query: &str) -> QueryClass {
    let trimmed = query.trim();
    let lower = trimmed.to_lowercase();

    let looks_like_address = trimmed.chars().any(|c| c.is_ascii_digit());

    let has_keyword = lower
        .split(|c: char| c.is_whitespace() || c == ',' || c == '(' || c == ')')
        .any(|word| AIRPORT_KEYWORDS.contains(&word));

    let looks_like_airport = has_keyword || is_acronym(trimmed) || is_acronym_airport(&lower);

    QueryClass {
        looks_like_address,
        looks_like_airport,
    }
}

fn is_acronym(s: &str) -> bool {
    (2..=4).contains(&s.len()) && s.chars().all(|c| c.is_ascii_alphabetic())
}

/// "lax airport", "slc  airport"
fn is_acronym_airport(lower: &str) -> bool {
    let mut words = lower.split_whitespace();
    match (words.next(), words.next(), words.next()) {
        (Some(code), Some("airport"), None) => is_acronym(code),
        _ => false,
    }
}
