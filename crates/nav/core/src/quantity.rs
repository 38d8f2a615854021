//! Quantity token resolution.
//!
//! Tokens come out of the command pattern already isolated: a digit string,
//! a Polish number word, or a to-the-edge phrase. Resolution never fails —
//! anything unrecognized degrades to the default single step.

use regex::escape;

use crate::command::Quantity;

/// Polish number words, 1 through 10, with gender variants where the
/// vocabulary uses them.
const NUMBER_WORDS: &[(&str, u32)] = &[
    ("jeden", 1),
    ("jedno", 1),
    ("jedna", 1),
    ("dwa", 2),
    ("dwie", 2),
    ("trzy", 3),
    ("cztery", 4),
    ("pięć", 5),
    ("sześć", 6),
    ("siedem", 7),
    ("osiem", 8),
    ("dziewięć", 9),
    ("dziesięć", 10),
];

/// Phrases meaning "all the way" / "as far as possible" / "to the max".
const EDGE_PHRASES: &[&str] = &[
    "do samego końca",
    "aż do końca",
    "do końca",
    "ile się da",
    "jak najdalej",
    "na maksa",
    "do oporu",
    "maksymalnie",
];

/// Resolves an optional quantity token. A missing or unrecognized token is
/// the default single step; a digit string too large for u32 clamps instead
/// of failing (the walker's boundary stop makes any large count equivalent
/// to a walk to the edge).
pub fn resolve(token: Option<&str>) -> Quantity {
    let Some(token) = token else {
        return Quantity::default();
    };
    let token = token.trim().to_lowercase();
    if token.is_empty() {
        return Quantity::default();
    }
    if token.chars().all(|c| c.is_ascii_digit()) {
        return Quantity::Steps(token.parse().unwrap_or(u32::MAX));
    }
    if let Some((_, value)) = NUMBER_WORDS.iter().find(|(word, _)| *word == token) {
        return Quantity::Steps(*value);
    }
    if EDGE_PHRASES.contains(&token.as_str()) {
        return Quantity::ToEdge;
    }
    Quantity::default()
}

/// Regex alternation over every quantity token form, longest phrase first.
pub(crate) fn alternation() -> String {
    let mut phrases: Vec<&str> = EDGE_PHRASES
        .iter()
        .chain(NUMBER_WORDS.iter().map(|(word, _)| word))
        .copied()
        .collect();
    phrases.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
    let mut parts: Vec<String> = phrases.iter().map(|phrase| escape(phrase)).collect();
    parts.push(r"\d+".to_string());
    parts.join("|")
}
