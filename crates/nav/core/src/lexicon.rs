use regex::escape;

use crate::command::Direction;

/// Phrase-to-direction vocabulary.
///
/// An explicit immutable value handed to the parser at construction, so the
/// engine stays independently testable with alternative vocabularies. The
/// shipped vocabulary is the fixed Polish command set; several spellings map
/// to the same vector (bare noun, prepositional phrase, inflected form).
#[derive(Clone, Debug)]
pub struct Lexicon {
    entries: Vec<(String, Direction)>,
}

impl Lexicon {
    /// The fixed Polish drone vocabulary.
    pub fn polish() -> Self {
        let entries = [
            ("prawo", Direction::Right),
            ("na prawo", Direction::Right),
            ("w prawo", Direction::Right),
            ("lewo", Direction::Left),
            ("na lewo", Direction::Left),
            ("w lewo", Direction::Left),
            ("góra", Direction::Up),
            ("górę", Direction::Up),
            ("do góry", Direction::Up),
            ("w górę", Direction::Up),
            ("dół", Direction::Down),
            ("na dół", Direction::Down),
            ("w dół", Direction::Down),
        ];
        Self {
            entries: entries
                .into_iter()
                .map(|(phrase, direction)| (phrase.to_string(), direction))
                .collect(),
        }
    }

    /// Resolves a phrase to its unit vector, ignoring case and surrounding
    /// whitespace. Unknown phrases resolve to `None`.
    pub fn resolve(&self, phrase: &str) -> Option<Direction> {
        let phrase = phrase.trim().to_lowercase();
        self.entries
            .iter()
            .find(|(known, _)| *known == phrase)
            .map(|(_, direction)| *direction)
    }

    /// Regex alternation over every known phrase, longest first so that
    /// multi-word forms win over their embedded single-word forms.
    pub(crate) fn alternation(&self) -> String {
        let mut phrases: Vec<&str> = self.entries.iter().map(|(p, _)| p.as_str()).collect();
        phrases.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
        phrases
            .iter()
            .map(|phrase| escape(phrase))
            .collect::<Vec<_>>()
            .join("|")
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::polish()
    }
}
