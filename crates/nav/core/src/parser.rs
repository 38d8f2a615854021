//! Command extraction from instruction text.
//!
//! One pattern, compiled once from the lexicon, recognizes a command as an
//! optional quantity token on either side of a direction phrase. The two
//! input shapes are entry points over that pattern:
//!
//! - [`Parser::parse_canonical`] for normalizer output, one anchored
//!   "direction quantity" match per line;
//! - [`Parser::parse_grammar`] for raw natural language, all non-overlapping
//!   occurrences after the "na sam <kierunek>" colloquialism is rewritten to
//!   a trailing to-the-edge token.
//!
//! Per-fragment failures never abort parsing: unmatched canonical lines are
//! logged and skipped, unmatched raw fragments are skipped silently.

use regex::Regex;

use crate::command::Command;
use crate::lexicon::Lexicon;
use crate::quantity;

#[derive(Clone, Debug, thiserror::Error)]
pub enum ParserError {
    #[error("failed to compile command pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub struct Parser {
    lexicon: Lexicon,
    /// Unified command occurrence: `[qty [unit]] direction [qty]`.
    command: Regex,
    /// Whole-line variant for canonical mode, bullet prefix tolerated.
    line: Regex,
    /// "na sam dół" / "na samą górę" style phrasing.
    edge_rewrite: Regex,
}

impl Parser {
    pub fn new(lexicon: Lexicon) -> Result<Self, ParserError> {
        let directions = lexicon.alternation();
        let quantities = quantity::alternation();

        let command = Regex::new(&format!(
            r"(?i)(?:\b({quantities})\s+(?:(?:pola|pole|pól)\s+)?)?\b({directions})\b(?:\s+({quantities})\b)?"
        ))?;
        let line = Regex::new(&format!(
            r"(?i)^\s*(?:[-*]\s*)?({directions})\b(?:[\s,]+({quantities})\b)?[\s.]*$"
        ))?;
        let edge_rewrite = Regex::new(&format!(r"(?i)\bna\s+sam\w*\s+(?P<dir>{directions})\b"))?;

        Ok(Self {
            lexicon,
            command,
            line,
            edge_rewrite,
        })
    }

    /// Parses normalizer output: newline-delimited "direction quantity"
    /// lines. Empty lines are discarded; a non-empty line that does not
    /// match is logged and skipped, and the remaining lines still parse.
    pub fn parse_canonical(&self, text: &str) -> Vec<Command> {
        let mut commands = Vec::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let Some(captures) = self.line.captures(line) else {
                tracing::warn!(line, "canonical line did not parse, skipping");
                continue;
            };
            let phrase = &captures[1];
            let Some(direction) = self.lexicon.resolve(phrase) else {
                tracing::warn!(phrase, "direction phrase not in lexicon, skipping line");
                continue;
            };
            let token = captures.get(2).map(|m| m.as_str());
            commands.push(Command::new(direction, quantity::resolve(token)));
        }
        commands
    }

    /// Parses raw natural-language text by collecting every command
    /// occurrence in textual order. Quantity may precede the direction
    /// ("2 pola w prawo") or trail it ("prawo 2"); when both are present the
    /// trailing token wins. Unmatched fragments are skipped.
    pub fn parse_grammar(&self, text: &str) -> Vec<Command> {
        let text = self.edge_rewrite.replace_all(text, "${dir} do końca");
        let mut commands = Vec::new();
        for captures in self.command.captures_iter(&text) {
            let phrase = &captures[2];
            let Some(direction) = self.lexicon.resolve(phrase) else {
                tracing::warn!(phrase, "direction phrase not in lexicon, skipping");
                continue;
            };
            let token = captures
                .get(3)
                .or_else(|| captures.get(1))
                .map(|m| m.as_str());
            commands.push(Command::new(direction, quantity::resolve(token)));
        }
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{Direction, Quantity};

    fn parser() -> Parser {
        Parser::new(Lexicon::polish()).unwrap()
    }

    #[test]
    fn canonical_lines_parse_in_order() {
        let commands = parser().parse_canonical("prawo 2\nlewo do końca\n\ndół\n");
        assert_eq!(
            commands,
            vec![
                Command::new(Direction::Right, Quantity::Steps(2)),
                Command::new(Direction::Left, Quantity::ToEdge),
                Command::new(Direction::Down, Quantity::Steps(1)),
            ]
        );
    }

    #[test]
    fn canonical_bad_line_is_skipped_not_fatal() {
        let commands = parser().parse_canonical("prawo 2\nzygzakiem 3\ngóra");
        assert_eq!(
            commands,
            vec![
                Command::new(Direction::Right, Quantity::Steps(2)),
                Command::new(Direction::Up, Quantity::Steps(1)),
            ]
        );
    }

    #[test]
    fn canonical_tolerates_bullets_and_number_words() {
        let commands = parser().parse_canonical("- prawo dwa\n- dół do końca.");
        assert_eq!(
            commands,
            vec![
                Command::new(Direction::Right, Quantity::Steps(2)),
                Command::new(Direction::Down, Quantity::ToEdge),
            ]
        );
    }

    #[test]
    fn grammar_quantity_before_direction() {
        let commands = parser().parse_grammar("2 pola w prawo");
        assert_eq!(
            commands,
            vec![Command::new(Direction::Right, Quantity::Steps(2))]
        );
    }

    #[test]
    fn grammar_number_word_with_unit_noun() {
        let commands = parser().parse_grammar("jedno pole w prawo");
        assert_eq!(
            commands,
            vec![Command::new(Direction::Right, Quantity::Steps(1))]
        );
    }

    #[test]
    fn grammar_sequences_keep_textual_order() {
        let commands = parser().parse_grammar("dwa pola w prawo, dół");
        assert_eq!(
            commands,
            vec![
                Command::new(Direction::Right, Quantity::Steps(2)),
                Command::new(Direction::Down, Quantity::Steps(1)),
            ]
        );
    }

    #[test]
    fn grammar_rewrites_na_sam_phrasing() {
        let commands = parser().parse_grammar("na sam dół");
        assert_eq!(commands, vec![Command::new(Direction::Down, Quantity::ToEdge)]);

        let commands = parser().parse_grammar("leć na samą górę");
        assert_eq!(commands, vec![Command::new(Direction::Up, Quantity::ToEdge)]);
    }

    #[test]
    fn grammar_trailing_edge_phrase() {
        let commands = parser().parse_grammar("w prawo ile się da");
        assert_eq!(
            commands,
            vec![Command::new(Direction::Right, Quantity::ToEdge)]
        );
    }

    #[test]
    fn grammar_quantity_after_direction() {
        let commands = parser().parse_grammar("prawo 3");
        assert_eq!(
            commands,
            vec![Command::new(Direction::Right, Quantity::Steps(3))]
        );
    }

    #[test]
    fn grammar_is_case_insensitive() {
        let commands = parser().parse_grammar("DWA POLA W PRAWO");
        assert_eq!(
            commands,
            vec![Command::new(Direction::Right, Quantity::Steps(2))]
        );
    }

    #[test]
    fn grammar_skips_unrecognized_text() {
        assert!(parser().parse_grammar("zrób fikołka").is_empty());
        assert!(parser().parse_grammar("").is_empty());
    }

    #[test]
    fn grammar_ignores_surrounding_prose() {
        let commands = parser().parse_grammar("proszę leć dwa pola w prawo i wyląduj");
        assert_eq!(
            commands,
            vec![Command::new(Direction::Right, Quantity::Steps(2))]
        );
    }
}
