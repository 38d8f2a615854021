use nav_core::{Command, Grid, GridError, Lexicon, Parser, ParserError, Position, Walker};
use serde::Serialize;

use crate::normalizer::InstructionNormalizer;

#[derive(Debug, thiserror::Error)]
pub enum InterpreterError {
    #[error(transparent)]
    Parser(#[from] ParserError),

    /// The walker's clamping makes this unreachable; seeing it means a
    /// walker invariant was violated, not that the input was bad.
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Result of interpreting one instruction: the cell description plus the
/// computed debug fields (final position, parsed command list).
#[derive(Clone, Debug, Serialize)]
pub struct Interpretation {
    pub description: String,
    pub position: Position,
    pub commands: Vec<Command>,
}

/// Instruction-to-description service.
///
/// Holds the immutable per-process inputs (grid, compiled parser, optional
/// normalizer); each `interpret` call computes its own request-local
/// position, so concurrent calls need no coordination.
pub struct Interpreter {
    grid: Grid,
    parser: Parser,
    normalizer: Option<Box<dyn InstructionNormalizer>>,
}

impl Interpreter {
    /// Builds an interpreter over `grid` with the default Polish lexicon
    /// and no normalizer.
    pub fn new(grid: Grid) -> Result<Self, InterpreterError> {
        let parser = Parser::new(Lexicon::polish())?;
        Ok(Self {
            grid,
            parser,
            normalizer: None,
        })
    }

    /// Attaches a best-effort instruction normalizer.
    pub fn with_normalizer(mut self, normalizer: Box<dyn InstructionNormalizer>) -> Self {
        self.normalizer = Some(normalizer);
        self
    }

    /// Interprets one raw instruction from the grid origin.
    ///
    /// Garbage input degrades to "no movement" and yields the origin's
    /// description; the only error path is the defensive out-of-range check
    /// on the final lookup.
    pub fn interpret(&self, instruction: &str) -> Result<Interpretation, InterpreterError> {
        let instruction = instruction.to_lowercase();
        let commands = self.resolve_commands(&instruction);
        let position = Walker::new(&self.grid).walk(&commands);
        let description = self.grid.describe(position)?.to_string();

        tracing::debug!(%position, commands = commands.len(), "instruction interpreted");

        Ok(Interpretation {
            description,
            position,
            commands,
        })
    }

    /// Canonical commands from the normalizer when it produces any, grammar
    /// mode on the raw text otherwise. A normalizer reply that parses to
    /// zero commands counts as a failure so a bad oracle can never turn a
    /// parseable instruction into "no movement".
    fn resolve_commands(&self, instruction: &str) -> Vec<Command> {
        if let Some(normalizer) = &self.normalizer {
            match normalizer.normalize(instruction) {
                Ok(canonical) => {
                    let commands = self.parser.parse_canonical(&canonical);
                    if !commands.is_empty() {
                        return commands;
                    }
                    tracing::warn!("normalizer output yielded no commands, using grammar mode");
                }
                Err(error) => {
                    tracing::warn!(%error, "instruction normalizer unavailable, using grammar mode");
                }
            }
        }
        self.parser.parse_grammar(instruction)
    }
}
