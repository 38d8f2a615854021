//! Deterministic movement-instruction engine shared across the interpreter
//! and server crates.
//!
//! `nav-core` defines the canonical rules of the system: the survey grid, the
//! direction vocabulary, the command grammar, and the boundary-clamped walk.
//! Everything here is pure computation over immutable inputs; networking and
//! process concerns live in the crates built on top.
pub mod command;
pub mod grid;
pub mod lexicon;
pub mod parser;
pub mod quantity;
pub mod walker;

pub use command::{Command, Direction, Position, Quantity};
pub use grid::{Grid, GridError};
pub use lexicon::Lexicon;
pub use parser::{Parser, ParserError};
pub use walker::Walker;
