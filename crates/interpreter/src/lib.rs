//! Request-scoped orchestration around the nav-core engine.
//!
//! The interpreter wires the optional instruction normalizer, the command
//! parser, and the walker into a single "instruction in, description out"
//! service. The normalizer is a best-effort collaborator: any failure falls
//! back to grammar-mode parsing of the raw instruction, and for inputs the
//! grammar parses on its own the result is identical either way.
pub mod normalizer;
pub mod service;

pub use normalizer::{InstructionNormalizer, NormalizerError, OpenAiConfig, OpenAiNormalizer};
pub use service::{Interpretation, Interpreter, InterpreterError};
