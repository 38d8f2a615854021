//! Optional external instruction normalizer.
//!
//! The normalizer is a text-to-text oracle that may rewrite a raw
//! instruction into a canonical newline-delimited command list. Its output
//! is untrusted and never load-bearing: callers must treat every error
//! variant the same way and fall back to grammar-mode parsing.

mod openai;

pub use openai::{OpenAiConfig, OpenAiNormalizer};

#[derive(Debug, thiserror::Error)]
pub enum NormalizerError {
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,

    #[error("normalization request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("normalizer returned no completion")]
    EmptyCompletion,
}

/// Rewrites a raw instruction into canonical "direction quantity" lines.
///
/// Implementations may block (the production one performs an HTTP round
/// trip) but must bound their own latency; the request path has no other
/// timeout.
pub trait InstructionNormalizer: Send + Sync {
    fn normalize(&self, instruction: &str) -> Result<String, NormalizerError>;
}
