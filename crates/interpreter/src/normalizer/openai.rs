//! OpenAI-compatible chat-completions normalizer.
//!
//! Response types are deliberately defensive: fields the provider might
//! omit or rename default instead of failing deserialization, because any
//! unusable reply simply means falling back to grammar-mode parsing.

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{InstructionNormalizer, NormalizerError};

const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

const SYSTEM_PROMPT: &str = "\
Jesteś normalizatorem poleceń ruchu drona nad siatką. Przepisz instrukcję \
użytkownika na listę komend, po jednej w wierszu, w formacie: kierunek liczba. \
Dozwolone kierunki: prawo, lewo, góra, dół. Liczba to liczba kroków zapisana \
cyframi albo 'do końca', gdy dron ma lecieć aż do krawędzi. Pomiń fragmenty, \
których nie rozumiesz. Nie dodawaj niczego poza komendami.";

/// Connection settings for the normalization endpoint.
#[derive(Clone, Debug)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    /// Upper bound on the whole HTTP round trip. Expiry is treated like any
    /// other normalizer failure.
    pub timeout: Duration,
}

impl OpenAiConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `OPENAI_API_KEY` - API key (required)
    /// - `OPENAI_MODEL` - model name (default: gpt-4o-mini)
    /// - `OPENAI_BASE_URL` - API base URL (default: https://api.openai.com/v1)
    /// - `ORACLE_TIMEOUT_MS` - request timeout in milliseconds (default: 5000)
    pub fn from_env() -> Result<Self, NormalizerError> {
        let api_key = env::var("OPENAI_API_KEY").map_err(|_| NormalizerError::MissingApiKey)?;
        let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url = env::var("OPENAI_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout = env::var("ORACLE_TIMEOUT_MS")
            .ok()
            .and_then(|value| value.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TIMEOUT);
        Ok(Self {
            api_key,
            model,
            base_url,
            timeout,
        })
    }
}

/// Instruction normalizer backed by an OpenAI-compatible HTTP API.
pub struct OpenAiNormalizer {
    config: OpenAiConfig,
    http_client: reqwest::blocking::Client,
}

impl OpenAiNormalizer {
    pub fn new(config: OpenAiConfig) -> Result<Self, NormalizerError> {
        let http_client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            config,
            http_client,
        })
    }
}

impl InstructionNormalizer for OpenAiNormalizer {
    fn normalize(&self, instruction: &str) -> Result<String, NormalizerError> {
        let url = format!("{}/chat/completions", self.config.base_url);

        tracing::debug!(model = %self.config.model, "requesting instruction normalization");

        let request = ChatRequest {
            model: &self.config.model,
            temperature: 0.0,
            messages: vec![
                RequestMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                RequestMessage {
                    role: "user",
                    content: instruction,
                },
            ],
        };

        let response: ChatResponse = self
            .http_client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()?
            .error_for_status()?
            .json()?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(NormalizerError::EmptyCompletion)?;

        tracing::debug!(
            lines = content.lines().count(),
            "normalizer returned canonical command list"
        );
        Ok(content)
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<RequestMessage<'a>>,
}

#[derive(Serialize)]
struct RequestMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    #[serde(default)]
    message: ResponseMessage,
}

#[derive(Deserialize, Default)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}
