//! Drone navigation webhook server.
//!
//! Composition root: loads configuration from the environment, assembles
//! the interpreter over the fixed survey map, optionally attaches the
//! LLM-backed instruction normalizer, and serves `POST /webhook`.

mod config;
mod content;
mod logging;
mod webhook;

use anyhow::Result;
use interpreter::{Interpreter, OpenAiConfig, OpenAiNormalizer};

use crate::config::ServerConfig;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init()?;

    let config = ServerConfig::from_env();
    let grid = content::survey_grid()?;
    let mut service = Interpreter::new(grid)?;

    // The normalizer is best-effort: without credentials the grammar-mode
    // parser carries every request on its own.
    match OpenAiConfig::from_env() {
        Ok(oracle_config) => {
            service = service.with_normalizer(Box::new(OpenAiNormalizer::new(oracle_config)?));
            tracing::info!("instruction normalizer enabled");
        }
        Err(error) => {
            tracing::warn!(%error, "running without instruction normalizer");
        }
    }

    tracing::info!(addr = %config.listen_addr, "drone-server listening");
    rouille::start_server(config.listen_addr, move |request| {
        rouille::router!(request,
            (POST) (/webhook) => {
                webhook::handle(&service, request)
            },
            _ => rouille::Response::empty_404()
        )
    });
}
