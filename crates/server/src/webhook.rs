//! The single instruction endpoint.

use interpreter::Interpreter;
use nav_core::Command;
use rouille::{Request, Response};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct WebhookRequest {
    /// Raw instruction text; a missing field reads as an empty instruction,
    /// which resolves to the origin cell.
    #[serde(default)]
    pub instruction: String,
}

#[derive(Serialize)]
pub struct WebhookResponse {
    description: String,
    debug_position: [i32; 2],
    instruction_parsed: Vec<Command>,
}

pub fn handle(interpreter: &Interpreter, request: &Request) -> Response {
    let body: WebhookRequest = match rouille::input::json_input(request) {
        Ok(body) => body,
        Err(error) => {
            tracing::warn!(%error, "rejecting malformed webhook body");
            return Response::text("invalid JSON body").with_status_code(400);
        }
    };

    match interpreter.interpret(&body.instruction) {
        Ok(result) => Response::json(&WebhookResponse {
            description: result.description,
            debug_position: [result.position.row, result.position.col],
            instruction_parsed: result.commands,
        }),
        Err(error) => {
            // Only reachable if the walker's clamping invariant broke.
            tracing::error!(%error, "internal fault while interpreting instruction");
            Response::text("internal error").with_status_code(500)
        }
    }
}
