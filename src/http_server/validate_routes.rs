//! Validation HTTP Route
//!
//! `POST /validate`: the body is read as raw bytes and parsed here, so a
//! malformed body maps onto the same error shape as any other failure.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use uuid::Uuid;

use crate::api::{self, Envelope, Status};
use crate::observability::{log_event_with_fields, Event};
use crate::pipeline::Validator;

/// Shared validation state
#[derive(Debug, Default)]
pub struct ValidateState {
    pub validator: Validator,
}

impl ValidateState {
    pub fn new(validator: Validator) -> Self {
        Self { validator }
    }
}

/// Validation routes with shared state
pub fn validate_routes(state: Arc<ValidateState>) -> Router {
    Router::new()
        .route("/validate", post(validate_handler))
        .with_state(state)
}

async fn validate_handler(
    State(state): State<Arc<ValidateState>>,
    body: Bytes,
) -> impl IntoResponse {
    let request_id = Uuid::new_v4().to_string();

    let (envelope, event) = evaluate(&state.validator, &body);
    let error_count = envelope.error_count().to_string();
    log_event_with_fields(event, &log_fields(&request_id, &error_count));

    (status_code(envelope.status()), Json(envelope))
}

fn evaluate(validator: &Validator, body: &[u8]) -> (Envelope, Event) {
    match api::parse_body(body) {
        Ok(input) => {
            let envelope = Envelope::from_result(validator.validate(&input));
            let event = if envelope.is_valid() {
                Event::PayloadAccepted
            } else {
                Event::PayloadRejected
            };
            (envelope, event)
        }
        Err(envelope) => (envelope, Event::BodyUnreadable),
    }
}

/// Request log fields. Identifiers and counts only, never payload values.
fn log_fields<'a>(request_id: &'a str, error_count: &'a str) -> [(&'static str, &'a str); 2] {
    [("request_id", request_id), ("error_count", error_count)]
}

fn status_code(status: Status) -> StatusCode {
    match status {
        Status::Ok => StatusCode::OK,
        Status::Rejected => StatusCode::BAD_REQUEST,
    }
}
