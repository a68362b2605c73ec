// Central fault translation for every route.
//
// Handlers surface `AnimalError` values; their `IntoResponse` only tags a bare
// 500 response with the fault. The `translate_faults` middleware, layered once
// over the router, turns tagged responses and handler panics into the JSON
// error envelope.

use crate::domain::errors::AnimalError;
use crate::interface_adapters::protocol::ErrorMessage;
use axum::{
    Json,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;

const ERROR_MESSAGE_PREFIX: &str = "Ups, hier stimmt was nicht....";

const FAULT_BANNER: &str = "ACHTUNG, ATTENTIONE PREGO, UNERWARTETER FEHLER";

impl IntoResponse for AnimalError {
    fn into_response(self) -> Response {
        let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
        response.extensions_mut().insert(self);
        response
    }
}

// Map any fault to the uniform 500 response. The status ignores the fault kind.
pub fn translate(fault: &AnimalError) -> (StatusCode, Json<ErrorMessage>) {
    tracing::error!(kind = fault.kind(), error = %fault, "{}", FAULT_BANNER);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorMessage {
            message: format!("{ERROR_MESSAGE_PREFIX}{}", fault.message()),
        }),
    )
}

// Middleware wrapping the whole router.
pub async fn translate_faults(request: Request, next: Next) -> Response {
    let mut response = match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        Err(payload) => {
            let fault = AnimalError::Unexpected(panic_message(payload.as_ref()));
            return translate(&fault).into_response();
        }
    };

    match response.extensions_mut().remove::<AnimalError>() {
        Some(fault) => translate(&fault).into_response(),
        None => response,
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
