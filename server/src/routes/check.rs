//! `POST /api/check`: forward a check to the upstream classifier.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use verdict::{CheckRequest, ErrorBody};

use crate::classifier::Classification;
use crate::state::AppState;

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorBody::message(message))).into_response()
}

fn loading_response() -> Response {
    (StatusCode::ACCEPTED, Json(ErrorBody::loading())).into_response()
}

/// `POST /api/check`
///
/// Order of checks: classifier configured, classifier ready, body valid, text
/// non-empty. Only then is the upstream called.
pub async fn check_news(State(state): State<AppState>, payload: Result<Json<CheckRequest>, JsonRejection>) -> Response {
    let Some(classifier) = state.classifier.clone() else {
        return error_response(StatusCode::SERVICE_UNAVAILABLE, "classifier not configured");
    };
    if !state.is_ready() {
        return loading_response();
    }

    let mut request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return error_response(StatusCode::BAD_REQUEST, rejection.body_text()),
    };
    request.text = request.text.trim().to_owned();
    if request.text.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "No text provided");
    }

    match classifier.classify(&request).await {
        Ok(Classification::Ready(response)) => {
            tracing::info!(label = %response.label, final_score = response.final_score, "check classified");
            Json(response).into_response()
        }
        Ok(Classification::Loading) => {
            tracing::warn!("classifier reported loading after readiness probe succeeded");
            loading_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "classification failed");
            error_response(StatusCode::BAD_GATEWAY, e.to_string())
        }
    }
}

#[cfg(test)]
#[path = "check_test.rs"]
mod tests;
