use std::sync::Arc;

use axum::extract::State;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use crate::errors::AppError;
use crate::services::consent::{self, ConsentRecord, CookieOptions};
use crate::state::AppState;

fn cookie_options(state: &AppState) -> CookieOptions {
    CookieOptions {
        days: state.config.consent_cookie_days,
        ..CookieOptions::default()
    }
}

// GET /api/consent
pub async fn get_consent(headers: HeaderMap) -> Json<Option<ConsentRecord>> {
    let record = headers
        .get(COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(consent::parse_cookie_header);

    Json(record)
}

// POST /api/consent
#[derive(Debug, Deserialize)]
pub struct ConsentRequest {
    pub accepted: bool,
}

pub async fn set_consent(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ConsentRequest>,
) -> Result<Response, AppError> {
    let record = ConsentRecord {
        accepted: req.accepted,
        decided_at: Utc::now(),
    };

    let header = consent::set_cookie_header(&record, &cookie_options(&state), Utc::now())
        .map_err(|e| AppError::Internal(format!("could not encode consent cookie: {e}")))?;

    Ok(([(SET_COOKIE, header)], Json(record)).into_response())
}

// DELETE /api/consent
pub async fn remove_consent(State(state): State<Arc<AppState>>) -> Response {
    let header = consent::clear_cookie_header(&cookie_options(&state));
    (
        [(SET_COOKIE, header)],
        Json(serde_json::json!({ "cleared": true })),
    )
        .into_response()
}
