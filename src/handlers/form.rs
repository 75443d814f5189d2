use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{BookingDraft, FormState, InitialData, ProductPage};
use crate::services::submission;
use crate::state::AppState;

// GET /api/form/initial-data
//
// Fans out to the remote API for everything the form needs before it can
// render. All four requests run concurrently; if any one fails the whole
// load fails, so the form never renders from partial data.
pub async fn initial_data(
    State(state): State<Arc<AppState>>,
) -> Result<Json<InitialData>, AppError> {
    let (csrf_token, booked_slots, services, products_page) = tokio::try_join!(
        state.api.csrf_token(),
        state.api.booked_slots(),
        state.api.services(),
        state.api.products(1),
    )?;

    state
        .products_cache
        .lock()
        .unwrap()
        .insert(1, products_page.clone());

    Ok(Json(InitialData {
        csrf_token,
        booked_slots,
        services,
        products_page,
    }))
}

// GET /api/form/products?page=N
#[derive(Debug, Deserialize)]
pub struct ProductsQuery {
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_page() -> u32 {
    1
}

pub async fn products(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProductsQuery>,
) -> Result<Json<ProductPage>, AppError> {
    if query.page < 1 {
        return Err(AppError::BadRequest("page must be at least 1".to_string()));
    }

    let cached = {
        let cache = state.products_cache.lock().unwrap();
        cache.get(query.page).cloned()
    };
    if let Some(page) = cached {
        return Ok(Json(page));
    }

    let page = state.api.products(query.page).await?;
    state
        .products_cache
        .lock()
        .unwrap()
        .insert(query.page, page.clone());

    Ok(Json(page))
}

// POST /api/form/bookings
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub csrf_token: String,
    #[serde(flatten)]
    pub draft: BookingDraft,
}

/// Holds the in-flight flag for one submission. Releasing in `drop` means
/// the flag also comes back down when the handler future is dropped
/// mid-await (client disconnect), not only on the normal return path.
struct SubmitGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> SubmitGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
            .then_some(Self { flag })
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

pub async fn submit(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SubmitRequest>,
) -> Result<Json<FormState>, AppError> {
    // One submission at a time; a duplicate while one is in flight gets a
    // busy response instead of a second remote booking.
    let Some(_guard) = SubmitGuard::acquire(&state.submitting) else {
        return Err(AppError::SubmissionInFlight);
    };

    let outcome = submission::submit(
        state.api.as_ref(),
        &req.draft,
        &req.csrf_token,
        Utc::now(),
    )
    .await;

    Ok(Json(outcome))
}
