use chrono::{DateTime, Utc};
use chrono_tz::Europe::Amsterdam;

use crate::models::{BookingDraft, BookingPayload, FormState, Gender};
use crate::services::api::{ApiError, BookingApi};
use crate::services::validation;

pub const DEFAULT_REMARKS: &str = "Geen opmerkingen";

const MSG_CSRF_MISSING: &str =
    "Beveiligingstoken ontbreekt. Vernieuw de pagina en probeer opnieuw.";
const MSG_CHECK_INPUT: &str = "Controleer de invoer en probeer opnieuw.";
const MSG_SUCCESS: &str = "Afspraak succesvol gemaakt! Je ontvangt een bevestiging per email.";
const MSG_BAD_REQUEST: &str = "Ongeldige gegevens verzonden. Controleer je invoer.";
const MSG_CONFLICT: &str = "Deze tijd is niet meer beschikbaar. Kies een ander tijdstip.";
const MSG_UNPROCESSABLE: &str = "De ingevoerde gegevens zijn ongeldig. Controleer alle velden.";
const MSG_GENERIC: &str =
    "Er is een fout opgetreden bij het maken van de afspraak. Probeer het later opnieuw.";

#[derive(Debug, Clone, Copy)]
enum Phase {
    Validating,
    Invalid,
    Submitting,
    Success,
    Failed,
}

fn trace_phase(phase: Phase) {
    tracing::debug!(?phase, "submission");
}

/// Formats an instant as salon wall-clock time, the format the remote API
/// stores. Resolved through the tz database so DST transitions come out
/// right regardless of the visitor's own timezone.
pub fn format_amsterdam(date: DateTime<Utc>) -> String {
    date.with_timezone(&Amsterdam)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Builds the normalized payload from a draft that already passed
/// validation. Blank remarks get the stock placeholder; empty id lists are
/// omitted from the JSON entirely.
pub fn build_payload(draft: &BookingDraft, date: DateTime<Utc>, gender: Gender) -> BookingPayload {
    let remarks = draft.remarks.trim();

    BookingPayload {
        date: format_amsterdam(date),
        name: draft.name.trim().to_string(),
        email: draft.email.trim().to_string(),
        telephone: draft.telephone.trim().to_string(),
        gender,
        remarks: if remarks.is_empty() {
            DEFAULT_REMARKS.to_string()
        } else {
            remarks.to_string()
        },
        status: "pending".to_string(),
        services: (!draft.services.is_empty()).then(|| draft.services.clone()),
        products: (!draft.products.is_empty()).then(|| draft.products.clone()),
    }
}

/// Runs one submission attempt end to end: CSRF precondition, all field
/// validators (no short-circuiting), payload normalization, and the remote
/// call. Never returns an error; every failure path becomes a user-facing
/// `FormState`.
pub async fn submit(
    api: &dyn BookingApi,
    draft: &BookingDraft,
    csrf_token: &str,
    now: DateTime<Utc>,
) -> FormState {
    // A missing token is a precondition failure, not a field error: the
    // field validators never run and the visitor is told to refresh.
    if csrf_token.is_empty() {
        return FormState::failure(MSG_CSRF_MISSING);
    }

    trace_phase(Phase::Validating);
    let errors = validation::validate_draft(draft, now);
    if !errors.is_empty() {
        trace_phase(Phase::Invalid);
        return FormState::invalid(MSG_CHECK_INPUT, errors, draft.clone());
    }

    // validate_draft guarantees both of these parse.
    let date = DateTime::parse_from_rfc3339(&draft.date).map(|d| d.with_timezone(&Utc));
    let gender = Gender::parse(&draft.gender);
    let (Ok(date), Some(gender)) = (date, gender) else {
        return FormState::failure(MSG_GENERIC);
    };

    let payload = build_payload(draft, date, gender);

    trace_phase(Phase::Submitting);
    match api.create_booking(&payload, csrf_token).await {
        Ok(record) => {
            trace_phase(Phase::Success);
            tracing::info!(booking_id = %record.id, date = %payload.date, "booking created");
            FormState::success(MSG_SUCCESS)
        }
        Err(err) => {
            trace_phase(Phase::Failed);
            tracing::error!(error = %err, "booking creation failed");
            FormState::failure(failure_message(&err))
        }
    }
}

fn failure_message(err: &ApiError) -> &'static str {
    match err.status() {
        Some(400) => MSG_BAD_REQUEST,
        Some(409) => MSG_CONFLICT,
        Some(422) => MSG_UNPROCESSABLE,
        _ => MSG_GENERIC,
    }
}
