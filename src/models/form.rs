use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{BookedSlot, ProductPage, Service};

/// One form session's in-progress state. Created empty, reset after a
/// successful submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingDraft {
    /// RFC 3339 instant from the date picker; empty when not chosen yet.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub telephone: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub remarks: String,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub products: Vec<String>,
}

/// Outcome of one submission attempt. On validation failure `payload`
/// echoes the draft so the client can re-fill the form without re-typing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FormState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<BookingDraft>,
}

impl FormState {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: Some(true),
            message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: Some(false),
            message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn invalid(
        message: impl Into<String>,
        errors: BTreeMap<String, String>,
        draft: BookingDraft,
    ) -> Self {
        Self {
            success: Some(false),
            message: Some(message.into()),
            errors: Some(errors),
            payload: Some(draft),
        }
    }
}

/// Everything the form needs before it can render: fetched concurrently,
/// and all-or-nothing.
#[derive(Debug, Clone, Serialize)]
pub struct InitialData {
    pub csrf_token: String,
    pub booked_slots: Vec<BookedSlot>,
    pub services: Vec<Service>,
    pub products_page: ProductPage,
}
