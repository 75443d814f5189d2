use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Europe::Amsterdam;
use serde::{Deserialize, Deserializer, Serialize};

use super::catalog::{Product, Service};

/// An interval already occupied by an existing reservation. Immutable once
/// fetched; refreshed on every form load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookedSlot {
    #[serde(deserialize_with = "de_slot_time")]
    pub date: DateTime<Utc>,
    /// Computed server-side; may still be null for a freshly stored booking.
    #[serde(default, deserialize_with = "de_opt_slot_time")]
    pub end_time: Option<DateTime<Utc>>,
}

/// The remote stores booking times as `YYYY-MM-DD HH:MM:SS` salon
/// wall-clock strings and may echo them that way from `GET /bookings`;
/// newer records come back as RFC 3339. Accept both, reading the
/// space-separated form as Europe/Amsterdam.
fn parse_slot_time(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").ok()?;
    naive
        .and_local_timezone(Amsterdam)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

fn de_slot_time<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_slot_time(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("unrecognized booking time: {raw}")))
}

fn de_opt_slot_time<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_slot_time(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("unrecognized booking time: {raw}"))),
        None => Ok(None),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }
}

/// The normalized submission sent to `POST /bookings/full-store`.
/// The `date` is a `YYYY-MM-DD HH:MM:SS` string in Europe/Amsterdam.
#[derive(Debug, Clone, Serialize)]
pub struct BookingPayload {
    pub date: String,
    pub name: String,
    pub email: String,
    pub telephone: String,
    pub gender: Gender,
    pub remarks: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<String>>,
}

/// The created booking echoed back by the remote API, including the
/// server-computed end time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: String,
    pub date: String,
    #[serde(default)]
    pub end_time: Option<String>,
    pub name: String,
    pub email: String,
    pub telephone: String,
    pub gender: String,
    pub remarks: String,
    pub status: String,
    #[serde(default)]
    pub services: Option<Vec<Service>>,
    #[serde(default)]
    pub products: Option<Vec<Product>>,
    pub created_at: String,
    pub updated_at: String,
}
