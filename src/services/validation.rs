use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::{DateTime, Datelike, Months, Timelike, Utc, Weekday};
use chrono_tz::Europe::Amsterdam;
use regex::Regex;

use crate::models::{BookingDraft, Gender};
use crate::services::availability::{BOOKING_HORIZON_MONTHS, CLOSING_HOUR, OPENING_HOUR};

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-ZÀ-ÿ\s\-'.]+$").expect("name pattern"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

// Dutch mobile and landline numbers in +31 / 0031 / 0 notation.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\+31|0031|0)[1-9][0-9]{8}$|^(\+31|0031|0)6[0-9]{8}$").expect("phone pattern")
});

pub fn validate_name(raw: &str) -> Option<String> {
    let name = raw.trim();
    if name.chars().count() < 2 {
        return Some("Naam moet minimaal 2 tekens bevatten".to_string());
    }
    if name.chars().count() > 100 {
        return Some("Naam mag maximaal 100 tekens bevatten".to_string());
    }
    if !NAME_RE.is_match(name) {
        return Some(
            "Naam mag alleen letters, spaties, koppeltekens en apostroffen bevatten".to_string(),
        );
    }
    None
}

pub fn validate_email(raw: &str) -> Option<String> {
    if !EMAIL_RE.is_match(raw.trim()) {
        return Some("Voer een geldig emailadres in".to_string());
    }
    None
}

pub fn validate_telephone(raw: &str) -> Option<String> {
    let clean: String = raw
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();

    if clean.chars().filter(char::is_ascii_digit).count() < 10 {
        return Some("Telefoonnummer moet minimaal 10 cijfers bevatten".to_string());
    }
    if !PHONE_RE.is_match(&clean) {
        return Some("Voer een geldig Nederlands telefoonnummer in".to_string());
    }
    None
}

pub fn validate_date(raw: &str, now: DateTime<Utc>) -> Option<String> {
    if raw.is_empty() {
        return Some("Selecteer een datum en tijd".to_string());
    }

    let candidate = match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed.with_timezone(&Utc),
        Err(_) => return Some("Ongeldige datum geselecteerd".to_string()),
    };

    if candidate < now {
        return Some("De geselecteerde datum kan niet in het verleden liggen".to_string());
    }

    match now.checked_add_months(Months::new(BOOKING_HORIZON_MONTHS)) {
        Some(horizon) if candidate <= horizon => {}
        _ => return Some("Je kunt maximaal 3 maanden vooruit boeken".to_string()),
    }

    let local = candidate.with_timezone(&Amsterdam);
    if !(OPENING_HOUR..CLOSING_HOUR).contains(&local.hour()) {
        return Some("Selecteer een tijd tussen 09:00 en 17:00".to_string());
    }

    if matches!(local.weekday(), Weekday::Sat | Weekday::Sun) {
        return Some("We zijn gesloten in het weekend. Selecteer een werkdag".to_string());
    }

    None
}

pub fn validate_remarks(raw: &str) -> Option<String> {
    if raw.chars().count() > 1000 {
        return Some("Opmerkingen mogen maximaal 1000 tekens bevatten".to_string());
    }
    None
}

pub fn validate_gender(raw: &str) -> Option<String> {
    if Gender::parse(raw).is_none() {
        return Some("Selecteer een geldig geslacht".to_string());
    }
    None
}

pub fn validate_selection(services: &[String], products: &[String]) -> Option<String> {
    if services.is_empty() && products.is_empty() {
        return Some("Selecteer ten minste één service of product".to_string());
    }
    None
}

/// Runs every field validator and collects all failures keyed by field
/// name, so the visitor sees every problem at once.
pub fn validate_draft(draft: &BookingDraft, now: DateTime<Utc>) -> BTreeMap<String, String> {
    let mut errors = BTreeMap::new();

    if let Some(e) = validate_name(&draft.name) {
        errors.insert("name".to_string(), e);
    }
    if let Some(e) = validate_email(&draft.email) {
        errors.insert("email".to_string(), e);
    }
    if let Some(e) = validate_telephone(&draft.telephone) {
        errors.insert("telephone".to_string(), e);
    }
    if let Some(e) = validate_gender(&draft.gender) {
        errors.insert("gender".to_string(), e);
    }
    if let Some(e) = validate_date(&draft.date, now) {
        errors.insert("date".to_string(), e);
    }
    if let Some(e) = validate_remarks(&draft.remarks) {
        errors.insert("remarks".to_string(), e);
    }
    if let Some(e) = validate_selection(&draft.services, &draft.products) {
        errors.insert("services".to_string(), e);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::Europe::Amsterdam;

    fn ams(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Amsterdam
            .with_ymd_and_hms(y, mo, d, h, mi, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    // Tuesday midday.
    fn now() -> DateTime<Utc> {
        ams(2026, 9, 1, 12, 0)
    }

    #[test]
    fn test_name_too_short() {
        assert!(validate_name("A").is_some());
        assert!(validate_name(" A ").is_some());
    }

    #[test]
    fn test_name_accepts_extended_latin() {
        assert!(validate_name("Anne-Marie O'Neill").is_none());
        assert!(validate_name("Zoë van der Berg").is_none());
        assert!(validate_name("J. Jansen").is_none());
    }

    #[test]
    fn test_name_rejects_digits() {
        assert!(validate_name("Jan2").is_some());
    }

    #[test]
    fn test_name_too_long() {
        assert!(validate_name(&"a".repeat(101)).is_some());
        assert!(validate_name(&"a".repeat(100)).is_none());
    }

    #[test]
    fn test_email() {
        assert!(validate_email("not-an-email").is_some());
        assert!(validate_email("a@b").is_some());
        assert!(validate_email("a@b.nl").is_none());
        assert!(validate_email("info@kapsalon.example.com").is_none());
    }

    #[test]
    fn test_telephone_accepts_dutch_formats() {
        assert!(validate_telephone("0612345678").is_none());
        assert!(validate_telephone("+31612345678").is_none());
        assert!(validate_telephone("06 1234 5678").is_none());
        assert!(validate_telephone("(070) 123-4567").is_none());
        assert!(validate_telephone("0031201234567").is_none());
    }

    #[test]
    fn test_telephone_too_short() {
        assert!(validate_telephone("061234567").is_some());
    }

    #[test]
    fn test_telephone_wrong_prefix() {
        assert!(validate_telephone("1234567890").is_some());
    }

    #[test]
    fn test_date_empty() {
        assert!(validate_date("", now()).is_some());
    }

    #[test]
    fn test_date_unparseable() {
        assert!(validate_date("volgende week", now()).is_some());
    }

    #[test]
    fn test_date_in_past() {
        let raw = ams(2026, 8, 28, 10, 0).to_rfc3339();
        assert!(validate_date(&raw, now()).is_some());
    }

    #[test]
    fn test_date_beyond_horizon() {
        let raw = ams(2026, 12, 15, 10, 0).to_rfc3339();
        assert!(validate_date(&raw, now()).is_some());
    }

    #[test]
    fn test_date_outside_business_hours() {
        let raw = ams(2026, 9, 15, 8, 0).to_rfc3339();
        assert!(validate_date(&raw, now()).is_some());
        let raw = ams(2026, 9, 15, 17, 0).to_rfc3339();
        assert!(validate_date(&raw, now()).is_some());
    }

    #[test]
    fn test_date_on_weekend() {
        // 2026-09-05 is a Saturday.
        let raw = ams(2026, 9, 5, 10, 0).to_rfc3339();
        assert!(validate_date(&raw, now()).is_some());
    }

    #[test]
    fn test_date_valid_weekday() {
        // 2026-09-15 is a Tuesday.
        let raw = ams(2026, 9, 15, 10, 0).to_rfc3339();
        assert!(validate_date(&raw, now()).is_none());
    }

    #[test]
    fn test_remarks_limit() {
        assert!(validate_remarks(&"x".repeat(1001)).is_some());
        assert!(validate_remarks(&"x".repeat(1000)).is_none());
        assert!(validate_remarks("").is_none());
    }

    #[test]
    fn test_gender_enumeration() {
        assert!(validate_gender("male").is_none());
        assert!(validate_gender("female").is_none());
        assert!(validate_gender("other").is_some());
        assert!(validate_gender("").is_some());
    }

    #[test]
    fn test_selection_requires_one_of_two() {
        assert!(validate_selection(&[], &[]).is_some());
        assert!(validate_selection(&["s1".to_string()], &[]).is_none());
        assert!(validate_selection(&[], &["p1".to_string()]).is_none());
    }

    #[test]
    fn test_validate_draft_collects_all_errors() {
        let draft = BookingDraft {
            date: String::new(),
            name: "A".to_string(),
            email: "not-an-email".to_string(),
            telephone: "123".to_string(),
            gender: "unknown".to_string(),
            remarks: "x".repeat(1001),
            services: vec![],
            products: vec![],
        };

        let errors = validate_draft(&draft, now());
        for field in ["name", "email", "telephone", "gender", "date", "remarks", "services"] {
            assert!(errors.contains_key(field), "missing error for {field}");
        }
    }

    #[test]
    fn test_validate_draft_empty_selection_flagged_despite_valid_fields() {
        let draft = BookingDraft {
            date: ams(2026, 9, 15, 10, 0).to_rfc3339(),
            name: "Anne-Marie O'Neill".to_string(),
            email: "a@b.nl".to_string(),
            telephone: "0612345678".to_string(),
            gender: "female".to_string(),
            remarks: String::new(),
            services: vec![],
            products: vec![],
        };

        let errors = validate_draft(&draft, now());
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key("services"));
    }
}
