use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

pub const CONSENT_COOKIE: &str = "cookie_consent";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

impl SameSite {
    fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Recognized cookie attributes with their defaults: 30 days, Lax, secure,
/// path "/", no domain restriction.
#[derive(Debug, Clone)]
pub struct CookieOptions {
    pub days: i64,
    pub same_site: SameSite,
    pub secure: bool,
    pub domain: Option<String>,
    pub path: String,
}

impl Default for CookieOptions {
    fn default() -> Self {
        Self {
            days: 30,
            same_site: SameSite::Lax,
            secure: true,
            domain: None,
            path: "/".to_string(),
        }
    }
}

/// The visitor's cookie-consent decision, stored as an explicit record
/// with its own expiry rather than ambient state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsentRecord {
    pub accepted: bool,
    pub decided_at: DateTime<Utc>,
}

/// Builds the `Set-Cookie` value persisting `record`. The cookie value is
/// base64-encoded JSON, keeping it inside the cookie-octet alphabet.
pub fn set_cookie_header(
    record: &ConsentRecord,
    opts: &CookieOptions,
    now: DateTime<Utc>,
) -> Result<String, serde_json::Error> {
    let value = BASE64.encode(serde_json::to_string(record)?);

    let mut cookie = format!("{CONSENT_COOKIE}={value}; Path={}", opts.path);
    if opts.days > 0 {
        let expires = now + Duration::days(opts.days);
        cookie.push_str(&format!("; Expires={}", http_date(expires)));
    }
    cookie.push_str(&format!("; SameSite={}", opts.same_site.as_str()));
    if opts.secure {
        cookie.push_str("; Secure");
    }
    if let Some(domain) = &opts.domain {
        cookie.push_str(&format!("; Domain={domain}"));
    }

    Ok(cookie)
}

/// Builds the `Set-Cookie` value that removes the consent cookie (epoch
/// expiry).
pub fn clear_cookie_header(opts: &CookieOptions) -> String {
    let mut cookie = format!(
        "{CONSENT_COOKIE}=; Path={}; Expires=Thu, 01 Jan 1970 00:00:00 GMT",
        opts.path
    );
    if let Some(domain) = &opts.domain {
        cookie.push_str(&format!("; Domain={domain}"));
    }
    cookie
}

/// Reads the consent record out of a `Cookie` request header, if present
/// and decodable.
pub fn parse_cookie_header(header: &str) -> Option<ConsentRecord> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name != CONSENT_COOKIE {
            return None;
        }
        let decoded = BASE64.decode(value).ok()?;
        serde_json::from_slice(&decoded).ok()
    })
}

fn http_date(at: DateTime<Utc>) -> String {
    at.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record() -> ConsentRecord {
        ConsentRecord {
            accepted: true,
            decided_at: Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_round_trip_through_headers() {
        let now = Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap();
        let header = set_cookie_header(&record(), &CookieOptions::default(), now).unwrap();

        // What the browser would send back is just the name=value pair.
        let pair = header.split(';').next().unwrap();
        let parsed = parse_cookie_header(pair).unwrap();
        assert_eq!(parsed, record());
    }

    #[test]
    fn test_default_attributes() {
        let now = Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap();
        let header = set_cookie_header(&record(), &CookieOptions::default(), now).unwrap();

        assert!(header.contains("Path=/"));
        assert!(header.contains("SameSite=Lax"));
        assert!(header.contains("; Secure"));
        assert!(header.contains("Expires=Thu, 01 Oct 2026 12:00:00 GMT"));
        assert!(!header.contains("Domain="));
    }

    #[test]
    fn test_custom_options() {
        let now = Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap();
        let opts = CookieOptions {
            days: 7,
            same_site: SameSite::Strict,
            secure: false,
            domain: Some("salon.example".to_string()),
            path: "/booking".to_string(),
        };
        let header = set_cookie_header(&record(), &opts, now).unwrap();

        assert!(header.contains("Path=/booking"));
        assert!(header.contains("SameSite=Strict"));
        assert!(!header.contains("Secure"));
        assert!(header.contains("Domain=salon.example"));
        assert!(header.contains("Expires=Tue, 08 Sep 2026 12:00:00 GMT"));
    }

    #[test]
    fn test_parse_ignores_other_cookies() {
        let now = Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap();
        let header = set_cookie_header(&record(), &CookieOptions::default(), now).unwrap();
        let pair = header.split(';').next().unwrap();

        let request_header = format!("session=abc123; {pair}; theme=dark");
        assert_eq!(parse_cookie_header(&request_header), Some(record()));
    }

    #[test]
    fn test_parse_garbage_value() {
        assert!(parse_cookie_header("cookie_consent=!!!not-base64!!!").is_none());
        assert!(parse_cookie_header("other=value").is_none());
    }

    #[test]
    fn test_clear_header_expires_in_the_past() {
        let header = clear_cookie_header(&CookieOptions::default());
        assert!(header.starts_with("cookie_consent=;"));
        assert!(header.contains("Expires=Thu, 01 Jan 1970 00:00:00 GMT"));
    }
}
