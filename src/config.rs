use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub api_base_url: String,
    pub products_cache_ttl_secs: u64,
    pub consent_cookie_days: i64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            api_base_url: env::var("BOOKING_API_URL")
                .unwrap_or_else(|_| "http://localhost:8000/api".to_string()),
            products_cache_ttl_secs: env::var("PRODUCTS_CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            consent_cookie_days: env::var("CONSENT_COOKIE_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }
}
