use std::sync::atomic::AtomicBool;
use std::sync::Mutex;

use crate::config::AppConfig;
use crate::services::api::BookingApi;
use crate::services::products::ProductPageCache;

pub struct AppState {
    pub api: Box<dyn BookingApi>,
    pub config: AppConfig,
    pub products_cache: Mutex<ProductPageCache>,
    /// Guards against a second booking submission while one is in flight.
    /// Process-wide, so concurrent submissions from different visitors
    /// serialize on this flag too, not just duplicates from one form.
    pub submitting: AtomicBool,
}
