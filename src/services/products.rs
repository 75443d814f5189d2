use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::models::ProductPage;

/// Short-lived per-page cache for the product catalog, so paging back and
/// forth does not refetch. Expired entries are simply refetched; the remote
/// sends no invalidation signal.
#[derive(Debug)]
pub struct ProductPageCache {
    ttl: Duration,
    entries: HashMap<u32, (Instant, ProductPage)>,
}

impl ProductPageCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, page: u32) -> Option<&ProductPage> {
        self.entries
            .get(&page)
            .and_then(|(stored_at, data)| (stored_at.elapsed() < self.ttl).then_some(data))
    }

    pub fn insert(&mut self, page: u32, data: ProductPage) {
        self.entries.insert(page, (Instant::now(), data));
    }
}
