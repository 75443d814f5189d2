use serde::{Deserialize, Serialize};

/// A treatment from the remote catalog. Field names match the remote wire
/// format (`time` is the duration in minutes).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub time: i32,
    pub hairlength: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// One page of the remote product catalog (Laravel-style envelope).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductPage {
    pub current_page: u32,
    pub data: Vec<Product>,
    pub last_page: u32,
    #[serde(default)]
    pub next_page_url: Option<String>,
    #[serde(default)]
    pub prev_page_url: Option<String>,
    pub total: u32,
}
