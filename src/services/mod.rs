pub mod api;
pub mod availability;
pub mod consent;
pub mod pricing;
pub mod products;
pub mod submission;
pub mod validation;
