pub mod consent;
pub mod form;
pub mod health;
