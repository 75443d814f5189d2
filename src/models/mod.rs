pub mod booking;
pub mod catalog;
pub mod form;

pub use booking::{BookedSlot, BookingPayload, BookingRecord, Gender};
pub use catalog::{Product, ProductPage, Service};
pub use form::{BookingDraft, FormState, InitialData};
