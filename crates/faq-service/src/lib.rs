//! # faq-service
//!
//! The FAQ service: the four operations over the record store and the
//! identity directory.
//!
//! - `get_by_id` — point read, no auth, absence is not an error
//! - `get_all` — capped newest-first listing with author enrichment
//! - `create` — authenticated insert with service-owned input validation
//! - `delete` — authenticated removal under a configurable policy
//!
//! Enrichment joins each listed entry with its author's directory
//! profile via one batched lookup; a broken linkage is a fatal
//! integrity error, never a silently dropped row.

mod enrich;
pub mod error;
pub mod input;
mod service;
mod test_support;

pub use error::ServiceError;
pub use input::CreateFaq;
pub use service::FaqService;
