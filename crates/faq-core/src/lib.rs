//! # faq-core
//!
//! Core types shared across the FAQ service crates:
//! - Entity structs (`FaqEntry`, `AuthorProfile`, `EnrichedFaq`)
//! - The authenticated caller identity (`AuthIdentity`)
//! - ID prefix constants and the read/batch caps

pub mod entities;
pub mod identity;
pub mod ids;
