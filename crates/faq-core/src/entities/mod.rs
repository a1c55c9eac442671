//! Entity structs for the FAQ domain.
//!
//! `FaqEntry` maps to the `faq_entries` table; the author types are
//! transient shapes produced by directory lookup and enrichment. All
//! structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema generation.

mod author;
mod entry;

pub use author::{AuthorDisplay, AuthorProfile};
pub use entry::{EnrichedFaq, FaqEntry};
