//! # faq-directory
//!
//! Identity Directory client: resolves opaque user identifiers to
//! public profile data for author enrichment.
//!
//! [`ClerkDirectory`] talks to the Clerk Backend API via `reqwest`.
//! The [`UserDirectory`] trait is the seam the service layer depends
//! on, so tests can substitute an in-memory directory.

mod client;
pub mod error;
mod profile;

pub use client::ClerkDirectory;
pub use error::DirectoryError;

use faq_core::entities::AuthorProfile;

/// Batch lookup of user profiles by identifier.
///
/// One conceptual round trip per call: implementations may chunk the
/// id list to satisfy upstream request caps, but callers see a single
/// result set. Duplicate ids are permitted and resolve to one profile.
pub trait UserDirectory {
    fn batch_get_users(
        &self,
        ids: &[String],
    ) -> impl Future<Output = Result<Vec<AuthorProfile>, DirectoryError>> + Send;
}
