//! The enrichment join: pair entries with their authors' display data.
//!
//! Operates on any batch of entries, not just the list cap — the
//! directory client handles request chunking, this module handles
//! dedupe and the join itself. The join preserves the input entry
//! order and fails the whole batch on a broken linkage.

use std::collections::HashSet;

use faq_core::entities::{AuthorDisplay, AuthorProfile, EnrichedFaq, FaqEntry};

use crate::error::ServiceError;

/// The defensive display fallback. Unreachable after the integrity
/// checks, retained so formatting can never produce an empty name.
const USERNAME_FALLBACK: &str = "(username not found)";

/// Distinct `author_id`s in first-seen order.
pub(crate) fn distinct_author_ids(entries: &[FaqEntry]) -> Vec<String> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .filter(|entry| seen.insert(entry.author_id.as_str()))
        .map(|entry| entry.author_id.clone())
        .collect()
}

/// Join each entry to its author profile.
///
/// # Errors
///
/// `AuthorNotFound` when an entry's author has no profile in the batch;
/// `AuthorUnnamed` when a profile carries neither a primary nor an
/// external username. Both abort the whole join.
pub(crate) fn join_entries_with_authors(
    entries: Vec<FaqEntry>,
    profiles: &[AuthorProfile],
) -> Result<Vec<EnrichedFaq>, ServiceError> {
    entries
        .into_iter()
        .map(|entry| {
            let Some(profile) = profiles.iter().find(|p| p.id == entry.author_id) else {
                tracing::error!(
                    entry_id = %entry.id,
                    author_id = %entry.author_id,
                    "author not found for entry",
                );
                return Err(ServiceError::AuthorNotFound {
                    entry_id: entry.id,
                    author_id: entry.author_id,
                });
            };

            let username = match (&profile.username, &profile.external_username) {
                (Some(name), _) | (None, Some(name)) => Some(name.clone()),
                (None, None) => {
                    return Err(ServiceError::AuthorUnnamed {
                        author_id: profile.id.clone(),
                    });
                }
            };

            Ok(EnrichedFaq {
                author: AuthorDisplay {
                    id: profile.id.clone(),
                    username: username.unwrap_or_else(|| USERNAME_FALLBACK.to_string()),
                    image_url: profile.image_url.clone(),
                },
                entry,
            })
        })
        .collect()
}
