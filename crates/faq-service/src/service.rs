//! The FAQ service operation set.

use faq_config::DeletePolicy;
use faq_core::entities::{EnrichedFaq, FaqEntry};
use faq_core::identity::AuthIdentity;
use faq_core::ids::LIST_LIMIT;
use faq_directory::UserDirectory;
use faq_store::FaqStore;

use crate::enrich::{distinct_author_ids, join_entries_with_authors};
use crate::error::ServiceError;
use crate::input::CreateFaq;

/// The FAQ service: record store plus identity directory, with a
/// configurable delete policy.
///
/// Each operation runs to completion within one call; the only I/O
/// suspension points are the store query and the directory lookup in
/// [`get_all`](Self::get_all), which run sequentially (the lookup
/// needs the author-id set). No shared mutable state — concurrent
/// calls are independent.
pub struct FaqService<D: UserDirectory> {
    store: FaqStore,
    directory: D,
    list_limit: u32,
    delete_policy: DeletePolicy,
}

impl<D: UserDirectory> FaqService<D> {
    /// Build a service with the default cap (100) and delete policy.
    #[must_use]
    pub fn new(store: FaqStore, directory: D) -> Self {
        Self {
            store,
            directory,
            list_limit: LIST_LIMIT,
            delete_policy: DeletePolicy::default(),
        }
    }

    /// Override the delete policy (from `[general] delete_policy`).
    #[must_use]
    pub const fn with_delete_policy(mut self, policy: DeletePolicy) -> Self {
        self.delete_policy = policy;
        self
    }

    /// Override the list cap (from `[general] list_limit`).
    #[must_use]
    pub const fn with_list_limit(mut self, limit: u32) -> Self {
        self.list_limit = limit;
        self
    }

    /// Access the underlying store (for CLI maintenance paths).
    #[must_use]
    pub const fn store(&self) -> &FaqStore {
        &self.store
    }

    /// Point read. A missing id is `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Store` if the store query fails.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<FaqEntry>, ServiceError> {
        Ok(self.store.find_unique(id).await?)
    }

    /// List up to the cap, newest first, each entry enriched with its
    /// author's display profile. The enrichment join never reorders.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Store`/`Directory` on I/O failure, or an
    /// integrity error when an entry's author cannot be resolved to a
    /// displayable profile.
    pub async fn get_all(&self) -> Result<Vec<EnrichedFaq>, ServiceError> {
        let entries = self.store.find_many(self.list_limit).await?;
        self.attach_author_data(entries).await
    }

    /// Enrich any batch of entries with author display data via one
    /// batched directory lookup.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`get_all`](Self::get_all).
    pub async fn attach_author_data(
        &self,
        entries: Vec<FaqEntry>,
    ) -> Result<Vec<EnrichedFaq>, ServiceError> {
        let author_ids = distinct_author_ids(&entries);
        let profiles = self.directory.batch_get_users(&author_ids).await?;
        join_entries_with_authors(entries, &profiles)
    }

    /// Create an entry. The caller's identity becomes the author.
    ///
    /// # Errors
    ///
    /// `Unauthorized` when no identity is present (checked before any
    /// store access), `Validation` on an empty question or answer,
    /// `Store` on insert failure.
    pub async fn create(
        &self,
        identity: Option<&AuthIdentity>,
        input: &CreateFaq,
    ) -> Result<FaqEntry, ServiceError> {
        let identity = identity.ok_or(ServiceError::Unauthorized)?;
        input.validate()?;

        let entry = self
            .store
            .insert_entry(&input.question, &input.answer, &identity.user_id)
            .await?;
        tracing::info!(entry_id = %entry.id, author_id = %entry.author_id, "created FAQ entry");
        Ok(entry)
    }

    /// Delete an entry by id under the configured policy.
    ///
    /// # Errors
    ///
    /// `Unauthorized` when no identity is present, `Forbidden` when the
    /// policy is `AuthorOnly` and the caller is not the author,
    /// `NotFound` when the id does not exist, `Store` on I/O failure.
    pub async fn delete(
        &self,
        identity: Option<&AuthIdentity>,
        id: &str,
    ) -> Result<(), ServiceError> {
        let identity = identity.ok_or(ServiceError::Unauthorized)?;

        if self.delete_policy == DeletePolicy::AuthorOnly {
            let entry = self
                .store
                .find_unique(id)
                .await?
                .ok_or_else(|| ServiceError::NotFound(id.to_string()))?;
            if entry.author_id != identity.user_id {
                return Err(ServiceError::Forbidden(format!(
                    "only the author may delete entry {id}"
                )));
            }
        }

        let affected = self.store.delete_entry(id).await?;
        if affected == 0 {
            return Err(ServiceError::NotFound(id.to_string()));
        }
        tracing::info!(entry_id = %id, caller = %identity.user_id, "deleted FAQ entry");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::test_support::helpers::{identity, profile, test_service};

    #[tokio::test]
    async fn create_sets_author_and_timestamp() {
        let svc = test_service(vec![profile("user_a1", Some("alice"), None)]).await;
        let caller = identity("user_a1");

        let before = chrono::Utc::now();
        let entry = svc
            .create(
                Some(&caller),
                &CreateFaq {
                    question: "How do I export data?".into(),
                    answer: "Use the export command.".into(),
                },
            )
            .await
            .unwrap();

        assert_eq!(entry.author_id, "user_a1");
        assert!(entry.created_at >= before);
        assert!(entry.id.starts_with("faq-"));
    }

    #[tokio::test]
    async fn create_without_identity_is_rejected_before_mutation() {
        let svc = test_service(vec![]).await;

        let err = svc
            .create(
                None,
                &CreateFaq {
                    question: "q".into(),
                    answer: "a".into(),
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "unauthorized");

        // Nothing reached the store.
        assert!(svc.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_rejects_empty_question() {
        let svc = test_service(vec![]).await;
        let caller = identity("user_a1");

        let err = svc
            .create(
                Some(&caller),
                &CreateFaq {
                    question: "  ".into(),
                    answer: "a".into(),
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "validation");
    }

    #[tokio::test]
    async fn get_by_id_missing_is_none_not_error() {
        let svc = test_service(vec![]).await;
        let result = svc.get_by_id("nonexistent-id").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn get_all_worked_example() {
        // E1 created first, E2 second; A1 has a username, A2 only an
        // external one. Expect [E2/bob-ext, E1/alice].
        let svc = test_service(vec![
            profile("user_a1", Some("alice"), None),
            profile("user_a2", None, Some("bob-ext")),
        ])
        .await;

        let e1 = svc
            .create(
                Some(&identity("user_a1")),
                &CreateFaq {
                    question: "first?".into(),
                    answer: "yes".into(),
                },
            )
            .await
            .unwrap();
        let e2 = svc
            .create(
                Some(&identity("user_a2")),
                &CreateFaq {
                    question: "second?".into(),
                    answer: "also yes".into(),
                },
            )
            .await
            .unwrap();

        let all = svc.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].entry.id, e2.id);
        assert_eq!(all[0].author.username, "bob-ext");
        assert_eq!(all[1].entry.id, e1.id);
        assert_eq!(all[1].author.username, "alice");
    }

    #[tokio::test]
    async fn get_all_is_capped_and_non_increasing() {
        let svc = test_service(vec![profile("user_a1", Some("alice"), None)]).await;
        let caller = identity("user_a1");

        for i in 0..105 {
            svc.create(
                Some(&caller),
                &CreateFaq {
                    question: format!("question {i}"),
                    answer: "a".into(),
                },
            )
            .await
            .unwrap();
        }

        let all = svc.get_all().await.unwrap();
        assert_eq!(all.len(), 100);
        for pair in all.windows(2) {
            assert!(pair[0].entry.created_at >= pair[1].entry.created_at);
        }
    }

    #[tokio::test]
    async fn get_all_fails_when_an_author_is_unresolvable() {
        // Directory knows nobody.
        let svc = test_service(vec![]).await;
        let entry = svc
            .create(
                Some(&identity("user_ghost")),
                &CreateFaq {
                    question: "q".into(),
                    answer: "a".into(),
                },
            )
            .await
            .unwrap();

        let err = svc.get_all().await.unwrap_err();
        assert_eq!(err.kind(), "integrity");
        let msg = err.to_string();
        assert!(msg.contains(&entry.id));
        assert!(msg.contains("user_ghost"));
    }

    #[tokio::test]
    async fn delete_removes_exactly_the_target() {
        let svc = test_service(vec![profile("user_a1", Some("alice"), None)]).await;
        let caller = identity("user_a1");

        let keep = svc
            .create(
                Some(&caller),
                &CreateFaq {
                    question: "keep".into(),
                    answer: "a".into(),
                },
            )
            .await
            .unwrap();
        let gone = svc
            .create(
                Some(&caller),
                &CreateFaq {
                    question: "gone".into(),
                    answer: "a".into(),
                },
            )
            .await
            .unwrap();

        svc.delete(Some(&caller), &gone.id).await.unwrap();

        assert!(svc.get_by_id(&gone.id).await.unwrap().is_none());
        assert!(svc.get_by_id(&keep.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn delete_missing_id_is_not_found() {
        let svc = test_service(vec![]).await;
        let err = svc
            .delete(Some(&identity("user_a1")), "faq-nonexistent")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "not_found");
    }

    #[tokio::test]
    async fn delete_without_identity_is_rejected() {
        let svc = test_service(vec![profile("user_a1", Some("alice"), None)]).await;
        let entry = svc
            .create(
                Some(&identity("user_a1")),
                &CreateFaq {
                    question: "q".into(),
                    answer: "a".into(),
                },
            )
            .await
            .unwrap();

        let err = svc.delete(None, &entry.id).await.unwrap_err();
        assert_eq!(err.kind(), "unauthorized");
        assert!(svc.get_by_id(&entry.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn any_authenticated_caller_may_delete_by_default() {
        let svc = test_service(vec![profile("user_a1", Some("alice"), None)]).await;
        let entry = svc
            .create(
                Some(&identity("user_a1")),
                &CreateFaq {
                    question: "q".into(),
                    answer: "a".into(),
                },
            )
            .await
            .unwrap();

        // A different authenticated user — allowed under the default policy.
        svc.delete(Some(&identity("user_other")), &entry.id)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn author_only_policy_blocks_non_authors() {
        let svc = test_service(vec![profile("user_a1", Some("alice"), None)])
            .await
            .with_delete_policy(DeletePolicy::AuthorOnly);
        let entry = svc
            .create(
                Some(&identity("user_a1")),
                &CreateFaq {
                    question: "q".into(),
                    answer: "a".into(),
                },
            )
            .await
            .unwrap();

        let err = svc
            .delete(Some(&identity("user_other")), &entry.id)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "forbidden");

        svc.delete(Some(&identity("user_a1")), &entry.id)
            .await
            .unwrap();
    }
}
