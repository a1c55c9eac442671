//! Entry repository — insert, point lookup, ordered listing, delete.

use chrono::Utc;

use faq_core::entities::FaqEntry;
use faq_core::ids::PREFIX_ENTRY;

use crate::FaqStore;
use crate::error::StoreError;
use crate::helpers::parse_datetime;

fn row_to_entry(row: &libsql::Row) -> Result<FaqEntry, StoreError> {
    Ok(FaqEntry {
        id: row.get::<String>(0)?,
        question: row.get::<String>(1)?,
        answer: row.get::<String>(2)?,
        author_id: row.get::<String>(3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl FaqStore {
    /// Insert a new entry with a generated id and timestamp.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if id generation or the insert fails.
    pub async fn insert_entry(
        &self,
        question: &str,
        answer: &str,
        author_id: &str,
    ) -> Result<FaqEntry, StoreError> {
        let now = Utc::now();
        let id = self.generate_id(PREFIX_ENTRY).await?;

        self.conn()
            .execute(
                "INSERT INTO faq_entries (id, question, answer, author_id, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    id.as_str(),
                    question,
                    answer,
                    author_id,
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(FaqEntry {
            id,
            question: question.to_string(),
            answer: answer.to_string(),
            author_id: author_id.to_string(),
            created_at: now,
        })
    }

    /// Look up a single entry by id. Absence is `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails or a row cannot be parsed.
    pub async fn find_unique(&self, id: &str) -> Result<Option<FaqEntry>, StoreError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT id, question, answer, author_id, created_at
                 FROM faq_entries WHERE id = ?1",
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_entry(&row)?)),
            None => Ok(None),
        }
    }

    /// List up to `limit` entries, newest first.
    ///
    /// The `rowid DESC` tiebreak gives a stable total order when two
    /// entries share a `created_at`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails or a row cannot be parsed.
    pub async fn find_many(&self, limit: u32) -> Result<Vec<FaqEntry>, StoreError> {
        let sql = format!(
            "SELECT id, question, answer, author_id, created_at
             FROM faq_entries
             ORDER BY created_at DESC, rowid DESC
             LIMIT {limit}"
        );
        let mut rows = self.conn().query(&sql, ()).await?;

        let mut entries = Vec::new();
        while let Some(row) = rows.next().await? {
            entries.push(row_to_entry(&row)?);
        }
        Ok(entries)
    }

    /// Delete an entry by id. Returns the number of rows removed
    /// (0 when the id does not exist).
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the delete fails.
    pub async fn delete_entry(&self, id: &str) -> Result<u64, StoreError> {
        let affected = self
            .conn()
            .execute("DELETE FROM faq_entries WHERE id = ?1", [id])
            .await?;
        Ok(affected)
    }
}
