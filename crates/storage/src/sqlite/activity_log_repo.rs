use coleta_core::model::ActivityRecord;

use super::{SqliteRepository, mapping::map_record_row};
use crate::repository::{ActivityLogRepository, PersistenceError};

fn conn<E: core::fmt::Display>(e: E) -> PersistenceError {
    PersistenceError::Connection(e.to_string())
}

#[async_trait::async_trait]
impl ActivityLogRepository for SqliteRepository {
    async fn load_history(&self) -> Result<Vec<ActivityRecord>, PersistenceError> {
        let rows = sqlx::query(
            r"
                SELECT collection_date, subject, source_type, pages, aluno, turma, status
                FROM activity_log
                ORDER BY id ASC
            ",
        )
        .fetch_all(self.pool())
        .await
        .map_err(conn)?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            out.push(map_record_row(&row)?);
        }
        Ok(out)
    }

    async fn append(&self, rows: &[ActivityRecord]) -> Result<(), PersistenceError> {
        // Same observable contract as the remote sheet: read everything,
        // concatenate, write the whole table back. The transaction only
        // guards against a half-written local file; it does not close the
        // cross-process read-then-write race.
        let existing = self.load_history().await?;

        let mut tx = self.pool().begin().await.map_err(conn)?;

        sqlx::query("DELETE FROM activity_log")
            .execute(&mut *tx)
            .await
            .map_err(conn)?;

        for record in existing.iter().chain(rows) {
            sqlx::query(
                r"
                    INSERT INTO activity_log (
                        collection_date, subject, source_type, pages, aluno, turma, status
                    )
                    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                ",
            )
            .bind(record.collection_date)
            .bind(record.subject.as_str())
            .bind(record.source_type.as_str())
            .bind(&record.pages)
            .bind(&record.student_name)
            .bind(record.class_group.as_str())
            .bind(record.status.as_str())
            .execute(&mut *tx)
            .await
            .map_err(conn)?;
        }

        tx.commit().await.map_err(conn)?;
        tracing::debug!(appended = rows.len(), total = existing.len() + rows.len(), "activity log rewritten");
        Ok(())
    }
}
