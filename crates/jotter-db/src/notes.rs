//! Note repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use jotter_core::{
    collect_distinct, defaults, Error, Note, NoteDraft, NoteFilter, NoteRepository, NoteSummary,
    Result,
};

use crate::escape_like;

/// SQLite implementation of NoteRepository.
#[derive(Clone)]
pub struct SqliteNoteRepository {
    pool: SqlitePool,
}

impl SqliteNoteRepository {
    /// Create a new SqliteNoteRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn map_row_to_note(row: &SqliteRow) -> Note {
    Note {
        id: row.get("id"),
        title: row.get("title"),
        content: row.get("content"),
        tags: row.get("tags"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

#[async_trait]
impl NoteRepository for SqliteNoteRepository {
    async fn list(&self, filter: &NoteFilter) -> Result<Vec<NoteSummary>> {
        let mut sql = format!(
            "SELECT id, title, substr(content, 1, {}) AS preview, updated_at \
             FROM notes WHERE 1=1 ",
            defaults::PREVIEW_CHARS
        );
        if filter.query.is_some() {
            sql.push_str("AND title LIKE ? ESCAPE '\\' ");
        }
        if filter.tag.is_some() {
            sql.push_str("AND tags LIKE ? ESCAPE '\\' ");
        }
        sql.push_str("ORDER BY updated_at DESC");

        let mut q = sqlx::query(&sql);
        if let Some(query) = &filter.query {
            q = q.bind(format!("%{}%", escape_like(query)));
        }
        if let Some(tag) = &filter.tag {
            q = q.bind(format!("%{}%", escape_like(tag)));
        }

        let rows = q.fetch_all(&self.pool).await.map_err(Error::Database)?;

        debug!(
            subsystem = "db",
            component = "notes",
            op = "list",
            result_count = rows.len(),
            "Listed notes"
        );

        Ok(rows
            .iter()
            .map(|row| NoteSummary {
                id: row.get("id"),
                title: row.get("title"),
                preview: row.get("preview"),
                updated_at: row.get("updated_at"),
            })
            .collect())
    }

    async fn fetch(&self, id: i64) -> Result<Note> {
        let row = sqlx::query(
            "SELECT id, title, content, tags, created_at, updated_at FROM notes WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?;

        row.map(|r| map_row_to_note(&r))
            .ok_or(Error::NoteNotFound(id))
    }

    async fn overwrite_first(&self, draft: NoteDraft) -> Result<Note> {
        let draft = draft.normalize();
        let now = Utc::now();

        let mut tx = self.pool.begin().await.map_err(Error::Database)?;

        // Single-note rule: the target row is the first by ascending
        // id, never the id carried by the draft.
        let first: Option<(i64, DateTime<Utc>)> =
            sqlx::query_as("SELECT id, created_at FROM notes ORDER BY id ASC LIMIT 1")
                .fetch_optional(&mut *tx)
                .await
                .map_err(Error::Database)?;

        let note = match first {
            Some((id, created_at)) => {
                sqlx::query(
                    "UPDATE notes SET title = ?, content = ?, tags = ?, updated_at = ? WHERE id = ?",
                )
                .bind(&draft.title)
                .bind(&draft.content)
                .bind(&draft.tags)
                .bind(now)
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(Error::Database)?;

                Note {
                    id,
                    title: draft.title,
                    content: draft.content,
                    tags: draft.tags,
                    created_at,
                    updated_at: now,
                }
            }
            None => {
                let result = sqlx::query(
                    "INSERT INTO notes (title, content, tags, created_at, updated_at) \
                     VALUES (?, ?, ?, ?, ?)",
                )
                .bind(&draft.title)
                .bind(&draft.content)
                .bind(&draft.tags)
                .bind(now)
                .bind(now)
                .execute(&mut *tx)
                .await
                .map_err(Error::Database)?;

                Note {
                    id: result.last_insert_rowid(),
                    title: draft.title,
                    content: draft.content,
                    tags: draft.tags,
                    created_at: now,
                    updated_at: now,
                }
            }
        };

        tx.commit().await.map_err(Error::Database)?;

        debug!(
            subsystem = "db",
            component = "notes",
            op = "overwrite_first",
            note_id = note.id,
            "Note saved"
        );
        Ok(note)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::NoteNotFound(id));
        }

        debug!(
            subsystem = "db",
            component = "notes",
            op = "delete",
            note_id = id,
            "Note deleted"
        );
        Ok(())
    }

    async fn exists(&self, id: i64) -> Result<bool> {
        let found: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM notes WHERE id = ?)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(found != 0)
    }

    async fn distinct_tags(&self) -> Result<Vec<String>> {
        let fields: Vec<String> =
            sqlx::query_scalar("SELECT tags FROM notes WHERE tags IS NOT NULL AND tags != ''")
                .fetch_all(&self.pool)
                .await
                .map_err(Error::Database)?;

        Ok(collect_distinct(fields.iter().map(String::as_str)))
    }
}
