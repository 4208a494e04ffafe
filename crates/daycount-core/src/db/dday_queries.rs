//! D-Day CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{OptionalExtension, params, types::Type};

use crate::{
    dates::{parse_local_date, to_date_string},
    error::{DatabaseResultExt, Result, TrackerError},
    models::{Category, DDay, DDayFilter, NewDDay, UpdateDDayRequest},
};

const DDAY_COLUMNS: &str = "id, title, target_date, category, emoji, created_at, updated_at";
const INSERT_DDAY_SQL: &str = "INSERT INTO ddays (id, title, target_date, category, emoji, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const UPDATE_DDAY_SQL: &str = "UPDATE ddays SET title = ?1, target_date = ?2, category = ?3, emoji = ?4, updated_at = ?5 WHERE id = ?6";
const DELETE_DDAY_SQL: &str = "DELETE FROM ddays WHERE id = ?1";
const DELETE_ALL_DDAYS_SQL: &str = "DELETE FROM ddays";
const COUNT_DDAYS_SQL: &str = "SELECT COUNT(*) FROM ddays";

impl super::Database {
    /// Helper function to construct a DDay from a database row
    fn build_dday_from_row(row: &rusqlite::Row) -> rusqlite::Result<DDay> {
        let target_str: String = row.get(2)?;
        let target_date = parse_local_date(&target_str).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e))
        })?;

        let category_str: String = row.get(3)?;
        let category = category_str.parse::<Category>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                3,
                Type::Text,
                format!("Invalid category: {category_str}").into(),
            )
        })?;

        Ok(DDay {
            id: row.get(0)?,
            title: row.get(1)?,
            target_date,
            category,
            emoji: row.get(4)?,
            created_at: row.get::<_, String>(5)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e))
            })?,
            updated_at: row.get::<_, String>(6)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e))
            })?,
        })
    }

    fn insert_row(conn: &rusqlite::Connection, dday: &DDay) -> rusqlite::Result<usize> {
        conn.execute(
            INSERT_DDAY_SQL,
            params![
                dday.id,
                dday.title,
                to_date_string(dday.target_date),
                dday.category.as_str(),
                dday.emoji,
                dday.created_at.to_string(),
                dday.updated_at.to_string(),
            ],
        )
    }

    /// Stores a new D-Day under a freshly generated UUID, stamped with `now`.
    pub fn insert_dday(&mut self, new_dday: &NewDDay, now: Timestamp) -> Result<DDay> {
        let dday = DDay {
            id: uuid::Uuid::new_v4().to_string(),
            title: new_dday.title.clone(),
            target_date: new_dday.target_date,
            category: new_dday.category,
            emoji: new_dday.emoji.clone(),
            created_at: now,
            updated_at: now,
        };

        Self::insert_row(&self.connection, &dday).db_context("Failed to insert D-Day")?;

        Ok(dday)
    }

    /// Retrieves a D-Day by its ID.
    pub fn get_dday(&self, id: &str) -> Result<Option<DDay>> {
        let sql = format!("SELECT {DDAY_COLUMNS} FROM ddays WHERE id = ?1");
        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare query")?;

        stmt.query_row(params![id], Self::build_dday_from_row)
            .optional()
            .db_context("Failed to query D-Day")
    }

    /// Lists D-Days in storage order.
    ///
    /// Rows that no longer decode (an unknown category or a malformed date
    /// written by another tool) are skipped with a warning instead of
    /// failing the whole listing.
    pub fn list_ddays(&self, filter: Option<&DDayFilter>) -> Result<Vec<DDay>> {
        let mut query = format!("SELECT {DDAY_COLUMNS} FROM ddays");
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(category) = filter.and_then(|f| f.category) {
            query.push_str(" WHERE category = ?");
            params_vec.push(Box::new(category.as_str()));
        }

        query.push_str(" ORDER BY seq");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let rows = stmt
            .query_map(&params_refs[..], Self::build_dday_from_row)
            .db_context("Failed to query D-Days")?;

        let mut ddays = Vec::new();
        for row in rows {
            match row {
                Ok(dday) => ddays.push(dday),
                Err(rusqlite::Error::FromSqlConversionFailure(column, _, e)) => {
                    log::warn!("Skipping unreadable D-Day row (column {column}): {e}");
                }
                Err(e) => {
                    return Err(TrackerError::database("Failed to read D-Day row").with_source(e));
                }
            }
        }

        Ok(ddays)
    }

    /// Number of stored D-Days.
    pub fn count_ddays(&self) -> Result<usize> {
        self.connection
            .query_row(COUNT_DDAYS_SQL, [], |row| row.get::<_, i64>(0))
            .map(|count| count as usize)
            .db_context("Failed to count D-Days")
    }

    /// Applies `request` to the D-Day with `id`.
    ///
    /// Returns `None` when no such D-Day exists, otherwise the updated record
    /// and the names of the fields that changed. `updated_at` is only moved
    /// to `now` when something changed.
    pub fn update_dday(
        &mut self,
        id: &str,
        request: &UpdateDDayRequest,
        now: Timestamp,
    ) -> Result<Option<(DDay, Vec<String>)>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let sql = format!("SELECT {DDAY_COLUMNS} FROM ddays WHERE id = ?1");
        let current = tx
            .query_row(&sql, params![id], Self::build_dday_from_row)
            .optional()
            .db_context("Failed to query D-Day")?;

        let Some(mut dday) = current else {
            return Ok(None);
        };

        let changes = request.apply_to(&mut dday);
        if !changes.is_empty() {
            dday.updated_at = now;
            tx.execute(
                UPDATE_DDAY_SQL,
                params![
                    dday.title,
                    to_date_string(dday.target_date),
                    dday.category.as_str(),
                    dday.emoji,
                    dday.updated_at.to_string(),
                    dday.id,
                ],
            )
            .db_context("Failed to update D-Day")?;
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Some((dday, changes)))
    }

    /// Deletes a D-Day and returns what was removed.
    pub fn delete_dday(&mut self, id: &str) -> Result<Option<DDay>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let sql = format!("SELECT {DDAY_COLUMNS} FROM ddays WHERE id = ?1");
        let existing = tx
            .query_row(&sql, params![id], Self::build_dday_from_row)
            .optional()
            .db_context("Failed to query D-Day")?;

        if existing.is_some() {
            tx.execute(DELETE_DDAY_SQL, params![id])
                .db_context("Failed to delete D-Day")?;
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(existing)
    }

    /// Deletes every D-Day and returns how many were removed.
    pub fn delete_all_ddays(&mut self) -> Result<usize> {
        self.connection
            .execute(DELETE_ALL_DDAYS_SQL, [])
            .db_context("Failed to delete D-Days")
    }

    /// Replaces the whole collection with `ddays`, keeping their ids and
    /// timestamps. Either every entry is written or nothing changes.
    pub fn replace_all_ddays(&mut self, ddays: &[DDay]) -> Result<usize> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(DELETE_ALL_DDAYS_SQL, [])
            .db_context("Failed to clear D-Days")?;

        for dday in ddays {
            Self::insert_row(&tx, dday).db_context("Failed to insert imported D-Day")?;
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(ddays.len())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use crate::{db::Database, models::NewDDay};

    use super::*;

    fn new_dday(title: &str) -> NewDDay {
        NewDDay {
            title: title.to_string(),
            target_date: date(2025, 6, 15),
            category: Category::Exam,
            emoji: "📚".to_string(),
        }
    }

    #[test]
    fn test_list_skips_undecodable_rows() {
        let mut db = Database::in_memory().unwrap();
        db.insert_dday(&new_dday("good"), Timestamp::UNIX_EPOCH).unwrap();
        db.connection
            .execute(
                INSERT_DDAY_SQL,
                params![
                    "broken",
                    "bad date",
                    "2025-13-40",
                    "custom",
                    "📅",
                    "2025-01-01T00:00:00Z",
                    "2025-01-01T00:00:00Z"
                ],
            )
            .unwrap();

        let listed = db.list_ddays(None).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "good");
        assert_eq!(db.count_ddays().unwrap(), 2);
    }

    #[test]
    fn test_update_without_changes_keeps_timestamp() {
        let mut db = Database::in_memory().unwrap();
        let dday = db
            .insert_dday(&new_dday("same"), Timestamp::UNIX_EPOCH)
            .unwrap();

        let request = UpdateDDayRequest {
            title: Some("same".to_string()),
            ..Default::default()
        };
        let (updated, changes) = db
            .update_dday(&dday.id, &request, Timestamp::now())
            .unwrap()
            .unwrap();
        assert!(changes.is_empty());
        assert_eq!(updated.updated_at, dday.updated_at);
    }

    #[test]
    fn test_schema_version_recorded() {
        let db = Database::in_memory().unwrap();
        assert_eq!(
            db.schema_version().unwrap(),
            crate::db::migrations::SCHEMA_VERSION
        );
    }
}
