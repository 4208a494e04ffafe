//! D-Day operations for the Tracker.

use tokio::task;

use super::Tracker;
use crate::{
    db::Database,
    error::{JoinResultExt, Result, TrackerError},
    models::{DDay, DDayFilter, UpdateDDayRequest},
    params::{CreateDDay, Id, UpdateDDay},
};

impl Tracker {
    /// Validates `params` and stores a new D-Day.
    pub async fn create_dday(&self, params: &CreateDDay) -> Result<DDay> {
        let new_dday = params.validate()?;
        let db_path = self.db_path.clone();
        let now = self.clock.now();

        let dday = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.insert_dday(&new_dday, now)
        })
        .await
        .join_context()??;

        log::debug!("Created D-Day {} ({})", dday.id, dday.title);
        Ok(dday)
    }

    /// Retrieves a D-Day by its ID.
    pub async fn get_dday(&self, params: &Id) -> Result<Option<DDay>> {
        let db_path = self.db_path.clone();
        let id = params.id.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_dday(&id)
        })
        .await
        .join_context()?
    }

    /// Lists stored D-Days in storage order with optional filtering.
    pub async fn list_ddays(&self, filter: Option<DDayFilter>) -> Result<Vec<DDay>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_ddays(filter.as_ref())
        })
        .await
        .join_context()?
    }

    /// Validates and applies a partial update.
    ///
    /// Returns the updated record together with the names of the fields
    /// that changed.
    ///
    /// # Errors
    ///
    /// * `TrackerError::DDayNotFound` - no D-Day has the given ID
    /// * validation errors from [`UpdateDDay::validate`]
    pub async fn update_dday(&self, params: &UpdateDDay) -> Result<(DDay, Vec<String>)> {
        let request = UpdateDDayRequest::try_from(params.clone())?;
        let db_path = self.db_path.clone();
        let id = params.id.clone();
        let now = self.clock.now();

        let updated = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.update_dday(&id, &request, now)
        })
        .await
        .join_context()??;

        let (dday, changes) = updated.ok_or_else(|| TrackerError::DDayNotFound {
            id: params.id.clone(),
        })?;
        log::debug!("Updated D-Day {}: {:?}", dday.id, changes);
        Ok((dday, changes))
    }

    /// Permanently deletes a D-Day, returning it if it existed.
    pub async fn delete_dday_by_id(&self, params: &Id) -> Result<Option<DDay>> {
        let db_path = self.db_path.clone();
        let id = params.id.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_dday(&id)
        })
        .await
        .join_context()?
    }

    /// Removes every D-Day and returns how many were removed.
    pub async fn clear_ddays(&self) -> Result<usize> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_all_ddays()
        })
        .await
        .join_context()?
    }

    /// Replaces the whole collection with `ddays`.
    pub async fn replace_ddays(&self, ddays: Vec<DDay>) -> Result<usize> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.replace_all_ddays(&ddays)
        })
        .await
        .join_context()?
    }
}
