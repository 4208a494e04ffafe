//! Handler operations that return display-ready views for the Tracker.

use super::Tracker;
use crate::{
    display::{
        CategoryList, CreateResult, DDaySummaries, Dashboard, DeleteResult, MilestoneTimeline,
        UpdateResult,
    },
    error::{Result, TrackerError},
    models::{DDay, DDayDetail, DDaySummary, pick_hero},
    params::{
        CreateDDay, DeleteAll, DeleteDDay, Id, ImportDDays, ListDDays, UpdateDDay,
        require_confirmation,
    },
    transfer::{ImportSummary, export_json, parse_import},
};

impl Tracker {
    /// Computes the countdown of `dday` against the tracker's clock.
    pub fn summarize(&self, dday: DDay) -> Result<DDaySummary> {
        DDaySummary::new(dday, self.today(), self.locale)
    }

    fn summarize_all(&self, ddays: Vec<DDay>) -> Result<Vec<DDaySummary>> {
        let today = self.today();
        ddays
            .into_iter()
            .map(|dday| DDaySummary::new(dday, today, self.locale))
            .collect()
    }

    /// Handle listing D-Days with category filtering and sorting.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use daycount_core::{params::ListDDays, TrackerBuilder};
    /// # async {
    /// let tracker = TrackerBuilder::new().build().await?;
    /// let params = ListDDays {
    ///     category: Some("exam".to_string()),
    ///     sort: Some("nearest".to_string()),
    /// };
    /// let summaries = tracker.list_summaries(&params).await?;
    /// # Result::<(), daycount_core::TrackerError>::Ok(())
    /// # };
    /// ```
    pub async fn list_summaries(&self, params: &ListDDays) -> Result<DDaySummaries> {
        let (filter, sort) = params.validate()?;
        let ddays = self.list_ddays(Some(filter)).await?;
        let mut summaries = self.summarize_all(ddays)?;
        sort.sort(&mut summaries);
        Ok(DDaySummaries(summaries))
    }

    /// The entry to feature above the list, chosen among all entries
    /// regardless of category.
    pub async fn hero(&self) -> Result<Option<DDaySummary>> {
        let ddays = self.list_ddays(None).await?;
        let summaries = self.summarize_all(ddays)?;
        Ok(pick_hero(&summaries).cloned())
    }

    /// Handle the home view: the hero followed by the filtered, sorted list.
    pub async fn dashboard(&self, params: &ListDDays) -> Result<Dashboard> {
        let (filter, sort) = params.validate()?;
        let all = self.summarize_all(self.list_ddays(None).await?)?;
        let hero = pick_hero(&all).cloned();

        let mut entries: Vec<DDaySummary> = all
            .into_iter()
            .filter(|s| filter.category.map_or(true, |c| s.dday.category == c))
            .collect();
        sort.sort(&mut entries);

        Ok(Dashboard {
            hero,
            entries: DDaySummaries(entries),
            filter,
            sort,
        })
    }

    /// Handle showing a single D-Day with its milestone timeline.
    ///
    /// # Errors
    ///
    /// * `TrackerError::DDayNotFound` - no D-Day has the given ID
    pub async fn show_dday(&self, params: &Id) -> Result<DDayDetail> {
        let dday = self.require_dday(params).await?;
        DDayDetail::new(
            dday,
            self.today(),
            &self.clock.time_zone(),
            self.locale,
        )
    }

    /// Handle showing only the milestone timeline of a D-Day.
    pub async fn milestones(&self, params: &Id) -> Result<MilestoneTimeline> {
        let detail = self.show_dday(params).await?;
        Ok(MilestoneTimeline {
            title: detail.summary.dday.title,
            milestones: detail.milestones,
        })
    }

    /// Handle creating a new D-Day.
    pub async fn create_dday_result(&self, params: &CreateDDay) -> Result<CreateResult<DDaySummary>> {
        let dday = self.create_dday(params).await?;
        Ok(CreateResult::new(self.summarize(dday)?))
    }

    /// Handle updating a D-Day, reporting which fields changed.
    pub async fn update_dday_result(
        &self,
        params: &UpdateDDay,
    ) -> Result<UpdateResult<DDaySummary>> {
        let (dday, changes) = self.update_dday(params).await?;
        Ok(UpdateResult::with_changes(self.summarize(dday)?, changes))
    }

    /// Handle deleting a D-Day. Requires `confirmed`.
    ///
    /// # Errors
    ///
    /// * `TrackerError::InvalidInput` - `confirmed` is false
    /// * `TrackerError::DDayNotFound` - no D-Day has the given ID
    pub async fn delete_dday(&self, params: &DeleteDDay) -> Result<DeleteResult<DDay>> {
        require_confirmation(params.confirmed, "delete a D-Day")?;

        let id = Id {
            id: params.id.clone(),
        };
        let removed = self
            .delete_dday_by_id(&id)
            .await?
            .ok_or_else(|| TrackerError::DDayNotFound {
                id: params.id.clone(),
            })?;

        log::debug!("Deleted D-Day {}", removed.id);
        Ok(DeleteResult::new(removed))
    }

    /// Handle deleting every D-Day. Requires `confirmed`.
    pub async fn delete_all_ddays(&self, params: &DeleteAll) -> Result<usize> {
        require_confirmation(params.confirmed, "delete all D-Days")?;
        let removed = self.clear_ddays().await?;
        log::debug!("Deleted all {removed} D-Days");
        Ok(removed)
    }

    /// Serializes every D-Day into an export envelope.
    pub async fn export_data(&self) -> Result<String> {
        let ddays = self.list_ddays(None).await?;
        export_json(ddays, self.clock.now())
    }

    /// Replaces every D-Day with the valid entries of an import payload.
    ///
    /// # Errors
    ///
    /// * `TrackerError::Import` - the payload could not be understood; the
    ///   stored entries are left untouched
    pub async fn import_data(&self, params: &ImportDDays) -> Result<ImportSummary> {
        let batch = parse_import(&params.json)?;
        let skipped = batch.skipped;
        if skipped > 0 {
            log::warn!("Import dropped {skipped} invalid entries");
        }

        let imported = self.replace_ddays(batch.ddays).await?;
        log::debug!("Imported {imported} D-Days");
        Ok(ImportSummary { imported, skipped })
    }

    /// Every category with its labels and suggested emoji.
    pub fn categories(&self) -> CategoryList {
        CategoryList::new(self.locale)
    }

    async fn require_dday(&self, params: &Id) -> Result<DDay> {
        self.get_dday(params)
            .await?
            .ok_or_else(|| TrackerError::DDayNotFound {
                id: params.id.clone(),
            })
    }
}
