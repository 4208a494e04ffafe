//! Command handlers for the terminal interface
//!
//! `Cli` owns a [`Tracker`] and a [`TerminalRenderer`]; each handler turns
//! parsed arguments into core params, runs the tracker operation and renders
//! the display type it returns.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use daycount_core::{
    OperationStatus, Tracker,
    params::{CreateDDay, DeleteAll, DeleteDDay, Id, ImportDDays, ListDDays, UpdateDDay},
};
use log::debug;

use crate::{
    args::{
        AddArgs, ClearArgs, Commands, DeleteArgs, EditArgs, ExportArgs, ImportArgs, ListArgs,
        ShowArgs,
    },
    renderer::TerminalRenderer,
};

pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    /// Dispatch a terminal command. `Serve` is handled by the caller.
    pub async fn handle_command(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Add(args) => self.add(args).await,
            Commands::List(args) => self.list(args).await,
            Commands::Show(args) => self.show(args).await,
            Commands::Milestones(args) => self.milestones(args).await,
            Commands::Edit(args) => self.edit(args).await,
            Commands::Delete(args) => self.delete(args).await,
            Commands::Clear(args) => self.clear(args).await,
            Commands::Export(args) => self.export(args).await,
            Commands::Import(args) => self.import(&args).await,
            Commands::Categories => self.categories(),
            Commands::Serve => anyhow::bail!("serve is not a terminal command"),
        }
    }

    /// The hero entry followed by every D-Day
    pub async fn dashboard(&self) -> Result<()> {
        let dashboard = self
            .tracker
            .dashboard(&ListDDays::default())
            .await
            .context("Failed to load D-Days")?;
        self.renderer.render(&dashboard.to_string())
    }

    async fn add(&self, args: AddArgs) -> Result<()> {
        let params: CreateDDay = args.into();
        debug!("add: {params:?}");
        let result = self
            .tracker
            .create_dday_result(&params)
            .await
            .context("Failed to add D-Day")?;
        self.renderer.render(&result.to_string())
    }

    async fn list(&self, args: ListArgs) -> Result<()> {
        let params: ListDDays = args.into();
        let dashboard = self
            .tracker
            .dashboard(&params)
            .await
            .context("Failed to list D-Days")?;
        self.renderer.render(&dashboard.to_string())
    }

    async fn show(&self, args: ShowArgs) -> Result<()> {
        let params: Id = args.into();
        let detail = self
            .tracker
            .show_dday(&params)
            .await
            .with_context(|| format!("Failed to show D-Day {}", params.id))?;
        self.renderer.render(&detail.to_string())
    }

    async fn milestones(&self, args: ShowArgs) -> Result<()> {
        let params: Id = args.into();
        let timeline = self
            .tracker
            .milestones(&params)
            .await
            .with_context(|| format!("Failed to load milestones of D-Day {}", params.id))?;
        self.renderer.render(&timeline.to_string())
    }

    async fn edit(&self, args: EditArgs) -> Result<()> {
        let params: UpdateDDay = args.into();
        debug!("edit: {params:?}");
        let result = self
            .tracker
            .update_dday_result(&params)
            .await
            .with_context(|| format!("Failed to edit D-Day {}", params.id))?;
        self.renderer.render(&result.to_string())
    }

    async fn delete(&self, args: DeleteArgs) -> Result<()> {
        let params: DeleteDDay = args.into();
        let result = self
            .tracker
            .delete_dday(&params)
            .await
            .with_context(|| format!("Failed to delete D-Day {}", params.id))?;
        self.renderer.render(&result.to_string())
    }

    async fn clear(&self, args: ClearArgs) -> Result<()> {
        let params: DeleteAll = args.into();
        let removed = self
            .tracker
            .delete_all_ddays(&params)
            .await
            .context("Failed to delete D-Days")?;
        let status = OperationStatus::success(format!("Deleted {removed} D-Days"));
        self.renderer.render(&status.to_string())
    }

    async fn export(&self, args: ExportArgs) -> Result<()> {
        let json = self
            .tracker
            .export_data()
            .await
            .context("Failed to export D-Days")?;

        match args.output {
            Some(path) => {
                write_export(&path, &json)?;
                let status =
                    OperationStatus::success(format!("Exported D-Days to {}", path.display()));
                self.renderer.render(&status.to_string())
            }
            // Raw JSON so the output can be redirected into a file
            None => {
                println!("{json}");
                Ok(())
            }
        }
    }

    async fn import(&self, args: &ImportArgs) -> Result<()> {
        let json = fs::read_to_string(&args.file)
            .with_context(|| format!("Failed to read {}", args.file.display()))?;
        let summary = self
            .tracker
            .import_data(&ImportDDays { json })
            .await
            .with_context(|| format!("Failed to import {}", args.file.display()))?;
        let status = OperationStatus::success(summary.to_string().trim_end());
        self.renderer.render(&status.to_string())
    }

    fn categories(&self) -> Result<()> {
        self.renderer.render(&self.tracker.categories().to_string())
    }
}

fn write_export(path: &Path, json: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, format!("{json}\n"))
        .with_context(|| format!("Failed to write {}", path.display()))
}
