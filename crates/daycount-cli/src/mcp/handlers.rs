//! MCP tool handlers implementation

use std::sync::Arc;

use daycount_core::{OperationStatus, Tracker, params as core};
use log::debug;
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;

use super::errors::to_mcp_error;

/// Generic MCP wrapper for core parameter types
///
/// `#[serde(transparent)]` passes JSON straight through to the wrapped core
/// type, and the schema is the core type's own, so the core params carry no
/// rmcp-specific derives.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type CreateDDay = McpParams<core::CreateDDay>;
pub type UpdateDDay = McpParams<core::UpdateDDay>;
pub type ListDDays = McpParams<core::ListDDays>;
pub type DeleteDDay = McpParams<core::DeleteDDay>;
pub type DeleteAll = McpParams<core::DeleteAll>;
pub type ImportDDays = McpParams<core::ImportDDays>;
pub type ExportDDays = McpParams<core::ExportDDays>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text_result(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    tracker: Arc<Mutex<Tracker>>,
}

impl McpHandlers {
    pub fn new(tracker: Arc<Mutex<Tracker>>) -> Self {
        Self { tracker }
    }

    pub async fn create_dday(&self, Parameters(params): Parameters<CreateDDay>) -> McpResult {
        debug!("create_dday: {params:?}");

        let result = self
            .tracker
            .lock()
            .await
            .create_dday_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to create D-Day", &e))?;

        Ok(text_result(result.to_string()))
    }

    pub async fn list_ddays(&self, Parameters(params): Parameters<ListDDays>) -> McpResult {
        debug!("list_ddays: {params:?}");

        let dashboard = self
            .tracker
            .lock()
            .await
            .dashboard(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list D-Days", &e))?;

        Ok(text_result(dashboard.to_string()))
    }

    pub async fn show_dday(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_dday: {params:?}");

        let detail = self
            .tracker
            .lock()
            .await
            .show_dday(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to show D-Day", &e))?;

        Ok(text_result(detail.to_string()))
    }

    pub async fn update_dday(&self, Parameters(params): Parameters<UpdateDDay>) -> McpResult {
        debug!("update_dday: {params:?}");

        let result = self
            .tracker
            .lock()
            .await
            .update_dday_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to update D-Day", &e))?;

        Ok(text_result(result.to_string()))
    }

    pub async fn delete_dday(&self, Parameters(params): Parameters<DeleteDDay>) -> McpResult {
        debug!("delete_dday: {params:?}");

        let result = self
            .tracker
            .lock()
            .await
            .delete_dday(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to delete D-Day", &e))?;

        Ok(text_result(result.to_string()))
    }

    pub async fn delete_all_ddays(&self, Parameters(params): Parameters<DeleteAll>) -> McpResult {
        debug!("delete_all_ddays: {params:?}");

        let removed = self
            .tracker
            .lock()
            .await
            .delete_all_ddays(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to delete D-Days", &e))?;

        let status = OperationStatus::success(format!("Deleted {removed} D-Days"));
        Ok(text_result(status.to_string()))
    }

    pub async fn export_ddays(&self, Parameters(_params): Parameters<ExportDDays>) -> McpResult {
        debug!("export_ddays");

        let json = self
            .tracker
            .lock()
            .await
            .export_data()
            .await
            .map_err(|e| to_mcp_error("Failed to export D-Days", &e))?;

        Ok(text_result(json))
    }

    pub async fn import_ddays(&self, Parameters(params): Parameters<ImportDDays>) -> McpResult {
        debug!("import_ddays: {} bytes", params.as_ref().json.len());

        let summary = self
            .tracker
            .lock()
            .await
            .import_data(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to import D-Days", &e))?;

        let status = OperationStatus::success(summary.to_string().trim_end());
        Ok(text_result(status.to_string()))
    }

    pub async fn list_categories(&self) -> McpResult {
        let categories = self.tracker.lock().await.categories();
        Ok(text_result(categories.to_string()))
    }
}
