//! MCP server implementation for Daycount
//!
//! Exposes the tracker to AI assistants over the Model Context Protocol on
//! stdio. Every tool returns the same markdown the terminal renders.

use std::sync::Arc;

use anyhow::Result;
use daycount_core::Tracker;
use log::{debug, error, info};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use tokio::{
    signal::unix::{SignalKind, signal},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;

pub use handlers::{
    CreateDDay, DeleteAll, DeleteDDay, ExportDDays, Id, ImportDDays, ListDDays, McpResult,
    UpdateDDay,
};

/// MCP server for Daycount
#[derive(Clone)]
pub struct DaycountMcpServer {
    tracker: Arc<Mutex<Tracker>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl DaycountMcpServer {
    pub fn new(tracker: Tracker) -> Self {
        Self {
            tracker: Arc::new(Mutex::new(tracker)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.tracker.clone())
    }

    #[tool(
        name = "create_dday",
        description = "Create a new D-Day. Requires a title (1 to 30 characters), target_date in YYYY-MM-DD form, and category (anniversary, exam, travel, birthday or custom). emoji is optional and defaults to the category emoji. Returns the new ID and its countdown."
    )]
    async fn create_dday(&self, params: Parameters<CreateDDay>) -> McpResult {
        self.handlers().create_dday(params).await
    }

    #[tool(
        name = "list_ddays",
        description = "List D-Days with their countdown (D-N before the date, D-Day on it, D+N after). The nearest upcoming D-Day is featured first. Optional category narrows the list (use 'all' or omit for every category); optional sort is nearest (default), farthest, name or created."
    )]
    async fn list_ddays(&self, params: Parameters<ListDDays>) -> McpResult {
        self.handlers().list_ddays(params).await
    }

    #[tool(
        name = "show_dday",
        description = "Show one D-Day by ID with its countdown, localized date, creation date and the milestone timeline (D-100, D-50, D-30, D-10, D-7, D-3, D-1, D-Day) marking passed and current milestones."
    )]
    async fn show_dday(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_dday(params).await
    }

    #[tool(
        name = "update_dday",
        description = "Edit a D-Day by ID. Supply any of title, target_date (YYYY-MM-DD), category and emoji; omitted fields stay as they are. An empty emoji resets it to the category default. Reports which fields changed."
    )]
    async fn update_dday(&self, params: Parameters<UpdateDDay>) -> McpResult {
        self.handlers().update_dday(params).await
    }

    #[tool(
        name = "delete_dday",
        description = "Permanently delete a D-Day by ID. Requires confirmed=true. This operation cannot be undone."
    )]
    async fn delete_dday(&self, params: Parameters<DeleteDDay>) -> McpResult {
        self.handlers().delete_dday(params).await
    }

    #[tool(
        name = "delete_all_ddays",
        description = "Permanently delete every D-Day. Requires confirmed=true. Consider export_ddays first; this operation cannot be undone."
    )]
    async fn delete_all_ddays(&self, params: Parameters<DeleteAll>) -> McpResult {
        self.handlers().delete_all_ddays(params).await
    }

    #[tool(
        name = "export_ddays",
        description = "Export every D-Day as pretty-printed JSON: {\"version\": \"1.0\", \"exportedAt\": ..., \"data\": [...]}. The output can be passed back to import_ddays."
    )]
    async fn export_ddays(&self, params: Parameters<ExportDDays>) -> McpResult {
        self.handlers().export_ddays(params).await
    }

    #[tool(
        name = "import_ddays",
        description = "Replace every D-Day with the entries of a JSON export (an envelope with a data array, or a bare array). Entries that are malformed are skipped and counted. Unparseable input leaves existing D-Days untouched."
    )]
    async fn import_ddays(&self, params: Parameters<ImportDDays>) -> McpResult {
        self.handlers().import_ddays(params).await
    }

    #[tool(
        name = "list_categories",
        description = "List the five D-Day categories with their labels, default emoji and suggested emoji."
    )]
    async fn list_categories(&self) -> McpResult {
        self.handlers().list_categories().await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for DaycountMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "daycount".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::default()
            },
            instructions: Some(r#"Daycount tracks countdowns to dates that matter.

## Core Concepts
- **D-Day**: a titled target date with a category and emoji
- **Countdown**: whole calendar days between today and the target. `D-30` is thirty days ahead, `D-Day` is today, `D+5` was five days ago
- **Milestones**: fixed checkpoints 100, 50, 30, 10, 7, 3 and 1 day(s) before the target, plus the day itself

## Workflow
1. Add dates with `create_dday`
2. Review them with `list_ddays`; the nearest upcoming one is featured first
3. Inspect one with `show_dday` to see its milestone timeline
4. Back up with `export_ddays` and restore with `import_ddays`

## Tool Categories
- **Entries**: create_dday, list_ddays, show_dday, update_dday, delete_dday, delete_all_ddays
- **Data**: export_ddays, import_ddays
- **Reference**: list_categories"#.to_string()),
            ..Default::default()
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: DaycountMcpServer) -> Result<()> {
    use rmcp::{ServiceExt, transport::stdio};

    info!("Starting Daycount MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(reason) => info!("MCP server stopped: {reason:?}"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use daycount_core::{TrackerBuilder, dates::FixedClock};
    use jiff::civil::date;
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn test_server_registers_every_tool() {
        let temp_dir = TempDir::new().unwrap();
        let tracker = TrackerBuilder::new()
            .with_database_path(Some(temp_dir.path().join("server.db")))
            .with_clock(FixedClock::new(date(2025, 6, 15)))
            .build()
            .await
            .unwrap();
        let server = DaycountMcpServer::new(tracker);

        let mut names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        names.sort();
        assert_eq!(
            names,
            [
                "create_dday",
                "delete_all_ddays",
                "delete_dday",
                "export_ddays",
                "import_ddays",
                "list_categories",
                "list_ddays",
                "show_dday",
                "update_dday",
            ]
        );

        let info = server.get_info();
        assert_eq!(info.server_info.name, "daycount");
        assert!(info.capabilities.tools.is_some());
    }
}
