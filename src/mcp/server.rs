/// MCP server implementation that handles JSON-RPC communication
///
/// This module implements the actual MCP server that:
/// 1. Reads JSON-RPC requests from stdin
/// 2. Routes tool calls to the screen tools
/// 3. Sends JSON-RPC responses to stdout

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Map, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, info, warn};

use crate::domain::DomainError;
use crate::mcp::protocol::*;
use crate::tools::{self, ToolError};
use crate::{CyclePrayServer, ServerError};

/// MCP server that handles communication with the client
pub struct McpServer {
    /// The underlying app server
    app: CyclePrayServer,
    /// Whether the client has finished initialization
    initialized: bool,
}

/// JSON schema for a tool's parameter struct
fn schema_for<T: JsonSchema>() -> Value {
    match serde_json::to_value(schemars::schema_for!(T)) {
        Ok(schema) => schema,
        Err(e) => {
            warn!("Failed to render tool schema: {}", e);
            json!({"type": "object"})
        }
    }
}

fn no_arguments() -> Value {
    json!({"type": "object", "properties": {}})
}

fn tool(name: &str, description: &str, input_schema: Value) -> ToolDefinition {
    ToolDefinition {
        name: name.to_string(),
        description: description.to_string(),
        input_schema,
    }
}

/// Every tool this server exposes
pub fn tool_definitions() -> Vec<ToolDefinition> {
    vec![
        tool(
            "profile_set_name",
            "Set the name the app greets you with",
            schema_for::<tools::SetNameParams>(),
        ),
        tool(
            "calendar_view",
            "Show marked period days and the prayer banner (includes unsaved changes)",
            schema_for::<tools::CalendarViewParams>(),
        ),
        tool(
            "calendar_toggle_day",
            "Mark or unmark a period day. Changes are kept until calendar_save",
            schema_for::<tools::ToggleDayParams>(),
        ),
        tool(
            "calendar_finish_period",
            "Mark the period as finished and show the resume-prayers reminder",
            no_arguments(),
        ),
        tool("calendar_save", "Save the marked period days", no_arguments()),
        tool("cycle_summary", "Saved period days per month", no_arguments()),
        tool(
            "home_dashboard",
            "Daily greeting, verse, self-care tip, worship reminder and the missed-prayer ring",
            schema_for::<tools::HomeDashboardParams>(),
        ),
        tool(
            "favorites_list",
            "List a content screen (dhikr, duas, quran, hadith, salawat, sahabiyat, resources) with favorites first",
            schema_for::<tools::FavoritesListParams>(),
        ),
        tool(
            "favorite_toggle",
            "Pin or unpin a content item",
            schema_for::<tools::FavoriteToggleParams>(),
        ),
        tool("notebook_focus", "Open the notebook with a blank draft", no_arguments()),
        tool(
            "notebook_update",
            "Set feeling, flow or note, or flip an intention on the notebook draft",
            schema_for::<tools::NotebookUpdateParams>(),
        ),
        tool("notebook_save", "Save the notebook draft as a new entry", no_arguments()),
        tool(
            "notebook_history",
            "List saved notebook entries, newest first",
            schema_for::<tools::NotebookHistoryParams>(),
        ),
    ]
}

/// Decode tool arguments into a parameter struct
fn arguments<T: DeserializeOwned>(args: Map<String, Value>) -> Result<T, ToolError> {
    serde_json::from_value(Value::Object(args)).map_err(|e| {
        ToolError::Domain(DomainError::InvalidInput {
            message: format!("Invalid arguments: {}", e),
        })
    })
}

impl McpServer {
    /// Create a new MCP server
    pub fn new(app: CyclePrayServer) -> Self {
        Self {
            app,
            initialized: false,
        }
    }

    pub fn app(&self) -> &CyclePrayServer {
        &self.app
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Run the MCP server, handling JSON-RPC over stdin/stdout
    pub async fn run(&mut self) -> Result<(), ServerError> {
        info!("Starting MCP server, waiting for JSON-RPC requests...");

        let stdin = tokio::io::stdin();
        let mut reader = BufReader::new(stdin);
        let mut stdout = tokio::io::stdout();

        let mut line = String::new();

        loop {
            line.clear();

            match reader.read_line(&mut line).await {
                Ok(0) => {
                    info!("MCP server shutting down (stdin closed)");
                    break;
                }
                Ok(_) => {
                    if let Some(response) = self.process_line(&line) {
                        let response_str = serde_json::to_string(&response)?;

                        // Write response + newline
                        stdout.write_all(response_str.as_bytes()).await?;
                        stdout.write_all(b"\n").await?;
                        stdout.flush().await?;

                        debug!("Sent response: {}", response_str);
                    }
                }
                Err(e) => {
                    error!("Failed to read from stdin: {}", e);
                    break;
                }
            }
        }

        Ok(())
    }

    /// Process a single line of JSON-RPC input
    ///
    /// Returns `None` for blank lines and notifications.
    pub fn process_line(&mut self, line: &str) -> Option<JsonRpcResponse> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        debug!("Processing request: {}", line);

        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(req) => req,
            Err(e) => {
                error!("Failed to parse JSON-RPC request: {}", e);
                return Some(JsonRpcResponse::error(
                    json!(null),
                    error_codes::PARSE_ERROR,
                    format!("Invalid JSON: {}", e),
                    None,
                ));
            }
        };

        if request.method.starts_with("notifications/") {
            if request.method == "notifications/initialized" {
                self.initialized = true;
            }
            debug!("Notification: {}", request.method);
            return None;
        }

        Some(self.handle_request(request))
    }

    /// Handle a JSON-RPC request
    fn handle_request(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        match request.method.as_str() {
            "initialize" => self.handle_initialize(request),
            "initialized" => {
                self.initialized = true;
                JsonRpcResponse::success(request.id, json!(null))
            }
            "ping" => JsonRpcResponse::success(request.id, json!({})),
            "tools/list" => respond(request.id, ToolsListResult { tools: tool_definitions() }),
            "tools/call" => self.handle_tools_call(request),
            _ => JsonRpcResponse::error(
                request.id,
                error_codes::METHOD_NOT_FOUND,
                format!("Method '{}' not found", request.method),
                None,
            ),
        }
    }

    /// Handle MCP initialization request
    fn handle_initialize(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        match request.params.clone().map(serde_json::from_value::<InitializeParams>) {
            Some(Ok(params)) => info!(
                "MCP client connected: {} {}",
                params.client_info.name, params.client_info.version
            ),
            _ => info!("MCP client connected"),
        }

        let result = InitializeResult {
            protocol_version: MCP_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability { list_changed: false }),
            },
            server_info: ServerInfo {
                name: "CyclePray MCP".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        respond(request.id, result)
    }

    /// Handle tools/call request
    fn handle_tools_call(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        let tool_params: ToolCallParams = match request.params {
            Some(params) => match serde_json::from_value(params) {
                Ok(p) => p,
                Err(e) => {
                    return JsonRpcResponse::error(
                        request.id,
                        error_codes::INVALID_PARAMS,
                        format!("Invalid parameters: {}", e),
                        None,
                    );
                }
            },
            None => {
                return JsonRpcResponse::error(
                    request.id,
                    error_codes::INVALID_PARAMS,
                    "Missing parameters".to_string(),
                    None,
                );
            }
        };

        let result = match self.call_tool(&tool_params.name, tool_params.arguments) {
            Some(Ok(message)) => ToolCallResult::success(message),
            Some(Err(e)) => {
                warn!("Tool {} failed: {}", tool_params.name, e);
                ToolCallResult::failure(&e)
            }
            None => ToolCallResult::error(format!("Unknown tool: {}", tool_params.name)),
        };

        respond(request.id, result)
    }

    /// Run one tool and render its message; `None` for an unknown tool
    fn call_tool(&mut self, name: &str, args: Map<String, Value>) -> Option<Result<String, ToolError>> {
        debug!("Calling tool {}", name);
        let (storage, analytics, workspace) = self.app.parts();

        let result = match name {
            "profile_set_name" => arguments::<tools::SetNameParams>(args)
                .and_then(|p| tools::set_user_name(storage, p))
                .map(|r| r.message),
            "calendar_view" => arguments::<tools::CalendarViewParams>(args)
                .and_then(|p| tools::calendar_view(storage, &mut workspace.calendar, p))
                .map(|r| r.message),
            "calendar_toggle_day" => arguments::<tools::ToggleDayParams>(args)
                .and_then(|p| tools::calendar_toggle_day(storage, &mut workspace.calendar, p))
                .map(|r| r.message),
            "calendar_finish_period" => {
                tools::calendar_finish_period(storage, &mut workspace.calendar).map(|r| r.message)
            }
            "calendar_save" => tools::calendar_save(storage, &mut workspace.calendar).map(|r| r.message),
            "cycle_summary" => tools::cycle_summary(storage, analytics).map(|r| r.message),
            "home_dashboard" => arguments::<tools::HomeDashboardParams>(args)
                .and_then(|p| tools::home_dashboard(storage, analytics, p))
                .map(|r| r.dashboard.message),
            "favorites_list" => arguments::<tools::FavoritesListParams>(args)
                .and_then(|p| tools::list_favorites(storage, &mut workspace.favorites, p))
                .map(|r| r.message),
            "favorite_toggle" => arguments::<tools::FavoriteToggleParams>(args)
                .and_then(|p| tools::toggle_favorite_item(storage, &mut workspace.favorites, p))
                .map(|r| r.message),
            "notebook_focus" => Ok(tools::notebook_focus(&mut workspace.notebook).message),
            "notebook_update" => arguments::<tools::NotebookUpdateParams>(args)
                .and_then(|p| tools::notebook_update(&mut workspace.notebook, p))
                .map(|v| v.message),
            "notebook_save" => tools::notebook_save(storage, &workspace.notebook).map(|r| r.message),
            "notebook_history" => arguments::<tools::NotebookHistoryParams>(args)
                .and_then(|p| tools::notebook_history(storage, p))
                .map(|r| r.message),
            _ => return None,
        };

        Some(result)
    }
}

/// Successful response, or an internal error if the result won't serialize
fn respond<T: Serialize>(id: Value, result: T) -> JsonRpcResponse {
    match serde_json::to_value(result) {
        Ok(value) => JsonRpcResponse::success(id, value),
        Err(e) => JsonRpcResponse::error(
            id,
            error_codes::INTERNAL_ERROR,
            format!("Failed to serialize result: {}", e),
            None,
        ),
    }
}
