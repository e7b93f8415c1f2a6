pub mod analyze_data;
pub mod create_chart;
pub mod export_chart;
pub mod update_chart;

use serde::de::DeserializeOwned;

use crate::config::ServerConfig;
use crate::protocol::{
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, ToolCallParams, ToolErrorCode,
    ToolErrorResponse,
};
use crate::registry::{RegistryError, ToolRegistry};

/// Build the registry holding the four built-in chart tools.
///
/// Registration order is the order tools appear in `tools/list`.
pub fn builtin_registry() -> Result<ToolRegistry, RegistryError> {
    let mut registry = ToolRegistry::new();
    registry.register(create_chart::definition(), create_chart::call)?;
    registry.register(analyze_data::definition(), analyze_data::call)?;
    registry.register(export_chart::definition(), export_chart::call)?;
    registry.register(update_chart::definition(), update_chart::call)?;
    Ok(registry)
}

/// Decode schema-validated tool arguments into a typed params struct.
///
/// Validation has already passed, so a decode failure here is a server
/// bug, not a client error.
pub(crate) fn decode<T: DeserializeOwned>(
    tool: &str,
    arguments: serde_json::Value,
) -> Result<T, ToolErrorResponse> {
    serde_json::from_value(arguments).map_err(|e| {
        ToolErrorResponse::new(
            ToolErrorCode::InternalError,
            format!("Arguments for {tool} failed to decode after validation: {e}"),
        )
    })
}

/// Dispatch a JSON-RPC request to the appropriate handler.
///
/// Returns `None` for notifications (no response required).
pub fn dispatch(
    req: &JsonRpcRequest,
    registry: &ToolRegistry,
    config: &ServerConfig,
) -> Option<JsonRpcResponse> {
    match req.method.as_str() {
        "initialize" => {
            let result = serde_json::json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": config.server_name,
                    "version": env!("CARGO_PKG_VERSION")
                }
            });
            Some(JsonRpcResponse::success(req.id.clone(), result))
        }

        "notifications/initialized" => None,

        "ping" => Some(JsonRpcResponse::success(req.id.clone(), serde_json::json!({}))),

        "tools/list" => {
            let tools: Vec<_> = registry.definitions().collect();
            let result = serde_json::json!({ "tools": tools });
            Some(JsonRpcResponse::success(req.id.clone(), result))
        }

        "tools/call" => {
            let params: ToolCallParams = match &req.params {
                Some(v) => match serde_json::from_value(v.clone()) {
                    Ok(p) => p,
                    Err(e) => {
                        return Some(JsonRpcResponse::error(
                            req.id.clone(),
                            JsonRpcError::invalid_params(format!(
                                "Invalid tools/call params: {e}"
                            )),
                        ));
                    }
                },
                None => {
                    return Some(JsonRpcResponse::error(
                        req.id.clone(),
                        JsonRpcError::invalid_params("Missing params for tools/call"),
                    ));
                }
            };

            // Absent arguments are treated as an empty object; required
            // properties then fail schema validation with the field named.
            let arguments = params.arguments.unwrap_or_else(|| serde_json::json!({}));

            let tool_result = match registry.dispatch(&params.name, &arguments) {
                Ok(result) => result,
                Err(err) => err.into(),
            };
            let result_json = serde_json::to_value(&tool_result)
                .expect("ToolResult must serialize to JSON Value");
            Some(JsonRpcResponse::success(req.id.clone(), result_json))
        }

        _ => Some(JsonRpcResponse::error(
            req.id.clone(),
            JsonRpcError::method_not_found(&req.method),
        )),
    }
}
