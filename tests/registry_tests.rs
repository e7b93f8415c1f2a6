//! Registry-level tests: registration and dispatch invariants.

use chart_mcp_server::handlers;
use chart_mcp_server::protocol::{ToolErrorCode, ToolErrorResponse, ToolResult};
use chart_mcp_server::registry::{RegistryError, ToolDefinition, ToolRegistry};
use serde_json::{json, Value};

fn echo_definition(name: &str) -> ToolDefinition {
    ToolDefinition {
        name: name.to_string(),
        description: "Echo the message argument".to_string(),
        input_schema: json!({
            "type": "object",
            "required": ["message"],
            "properties": {
                "message": { "type": "string" }
            }
        }),
    }
}

fn echo_handler(arguments: Value) -> Result<ToolResult, ToolErrorResponse> {
    let message = arguments["message"].as_str().unwrap_or_default();
    Ok(ToolResult::text(message.to_string()))
}

#[test]
fn register_rejects_duplicate_name() {
    let mut registry = ToolRegistry::new();
    registry.register(echo_definition("echo"), echo_handler).unwrap();

    let err = registry
        .register(echo_definition("echo"), echo_handler)
        .unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateTool(ref name) if name == "echo"));

    // The original registration survives the failed attempt
    assert_eq!(registry.len(), 1);
    assert!(registry.contains("echo"));
}

#[test]
fn register_rejects_uncompilable_schema() {
    let mut registry = ToolRegistry::new();
    let mut definition = echo_definition("broken");
    definition.input_schema = json!({ "type": "not-a-type" });

    let err = registry.register(definition, echo_handler).unwrap_err();
    assert!(matches!(err, RegistryError::InvalidSchema { ref tool, .. } if tool == "broken"));
    assert!(registry.is_empty());
}

#[test]
fn dispatch_validates_before_invoking() {
    let mut registry = ToolRegistry::new();
    registry.register(echo_definition("echo"), echo_handler).unwrap();

    // The handler would happily default a non-string message, so a passing
    // call here would prove validation ran first.
    let err = registry.dispatch("echo", &json!({"message": 42})).unwrap_err();
    assert_eq!(err.error.code, ToolErrorCode::InvalidArguments);
    assert!(
        err.error.message.contains("message"),
        "Message should name the offending field: {}",
        err.error.message
    );

    let result = registry.dispatch("echo", &json!({"message": "hi"})).unwrap();
    assert_eq!(result.content[0].text, "hi");
}

#[test]
fn dispatch_unknown_name() {
    let registry = ToolRegistry::new();
    let err = registry.dispatch("echo", &json!({})).unwrap_err();
    assert_eq!(err.error.code, ToolErrorCode::UnknownTool);
}

#[test]
fn builtin_registry_holds_four_tools_in_order() {
    let registry = handlers::builtin_registry().unwrap();
    assert_eq!(registry.len(), 4);

    let names: Vec<&str> = registry.definitions().map(|d| d.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["create-chart", "analyze-data", "export-chart", "update-chart"]
    );
}

#[test]
fn definitions_serialize_with_input_schema_key() {
    let registry = handlers::builtin_registry().unwrap();
    let first = registry.definitions().next().unwrap();

    let value = serde_json::to_value(first).unwrap();
    assert_eq!(value["name"].as_str().unwrap(), "create-chart");
    assert!(value.get("inputSchema").is_some(), "wire key is inputSchema");
    assert!(value.get("input_schema").is_none());
}
