use serde_json::json;

use crate::protocol::{AnalyzeDataParams, ToolErrorResponse, ToolResult};
use crate::registry::ToolDefinition;

/// Tool definition advertised over `tools/list`.
pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "analyze-data".into(),
        description: "Analyze data and suggest visualizations".into(),
        input_schema: json!({
            "type": "object",
            "required": ["data"],
            "properties": {
                "data": {
                    "type": "array",
                    "description": "Data to analyze"
                },
                "goals": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Analysis goals (e.g., 'trends', 'distributions', 'correlations')"
                }
            }
        }),
    }
}

/// Registry entry point: decode schema-validated arguments, then handle.
pub fn call(arguments: serde_json::Value) -> Result<ToolResult, ToolErrorResponse> {
    let params: AnalyzeDataParams = super::decode("analyze-data", arguments)?;
    Ok(handle(params))
}

/// Handle an `analyze-data` tool call. Absent `goals` defaults to `["general"]`.
pub fn handle(params: AnalyzeDataParams) -> ToolResult {
    ToolResult::text(format!(
        "Analyzed {} data points for {}",
        params.data.len(),
        params.goals.join(", ")
    ))
}
