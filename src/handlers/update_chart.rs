use serde_json::json;

use crate::protocol::{ToolErrorResponse, ToolResult, UpdateChartParams};
use crate::registry::ToolDefinition;

/// Tool definition advertised over `tools/list`.
pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "update-chart".into(),
        description: "Update existing chart with new data or options".into(),
        input_schema: json!({
            "type": "object",
            "required": ["chart_id"],
            "properties": {
                "chart_id": {
                    "type": "string",
                    "description": "ID of the chart to update"
                },
                "data": {
                    "type": "array",
                    "description": "New data points"
                },
                "options": {
                    "type": "object",
                    "description": "Updated chart options"
                }
            }
        }),
    }
}

/// Registry entry point: decode schema-validated arguments, then handle.
pub fn call(arguments: serde_json::Value) -> Result<ToolResult, ToolErrorResponse> {
    let params: UpdateChartParams = super::decode("update-chart", arguments)?;
    Ok(handle(params))
}

/// Handle an `update-chart` tool call. New data and options are accepted
/// but not echoed.
pub fn handle(params: UpdateChartParams) -> ToolResult {
    ToolResult::text(format!("Updated chart {}", params.chart_id))
}
