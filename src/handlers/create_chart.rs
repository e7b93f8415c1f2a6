use serde_json::json;

use crate::protocol::{CreateChartParams, ToolErrorResponse, ToolResult};
use crate::registry::ToolDefinition;

/// Tool definition advertised over `tools/list`.
pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "create-chart".into(),
        description: "Create a data visualization chart".into(),
        input_schema: json!({
            "type": "object",
            "required": ["chart_type", "data"],
            "properties": {
                "chart_type": {
                    "type": "string",
                    "enum": ["line", "bar", "pie", "scatter", "area", "radar", "heatmap", "treemap"],
                    "description": "Type of chart to create"
                },
                "data": {
                    "type": "array",
                    "description": "Data points for the chart"
                },
                "options": {
                    "type": "object",
                    "properties": {
                        "title": { "type": "string" },
                        "xAxis": { "type": "object" },
                        "yAxis": { "type": "object" },
                        "legend": { "type": "boolean" },
                        "theme": { "type": "string" }
                    },
                    "description": "Chart configuration options"
                }
            }
        }),
    }
}

/// Registry entry point: decode schema-validated arguments, then handle.
pub fn call(arguments: serde_json::Value) -> Result<ToolResult, ToolErrorResponse> {
    let params: CreateChartParams = super::decode("create-chart", arguments)?;
    Ok(handle(params))
}

/// Handle a `create-chart` tool call.
pub fn handle(params: CreateChartParams) -> ToolResult {
    ToolResult::text(format!(
        "Created {} chart with {} data points",
        params.chart_type,
        params.data.len()
    ))
}
