use serde_json::json;

use crate::protocol::{ExportChartParams, ToolErrorResponse, ToolResult};
use crate::registry::ToolDefinition;

/// Tool definition advertised over `tools/list`.
pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "export-chart".into(),
        description: "Export chart to various formats".into(),
        input_schema: json!({
            "type": "object",
            "required": ["chart_id", "format"],
            "properties": {
                "chart_id": {
                    "type": "string",
                    "description": "ID of the chart to export"
                },
                "format": {
                    "type": "string",
                    "enum": ["png", "svg", "pdf", "html"],
                    "description": "Export format"
                },
                "width": {
                    "type": "number",
                    "description": "Width in pixels"
                },
                "height": {
                    "type": "number",
                    "description": "Height in pixels"
                }
            }
        }),
    }
}

/// Registry entry point: decode schema-validated arguments, then handle.
pub fn call(arguments: serde_json::Value) -> Result<ToolResult, ToolErrorResponse> {
    let params: ExportChartParams = super::decode("export-chart", arguments)?;
    Ok(handle(params))
}

/// Handle an `export-chart` tool call. Absent dimensions default to 800x600.
pub fn handle(params: ExportChartParams) -> ToolResult {
    ToolResult::text(format!(
        "Exported chart {} as {} ({}x{})",
        params.chart_id, params.format, params.width, params.height
    ))
}
