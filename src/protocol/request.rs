use std::fmt;

use serde::{Deserialize, Serialize};

/// JSON-RPC 2.0 ID — may be a number or string per spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcId {
    Number(i64),
    Str(String),
}

/// JSON-RPC 2.0 request envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: Option<RpcId>,
    pub method: String,
    pub params: Option<serde_json::Value>,
}

/// MCP `initialize` params.
#[derive(Debug, Clone, Deserialize)]
pub struct InitializeParams {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: Option<String>,
    #[serde(rename = "clientInfo")]
    pub client_info: Option<ClientInfo>,
}

/// Client information sent during `initialize`.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientInfo {
    pub name: Option<String>,
    pub version: Option<String>,
}

/// Parameters for `tools/call`.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

/// Chart families accepted by `create-chart`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Line,
    Bar,
    Pie,
    Scatter,
    Area,
    Radar,
    Heatmap,
    Treemap,
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Line => "line",
            Self::Bar => "bar",
            Self::Pie => "pie",
            Self::Scatter => "scatter",
            Self::Area => "area",
            Self::Radar => "radar",
            Self::Heatmap => "heatmap",
            Self::Treemap => "treemap",
        };
        f.write_str(name)
    }
}

/// Output formats accepted by `export-chart`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Png,
    Svg,
    Pdf,
    Html,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Pdf => "pdf",
            Self::Html => "html",
        };
        f.write_str(name)
    }
}

/// Chart configuration options for `create-chart`. Accepted for schema
/// completeness; the stub handler does not consume them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartOptions {
    pub title: Option<String>,
    #[serde(rename = "xAxis")]
    pub x_axis: Option<serde_json::Value>,
    #[serde(rename = "yAxis")]
    pub y_axis: Option<serde_json::Value>,
    pub legend: Option<bool>,
    pub theme: Option<String>,
}

/// Parameters for the `create-chart` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChartParams {
    pub chart_type: ChartType,
    pub data: Vec<serde_json::Value>,
    #[serde(default)]
    pub options: ChartOptions,
}

/// Parameters for the `analyze-data` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeDataParams {
    pub data: Vec<serde_json::Value>,
    #[serde(default = "default_goals")]
    pub goals: Vec<String>,
}

fn default_goals() -> Vec<String> {
    vec!["general".to_string()]
}

/// Parameters for the `export-chart` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportChartParams {
    pub chart_id: String,
    pub format: ExportFormat,
    /// Declared as `number` (not `integer`) in the schema, so fractional
    /// dimensions are accepted.
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
}

fn default_width() -> f64 {
    800.0
}

fn default_height() -> f64 {
    600.0
}

/// Parameters for the `update-chart` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateChartParams {
    pub chart_id: String,
    pub data: Option<Vec<serde_json::Value>>,
    pub options: Option<serde_json::Value>,
}
