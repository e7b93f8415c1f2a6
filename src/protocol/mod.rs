pub mod request;
pub mod response;

pub use request::{
    AnalyzeDataParams, ChartOptions, ChartType, CreateChartParams, ExportChartParams,
    ExportFormat, InitializeParams, JsonRpcRequest, RpcId, ToolCallParams, UpdateChartParams,
};
pub use response::{
    JsonRpcError, JsonRpcResponse, ToolError, ToolErrorCode, ToolErrorResponse, ToolResult,
    ToolResultContent,
};
