/// Default maximum bytes per JSON-RPC message (1 MiB).
const DEFAULT_MAX_MESSAGE_BYTES: usize = 1024 * 1024;

/// Default server name advertised in the `initialize` response.
const DEFAULT_SERVER_NAME: &str = "chart-mcp-server";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub server_name: String,
    pub max_message_bytes: usize,
}

impl ServerConfig {
    /// Load configuration from environment.
    ///
    /// - `CHART_MCP_SERVER_NAME` (optional, default "chart-mcp-server") — serverInfo name
    /// - `CHART_MCP_MAX_MESSAGE_BYTES` (optional, default 1048576) — max bytes per message
    pub fn from_env() -> Result<Self, String> {
        let server_name = std::env::var("CHART_MCP_SERVER_NAME")
            .unwrap_or_else(|_| DEFAULT_SERVER_NAME.to_string());

        let max_message_bytes = match std::env::var("CHART_MCP_MAX_MESSAGE_BYTES") {
            Ok(val) => match val.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(
                        "CHART_MCP_MAX_MESSAGE_BYTES must be a positive integer".to_string()
                    )
                }
            },
            Err(_) => DEFAULT_MAX_MESSAGE_BYTES,
        };

        Ok(Self {
            server_name,
            max_message_bytes,
        })
    }
}
