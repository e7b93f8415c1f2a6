use chart_mcp_server::config::ServerConfig;
use chart_mcp_server::handlers;
use chart_mcp_server::server::McpServer;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("chart-mcp-server: configuration error: {e}");
            std::process::exit(1);
        }
    };

    let registry = match handlers::builtin_registry() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("chart-mcp-server: registry error: {e}");
            std::process::exit(1);
        }
    };

    let mut server = McpServer::new(config, registry);
    if let Err(e) = server.run().await {
        eprintln!("chart-mcp-server: fatal error: {e}");
        std::process::exit(1);
    }
}
