use veneer_mcp::adapters::gmail;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    veneer_mcp::run_stdio("gmail-settings", gmail::API_BASE_URL, gmail::catalog()).await
}
