use veneer_mcp::adapters::drive;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    veneer_mcp::run_stdio("drive-files", drive::API_BASE_URL, drive::catalog()).await
}
