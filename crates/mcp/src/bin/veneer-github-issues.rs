use veneer_mcp::adapters::github;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    veneer_mcp::run_stdio("github-issues", github::API_BASE_URL, github::issues::catalog()).await
}
