use veneer_mcp::adapters::github;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    veneer_mcp::run_stdio("github-users", github::API_BASE_URL, github::users::catalog()).await
}
