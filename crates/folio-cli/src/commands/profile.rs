use folio_client::PortfolioClient;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `folio profile`.
pub async fn handle(client: &PortfolioClient, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&client.profile().await, flags.format)
}
