use folio_client::PortfolioClient;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    client: &PortfolioClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Profile => commands::profile::handle(client, flags).await,
        Commands::Projects(args) => commands::projects::handle(&args, client, flags).await,
        Commands::ProjectsSync => commands::system::projects_sync(client, flags).await,
        Commands::ProjectsStats => commands::system::projects_stats(client, flags).await,
        Commands::Social => commands::social::handle(client, flags).await,
        Commands::Videos(args) => commands::videos::handle(&args, client, flags).await,
        Commands::VideosSync => commands::system::videos_sync(client, flags).await,
        Commands::Health => commands::system::health(client, flags).await,
        Commands::SyncAll => commands::system::sync_all(client, flags).await,
        Commands::SystemStats => commands::system::system_stats(client, flags).await,
        Commands::Page => commands::page::handle(client, flags).await,
        Commands::Banner(args) => commands::banner::handle(&args, client).await,
        Commands::Classify(_) | Commands::Schema(_) => {
            unreachable!("classify/schema are pre-dispatched in main")
        }
    }
}
