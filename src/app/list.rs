use crate::adapters::http::LightningClient;
use crate::config::cli::ListCommands;
use crate::config::Settings;
use crate::core::apps::AppManager;
use crate::core::clusters::ClusterManager;
use crate::utils::error::Result;

/// Runs one `list` subcommand against the control plane described by `settings`.
pub async fn run_list(command: &ListCommands, settings: Settings) -> Result<()> {
    let client = LightningClient::new(&settings)?;

    match command {
        ListCommands::Clusters => {
            let cluster_manager = ClusterManager::new(client, settings);
            cluster_manager.list().await?;
        }
        ListCommands::Apps { cluster_id } => {
            let app_manager = AppManager::new(client, settings);
            app_manager.list(cluster_id.as_deref()).await?;
        }
    }

    Ok(())
}
