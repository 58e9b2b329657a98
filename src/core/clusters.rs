use crate::domain::model::{Cluster, ClusterState};
use crate::domain::ports::{ConfigProvider, ControlPlane};
use crate::utils::error::Result;
use crate::utils::output;

/// Lists the BYOC and Lightning Cloud clusters visible to the user.
pub struct ClusterManager<P: ControlPlane, C: ConfigProvider> {
    api: P,
    config: C,
}

impl<P: ControlPlane, C: ConfigProvider> ClusterManager<P, C> {
    pub fn new(api: P, config: C) -> Self {
        Self { api, config }
    }

    pub async fn list_clusters(&self) -> Result<Vec<Cluster>> {
        let clusters = self.api.list_clusters(&[ClusterState::Deleted]).await?;

        // the server-side filter is not guaranteed
        Ok(clusters
            .into_iter()
            .filter(|cluster| cluster.state != ClusterState::Deleted)
            .collect())
    }

    pub async fn list(&self) -> Result<Vec<Cluster>> {
        let clusters = self.list_clusters().await?;
        tracing::info!("Found {} clusters", clusters.len());

        let rendered = output::render_clusters(&clusters, self.config.output_format())?;
        println!("{}", rendered);

        Ok(clusters)
    }
}
