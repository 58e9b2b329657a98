use crate::domain::model::{AppPage, Cluster, ClusterState, Membership};
use crate::utils::error::Result;
use crate::utils::output::OutputFormat;
use async_trait::async_trait;

/// Read-only surface of the control-plane API used by the list commands.
#[async_trait]
pub trait ControlPlane: Send + Sync {
    async fn list_clusters(&self, phase_not_in: &[ClusterState]) -> Result<Vec<Cluster>>;

    async fn list_memberships(&self) -> Result<Vec<Membership>>;

    /// One page of apps. An empty `next_page_token` in the result marks the last page.
    async fn list_apps(
        &self,
        project_id: &str,
        cluster_id: Option<&str>,
        limit: u32,
        page_token: Option<&str>,
    ) -> Result<AppPage>;
}

pub trait ConfigProvider: Send + Sync {
    fn project_id(&self) -> Option<&str>;
    fn output_format(&self) -> OutputFormat;
    fn page_limit(&self) -> u32;
}
