use crate::domain::model::{App, AppPage, Cluster, ClusterState, Membership};
use crate::domain::ports::{ConfigProvider, ControlPlane};
use crate::utils::error::Result;
use crate::utils::output::OutputFormat;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub struct AppsCall {
    pub project_id: String,
    pub cluster_id: Option<String>,
    pub limit: u32,
    pub page_token: Option<String>,
}

/// Control plane backed by plain vectors, recording the calls it receives.
#[derive(Default)]
pub struct InMemoryControlPlane {
    pub clusters: Vec<Cluster>,
    pub memberships: Vec<Membership>,
    /// Pages keyed by the token that requests them; the first page uses "".
    pub app_pages: HashMap<String, AppPage>,
    pub cluster_filters: Mutex<Vec<Vec<ClusterState>>>,
    pub apps_calls: Mutex<Vec<AppsCall>>,
    pub membership_calls: Mutex<usize>,
}

impl InMemoryControlPlane {
    pub fn with_apps(apps: Vec<App>) -> Self {
        let mut app_pages = HashMap::new();
        app_pages.insert(
            String::new(),
            AppPage {
                lightningapps: apps,
                next_page_token: String::new(),
            },
        );
        Self {
            app_pages,
            ..Default::default()
        }
    }

    pub fn membership_calls(&self) -> usize {
        *self.membership_calls.lock().unwrap()
    }

    pub fn apps_calls(&self) -> Vec<AppsCall> {
        self.apps_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ControlPlane for InMemoryControlPlane {
    async fn list_clusters(&self, phase_not_in: &[ClusterState]) -> Result<Vec<Cluster>> {
        self.cluster_filters
            .lock()
            .unwrap()
            .push(phase_not_in.to_vec());
        Ok(self.clusters.clone())
    }

    async fn list_memberships(&self) -> Result<Vec<Membership>> {
        *self.membership_calls.lock().unwrap() += 1;
        Ok(self.memberships.clone())
    }

    async fn list_apps(
        &self,
        project_id: &str,
        cluster_id: Option<&str>,
        limit: u32,
        page_token: Option<&str>,
    ) -> Result<AppPage> {
        self.apps_calls.lock().unwrap().push(AppsCall {
            project_id: project_id.to_string(),
            cluster_id: cluster_id.map(str::to_string),
            limit,
            page_token: page_token.map(str::to_string),
        });
        Ok(self
            .app_pages
            .get(page_token.unwrap_or(""))
            .cloned()
            .unwrap_or_default())
    }
}

pub struct TestConfig {
    pub project_id: Option<String>,
    pub output_format: OutputFormat,
    pub page_limit: u32,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            project_id: Some("p-test".to_string()),
            output_format: OutputFormat::Table,
            page_limit: 100,
        }
    }
}

impl ConfigProvider for TestConfig {
    fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    fn page_limit(&self) -> u32 {
        self.page_limit
    }
}
