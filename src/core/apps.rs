use crate::core::project::resolve_project;
use crate::domain::model::App;
use crate::domain::ports::{ConfigProvider, ControlPlane};
use crate::utils::error::Result;
use crate::utils::output;
use std::collections::HashSet;

pub struct AppManager<P: ControlPlane, C: ConfigProvider> {
    api: P,
    config: C,
}

impl<P: ControlPlane, C: ConfigProvider> AppManager<P, C> {
    pub fn new(api: P, config: C) -> Self {
        Self { api, config }
    }

    /// Every app in the current project, following page tokens to the end.
    ///
    /// `cluster_id` is forwarded to the control plane unchanged.
    pub async fn list_apps(&self, cluster_id: Option<&str>) -> Result<Vec<App>> {
        let project = resolve_project(&self.api, self.config.project_id()).await?;
        let limit = self.config.page_limit();

        let mut apps = Vec::new();
        let mut page_token: Option<String> = None;
        let mut seen_tokens = HashSet::new();
        loop {
            let page = self
                .api
                .list_apps(&project.project_id, cluster_id, limit, page_token.as_deref())
                .await?;
            tracing::debug!(
                "Fetched {} apps (page token: {:?})",
                page.lightningapps.len(),
                page_token
            );
            apps.extend(page.lightningapps);

            if page.next_page_token.is_empty() {
                break;
            }
            if !seen_tokens.insert(page.next_page_token.clone()) {
                tracing::warn!(
                    "Control plane returned page token {:?} again, stopping at {} apps",
                    page.next_page_token,
                    apps.len()
                );
                break;
            }
            page_token = Some(page.next_page_token);
        }

        Ok(apps)
    }

    pub async fn list(&self, cluster_id: Option<&str>) -> Result<Vec<App>> {
        let apps = self.list_apps(cluster_id).await?;
        tracing::info!("Found {} apps", apps.len());

        let rendered = output::render_apps(&apps, self.config.output_format())?;
        println!("{}", rendered);

        Ok(apps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{AppsCall, InMemoryControlPlane, TestConfig};
    use crate::domain::model::{AppPage, AppPhase, Membership};
    use crate::utils::output::OutputFormat;

    fn app(id: &str, cluster_id: &str) -> App {
        App {
            id: id.to_string(),
            name: format!("{}-name", id),
            cluster_id: cluster_id.to_string(),
            phase: AppPhase::Running,
            created_at: None,
        }
    }

    fn page(apps: Vec<App>, next: &str) -> AppPage {
        AppPage {
            lightningapps: apps,
            next_page_token: next.to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_without_filter_passes_none() {
        let api = InMemoryControlPlane::with_apps(vec![app("a-1", "c-1"), app("a-2", "c-2")]);
        let manager = AppManager::new(api, TestConfig::default());

        let apps = manager.list(None).await.unwrap();

        assert_eq!(apps.len(), 2);
        assert_eq!(
            manager.api.apps_calls(),
            vec![AppsCall {
                project_id: "p-test".to_string(),
                cluster_id: None,
                limit: 100,
                page_token: None,
            }]
        );
    }

    #[tokio::test]
    async fn test_cluster_filter_is_forwarded_unchanged() {
        let api = InMemoryControlPlane::with_apps(vec![app("a-1", "byoc-east")]);
        let manager = AppManager::new(api, TestConfig::default());

        manager.list(Some("byoc-east")).await.unwrap();

        let calls = manager.api.apps_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].cluster_id.as_deref(), Some("byoc-east"));
    }

    #[tokio::test]
    async fn test_follows_page_tokens() {
        let mut api = InMemoryControlPlane::default();
        api.app_pages
            .insert(String::new(), page(vec![app("a-1", "c"), app("a-2", "c")], "t-2"));
        api.app_pages.insert("t-2".to_string(), page(vec![app("a-3", "c")], "t-3"));
        api.app_pages.insert("t-3".to_string(), page(vec![app("a-4", "c")], ""));

        let config = TestConfig {
            page_limit: 2,
            ..Default::default()
        };
        let manager = AppManager::new(api, config);

        let apps = manager.list_apps(None).await.unwrap();

        let ids: Vec<&str> = apps.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a-1", "a-2", "a-3", "a-4"]);

        let tokens: Vec<Option<String>> = manager
            .api
            .apps_calls()
            .into_iter()
            .map(|call| call.page_token)
            .collect();
        assert_eq!(
            tokens,
            vec![None, Some("t-2".to_string()), Some("t-3".to_string())]
        );
    }

    #[tokio::test]
    async fn test_repeated_page_token_stops_paging() {
        let mut api = InMemoryControlPlane::default();
        api.app_pages.insert(String::new(), page(vec![app("a-1", "c")], "loop"));
        api.app_pages.insert("loop".to_string(), page(vec![app("a-2", "c")], "loop"));
        let manager = AppManager::new(api, TestConfig::default());

        let apps = manager.list_apps(None).await.unwrap();

        assert_eq!(apps.len(), 2);
        assert_eq!(manager.api.apps_calls().len(), 2);
    }

    #[tokio::test]
    async fn test_page_token_cycle_stops_paging() {
        let mut api = InMemoryControlPlane::default();
        api.app_pages.insert(String::new(), page(vec![app("a-1", "c")], "t-a"));
        api.app_pages.insert("t-a".to_string(), page(vec![app("a-2", "c")], "t-b"));
        api.app_pages.insert("t-b".to_string(), page(vec![app("a-3", "c")], "t-a"));
        let manager = AppManager::new(api, TestConfig::default());

        let apps = manager.list_apps(None).await.unwrap();

        let ids: Vec<&str> = apps.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a-1", "a-2", "a-3"]);
        assert_eq!(manager.api.apps_calls().len(), 3);
    }

    #[tokio::test]
    async fn test_project_comes_from_membership_when_not_configured() {
        let mut api = InMemoryControlPlane::with_apps(vec![]);
        api.memberships = vec![Membership {
            project_id: "p-member".to_string(),
            name: "default".to_string(),
        }];
        let config = TestConfig {
            project_id: None,
            output_format: OutputFormat::Json,
            ..Default::default()
        };
        let manager = AppManager::new(api, config);

        let apps = manager.list(None).await.unwrap();

        assert!(apps.is_empty());
        assert_eq!(manager.api.apps_calls()[0].project_id, "p-member");
    }
}
