use crate::config::{Settings, API_KEY_ENV, USER_ID_ENV};
use crate::domain::model::{AppPage, Cluster, ClusterList, ClusterState, Membership, MembershipList};
use crate::domain::ports::ControlPlane;
use crate::utils::error::{CliError, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::OnceCell;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    username: &'a str,
    api_key: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

/// REST client for the Lightning AI control plane.
///
/// Logs in lazily on the first call and reuses the bearer token afterwards.
pub struct LightningClient {
    client: Client,
    base_url: String,
    user_id: Option<String>,
    api_key: Option<String>,
    retry_attempts: u32,
    retry_delay: Duration,
    token: OnceCell<String>,
}

impl LightningClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.api.timeout_seconds))
            .user_agent(concat!("lightning-list/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: settings.api.url.trim_end_matches('/').to_string(),
            user_id: settings.auth.user_id.clone(),
            api_key: settings.auth.api_key.clone(),
            retry_attempts: settings.api.retry_attempts,
            retry_delay: Duration::from_millis(settings.api.retry_delay_ms),
            token: OnceCell::new(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn token(&self) -> Result<&str> {
        let token = self.token.get_or_try_init(|| self.login()).await?;
        Ok(token.as_str())
    }

    async fn login(&self) -> Result<String> {
        let user_id = self
            .user_id
            .as_deref()
            .ok_or_else(|| CliError::MissingCredentials {
                field: USER_ID_ENV.to_string(),
            })?;
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| CliError::MissingCredentials {
                field: API_KEY_ENV.to_string(),
            })?;

        tracing::debug!("Logging in to {} as {}", self.base_url, user_id);
        let url = self.url("/v1/auth/login");
        let body = LoginRequest {
            username: user_id,
            api_key,
        };
        let response = self
            .send_with_retry(|| self.client.post(&url).json(&body))
            .await?;

        let login: LoginResponse = Self::parse_json(response).await?;
        Ok(login.token)
    }

    /// Sends the request built by `build`, retrying transport failures and 5xx responses.
    async fn send_with_retry<F>(&self, build: F) -> Result<Response>
    where
        F: Fn() -> RequestBuilder,
    {
        let mut attempt = 0;
        loop {
            let result = match build().send().await {
                Ok(response) => Self::check_status(response).await,
                Err(e) => Err(CliError::HttpError(e)),
            };

            match result {
                Err(e) if e.is_retryable() && attempt < self.retry_attempts => {
                    attempt += 1;
                    tracing::warn!(
                        "Request failed ({}), retrying {}/{} in {:?}",
                        e,
                        attempt,
                        self.retry_attempts,
                        self.retry_delay
                    );
                    tokio::time::sleep(self.retry_delay).await;
                }
                other => return other,
            }
        }
    }

    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        tracing::debug!("API response status: {} body: {}", status, message);

        if status == StatusCode::UNAUTHORIZED {
            return Err(CliError::Unauthorized { message });
        }
        Err(CliError::ApiError {
            status: status.as_u16(),
            message,
        })
    }

    async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let token = self.token().await?;
        let url = self.url(path);

        tracing::debug!("GET {} {:?}", url, query);
        let response = self
            .send_with_retry(|| self.client.get(&url).bearer_auth(token).query(query))
            .await?;

        Self::parse_json(response).await
    }
}

#[async_trait]
impl ControlPlane for LightningClient {
    async fn list_clusters(&self, phase_not_in: &[ClusterState]) -> Result<Vec<Cluster>> {
        let query: Vec<(&str, String)> = phase_not_in
            .iter()
            .map(|state| ("phaseNotIn", state.as_wire().to_string()))
            .collect();

        let list: ClusterList = self.get_json("/v1/core/clusters", &query).await?;
        Ok(list.clusters)
    }

    async fn list_memberships(&self) -> Result<Vec<Membership>> {
        let list: MembershipList = self.get_json("/v1/memberships", &[]).await?;
        Ok(list.memberships)
    }

    async fn list_apps(
        &self,
        project_id: &str,
        cluster_id: Option<&str>,
        limit: u32,
        page_token: Option<&str>,
    ) -> Result<AppPage> {
        let mut query = vec![("limit", limit.to_string())];
        if let Some(cluster_id) = cluster_id {
            query.push(("clusterId", cluster_id.to_string()));
        }
        if let Some(token) = page_token.filter(|t| !t.is_empty()) {
            query.push(("pageToken", token.to_string()));
        }

        let path = format!("/v1/projects/{}/lightningapps", project_id);
        self.get_json(&path, &query).await
    }
}
