use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClusterType {
    Unspecified,
    Global,
    Byoc,
}

impl From<String> for ClusterType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "CLUSTER_TYPE_GLOBAL" => ClusterType::Global,
            "CLUSTER_TYPE_BYOC" => ClusterType::Byoc,
            _ => ClusterType::Unspecified,
        }
    }
}

impl From<ClusterType> for String {
    fn from(value: ClusterType) -> Self {
        match value {
            ClusterType::Unspecified => "CLUSTER_TYPE_UNSPECIFIED",
            ClusterType::Global => "CLUSTER_TYPE_GLOBAL",
            ClusterType::Byoc => "CLUSTER_TYPE_BYOC",
        }
        .to_string()
    }
}

impl fmt::Display for ClusterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ClusterType::Unspecified => "unknown",
            ClusterType::Global => "Lightning Cloud",
            ClusterType::Byoc => "BYOC",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClusterState {
    Unspecified,
    Queued,
    Pending,
    Running,
    Failed,
    Deleted,
}

impl ClusterState {
    pub fn as_wire(self) -> &'static str {
        match self {
            ClusterState::Unspecified => "CLUSTER_STATE_UNSPECIFIED",
            ClusterState::Queued => "CLUSTER_STATE_QUEUED",
            ClusterState::Pending => "CLUSTER_STATE_PENDING",
            ClusterState::Running => "CLUSTER_STATE_RUNNING",
            ClusterState::Failed => "CLUSTER_STATE_FAILED",
            ClusterState::Deleted => "CLUSTER_STATE_DELETED",
        }
    }
}

impl From<String> for ClusterState {
    fn from(value: String) -> Self {
        match value.as_str() {
            "CLUSTER_STATE_QUEUED" => ClusterState::Queued,
            "CLUSTER_STATE_PENDING" => ClusterState::Pending,
            "CLUSTER_STATE_RUNNING" => ClusterState::Running,
            "CLUSTER_STATE_FAILED" => ClusterState::Failed,
            "CLUSTER_STATE_DELETED" => ClusterState::Deleted,
            _ => ClusterState::Unspecified,
        }
    }
}

impl From<ClusterState> for String {
    fn from(value: ClusterState) -> Self {
        value.as_wire().to_string()
    }
}

impl fmt::Display for ClusterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ClusterState::Unspecified => "unknown",
            ClusterState::Queued => "queued",
            ClusterState::Pending => "pending",
            ClusterState::Running => "running",
            ClusterState::Failed => "failed",
            ClusterState::Deleted => "deleted",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AppPhase {
    Unspecified,
    Pending,
    Running,
    Failed,
    Stopped,
    NotStarted,
    Deleted,
}

impl From<String> for AppPhase {
    fn from(value: String) -> Self {
        match value.as_str() {
            "LIGHTNINGAPP_INSTANCE_STATE_PENDING" => AppPhase::Pending,
            "LIGHTNINGAPP_INSTANCE_STATE_RUNNING" => AppPhase::Running,
            "LIGHTNINGAPP_INSTANCE_STATE_FAILED" => AppPhase::Failed,
            "LIGHTNINGAPP_INSTANCE_STATE_STOPPED" => AppPhase::Stopped,
            "LIGHTNINGAPP_INSTANCE_STATE_NOT_STARTED" => AppPhase::NotStarted,
            "LIGHTNINGAPP_INSTANCE_STATE_DELETED" => AppPhase::Deleted,
            _ => AppPhase::Unspecified,
        }
    }
}

impl From<AppPhase> for String {
    fn from(value: AppPhase) -> Self {
        match value {
            AppPhase::Unspecified => "LIGHTNINGAPP_INSTANCE_STATE_UNSPECIFIED",
            AppPhase::Pending => "LIGHTNINGAPP_INSTANCE_STATE_PENDING",
            AppPhase::Running => "LIGHTNINGAPP_INSTANCE_STATE_RUNNING",
            AppPhase::Failed => "LIGHTNINGAPP_INSTANCE_STATE_FAILED",
            AppPhase::Stopped => "LIGHTNINGAPP_INSTANCE_STATE_STOPPED",
            AppPhase::NotStarted => "LIGHTNINGAPP_INSTANCE_STATE_NOT_STARTED",
            AppPhase::Deleted => "LIGHTNINGAPP_INSTANCE_STATE_DELETED",
        }
        .to_string()
    }
}

impl fmt::Display for AppPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AppPhase::Unspecified => "unknown",
            AppPhase::Pending => "pending",
            AppPhase::Running => "running",
            AppPhase::Failed => "failed",
            AppPhase::Stopped => "stopped",
            AppPhase::NotStarted => "not started",
            AppPhase::Deleted => "deleted",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "unspecified_cluster_type")]
    pub cluster_type: ClusterType,
    #[serde(default = "unspecified_cluster_state")]
    pub state: ClusterState,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn unspecified_cluster_type() -> ClusterType {
    ClusterType::Unspecified
}

fn unspecified_cluster_state() -> ClusterState {
    ClusterState::Unspecified
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct App {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub cluster_id: String,
    #[serde(default = "unspecified_phase")]
    pub phase: AppPhase,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn unspecified_phase() -> AppPhase {
    AppPhase::Unspecified
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    pub project_id: String,
    #[serde(default)]
    pub name: String,
}

/// The project every app listing is scoped to.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub project_id: String,
    pub name: String,
}

impl From<Membership> for Project {
    fn from(membership: Membership) -> Self {
        Self {
            project_id: membership.project_id,
            name: membership.name,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClusterList {
    #[serde(default)]
    pub clusters: Vec<Cluster>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MembershipList {
    #[serde(default)]
    pub memberships: Vec<Membership>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppPage {
    #[serde(default)]
    pub lightningapps: Vec<App>,
    #[serde(default)]
    pub next_page_token: String,
}
