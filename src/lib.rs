pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{Cli, Commands, ListCommands};

pub use adapters::http::LightningClient;
pub use config::Settings;
pub use core::{
    apps::AppManager,
    cloud::{is_running_in_cloud, is_running_in_cloud_from},
    clusters::ClusterManager,
};
pub use utils::error::{CliError, Result};
