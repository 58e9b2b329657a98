use crate::config::Settings;
use crate::utils::output::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "lightning")]
#[command(about = "Command-line access to Lightning AI resources")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the control-plane URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format for listings
    #[arg(long, global = true, value_enum)]
    pub output: Option<OutputFormat>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// List Lightning AI self-managed resources (clusters, etc.)
    #[command(subcommand)]
    List(ListCommands),
}

#[derive(Debug, Clone, Subcommand)]
pub enum ListCommands {
    /// List your Lightning AI BYOC compute clusters.
    Clusters,

    /// List your Lightning AI apps.
    Apps {
        /// Filter apps by associated Lightning AI compute cluster
        #[arg(long = "cluster-id")]
        cluster_id: Option<String>,
    },
}

impl GlobalArgs {
    /// Command-line flags win over file and environment settings.
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(url) = &self.api_url {
            settings.api.url = url.clone();
        }
        if let Some(format) = self.output {
            settings.output.format = format;
        }
    }
}
