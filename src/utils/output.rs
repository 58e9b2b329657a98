use crate::domain::model::{App, Cluster};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

fn format_created(created_at: Option<DateTime<Utc>>) -> String {
    created_at
        .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn header(columns: &[&str]) -> Vec<Cell> {
    columns
        .iter()
        .map(|name| Cell::new(name).fg(Color::Blue))
        .collect()
}

fn new_table(columns: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header(columns));
    table
}

pub fn clusters_table(clusters: &[Cluster]) -> Table {
    let mut table = new_table(&["id", "type", "status", "created"]);
    for cluster in clusters {
        table.add_row(vec![
            Cell::new(&cluster.id),
            Cell::new(cluster.cluster_type.to_string()),
            Cell::new(cluster.state.to_string()),
            Cell::new(format_created(cluster.created_at)),
        ]);
    }
    table
}

pub fn apps_table(apps: &[App]) -> Table {
    let mut table = new_table(&["name", "status", "cluster", "created"]);
    for app in apps {
        let cluster = if app.cluster_id.is_empty() {
            "-"
        } else {
            app.cluster_id.as_str()
        };
        table.add_row(vec![
            Cell::new(&app.name),
            Cell::new(app.phase.to_string()),
            Cell::new(cluster),
            Cell::new(format_created(app.created_at)),
        ]);
    }
    table
}

pub fn render_clusters(clusters: &[Cluster], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(clusters_table(clusters).to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(clusters)?),
    }
}

pub fn render_apps(apps: &[App], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(apps_table(apps).to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(apps)?),
    }
}
