mod json;
mod table;
mod text;

pub use json::{print_json, render_json};
pub use table::{print_table, render_table};
pub use text::{print_text, render_not_found, render_text};

use crate::model::PluginRecord;
use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

/// Output format for info results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain lines, one fact per line
    Text,
    /// Human-readable table format
    Table,
    /// JSON format for programmatic use
    Json,
}

impl OutputFormat {
    /// Whether the format is meant for a person watching the terminal.
    pub fn is_interactive(&self) -> bool {
        !matches!(self, OutputFormat::Json)
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Unknown format: {}. Use 'text', 'table', or 'json'",
                s
            )),
        }
    }
}

/// Which plugins the user asked to see.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PluginSelection {
    All(Vec<PluginRecord>),
    Single(PluginRecord),
    /// The requested name matched nothing; `suggestions` contain the term.
    NotFound {
        #[serde(rename = "not_found")]
        name: String,
        suggestions: Vec<String>,
    },
}

/// Everything the `info` command decided to show.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InfoReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugins: Option<PluginSelection>,
}

impl InfoReport {
    /// False when a requested plugin could not be resolved.
    pub fn is_complete(&self) -> bool {
        !matches!(self.plugins, Some(PluginSelection::NotFound { .. }))
    }
}

pub fn print_report(report: &InfoReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(report),
        OutputFormat::Table => print_table(report),
        OutputFormat::Json => print_json(report),
    }
}
