use super::{InfoReport, PluginSelection};
use crate::model::PluginRecord;
use anyhow::Result;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct InstallationRow {
    #[tabled(rename = "Qt Creator")]
    version: String,
    #[tabled(rename = "Path")]
    path: String,
}

#[derive(Tabled)]
struct PluginRow {
    #[tabled(rename = "Plugin")]
    name: String,
    #[tabled(rename = "Version")]
    version: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&PluginRecord> for PluginRow {
    fn from(plugin: &PluginRecord) -> Self {
        Self {
            name: plugin.name.clone(),
            version: plugin.version.clone(),
            description: format_description(&plugin.description),
        }
    }
}

pub fn print_table(report: &InfoReport) -> Result<()> {
    print!("{}", render_table(report));
    Ok(())
}

pub fn render_table(report: &InfoReport) -> String {
    let mut sections = Vec::new();

    if report.version.is_some() || report.path.is_some() {
        let row = InstallationRow {
            version: report.version.clone().unwrap_or_else(|| "-".to_string()),
            path: report
                .path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "-".to_string()),
        };
        sections.push(Table::new([row]).with(Style::rounded()).to_string());
    }

    match &report.plugins {
        Some(PluginSelection::All(records)) if records.is_empty() => {
            sections.push("No plugins found.".to_string());
        }
        Some(PluginSelection::All(records)) => {
            let rows: Vec<PluginRow> = records.iter().map(PluginRow::from).collect();
            sections.push(format!(
                "Found {} plugins:\n\n{}",
                rows.len(),
                Table::new(rows).with(Style::rounded())
            ));
        }
        Some(PluginSelection::Single(plugin)) => {
            sections.push(
                Table::new([PluginRow::from(plugin)])
                    .with(Style::rounded())
                    .to_string(),
            );
        }
        Some(PluginSelection::NotFound { name, suggestions }) => {
            sections.push(super::render_not_found(name, suggestions).trim_end().to_string());
        }
        None => {}
    }

    let mut out = sections.join("\n\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

fn format_description(description: &str) -> String {
    if description.is_empty() {
        "-".to_string()
    } else {
        truncate(description, 60)
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
