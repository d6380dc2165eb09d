use super::{InfoReport, PluginSelection};
use anyhow::Result;
use std::fmt::Write;

pub fn print_text(report: &InfoReport) -> Result<()> {
    print!("{}", render_text(report));
    Ok(())
}

pub fn render_text(report: &InfoReport) -> String {
    let mut out = String::new();

    if let Some(version) = &report.version {
        let _ = writeln!(out, "Qt Creator Version: {}", version);
    }
    if let Some(path) = &report.path {
        let _ = writeln!(out, "Qt Creator Path: {}", path.display());
    }

    if let Some(plugins) = &report.plugins {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str("Plugins:\n");

        match plugins {
            PluginSelection::All(records) => {
                for plugin in records {
                    let _ = writeln!(
                        out,
                        "  {} {}: {}",
                        plugin.name, plugin.version, plugin.description
                    );
                }
            }
            PluginSelection::Single(plugin) => {
                let _ = writeln!(out, "  {}:", plugin.name);
                let _ = writeln!(out, "    Version: {}", plugin.version);
                let _ = writeln!(out, "    Description: {}", plugin.description);
            }
            PluginSelection::NotFound { name, suggestions } => {
                out.push_str(&render_not_found(name, suggestions));
            }
        }
    }

    out
}

pub fn render_not_found(name: &str, suggestions: &[String]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  Plugin '{}' not found", name);
    out.push_str("  Available plugins containing this term:\n");

    if suggestions.is_empty() {
        out.push_str("    No matching plugins found\n");
    } else {
        for suggestion in suggestions {
            let _ = writeln!(out, "    {}", suggestion);
        }
    }

    out
}
