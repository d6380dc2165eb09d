use super::InfoReport;
use anyhow::Result;

pub fn print_json(report: &InfoReport) -> Result<()> {
    println!("{}", render_json(report)?);
    Ok(())
}

pub fn render_json(report: &InfoReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
