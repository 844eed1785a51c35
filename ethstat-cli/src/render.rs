//! Output formats for collected families.

use std::fmt::{self, Write};

use anyhow::Result;
use clap::ValueEnum;
use ethstat_types::MetricFamily;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// Pretty-printed JSON array of families.
    #[default]
    Json,
    /// One block per family with its samples, for reading in a terminal.
    Summary,
}

pub fn render(families: &[MetricFamily], format: Format) -> Result<String> {
    match format {
        Format::Json => {
            let mut json = serde_json::to_string_pretty(families)?;
            json.push('\n');
            Ok(json)
        }
        Format::Summary => {
            let mut out = String::new();
            write_summary(&mut out, families)?;
            Ok(out)
        }
    }
}

fn write_summary<W: Write>(out: &mut W, families: &[MetricFamily]) -> fmt::Result {
    for family in families {
        writeln!(
            out,
            "{} ({}, {} samples)",
            family.name(),
            family.kind(),
            family.len()
        )?;
        for sample in family.samples() {
            let labels: Vec<String> = family
                .label_names()
                .iter()
                .zip(&sample.label_values)
                .map(|(name, value)| format!("{}={}", name, value))
                .collect();
            writeln!(out, "  {:<40} {}", labels.join(" "), sample.value)?;
        }
    }
    Ok(())
}
