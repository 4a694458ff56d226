//! List command - Show the template's deployable entries

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use std::path::PathBuf;

use super::utils;
use crate::template::source::{EntryKind, TemplateSource};

/// List the template's deployable entries
pub fn execute(template_dir: Option<PathBuf>, json: bool) -> Result<String> {
    let template = TemplateSource::open(template_dir)?;
    let plan = template.plan()?;

    if json {
        return Ok(serde_json::to_string_pretty(&plan)?);
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Entry", "Kind", "Size"]);

    for entry in &plan {
        table.add_row(vec![
            Cell::new(&entry.name),
            Cell::new(kind_label(entry.kind)),
            Cell::new(utils::format_size(entry.size_bytes)),
        ]);
    }

    Ok(format!(
        "Template: {}\n{}\n{} deployable entr{}",
        template.root().display(),
        table,
        plan.len(),
        if plan.len() == 1 { "y" } else { "ies" }
    ))
}

fn kind_label(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::ConfigDir => "config dir",
        EntryKind::IgnoreFile => "ignore file",
        EntryKind::Readme => "readme",
        EntryKind::Extra => "file",
    }
}
