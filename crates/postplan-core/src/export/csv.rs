//! CSV export
//!
//! Header plus one row per record, no index column. Fields containing a
//! comma, quote, CR or LF are quoted with doubled inner quotes (RFC 4180).

use anyhow::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use super::{file_name, COLUMNS};
use crate::plan::Plan;

/// Quote a field when it contains a separator or quote character
fn escape_field(field: &str) -> String {
    if field.contains(['"', ',', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Write the plan as CSV to any writer
pub fn write_csv<W: Write>(plan: &Plan, writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "{}", COLUMNS.join(","))?;
    for record in &plan.records {
        let fields = [
            escape_field(&record.day_label),
            record.slot_index.to_string(),
            escape_field(&record.content_type),
            escape_field(&record.hook_caption),
            escape_field(&record.engagement_prompt),
        ];
        writeln!(writer, "{}", fields.join(","))?;
    }
    Ok(())
}

/// Write the plan to `{out_dir}/{topic}_Content_Planner.csv`
pub fn write_csv_file(plan: &Plan, out_dir: &Path) -> Result<PathBuf> {
    let path = out_dir.join(file_name(&plan.topic, "csv"));
    let mut writer = BufWriter::new(File::create(&path)?);
    write_csv(plan, &mut writer)?;
    writer.flush()?;
    info!("Wrote CSV export: {:?}", path);
    Ok(path)
}
