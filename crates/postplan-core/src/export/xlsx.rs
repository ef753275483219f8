//! XLSX export
//!
//! Writes a minimal OOXML workbook by hand: five package parts in a zip
//! archive, one sheet named "Planner", text cells as inline strings. This
//! covers exactly what the planner needs and nothing more.

use anyhow::Result;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::{file_name, COLUMNS};
use crate::plan::Plan;

/// Sheet name required by the export contract
pub const SHEET_NAME: &str = "Planner";

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/></Types>"#;

const ROOT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

const WORKBOOK_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#;

fn workbook_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="{SHEET_NAME}" sheetId="1" r:id="rId1"/></sheets></workbook>"#
    )
}

/// Escape text for XML element content
fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn inline_string_cell(text: &str) -> String {
    format!(
        r#"<c t="inlineStr"><is><t xml:space="preserve">{}</t></is></c>"#,
        xml_escape(text)
    )
}

fn number_cell(value: u32) -> String {
    format!("<c><v>{value}</v></c>")
}

fn sheet_xml(plan: &Plan) -> String {
    let mut rows = String::new();
    let mut header = String::new();
    for column in COLUMNS {
        header.push_str(&inline_string_cell(column));
    }
    let _ = write!(rows, r#"<row r="1">{header}</row>"#);

    for (index, record) in plan.records.iter().enumerate() {
        let row_number = index + 2;
        let _ = write!(
            rows,
            r#"<row r="{row_number}">{}{}{}{}{}</row>"#,
            inline_string_cell(&record.day_label),
            number_cell(record.slot_index),
            inline_string_cell(&record.content_type),
            inline_string_cell(&record.hook_caption),
            inline_string_cell(&record.engagement_prompt),
        );
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>{rows}</sheetData></worksheet>"#
    )
}

/// Write the plan as an XLSX workbook to any seekable writer
pub fn write_xlsx<W: Write + Seek>(plan: &Plan, writer: W) -> Result<()> {
    let mut archive = ZipWriter::new(writer);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let parts: [(&str, String); 5] = [
        ("[Content_Types].xml", CONTENT_TYPES_XML.to_string()),
        ("_rels/.rels", ROOT_RELS_XML.to_string()),
        ("xl/workbook.xml", workbook_xml()),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS_XML.to_string()),
        ("xl/worksheets/sheet1.xml", sheet_xml(plan)),
    ];

    for (name, contents) in parts {
        archive.start_file(name, options)?;
        archive.write_all(contents.as_bytes())?;
    }

    archive.finish()?;
    Ok(())
}

/// Write the plan to `{out_dir}/{topic}_Content_Planner.xlsx`
pub fn write_xlsx_file(plan: &Plan, out_dir: &Path) -> Result<PathBuf> {
    let path = out_dir.join(file_name(&plan.topic, "xlsx"));
    let mut writer = BufWriter::new(File::create(&path)?);
    write_xlsx(plan, &mut writer)?;
    writer.flush()?;
    info!("Wrote XLSX export: {:?}", path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{Plan, PostRecord};
    use std::io::{Cursor, Read};

    fn sample_plan() -> Plan {
        Plan {
            topic: "AI".to_string(),
            records: vec![PostRecord {
                day_label: "Day 1".to_string(),
                slot_index: 1,
                content_type: "Poll <beta>".to_string(),
                hook_caption: "Q&A time".to_string(),
                engagement_prompt: "Vote now!".to_string(),
            }],
        }
    }

    #[test]
    fn test_workbook_contains_the_five_parts() {
        let mut buffer = Cursor::new(Vec::new());
        write_xlsx(&sample_plan(), &mut buffer).unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(buffer.into_inner())).unwrap();
        for part in [
            "[Content_Types].xml",
            "_rels/.rels",
            "xl/workbook.xml",
            "xl/_rels/workbook.xml.rels",
            "xl/worksheets/sheet1.xml",
        ] {
            assert!(archive.by_name(part).is_ok(), "missing part {part}");
        }
    }

    #[test]
    fn test_sheet_rows_and_escaping() {
        let mut buffer = Cursor::new(Vec::new());
        write_xlsx(&sample_plan(), &mut buffer).unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(buffer.into_inner())).unwrap();
        let mut sheet = String::new();
        archive
            .by_name("xl/worksheets/sheet1.xml")
            .unwrap()
            .read_to_string(&mut sheet)
            .unwrap();

        assert!(sheet.contains("<t xml:space=\"preserve\">Day</t>"));
        assert!(sheet.contains("Poll &lt;beta&gt;"));
        assert!(sheet.contains("Q&amp;A time"));
        assert!(sheet.contains("<c><v>1</v></c>"));
        assert_eq!(sheet.matches("<row ").count(), 2);
    }

    #[test]
    fn test_workbook_names_the_planner_sheet() {
        assert!(workbook_xml().contains(r#"name="Planner""#));
    }
}
