//! Plan exporters
//!
//! CSV and XLSX renderings of a plan, both carrying the same row set.

pub mod csv;
pub mod xlsx;

pub use csv::{write_csv, write_csv_file};
pub use xlsx::{write_xlsx, write_xlsx_file};

/// Column headers shared by the table, the CSV and the workbook
pub const COLUMNS: [&str; 5] = [
    "Day",
    "Post #",
    "Content Type",
    "Hook/Caption",
    "Engagement Prompt",
];

/// Export file name: `{topic}_Content_Planner.{ext}`
pub fn file_name(topic: &str, ext: &str) -> String {
    format!("{topic}_Content_Planner.{ext}")
}
