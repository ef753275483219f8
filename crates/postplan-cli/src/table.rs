//! Plain-text table rendering for a plan

use postplan_core::export::COLUMNS;
use postplan_core::Plan;

const WIDTHS: [usize; 5] = [7, 6, 32, 44, 34];

/// Char-aware truncation; model text may be non-ASCII
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let cut: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{cut}...")
}

fn row(cells: [&str; 5]) -> String {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        let text = truncate(cell, WIDTHS[i]);
        line.push_str(&format!("{:<width$}  ", text, width = WIDTHS[i]));
    }
    line.trim_end().to_string()
}

/// Render the plan as a fixed-width table, one line per record
pub fn render(plan: &Plan) -> String {
    let mut out = String::new();
    out.push_str(&row(COLUMNS));
    out.push('\n');
    out.push_str(&row(["-------", "------", &"-".repeat(32), &"-".repeat(44), &"-".repeat(34)]));
    out.push('\n');
    for record in &plan.records {
        let slot = record.slot_index.to_string();
        out.push_str(&row([
            &record.day_label,
            &slot,
            &record.content_type,
            &record.hook_caption,
            &record.engagement_prompt,
        ]));
        out.push('\n');
    }
    out
}
