//! Banner-style plain text rendering.

use crate::domain::report::Report;

const TITLE_RULE_WIDTH: usize = 80;
const SECTION_RULE_WIDTH: usize = 40;

/// Renders a report as plain text.
///
/// ```text
/// FINANCIAL ANALYSIS REPORT
/// Generated: 2024-01-15T10:30:00+00:00
/// ================================================================================
///
/// >>> CONSOLIDATED METRICS
/// ----------------------------------------
///   ROI: -64.58%
///
/// END OF FINANCIAL ANALYSIS REPORT
/// ```
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    out.push_str(&report.title);
    out.push('\n');
    out.push_str(&format!("Generated: {}\n", report.generated_at.to_rfc3339()));
    out.push_str(&"=".repeat(TITLE_RULE_WIDTH));
    out.push_str("\n\n");

    for section in &report.sections {
        out.push_str(&format!(">>> {}\n", section.heading));
        out.push_str(&"-".repeat(SECTION_RULE_WIDTH));
        out.push('\n');
        for entry in &section.entries {
            out.push_str(&format!("  {}: {}\n", entry.label, entry.value));
        }
        out.push('\n');
    }

    out.push_str(&format!("END OF {}\n", report.title));
    out
}
