//! Markdown rendering. Also the source for HTML and PDF conversion.

use crate::domain::report::Report;

/// Renders a report as Markdown, one table per section.
pub fn render_markdown(report: &Report) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {}\n\n", report.title));
    out.push_str(&format!(
        "*Generated: {}*\n\n",
        report.generated_at.to_rfc3339()
    ));

    for section in &report.sections {
        out.push_str(&format!("## {}\n\n", section.heading));
        if section.entries.is_empty() {
            continue;
        }
        out.push_str("| Field | Value |\n");
        out.push_str("|-------|-------|\n");
        for entry in &section.entries {
            out.push_str(&format!(
                "| {} | {} |\n",
                escape_cell(&entry.label),
                escape_cell(&entry.value)
            ));
        }
        out.push('\n');
    }

    out
}

/// Pipes would split the cell; newlines would end the row.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use crate::domain::report::{ReportKind, ReportSection};

    fn sample() -> Report {
        Report::new(
            ReportKind::CurrentAssessment,
            Timestamp::from_unix_secs(1_705_314_600).unwrap(),
        )
        .section(
            ReportSection::new("COMPANY INFORMATION")
                .entry("Company Name", "Acme | Sons")
                .entry("Process Description", "cut\nweld"),
        )
        .section(ReportSection::new("EMPTY"))
    }

    #[test]
    fn title_and_sections_become_headings() {
        let md = render_markdown(&sample());
        assert!(md.starts_with("# CURRENT STATE ANALYSIS REPORT\n"));
        assert!(md.contains("## COMPANY INFORMATION\n"));
        assert!(md.contains("| Field | Value |"));
    }

    #[test]
    fn cells_are_escaped() {
        let md = render_markdown(&sample());
        assert!(md.contains("| Company Name | Acme \\| Sons |"));
        assert!(md.contains("| Process Description | cut weld |"));
    }

    #[test]
    fn empty_sections_have_no_table() {
        let md = render_markdown(&sample());
        let tail = md.split("## EMPTY").nth(1).unwrap();
        assert!(!tail.contains('|'));
    }
}
