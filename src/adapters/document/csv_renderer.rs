//! `Section,Field,Value` CSV rendering using the `csv` crate.

use crate::domain::report::Report;
use crate::ports::ExportError;

/// Renders a report as CSV.
///
/// The first two data rows carry the report title and generation time under
/// the `Report` section; every entry follows as one row. Quoting is left to
/// the writer, so values with commas or quotes stay intact.
pub fn render_csv(report: &Report) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(["Section", "Field", "Value"])
        .map_err(|e| ExportError::csv_failed(e.to_string()))?;
    writer
        .write_record(["Report", "Title", report.title.as_str()])
        .map_err(|e| ExportError::csv_failed(e.to_string()))?;
    writer
        .write_record(["Report", "Generated", report.generated_at.to_rfc3339().as_str()])
        .map_err(|e| ExportError::csv_failed(e.to_string()))?;

    for section in &report.sections {
        for entry in &section.entries {
            writer
                .write_record([
                    section.heading.as_str(),
                    entry.label.as_str(),
                    entry.value.as_str(),
                ])
                .map_err(|e| ExportError::csv_failed(e.to_string()))?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::csv_failed(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::csv_failed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use crate::domain::report::{ReportKind, ReportSection};

    fn sample() -> Report {
        Report::new(
            ReportKind::FinancialAnalysis,
            Timestamp::from_unix_secs(1_705_314_600).unwrap(),
        )
        .section(
            ReportSection::new("CONSOLIDATED METRICS")
                .entry("Total Investment", "$2,991,000.00")
                .entry("ROI", "-64.58%"),
        )
    }

    #[test]
    fn header_and_report_rows_come_first() {
        let csv = render_csv(&sample()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Section,Field,Value"));
        assert_eq!(lines.next(), Some("Report,Title,FINANCIAL ANALYSIS REPORT"));
        assert!(lines.next().unwrap().starts_with("Report,Generated,2024-01-15T10:30:00"));
    }

    #[test]
    fn values_with_commas_are_quoted() {
        let csv = render_csv(&sample()).unwrap();
        assert!(csv.contains("CONSOLIDATED METRICS,Total Investment,\"$2,991,000.00\""));
        assert!(csv.contains("CONSOLIDATED METRICS,ROI,-64.58%"));
    }

    #[test]
    fn output_parses_back_into_three_columns() {
        let csv = render_csv(&sample()).unwrap();
        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.len() == 3));
        assert_eq!(&rows[2][2], "$2,991,000.00");
    }
}
