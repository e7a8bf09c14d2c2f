//! Report export adapter.
//!
//! - Text, CSV and Markdown are rendered in-process
//! - HTML is converted from the Markdown rendering with pulldown-cmark
//! - PDF is converted from the Markdown rendering with Pandoc (external)

use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use pulldown_cmark::{html, Event, Options, Parser};
use tokio::process::Command;
use tokio::sync::OnceCell;

use super::{render_csv, render_markdown, render_text};
use crate::domain::report::Report;
use crate::ports::{ExportError, ExportFormat, ExportedReport, ReportExportService};

/// Default Pandoc timeout in seconds.
pub const DEFAULT_PDF_TIMEOUT_SECS: u64 = 30;

/// Export service using pulldown-cmark for HTML and Pandoc for PDF.
///
/// PDF export can be switched off entirely; when it is on but Pandoc cannot
/// be found, PDF requests fail with `ServiceUnavailable`. Pandoc is probed
/// once per service and the answer is shared by its clones.
#[derive(Debug, Clone)]
pub struct PulldownExportService {
    /// Path to pandoc executable. If None, will search PATH.
    pandoc_path: Option<String>,
    pdf_timeout_secs: u64,
    pdf_enabled: bool,
    pandoc_found: Arc<OnceCell<bool>>,
}

impl Default for PulldownExportService {
    fn default() -> Self {
        Self::new()
    }
}

impl PulldownExportService {
    pub fn new() -> Self {
        Self {
            pandoc_path: None,
            pdf_timeout_secs: DEFAULT_PDF_TIMEOUT_SECS,
            pdf_enabled: true,
            pandoc_found: Arc::new(OnceCell::new()),
        }
    }

    /// Set a custom path to the Pandoc executable.
    pub fn with_pandoc_path(mut self, path: impl Into<String>) -> Self {
        self.pandoc_path = Some(path.into());
        self.pandoc_found = Arc::new(OnceCell::new());
        self
    }

    pub fn with_pdf_timeout(mut self, timeout_secs: u64) -> Self {
        self.pdf_timeout_secs = timeout_secs;
        self
    }

    pub fn with_pdf_enabled(mut self, enabled: bool) -> Self {
        self.pdf_enabled = enabled;
        self
    }

    fn pandoc_command(&self) -> &str {
        self.pandoc_path.as_deref().unwrap_or("pandoc")
    }

    /// Wrap an HTML body in a complete, styled document.
    fn wrap_html(&self, body: &str, title: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
    <article class="ai4profit-report">
{body}
    </article>
</body>
</html>"#,
            title = html_escape(title),
            css = REPORT_CSS,
            body = body
        )
    }

    fn to_html(&self, report: &Report) -> String {
        let markdown = render_markdown(report);
        let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
        // Report values are data, never markup.
        let parser = Parser::new_ext(&markdown, options).map(|event| match event {
            Event::Html(raw) => Event::Text(raw),
            other => other,
        });

        let mut body = String::new();
        html::push_html(&mut body, parser);
        self.wrap_html(&body, &report.title)
    }

    /// Whether Pandoc is installed, running `pandoc --version` on first use.
    async fn check_pandoc(&self) -> bool {
        *self
            .pandoc_found
            .get_or_init(|| async {
                let output = Command::new(self.pandoc_command())
                    .arg("--version")
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .output()
                    .await;
                let found = output.map(|o| o.status.success()).unwrap_or(false);
                tracing::debug!(pandoc = self.pandoc_command(), found, "Probed Pandoc");
                found
            })
            .await
    }

    async fn to_pdf(&self, report: &Report) -> Result<Vec<u8>, ExportError> {
        if !self.pdf_enabled {
            return Err(ExportError::service_unavailable("PDF export is disabled"));
        }
        if !self.check_pandoc().await {
            return Err(ExportError::service_unavailable(
                "Pandoc is not installed. PDF export requires Pandoc.",
            ));
        }

        let markdown = render_markdown(report);
        let mut child = Command::new(self.pandoc_command())
            .args([
                "-f",
                "markdown",
                "-t",
                "pdf",
                "--pdf-engine=xelatex",
                "-V",
                "geometry:margin=1in",
                "-V",
                "fontsize=11pt",
            ])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ExportError::pdf_failed(format!("Failed to start Pandoc: {}", e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            use tokio::io::AsyncWriteExt;
            stdin
                .write_all(markdown.as_bytes())
                .await
                .map_err(|e| ExportError::pdf_failed(format!("Failed to write to Pandoc: {}", e)))?;
        }

        let output = tokio::time::timeout(
            Duration::from_secs(self.pdf_timeout_secs),
            child.wait_with_output(),
        )
        .await
        .map_err(|_| ExportError::Timeout(self.pdf_timeout_secs))?
        .map_err(|e| ExportError::pdf_failed(format!("Pandoc execution failed: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExportError::pdf_failed(format!(
                "Pandoc returned error: {}",
                stderr.trim()
            )));
        }

        Ok(output.stdout)
    }
}

#[async_trait]
impl ReportExportService for PulldownExportService {
    #[tracing::instrument(skip(self, report), fields(kind = %report.kind))]
    async fn export(
        &self,
        report: &Report,
        format: ExportFormat,
    ) -> Result<ExportedReport, ExportError> {
        let content = match format {
            ExportFormat::Text => render_text(report).into_bytes(),
            ExportFormat::Csv => render_csv(report)?.into_bytes(),
            ExportFormat::Markdown => render_markdown(report).into_bytes(),
            ExportFormat::Html => self.to_html(report).into_bytes(),
            ExportFormat::Pdf => self.to_pdf(report).await?,
        };

        let exported = ExportedReport::new(content, format, &report.base_filename());
        tracing::debug!(
            filename = %exported.filename,
            bytes = exported.content.len(),
            "Report rendered"
        );
        Ok(exported)
    }

    async fn is_pdf_available(&self) -> bool {
        self.pdf_enabled && self.check_pandoc().await
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const REPORT_CSS: &str = r#"
body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Arial, sans-serif;
    font-size: 15px;
    line-height: 1.5;
    color: #1f2937;
    max-width: 900px;
    margin: 0 auto;
    padding: 2rem;
}

h1 {
    font-size: 1.75rem;
    border-bottom: 2px solid #2563eb;
    padding-bottom: 0.5rem;
}

h2 {
    font-size: 1.2rem;
    margin-top: 2em;
    color: #2563eb;
}

table {
    width: 100%;
    border-collapse: collapse;
}

th, td {
    padding: 0.4rem 0.6rem;
    text-align: left;
    border: 1px solid #e5e7eb;
}

th {
    background-color: #f3f4f6;
}

td:last-child {
    font-variant-numeric: tabular-nums;
}

@media print {
    body { padding: 0; font-size: 11pt; }
    table { page-break-inside: avoid; }
}
"#;

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use crate::domain::report::{ReportKind, ReportSection};

    fn sample() -> Report {
        Report::new(
            ReportKind::QuickRoi,
            Timestamp::from_unix_secs(1_705_314_600).unwrap(),
        )
        .section(
            ReportSection::new("RESULTS")
                .entry("ROI", "65.00%")
                .entry("Note", "<b>bold</b> & more"),
        )
    }

    // ───────────────────────────────────────────────────────────────
    // In-process formats
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn text_export_uses_txt_filename() {
        let service = PulldownExportService::new();
        let exported = service.export(&sample(), ExportFormat::Text).await.unwrap();

        assert_eq!(exported.filename, "Quick_ROI_2024-01-15T10-30-00Z.txt");
        assert_eq!(exported.content_type, "text/plain; charset=utf-8");
        let text = String::from_utf8(exported.content).unwrap();
        assert!(text.starts_with("QUICK ROI REPORT\n"));
    }

    #[tokio::test]
    async fn csv_export_has_header_row() {
        let service = PulldownExportService::new();
        let exported = service.export(&sample(), ExportFormat::Csv).await.unwrap();

        assert_eq!(exported.filename, "Quick_ROI_2024-01-15T10-30-00Z.csv");
        let csv = String::from_utf8(exported.content).unwrap();
        assert!(csv.starts_with("Section,Field,Value\n"));
    }

    #[tokio::test]
    async fn markdown_export_is_the_markdown_rendering() {
        let service = PulldownExportService::new();
        let report = sample();
        let exported = service.export(&report, ExportFormat::Markdown).await.unwrap();

        assert_eq!(String::from_utf8(exported.content).unwrap(), render_markdown(&report));
    }

    // ───────────────────────────────────────────────────────────────
    // HTML
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn html_export_is_a_full_document_with_table() {
        let service = PulldownExportService::new();
        let exported = service.export(&sample(), ExportFormat::Html).await.unwrap();
        let html = String::from_utf8(exported.content).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>QUICK ROI REPORT</title>"));
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>65.00%</td>"));
        assert!(html.contains("class=\"ai4profit-report\""));
    }

    #[tokio::test]
    async fn html_export_escapes_markup_in_values() {
        let service = PulldownExportService::new();
        let exported = service.export(&sample(), ExportFormat::Html).await.unwrap();
        let html = String::from_utf8(exported.content).unwrap();

        assert!(!html.contains("<b>bold</b>"));
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(html.contains("&amp; more"));
    }

    #[test]
    fn html_escape_handles_special_chars() {
        assert_eq!(html_escape("<a & \"b\">"), "&lt;a &amp; &quot;b&quot;&gt;");
    }

    // ───────────────────────────────────────────────────────────────
    // PDF
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn pdf_export_disabled_is_unavailable() {
        let service = PulldownExportService::new().with_pdf_enabled(false);
        let result = service.export(&sample(), ExportFormat::Pdf).await;

        assert!(matches!(result, Err(ExportError::ServiceUnavailable(_))));
        assert!(!service.is_pdf_available().await);
    }

    #[tokio::test]
    async fn pdf_export_without_pandoc_is_unavailable() {
        let service =
            PulldownExportService::new().with_pandoc_path("/nonexistent/pandoc-binary");
        let result = service.export(&sample(), ExportFormat::Pdf).await;

        assert!(matches!(result, Err(ExportError::ServiceUnavailable(_))));
        assert!(!service.is_pdf_available().await);
    }

    #[tokio::test]
    async fn pandoc_probe_runs_once_and_is_shared() {
        let service =
            PulldownExportService::new().with_pandoc_path("/nonexistent/pandoc-binary");
        let clone = service.clone();
        assert_eq!(service.pandoc_found.get(), None);

        assert!(!service.is_pdf_available().await);
        assert_eq!(clone.pandoc_found.get(), Some(&false));
        assert!(!clone.is_pdf_available().await);
    }

    #[tokio::test]
    async fn disabled_pdf_never_probes_pandoc() {
        let service = PulldownExportService::new().with_pdf_enabled(false);
        assert!(!service.is_pdf_available().await);
        assert_eq!(service.pandoc_found.get(), None);
    }

    #[test]
    fn changing_pandoc_path_resets_probe() {
        let service = PulldownExportService::new();
        let _ = service.pandoc_found.set(true);

        let moved = service.with_pandoc_path("/opt/pandoc");
        assert_eq!(moved.pandoc_found.get(), None);
    }

    #[test]
    fn builder_methods_configure_service() {
        let service = PulldownExportService::new()
            .with_pandoc_path("/usr/local/bin/pandoc")
            .with_pdf_timeout(60);

        assert_eq!(service.pandoc_command(), "/usr/local/bin/pandoc");
        assert_eq!(service.pdf_timeout_secs, 60);
        assert!(service.pdf_enabled);
    }
}
