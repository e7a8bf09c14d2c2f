//! Document adapters - Report rendering and conversion.
//!
//! - `render_text` - Banner-style plain text
//! - `render_csv` - `Section,Field,Value` rows
//! - `render_markdown` - Markdown tables, the source for HTML and PDF
//! - `PulldownExportService` - Implements `ReportExportService` for every format

mod csv_renderer;
mod markdown_renderer;
mod pulldown_export_service;
mod text_renderer;

pub use csv_renderer::render_csv;
pub use markdown_renderer::render_markdown;
pub use pulldown_export_service::{PulldownExportService, DEFAULT_PDF_TIMEOUT_SECS};
pub use text_renderer::render_text;
