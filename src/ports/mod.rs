//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ReportExportService` - Renders reports into downloadable files

mod report_export_service;

pub use report_export_service::{ExportError, ExportFormat, ExportedReport, ReportExportService};
