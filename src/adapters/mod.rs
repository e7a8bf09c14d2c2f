//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `document` - Report rendering (text, CSV, Markdown, HTML, PDF)
//! - `http` - Axum REST API

pub mod document;
pub mod http;

pub use document::PulldownExportService;
pub use http::{build_router, EngineAppState};
