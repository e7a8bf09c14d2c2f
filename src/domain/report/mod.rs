//! Report module - Format-neutral report structures and their builders.
//!
//! A [`Report`] is plain data: a title, a generation time and ordered
//! sections of labelled values. Renderers for text, CSV, Markdown, HTML and
//! PDF live in the document adapters.

mod builder;
#[allow(clippy::module_inception)]
mod report;

pub use builder::{money, number, percent, ReportBuilder};
pub use report::{Report, ReportEntry, ReportKind, ReportSection, PLACEHOLDER};
