//! Inactivity report: builder, data shapes, and markdown rendering.
pub mod builder;
pub mod errors;
pub mod markdown;
pub mod types;

pub use builder::{build_report, build_report_now};
pub use errors::ReportError;
pub use markdown::{render_markdown, DEFAULT_REPORT_TITLE};
pub use types::GuildReport;
