//! Run summary types and the markdown step summary.

mod error;
mod renderer;
mod run_summary;

pub use error::SummaryError;
pub use renderer::{create_handlebars_registry, SummaryRenderer};
pub use run_summary::RunSummary;
