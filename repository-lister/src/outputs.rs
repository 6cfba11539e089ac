//! GitHub Actions step outputs and job summary.
//!
//! Outputs go to the file named by `GITHUB_OUTPUT` using the multi-line
//! `name<<DELIMITER` form, the summary is appended to `GITHUB_STEP_SUMMARY`.
//! Outside Actions both fall back to stdout.

mod error;

pub use error::OutputError;

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// Environment variable naming the step output file.
pub const OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Environment variable naming the job summary file.
pub const STEP_SUMMARY_ENV: &str = "GITHUB_STEP_SUMMARY";

/// Where step outputs and the summary document are written.
#[derive(Debug, Clone, Default)]
pub struct OutputSink {
    output_path: Option<PathBuf>,
    summary_path: Option<PathBuf>,
}

impl OutputSink {
    /// Creates a sink writing to the given files; `None` means stdout.
    #[must_use]
    pub fn new(output_path: Option<PathBuf>, summary_path: Option<PathBuf>) -> Self {
        Self {
            output_path,
            summary_path,
        }
    }

    /// Creates a sink from `GITHUB_OUTPUT` and `GITHUB_STEP_SUMMARY`.
    ///
    /// Unset or empty variables fall back to stdout.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(path_from_env(OUTPUT_ENV), path_from_env(STEP_SUMMARY_ENV))
    }

    /// Returns the step output file, if any.
    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }

    /// Returns the job summary file, if any.
    pub fn summary_path(&self) -> Option<&Path> {
        self.summary_path.as_deref()
    }

    /// Publishes a step output.
    ///
    /// # Errors
    ///
    /// Returns an error if the output file cannot be appended to.
    pub fn set_output(&self, name: &str, value: &str) -> Result<(), OutputError> {
        match &self.output_path {
            Some(path) => {
                debug!(name, "Setting output");
                append(path, &output_entry(name, value))
            }
            None => {
                println!("{name}={value}");
                Ok(())
            }
        }
    }

    /// Appends a markdown document to the job summary.
    ///
    /// # Errors
    ///
    /// Returns an error if the summary file cannot be appended to.
    pub fn write_summary(&self, markdown: &str) -> Result<(), OutputError> {
        match &self.summary_path {
            Some(path) => append(path, markdown),
            None => {
                println!("{markdown}");
                Ok(())
            }
        }
    }
}

fn path_from_env(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Formats one output in the delimited multi-line form.
fn output_entry(name: &str, value: &str) -> String {
    let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());
    format!("{name}<<{delimiter}\n{value}\n{delimiter}\n")
}

fn append(path: &Path, content: &str) -> Result<(), OutputError> {
    let write_error = |source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(write_error)?;
    file.write_all(content.as_bytes()).map_err(write_error)
}
