//! Failure kinds of the age statistics pipeline.

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgeStatsError {
    #[error("Error reading CSV filename: {0}")]
    Prompt(#[source] std::io::Error),

    #[error("Error: File '{}' does not exist.", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Error: Age column not found in CSV file.")]
    ColumnNotFound,

    #[error("Error reading CSV file: {0}")]
    Read(#[from] csv::Error),

    #[error("No valid age data found.")]
    NoValidData,

    #[error("Error writing report: {0}")]
    Output(#[source] std::io::Error),
}

impl AgeStatsError {
    /// Process exit code for this failure; 0 is reserved for a printed report.
    pub fn exit_code(&self) -> ExitCode {
        let code = match self {
            Self::Prompt(_) => 1,
            Self::FileNotFound { .. } => 2,
            Self::ColumnNotFound => 3,
            Self::Read(_) => 4,
            Self::NoValidData => 5,
            Self::Output(_) => 6,
        };
        ExitCode::from(code)
    }
}
