//! Loan Applicant Age Statistics - Main Application
//!
//! Entry point for the loan applicant age statistics tool. All of the work is
//! done in the loan_age_stats module and the pipeline modules it drives.
//!
//! # Usage
//!
//! ```bash
//! $ cargo run --release -- path/to/applicants.csv
//!
//! # Without an argument the file name is asked for interactively
//! $ cargo run --release
//! ```

mod age_column;
mod error;
mod loan_age_stats;
mod logging;
mod report;
mod statistics;

use std::process::ExitCode;

use loan_age_stats::loan_age_stats_main;

/// call from module
fn main() -> ExitCode {
    loan_age_stats_main()
}
