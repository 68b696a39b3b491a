//! # Loan Applicant Age Statistics
//!
//! Reads a CSV file of loan applicants, picks the age column and reports the
//! minimum, maximum, range and median age.
//!
//! ## Usage
//!
//! ```bash
//! # Analyze a file given on the command line
//! $ cargo run --release -- applicants.csv
//!
//! # Prompt for the file name instead
//! $ cargo run --release
//! Enter CSV filename: applicants.csv
//! ```
//!
//! ## Age Column
//!
//! The first of `age`, `Age`, `client_age`, `applicant_age` present in the header
//! is used. Rows whose value is not a plain run of digits are skipped.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing::{debug, info};

use crate::age_column::read_ages_from_csv;
use crate::error::AgeStatsError;
use crate::logging::init_logging;
use crate::report::write_statistics_report;
use crate::statistics::{Statistics, calculate_statistics};

#[derive(Parser, Debug)]
#[command(
    name = "loan_age_stats_rust",
    version,
    about = "Minimum, maximum, range and median age of loan applicants in a CSV file"
)]
pub struct Cli {
    /// Path to the applicants CSV file; prompted for when omitted
    pub csv_path: Option<PathBuf>,

    /// Log more detail to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Asks for the CSV file name on `out` and reads one line from `input`.
///
/// # Returns
///
/// * `Result<PathBuf, AgeStatsError>` - The trimmed answer, or `Prompt` if input is closed or unreadable
pub fn prompt_for_filename<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<PathBuf, AgeStatsError> {
    write!(out, "Enter CSV filename: ").map_err(AgeStatsError::Prompt)?;
    out.flush().map_err(AgeStatsError::Prompt)?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(AgeStatsError::Prompt)?;
    if read == 0 {
        return Err(AgeStatsError::Prompt(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "standard input closed before a filename was entered",
        )));
    }

    Ok(PathBuf::from(line.trim()))
}

/// Reads the ages in `input_file_path` and summarizes them.
///
/// # Errors
///
/// Any failure of the age scan, or `NoValidData` when no row held a valid age.
pub fn analyze_loan_ages(input_file_path: impl AsRef<Path>) -> Result<Statistics, AgeStatsError> {
    let mut scan = read_ages_from_csv(&input_file_path)?;

    let stats = calculate_statistics(&mut scan.ages).ok_or(AgeStatsError::NoValidData)?;
    info!(
        count = scan.ages.len(),
        min = stats.min,
        max = stats.max,
        median = %stats.median,
        "computed age statistics"
    );

    Ok(stats)
}

/// Runs one analysis: resolve the path, analyze the file, write the report.
///
/// Nothing but the prompt and the finished report is written to `out`.
pub fn run<R: BufRead, W: Write>(
    csv_path: Option<PathBuf>,
    input: &mut R,
    out: &mut W,
) -> Result<(), AgeStatsError> {
    let csv_path = match csv_path {
        Some(path) => path,
        None => prompt_for_filename(input, out)?,
    };
    debug!(path = %csv_path.display(), "analyzing csv file");

    let stats = analyze_loan_ages(&csv_path)?;
    write_statistics_report(out, &stats).map_err(AgeStatsError::Output)
}

/// Main entry point for the loan applicant age statistics tool.
///
/// Every failure is printed as a single line on stdout and mapped to its own
/// exit code; a printed report exits with success.
pub fn loan_age_stats_main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();

    match run(cli.csv_path, &mut input, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Best effort; stdout may be the thing that failed
            let _ = writeln!(out, "{}", e);
            e.exit_code()
        }
    }
}
