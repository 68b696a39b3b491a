use std::io::{self, Write};

use crate::statistics::Statistics;

/// Writes the age statistics report.
///
/// A title line is followed by minimum, maximum, range and median, always in
/// that order. The median is shown as a whole number unless it falls on a half.
pub fn write_statistics_report<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(out, "Loan Applicant Age Statistics:")?;
    writeln!(out, "Minimum Age: {}", stats.min)?;
    writeln!(out, "Maximum Age: {}", stats.max)?;
    writeln!(out, "Age Range: {}", stats.range)?;
    writeln!(out, "Median Age: {}", stats.median)?;
    Ok(())
}
