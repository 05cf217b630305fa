//! Trajectory reporting for the Kermack SIR simulator.
//!
//! Writes a [`Trajectory`] as CSV with one row per recorded instant:
//!
//! ```text
//! Time,S,I,R,dSdt,dIdt,dRdt
//! 0,299,1,0,,,
//! 0.1,298.103,1.847,0.05,-8.97,8.47,0.5
//! ```
//!
//! The derivative cells are empty on the first row, where no step has
//! produced rates yet.

use std::{fs::File, io, path::Path};

use thiserror::Error;

use kermack_solvers::euler::Trajectory;

/// Column headers for a trajectory CSV.
const HEADERS: [&str; 7] = ["Time", "S", "I", "R", "dSdt", "dIdt", "dRdt"];

/// Errors that can occur while exporting a trajectory.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A record could not be encoded or written.
    #[error("failed to write csv record: {0}")]
    Csv(#[from] csv::Error),

    /// The output file could not be created or flushed.
    #[error("failed to write csv output: {0}")]
    Io(#[from] io::Error),
}

/// Writes a trajectory as CSV to the given writer.
///
/// # Errors
///
/// Returns [`ExportError::Csv`] if a record cannot be written and
/// [`ExportError::Io`] if the writer cannot be flushed.
pub fn write_csv<W: io::Write>(trajectory: &Trajectory, writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADERS)?;

    for row in 0..trajectory.len() {
        csv_writer.write_record([
            trajectory.time[row].to_string(),
            trajectory.susceptible[row].to_string(),
            trajectory.infected[row].to_string(),
            trajectory.recovered[row].to_string(),
            rate_cell(trajectory.ds_dt[row]),
            rate_cell(trajectory.di_dt[row]),
            rate_cell(trajectory.dr_dt[row]),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Writes a trajectory as CSV to a file, creating or truncating it.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if the file cannot be created and the same
/// errors as [`write_csv`] while writing to it.
pub fn write_csv_path<P: AsRef<Path>>(trajectory: &Trajectory, path: P) -> Result<(), ExportError> {
    let file = File::create(path)?;
    write_csv(trajectory, file)
}

/// Formats a derivative cell, leaving it empty where no rate was recorded.
fn rate_cell(rate: Option<f64>) -> String {
    rate.map(|r| r.to_string()).unwrap_or_default()
}
