//! Simulates the reference outbreak and exports the trajectory as CSV.
//!
//! A population of 300 with one initial infection, integrated at dt = 0.1
//! until t = 20 or the epidemic burns out, whichever comes first.
//!
//! # Usage
//!
//! ```text
//! cargo run --example outbreak
//! cargo run --example outbreak -- somewhere/else.csv
//! ```

use std::error::Error;

use kermack_model::{Parameters, State};
use kermack_report::write_csv_path;
use kermack_solvers::euler::{self, Config};

fn main() -> Result<(), Box<dyn Error>> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "outbreak.csv".into());

    let parameters = Parameters::new(0.03, 0.5)?;
    let initial = State::new(0.0, 299.0, 1.0, 0.0);
    let config = Config::new(0.1, Some(20.0))?;

    let solution = euler::solve(&parameters, initial, &config)?;

    println!(
        "stopped after {} steps: {:?}",
        solution.steps, solution.status
    );

    let peak_infected = solution
        .trajectory
        .infected
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    println!("peak infected: {peak_infected:.2}");

    if let Some(last) = solution.trajectory.last_state() {
        println!(
            "t = {:.1}: S = {:.2}, I = {:.2}, R = {:.2}",
            last.time, last.susceptible, last.infected, last.recovered
        );
    }

    write_csv_path(&solution.trajectory, &path)?;
    println!("wrote {} rows to {path}", solution.trajectory.len());

    Ok(())
}
