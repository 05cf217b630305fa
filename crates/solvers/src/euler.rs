//! Fixed-step explicit Euler simulation of the SIR model.
//!
//! This module advances a [`State`] through time with explicit Euler:
//!
//! ```text
//! state_{n+1} = state_n + rates(state_n) * dt
//! ```
//!
//! Every instant is recorded in a [`Trajectory`], including the initial
//! state, so a run that completes `n` steps yields `n + 1` recorded rows.
//!
//! # Termination
//!
//! After each step the solver checks, in order:
//!
//! 1. **Horizon** — the time has reached the configured end time.
//! 2. **Burnout** — the recovered compartment has absorbed the initial
//!    population to within the configured tolerance.
//! 3. **Step limit** — the configured maximum number of steps has run.
//!
//! The checks run on the freshly stepped state, so at least one step is
//! always taken, even when a condition already holds at the initial state.
//! When several conditions hold at the same instant, the earliest in the
//! list wins.
//!
//! # Precision
//!
//! All arithmetic is `f64`. Runs are deterministic: the same parameters,
//! initial state, and config always produce bitwise-identical trajectories.
//!
//! # Example
//!
//! ```
//! use kermack_model::{Parameters, State};
//! use kermack_solvers::euler::{self, Config};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let parameters = Parameters::new(0.03, 0.5)?;
//! let initial = State::new(0.0, 299.0, 1.0, 0.0);
//! let config = Config::new(0.1, Some(20.0))?;
//!
//! let solution = euler::solve(&parameters, initial, &config)?;
//!
//! assert_eq!(solution.trajectory.len(), solution.steps + 1);
//! println!("stopped after {} steps: {:?}", solution.steps, solution.status);
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod solution;
mod trajectory;


pub use config::{Config, ConfigError};
pub use error::Error;
pub use solution::{Solution, Status};
pub use trajectory::Trajectory;

use kermack_model::{Parameters, State};

/// Simulates an SIR epidemic using fixed-step explicit Euler.
///
/// # Algorithm
///
/// 1. Record the initial state.
/// 2. For each step:
///    - Evaluate the rate equations at the current state.
///    - Step every compartment forward by `rate * dt` and the time by `dt`.
///    - Record the stepped state along with the rates that produced it.
///    - Check the termination conditions against the stepped state.
/// 3. Return the solution with the full trajectory.
///
/// See the [module docs](self) for the termination conditions and their
/// precedence.
///
/// # Errors
///
/// Returns [`Error::Diverged`] if the initial state is non-finite (reported
/// as step 0) or if any step produces a non-finite time or compartment. No
/// trajectory is returned in that case.
pub fn solve(parameters: &Parameters, initial: State, config: &Config) -> Result<Solution, Error> {
    if !initial.is_finite() {
        return Err(Error::Diverged { step: 0 });
    }

    let initial_population = initial.population();
    let mut trajectory = Trajectory::starting_at(initial);
    let mut current = initial;

    for step in 1..=config.max_steps() {
        let derivative = parameters.rates(&current);
        let next = current.step(derivative, config.time_step());

        if !next.is_finite() {
            return Err(Error::Diverged { step });
        }

        trajectory.record(next, derivative);

        if let Some(status) = stop_status(config, initial_population, &next) {
            return Ok(Solution {
                status,
                trajectory,
                steps: step,
            });
        }

        current = next;
    }

    Ok(Solution {
        status: Status::StepLimit,
        trajectory,
        steps: config.max_steps(),
    })
}

/// Checks the termination conditions against a freshly stepped state.
///
/// Returns the status to stop with, or `None` to keep stepping. The horizon
/// check runs before the burnout check, so it wins when both conditions hold
/// at the same instant. The step limit is enforced by the solve loop itself.
fn stop_status(config: &Config, initial_population: f64, state: &State) -> Option<Status> {
    if let Some(end_time) = config.end_time() {
        if state.time >= end_time {
            return Some(Status::Horizon);
        }
    }

    if state.recovered >= initial_population - config.burnout_tolerance() {
        return Some(Status::Burnout);
    }

    None
}
