//! Numerical solvers for the Kermack SIR simulator.
//!
//! One solver is provided:
//!
//! - [`euler`] — fixed-step explicit Euler integration of the SIR equations,
//!   recording the full trajectory and stopping on a time horizon, epidemic
//!   burnout, or a step limit

pub mod euler;
