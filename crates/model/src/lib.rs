//! SIR compartmental model definitions for the Kermack simulator.
//!
//! This crate defines the domain types that solvers and reports build on:
//!
//! - [`Parameters`] — validated transmission and recovery rates
//! - [`State`] — the compartment populations at an instant in time
//! - [`Derivative`] — the rate of change of each compartment
//!
//! The model follows Kermack and McKendrick: infection moves people from
//! susceptible to infected at a rate proportional to `s * i`, and recovery
//! moves them from infected to recovered at a rate proportional to `i`. The
//! three rates sum to zero, so the total population is invariant under the
//! continuous dynamics.

mod parameters;
mod state;

pub use parameters::{ParameterError, Parameters};
pub use state::{Derivative, State};
