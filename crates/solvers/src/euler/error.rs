use thiserror::Error;

/// Errors that can occur during a simulation run.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A time or compartment value became `NaN` or infinite.
    ///
    /// Step 0 means the initial state was already non-finite. Explicit Euler
    /// diverges when the time step is too large for the rates involved;
    /// shrinking the time step is the usual fix.
    #[error("state became non-finite at step {step}")]
    Diverged { step: usize },
}
