use super::Trajectory;

/// Indicates why the simulation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Reached the configured end time.
    Horizon,

    /// The recovered compartment absorbed the initial population to within
    /// the configured tolerance.
    Burnout,

    /// Reached the step limit before any other condition.
    StepLimit,
}

/// The result of a simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Why the simulation stopped.
    pub status: Status,

    /// Recorded history of every instant (including the initial state).
    pub trajectory: Trajectory,

    /// Number of integration steps completed.
    pub steps: usize,
}
