/// The compartment populations at an instant in time.
///
/// Compartments are real-valued, so a `State` can represent either head
/// counts (299 susceptible people) or normalized shares of a population
/// (0.99 susceptible). The model equations are the same in both cases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    /// Simulation time.
    pub time: f64,

    /// Population that can still contract the infection.
    pub susceptible: f64,

    /// Population currently infected and infectious.
    pub infected: f64,

    /// Population that has recovered and is immune.
    pub recovered: f64,
}

/// The rate of change of a [`State`]'s compartments with respect to time.
///
/// Each field is the time derivative of the [`State`] field of the same name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derivative {
    pub susceptible: f64,
    pub infected: f64,
    pub recovered: f64,
}

impl State {
    /// Creates a state from a time and three compartment populations.
    #[must_use]
    pub fn new(time: f64, susceptible: f64, infected: f64, recovered: f64) -> Self {
        Self {
            time,
            susceptible,
            infected,
            recovered,
        }
    }

    /// Returns the total population across all compartments.
    #[must_use]
    pub fn population(&self) -> f64 {
        self.susceptible + self.infected + self.recovered
    }

    /// Returns `true` if the time and every compartment are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.time.is_finite()
            && self.susceptible.is_finite()
            && self.infected.is_finite()
            && self.recovered.is_finite()
    }

    /// Returns the state after one explicit Euler step.
    ///
    /// Each compartment advances by `derivative * time_step` and the time
    /// advances by `time_step`.
    #[must_use]
    pub fn step(&self, derivative: Derivative, time_step: f64) -> Self {
        Self {
            time: self.time + time_step,
            susceptible: self.susceptible + derivative.susceptible * time_step,
            infected: self.infected + derivative.infected * time_step,
            recovered: self.recovered + derivative.recovered * time_step,
        }
    }
}
