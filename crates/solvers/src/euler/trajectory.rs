use kermack_model::{Derivative, State};

/// The recorded history of a simulation as index-aligned columns.
///
/// Row `k` describes the state after `k` steps, with row 0 holding the
/// initial state. The derivative columns hold the rates that produced each
/// row from its predecessor, so they are `None` at row 0, where no step has
/// happened yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    /// Simulation time at each recorded instant.
    pub time: Vec<f64>,

    /// Susceptible population at each recorded instant.
    pub susceptible: Vec<f64>,

    /// Infected population at each recorded instant.
    pub infected: Vec<f64>,

    /// Recovered population at each recorded instant.
    pub recovered: Vec<f64>,

    /// Rate of change of the susceptible population over the preceding step.
    pub ds_dt: Vec<Option<f64>>,

    /// Rate of change of the infected population over the preceding step.
    pub di_dt: Vec<Option<f64>>,

    /// Rate of change of the recovered population over the preceding step.
    pub dr_dt: Vec<Option<f64>>,
}

impl Trajectory {
    /// Creates a trajectory whose first row is the given state.
    #[must_use]
    pub fn starting_at(initial: State) -> Self {
        let mut trajectory = Self::default();
        trajectory.time.push(initial.time);
        trajectory.ds_dt.push(None);
        trajectory.di_dt.push(None);
        trajectory.dr_dt.push(None);
        trajectory.susceptible.push(initial.susceptible);
        trajectory.infected.push(initial.infected);
        trajectory.recovered.push(initial.recovered);
        trajectory
    }

    /// Appends a stepped state along with the rates that produced it.
    pub fn record(&mut self, state: State, derivative: Derivative) {
        self.time.push(state.time);
        self.ds_dt.push(Some(derivative.susceptible));
        self.di_dt.push(Some(derivative.infected));
        self.dr_dt.push(Some(derivative.recovered));
        self.susceptible.push(state.susceptible);
        self.infected.push(state.infected);
        self.recovered.push(state.recovered);
    }

    /// Returns the number of recorded instants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Returns the most recently recorded state.
    #[must_use]
    pub fn last_state(&self) -> Option<State> {
        let index = self.time.len().checked_sub(1)?;
        Some(State::new(
            self.time[index],
            self.susceptible[index],
            self.infected[index],
            self.recovered[index],
        ))
    }
}
