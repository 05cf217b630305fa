use thiserror::Error;

/// Configuration for the Euler solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    time_step: f64,
    end_time: Option<f64>,
    burnout_tolerance: f64,
    max_steps: usize,
}

/// Errors that can occur when validating an Euler solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("time_step must be finite and positive")]
    TimeStep,

    #[error("end_time must be finite")]
    EndTime,

    #[error("burnout_tolerance must be finite and non-negative")]
    BurnoutTolerance,

    #[error("max_steps must be nonzero")]
    MaxSteps,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(0.1, None).unwrap()
    }
}

impl Config {
    /// Default tolerance for the burnout check.
    ///
    /// Suits count-scale populations, where "fewer than one person left
    /// outside the recovered compartment" means the epidemic is over. See
    /// [`Config::with_burnout_tolerance`] for normalized populations.
    pub const DEFAULT_BURNOUT_TOLERANCE: f64 = 1.0;

    /// Default hard cap on the number of steps.
    pub const DEFAULT_MAX_STEPS: usize = 1_000_000;

    /// Creates a new config with a validated time step and end time.
    ///
    /// An end time of `None` runs the simulation without a horizon: it stops
    /// only on burnout or the step limit. The burnout tolerance and step
    /// limit start at [`Config::DEFAULT_BURNOUT_TOLERANCE`] and
    /// [`Config::DEFAULT_MAX_STEPS`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TimeStep`] if `time_step` is zero, negative, or
    /// non-finite. Returns [`ConfigError::EndTime`] if `end_time` is
    /// `Some(NaN)` or infinite.
    pub fn new(time_step: f64, end_time: Option<f64>) -> Result<Self, ConfigError> {
        if !time_step.is_finite() || time_step <= 0.0 {
            return Err(ConfigError::TimeStep);
        }
        if let Some(end) = end_time {
            if !end.is_finite() {
                return Err(ConfigError::EndTime);
            }
        }

        Ok(Self {
            time_step,
            end_time,
            burnout_tolerance: Self::DEFAULT_BURNOUT_TOLERANCE,
            max_steps: Self::DEFAULT_MAX_STEPS,
        })
    }

    /// Returns the config with a validated burnout tolerance.
    ///
    /// The simulation stops once the recovered compartment is within this
    /// tolerance of the initial population. The default of `1.0` fits head
    /// counts; normalized populations (compartments summing to 1) want
    /// something like `1e-4`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::BurnoutTolerance`] if `tolerance` is negative
    /// or non-finite.
    pub fn with_burnout_tolerance(self, tolerance: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::BurnoutTolerance);
        }

        Ok(Self {
            burnout_tolerance: tolerance,
            ..self
        })
    }

    /// Returns the config with a validated hard cap on the number of steps.
    ///
    /// The solver always takes at least one step, so the cap cannot be zero.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MaxSteps`] if `max_steps` is zero.
    pub fn with_max_steps(self, max_steps: usize) -> Result<Self, ConfigError> {
        if max_steps == 0 {
            return Err(ConfigError::MaxSteps);
        }

        Ok(Self { max_steps, ..self })
    }

    /// Returns the time step.
    #[must_use]
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Returns the end time, if any.
    #[must_use]
    pub fn end_time(&self) -> Option<f64> {
        self.end_time
    }

    /// Returns the burnout tolerance.
    #[must_use]
    pub fn burnout_tolerance(&self) -> f64 {
        self.burnout_tolerance
    }

    /// Returns the hard cap on the number of steps.
    #[must_use]
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }
}
