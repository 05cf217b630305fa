use thiserror::Error;

use crate::{Derivative, State};

/// Validated SIR rate parameters.
///
/// The transmission rate scales the `s * i` contact term and the recovery
/// rate scales the `i` decay term. Both are per unit time and must be finite
/// and non-negative; either may be zero, which switches the corresponding
/// process off.
///
/// # Examples
/// ```
/// use kermack_model::{Parameters, State};
///
/// let parameters = Parameters::new(0.5, 0.25).unwrap();
/// let state = State::new(0.0, 8.0, 2.0, 0.0);
///
/// let rates = parameters.rates(&state);
///
/// assert_eq!(rates.susceptible, -8.0);
/// assert_eq!(rates.infected, 7.5);
/// assert_eq!(rates.recovered, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    transmission_rate: f64,
    recovery_rate: f64,
}

/// Errors that can occur when validating SIR parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ParameterError {
    /// Transmission rate was negative or not finite.
    #[error("transmission rate must be finite and non-negative, got {0}")]
    TransmissionRate(f64),

    /// Recovery rate was negative or not finite.
    #[error("recovery rate must be finite and non-negative, got {0}")]
    RecoveryRate(f64),
}

impl Parameters {
    /// Creates validated parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::TransmissionRate`] or
    /// [`ParameterError::RecoveryRate`] if the corresponding rate is negative,
    /// `NaN`, or infinite.
    pub fn new(transmission_rate: f64, recovery_rate: f64) -> Result<Self, ParameterError> {
        if !transmission_rate.is_finite() || transmission_rate < 0.0 {
            return Err(ParameterError::TransmissionRate(transmission_rate));
        }
        if !recovery_rate.is_finite() || recovery_rate < 0.0 {
            return Err(ParameterError::RecoveryRate(recovery_rate));
        }

        Ok(Self {
            transmission_rate,
            recovery_rate,
        })
    }

    /// Returns the transmission rate.
    #[must_use]
    pub fn transmission_rate(&self) -> f64 {
        self.transmission_rate
    }

    /// Returns the recovery rate.
    #[must_use]
    pub fn recovery_rate(&self) -> f64 {
        self.recovery_rate
    }

    /// Evaluates the SIR rate equations at a state.
    ///
    /// New infections occur at `transmission_rate * susceptible * infected`
    /// and new recoveries at `recovery_rate * infected`. Infections drain the
    /// susceptible compartment into the infected one, and recoveries drain
    /// the infected compartment into the recovered one, so the three rates
    /// sum to zero.
    #[must_use]
    pub fn rates(&self, state: &State) -> Derivative {
        let new_infections = self.transmission_rate * state.susceptible * state.infected;
        let new_recoveries = self.recovery_rate * state.infected;

        Derivative {
            susceptible: -new_infections,
            infected: new_infections - new_recoveries,
            recovered: new_recoveries,
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn valid_rates() {
        let parameters = Parameters::new(0.03, 0.5).unwrap();
        assert_eq!(parameters.transmission_rate(), 0.03);
        assert_eq!(parameters.recovery_rate(), 0.5);

        // Zero disables a process but is still a valid rate.
        assert!(Parameters::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn invalid_rates() {
        assert!(matches!(
            Parameters::new(-0.01, 0.5),
            Err(ParameterError::TransmissionRate(_))
        ));
        assert!(matches!(
            Parameters::new(f64::NAN, 0.5),
            Err(ParameterError::TransmissionRate(_))
        ));
        assert!(matches!(
            Parameters::new(0.03, -0.5),
            Err(ParameterError::RecoveryRate(_))
        ));
        assert!(matches!(
            Parameters::new(0.03, f64::INFINITY),
            Err(ParameterError::RecoveryRate(_))
        ));
    }

    #[test]
    fn rates_move_infections_and_recoveries_between_compartments() {
        let parameters = Parameters::new(0.5, 0.25).unwrap();
        let state = State::new(0.0, 8.0, 2.0, 1.0);

        let rates = parameters.rates(&state);

        // new infections = 0.5 * 8 * 2 = 8, new recoveries = 0.25 * 2 = 0.5
        assert_eq!(rates.susceptible, -8.0);
        assert_eq!(rates.infected, 7.5);
        assert_eq!(rates.recovered, 0.5);
    }

    #[test]
    fn rates_sum_to_zero() {
        let parameters = Parameters::new(0.03, 0.5).unwrap();
        let state = State::new(0.0, 299.0, 1.0, 0.0);

        let rates = parameters.rates(&state);

        assert_relative_eq!(
            rates.susceptible + rates.infected + rates.recovered,
            0.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn rates_vanish_without_infected() {
        let parameters = Parameters::new(0.03, 0.5).unwrap();
        let state = State::new(0.0, 300.0, 0.0, 0.0);

        let rates = parameters.rates(&state);

        assert_eq!(rates.susceptible, 0.0);
        assert_eq!(rates.infected, 0.0);
        assert_eq!(rates.recovered, 0.0);
    }
}
