//! Isentropic relations between static and stagnation properties.
//!
//! All relations follow from the stagnation temperature ratio
//! `T₀/T = 1 + (γ − 1)/2·M²` and the isentropic exponents:
//!
//! - `p/p₀ = (T/T₀)^(γ/(γ−1))`
//! - `ρ/ρ₀ = (T/T₀)^(1/(γ−1))`

use uom::si::{
    f64::{MassDensity, Pressure, ThermodynamicTemperature, Velocity},
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    gas::{HeatCapacityRatio, PerfectGas},
};

use super::{FlowError, MachNumber};

/// Computes the static pressure from the stagnation pressure.
///
/// ```
/// use nozzle_models::support::{flow::{MachNumber, static_pressure}, gas::HeatCapacityRatio};
/// use uom::si::{f64::Pressure, pressure::pascal};
///
/// let p0 = Pressure::new::<pascal>(100_000.0);
/// let p = static_pressure(HeatCapacityRatio::air(), MachNumber::sonic(), p0);
///
/// // Critical pressure ratio of air.
/// assert!((p.get::<pascal>() / 100_000.0 - 0.528_28).abs() < 1e-5);
/// ```
#[must_use]
pub fn static_pressure(
    gamma: HeatCapacityRatio,
    mach: MachNumber,
    stagnation_pressure: Pressure,
) -> Pressure {
    let g = *gamma;
    stagnation_pressure * gamma.stagnation_factor(*mach).powf(-g / (g - 1.0))
}

/// Computes the static density from the stagnation density.
#[must_use]
pub fn static_density(
    gamma: HeatCapacityRatio,
    mach: MachNumber,
    stagnation_density: MassDensity,
) -> MassDensity {
    let g = *gamma;
    stagnation_density * gamma.stagnation_factor(*mach).powf(-1.0 / (g - 1.0))
}

/// Computes the static temperature from the stagnation temperature.
#[must_use]
pub fn static_temperature(
    gamma: HeatCapacityRatio,
    mach: MachNumber,
    stagnation_temperature: ThermodynamicTemperature,
) -> ThermodynamicTemperature {
    let t0 = stagnation_temperature.get::<kelvin>();
    ThermodynamicTemperature::new::<kelvin>(t0 / gamma.stagnation_factor(*mach))
}

/// Computes the local flow velocity `V = M·sqrt(γ·R·T)`.
///
/// `T` is the local static temperature derived from the stagnation temperature,
/// so the result is consistent with [`static_temperature`].
#[must_use]
pub fn velocity(
    gas: &PerfectGas,
    mach: MachNumber,
    stagnation_temperature: ThermodynamicTemperature,
) -> Velocity {
    let t = static_temperature(gas.gamma(), mach, stagnation_temperature);
    gas.speed_of_sound(t) * *mach
}

/// Stagnation (total) conditions of a flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagnation {
    pressure: Pressure,
    temperature: ThermodynamicTemperature,
}

impl Stagnation {
    /// Creates validated stagnation conditions.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::OutOfDomain`] unless both pressure and absolute
    /// temperature are strictly positive and finite.
    pub fn new(
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<Self, FlowError> {
        check_positive("stagnation pressure", pressure.get::<pascal>())?;
        check_positive("stagnation temperature", temperature.get::<kelvin>())?;
        Ok(Self {
            pressure,
            temperature,
        })
    }

    #[must_use]
    pub fn pressure(&self) -> Pressure {
        self.pressure
    }

    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.temperature
    }

    /// Computes stagnation density from the ideal gas equation of state.
    #[must_use]
    pub fn density(&self, gas: &PerfectGas) -> MassDensity {
        gas.density(self.temperature, self.pressure)
    }
}

/// Static flow state at one station.
///
/// Each call to [`FlowState::at`] produces a fresh value; states are not
/// stored or shared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowState {
    pub mach: MachNumber,
    pub pressure: Pressure,
    pub density: MassDensity,
    pub temperature: ThermodynamicTemperature,
    pub velocity: Velocity,
}

impl FlowState {
    /// Evaluates the static state at `mach` for the given stagnation conditions.
    #[must_use]
    pub fn at(gas: &PerfectGas, stagnation: &Stagnation, mach: MachNumber) -> Self {
        let gamma = gas.gamma();
        let temperature = static_temperature(gamma, mach, stagnation.temperature);

        Self {
            mach,
            pressure: static_pressure(gamma, mach, stagnation.pressure),
            density: static_density(gamma, mach, stagnation.density(gas)),
            temperature,
            velocity: gas.speed_of_sound(temperature) * *mach,
        }
    }
}

/// Checks that a scalar input is strictly positive and finite.
pub(super) fn check_positive(name: &str, value: f64) -> Result<(), FlowError> {
    StrictlyPositive::check(&value)
        .map_err(|err| FlowError::out_of_domain(format!("{name} {value}: {err}")))?;
    if !value.is_finite() {
        return Err(FlowError::out_of_domain(format!("{name} must be finite")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        mass_density::kilogram_per_cubic_meter, pressure::kilopascal,
        velocity::meter_per_second,
    };

    fn mach(value: f64) -> MachNumber {
        MachNumber::new(value).unwrap()
    }

    fn chamber() -> Stagnation {
        Stagnation::new(
            Pressure::new::<kilopascal>(500.0),
            ThermodynamicTemperature::new::<kelvin>(600.0),
        )
        .unwrap()
    }

    #[test]
    fn at_rest_static_equals_stagnation() {
        let gamma = HeatCapacityRatio::air();
        let p0 = Pressure::new::<kilopascal>(250.0);
        let t0 = ThermodynamicTemperature::new::<kelvin>(400.0);

        assert_relative_eq!(
            static_pressure(gamma, mach(0.0), p0).get::<kilopascal>(),
            250.0
        );
        assert_relative_eq!(
            static_temperature(gamma, mach(0.0), t0).get::<kelvin>(),
            400.0
        );
    }

    #[test]
    fn air_table_values_at_mach_two() {
        let gamma = HeatCapacityRatio::air();
        let m = mach(2.0);

        let p = static_pressure(gamma, m, Pressure::new::<pascal>(1.0));
        let t = static_temperature(gamma, m, ThermodynamicTemperature::new::<kelvin>(1.0));
        let rho = static_density(gamma, m, MassDensity::new::<kilogram_per_cubic_meter>(1.0));

        assert_relative_eq!(p.get::<pascal>(), 0.127_804, epsilon = 1e-6);
        assert_relative_eq!(t.get::<kelvin>(), 1.0 / 1.8, epsilon = 1e-12);
        assert_relative_eq!(rho.get::<kilogram_per_cubic_meter>(), 0.230_048, epsilon = 1e-6);
    }

    #[test]
    fn flow_state_obeys_equation_of_state() {
        let gas = PerfectGas::air();
        let stagnation = chamber();

        let state = FlowState::at(&gas, &stagnation, mach(1.7));
        let rho = gas.density(state.temperature, state.pressure);

        assert_relative_eq!(
            rho.get::<kilogram_per_cubic_meter>(),
            state.density.get::<kilogram_per_cubic_meter>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn velocity_uses_static_temperature() {
        let gas = PerfectGas::air();
        let t0 = ThermodynamicTemperature::new::<kelvin>(600.0);
        let m = mach(2.0);

        let v = velocity(&gas, m, t0).get::<meter_per_second>();
        let expected = 2.0 * (1.4 * 287.05 * 600.0 / 1.8_f64).sqrt();

        assert_relative_eq!(v, expected, max_relative = 1e-12);
        assert_relative_eq!(
            FlowState::at(&gas, &chamber(), m).velocity.get::<meter_per_second>(),
            expected,
            max_relative = 1e-12
        );
    }

    #[test]
    fn stagnation_rejects_non_positive_inputs() {
        let t0 = ThermodynamicTemperature::new::<kelvin>(300.0);

        assert!(
            Stagnation::new(Pressure::new::<pascal>(0.0), t0)
                .unwrap_err()
                .is_domain_error()
        );
        assert!(
            Stagnation::new(
                Pressure::new::<pascal>(1.0e5),
                ThermodynamicTemperature::new::<kelvin>(0.0)
            )
            .unwrap_err()
            .is_domain_error()
        );
    }
}
