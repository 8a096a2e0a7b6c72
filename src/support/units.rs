//! Extensions to [`uom`].
//!
//! Dimensional flow inputs (pressure, temperature, area, mass rate) use
//! [`uom`] quantities directly. This module adds the few quantities the flow
//! relations need that [`uom`] does not name.
//!
//! ```
//! use nozzle_models::support::units::SpecificGasConstant;
//! use uom::si::specific_heat_capacity::joule_per_kilogram_kelvin;
//!
//! let r_air = SpecificGasConstant::new::<joule_per_kilogram_kelvin>(287.05);
//! assert_eq!(r_air.get::<joule_per_kilogram_kelvin>(), 287.05);
//! ```

mod quantities;

pub use quantities::SpecificGasConstant;
