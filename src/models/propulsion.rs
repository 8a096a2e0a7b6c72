//! Propulsion models.
//!
//! This module contains models for propulsion components, currently
//! converging-diverging nozzles.

pub mod nozzle;
