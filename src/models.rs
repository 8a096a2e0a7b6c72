//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are grouped into domain-specific submodules (e.g., `propulsion`).
//! This organization may evolve as more models are added.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the computation and domain logic live. The [`twine_core::Model`]
//! implementations are thin adapters that delegate to the core, and a single
//! core may back several adapters.
//!
//! The core's free functions and value types are re-exported from the model
//! module so they can be used without going through `Model`.

pub mod propulsion;
