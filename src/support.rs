//! Supporting utilities used by models.
//!
//! These modules are public because they are useful on their own, for
//! example to size a throat or evaluate a shock without building a nozzle.

pub mod constraint;
pub mod flow;
pub mod gas;
pub mod units;
