//! The wizard's pure core: form state, the step machine, per-step
//! validation, and payload assembly.
//!
//! Nothing in here touches the UI or the network, so the whole submission
//! flow short of the HTTP call is unit-testable. Each step's rules are a
//! pure function from form state to a list of field-level failures;
//! components only render whatever errors the machine currently holds.

pub mod state;
pub mod submit;
pub mod validate;

#[cfg(test)]
mod test;

pub use state::{ApplicationForm, Screen, Step, Wizard};
pub use validate::{Field, FieldError};
