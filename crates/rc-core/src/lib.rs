//! Shared building blocks for the RC transient crates.
//!
//! [`units`] wraps the uom SI electrical quantities, [`numeric`] holds the
//! scalar type and float checks, and [`error`] the core error type.

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{RcError, RcResult};
pub use numeric::*;
pub use units::*;
