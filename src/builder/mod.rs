//! Builder API for ergonomic machine construction.
//!
//! This module provides a fluent builder and the `catalog!` macro for
//! setting up a machine with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::VendingMachineBuilder;

use crate::core::ProductSpec;
use crate::faults::ScriptedFaults;
use crate::machine::VendingMachine;

/// Build a machine that never faults.
///
/// # Example
///
/// ```
/// use vending_machine::builder::reliable_machine;
/// use vending_machine::catalog;
/// use vending_machine::core::Money;
///
/// let mut machine = reliable_machine(catalog!["Water" => (2, Money::from_units(5))]).unwrap();
/// assert!(machine.purchase("Water", Money::from_units(5)).is_ok());
/// ```
pub fn reliable_machine(
    products: Vec<ProductSpec>,
) -> Result<VendingMachine<ScriptedFaults>, BuildError> {
    VendingMachineBuilder::new()
        .products(products)
        .faults(ScriptedFaults::new())
        .build()
}
