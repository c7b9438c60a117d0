//! A vending machine simulation with injectable hardware faults.
//!
//! The machine tracks inventory, accepts inserted money, dispenses a product
//! and returns change. The hardware around it is unreliable: bills go
//! unrecognized, products jam in the dispenser, and change gets stuck. Those
//! faults come from a [`faults::FaultGenerator`] handed to the machine, so
//! tests and demos can script them while a real run draws them at random.
//!
//! # Core Concepts
//!
//! - **Catalog**: ordered products, looked up by name (first match wins)
//! - **Balance**: inserted money waiting to be spent or collected as change
//! - **Guards**: pure checks deciding whether a sale may be committed
//! - **Journal**: record of every purchase and change collection attempt
//!
//! # Example
//!
//! ```rust
//! use vending_machine::builder::VendingMachineBuilder;
//! use vending_machine::catalog;
//! use vending_machine::core::Money;
//! use vending_machine::faults::ScriptedFaults;
//! use vending_machine::machine::VendingError;
//!
//! let mut machine = VendingMachineBuilder::new()
//!     .products(catalog!["Water" => (2, Money::from_units(5))])
//!     .faults(ScriptedFaults::new().jam_product())
//!     .build()
//!     .unwrap();
//!
//! // The sale is committed before the dispenser jams.
//! assert_eq!(
//!     machine.purchase("Water", Money::from_units(5)),
//!     Err(VendingError::ProductStuck)
//! );
//! assert_eq!(machine.product("Water").unwrap().quantity, 1);
//!
//! let delivery = machine.purchase("Water", Money::from_units(7)).unwrap();
//! assert_eq!(delivery.balance, Money::from_units(2));
//! assert_eq!(machine.collect_change(), Ok(Money::from_units(2)));
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod faults;
pub mod machine;

// Re-export commonly used types
pub use crate::core::{Money, Product, ProductSpec};
pub use builder::VendingMachineBuilder;
pub use config::{Locale, MachineConfig};
pub use faults::{FaultGenerator, RandomFaults, ScriptedFaults};
pub use machine::{Delivery, VendingError, VendingMachine};
