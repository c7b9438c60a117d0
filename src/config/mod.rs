//! Machine configuration.
//!
//! A machine can be described as a JSON document listing its catalog, the
//! odds of each simulated fault, and the language buyers are addressed in:
//!
//! ```json
//! {
//!   "locale": "portuguese",
//!   "faults": { "jam_threshold": 5 },
//!   "products": [
//!     { "name": "Cebolitos", "quantity": 2, "price": 500 },
//!     { "name": "Milk", "quantity": 1, "price": 300, "expires_in_days": 3 }
//!   ]
//! }
//! ```
//!
//! Prices are in cents. `locale` and `faults` may be omitted.

use crate::builder::VendingMachineBuilder;
use crate::core::{Money, ProductSpec};
use crate::faults::{FaultProfile, RandomFaults};
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::ConfigError;

/// Language used for messages shown to buyers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    English,
    Portuguese,
}

impl Locale {
    /// Shown when a product reaches the tray.
    pub fn delivered(self) -> &'static str {
        match self {
            Locale::English => "Product delivered!",
            Locale::Portuguese => "Produto entregue!",
        }
    }

    /// Shown when change is handed back.
    pub fn change_returned(self, amount: Money) -> String {
        match self {
            Locale::English => format!("Your change is {amount}"),
            Locale::Portuguese => format!("Seu troco é {amount}"),
        }
    }
}

/// Everything needed to set up a machine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MachineConfig {
    #[serde(default)]
    pub locale: Locale,

    #[serde(default)]
    pub faults: FaultProfile,

    pub products: Vec<ProductSpec>,
}

impl MachineConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// The demo catalog: phone chargers, snacks and umbrellas.
    pub fn reference() -> Self {
        Self {
            locale: Locale::Portuguese,
            faults: FaultProfile::default(),
            products: vec![
                ProductSpec::new("Carregador de iPhone", 5, Money::from_units(150)),
                ProductSpec::new("Cebolitos", 2, Money::from_units(5)),
                ProductSpec::new("Guarda-chuva", 5, Money::from_units(100)),
            ],
        }
    }

    /// Builder with entropy-seeded faults.
    pub fn into_builder(self) -> Result<VendingMachineBuilder<RandomFaults>, ConfigError> {
        self.faults.validate()?;
        let faults = RandomFaults::new(self.faults);
        Ok(VendingMachineBuilder::new()
            .products(self.products)
            .faults(faults))
    }

    /// Builder whose faults replay the same sequence for the same seed.
    pub fn into_builder_seeded(
        self,
        seed: u64,
    ) -> Result<VendingMachineBuilder<RandomFaults>, ConfigError> {
        self.faults.validate()?;
        let faults = RandomFaults::seeded(seed, self.faults);
        Ok(VendingMachineBuilder::new()
            .products(self.products)
            .faults(faults))
    }
}
