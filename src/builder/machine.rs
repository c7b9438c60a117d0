//! Builder for constructing vending machines.

use crate::builder::error::BuildError;
use crate::core::{Product, ProductSpec};
use crate::faults::{FaultGenerator, RandomFaults};
use crate::machine::VendingMachine;
use chrono::{DateTime, Utc};
use tracing::debug;

/// Builder for constructing vending machines with a fluent API.
pub struct VendingMachineBuilder<F: FaultGenerator = RandomFaults> {
    products: Vec<ProductSpec>,
    reference_time: Option<DateTime<Utc>>,
    faults: F,
}

impl VendingMachineBuilder<RandomFaults> {
    /// Create a new builder with randomly occurring faults.
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            reference_time: None,
            faults: RandomFaults::default(),
        }
    }
}

impl Default for VendingMachineBuilder<RandomFaults> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FaultGenerator> VendingMachineBuilder<F> {
    /// Add one catalog slot. Order is preserved.
    pub fn product(mut self, spec: ProductSpec) -> Self {
        self.products.push(spec);
        self
    }

    /// Add multiple catalog slots at once.
    pub fn products(mut self, specs: impl IntoIterator<Item = ProductSpec>) -> Self {
        self.products.extend(specs);
        self
    }

    /// Instant that `expires_in_days` offsets count from. Defaults to the
    /// time `build` is called.
    pub fn reference_time(mut self, reference: DateTime<Utc>) -> Self {
        self.reference_time = Some(reference);
        self
    }

    /// Replace the fault generator.
    pub fn faults<G: FaultGenerator>(self, faults: G) -> VendingMachineBuilder<G> {
        VendingMachineBuilder {
            products: self.products,
            reference_time: self.reference_time,
            faults,
        }
    }

    /// Build the machine.
    /// Returns an error if the catalog is empty, a name is blank, or an
    /// expiration offset cannot be resolved.
    pub fn build(self) -> Result<VendingMachine<F>, BuildError> {
        if self.products.is_empty() {
            return Err(BuildError::EmptyCatalog);
        }

        if let Some(index) = self
            .products
            .iter()
            .position(|spec| spec.name.trim().is_empty())
        {
            return Err(BuildError::BlankProductName { index });
        }

        let reference = self.reference_time.unwrap_or_else(Utc::now);
        let catalog = self
            .products
            .into_iter()
            .enumerate()
            .map(|(index, spec)| {
                Product::from_spec(spec, reference)
                    .ok_or(BuildError::ExpirationOutOfRange { index })
            })
            .collect::<Result<Vec<Product>, _>>()?;

        debug!(products = catalog.len(), %reference, "vending machine built");
        Ok(VendingMachine::new(catalog, self.faults))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Money;
    use crate::faults::ScriptedFaults;
    use chrono::{Duration, TimeZone};

    #[test]
    fn builder_requires_products() {
        let result = VendingMachineBuilder::new().build();
        assert!(matches!(result, Err(BuildError::EmptyCatalog)));
    }

    #[test]
    fn builder_rejects_blank_names() {
        let result = VendingMachineBuilder::new()
            .product(ProductSpec::new("Water", 1, Money::from_units(5)))
            .product(ProductSpec::new("  ", 1, Money::from_units(5)))
            .build();

        assert!(matches!(
            result,
            Err(BuildError::BlankProductName { index: 1 })
        ));
    }

    #[test]
    fn builder_accepts_duplicate_names() {
        let machine = VendingMachineBuilder::new()
            .faults(ScriptedFaults::new())
            .products(vec![
                ProductSpec::new("Water", 1, Money::from_units(5)),
                ProductSpec::new("Water", 3, Money::from_units(2)),
            ])
            .build()
            .unwrap();

        assert_eq!(machine.catalog().len(), 2);
        assert_eq!(machine.product("Water").unwrap().quantity, 1);
    }

    #[test]
    fn expirations_resolve_against_reference_time() {
        let reference = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let machine = VendingMachineBuilder::new()
            .faults(ScriptedFaults::new())
            .reference_time(reference)
            .product(ProductSpec::new("Milk", 1, Money::from_units(3)).expires_in_days(2))
            .build()
            .unwrap();

        assert_eq!(
            machine.product("Milk").unwrap().expiration,
            Some(reference + Duration::days(2))
        );
    }

    #[test]
    fn builder_rejects_unrepresentable_expiration() {
        let result = VendingMachineBuilder::new()
            .product(ProductSpec::new("Water", 1, Money::from_units(5)))
            .product(
                ProductSpec::new("Milk", 1, Money::from_units(3)).expires_in_days(1_000_000_000),
            )
            .build();

        assert!(matches!(
            result,
            Err(BuildError::ExpirationOutOfRange { index: 1 })
        ));
    }

    #[test]
    fn built_machine_starts_with_zero_balance() {
        let machine = VendingMachineBuilder::default()
            .product(ProductSpec::new("Water", 2, Money::from_units(5)))
            .build()
            .unwrap();

        assert_eq!(machine.balance(), Money::ZERO);
    }
}
