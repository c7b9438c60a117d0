//! Guard predicates that decide whether a sale may be committed.
//!
//! Guards are pure: they inspect a product and the context of the sale
//! without touching machine state. Each guard pairs its predicate with the
//! rejection reported when the predicate fails, and the standard set is
//! evaluated in a fixed order so the first failing check decides the error.

use super::money::Money;
use super::product::Product;
use crate::machine::VendingError;
use chrono::{DateTime, Utc};

/// What a guard can see about the sale in progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SaleContext {
    /// Balance after the current insertion was credited.
    pub balance: Money,
    pub now: DateTime<Utc>,
}

/// Pure predicate over a product and sale context.
///
/// # Example
///
/// ```rust
/// use vending_machine::core::{Money, Product, SaleContext, SaleGuard};
/// use vending_machine::machine::VendingError;
/// use chrono::Utc;
///
/// let water = Product::new("Water", 0, Money::from_units(5));
/// let context = SaleContext { balance: Money::from_units(5), now: Utc::now() };
///
/// let result = SaleGuard::evaluate_all(&water, &context);
/// assert_eq!(result, Err(VendingError::ProductUnavailable));
/// ```
#[derive(Clone, Copy)]
pub struct SaleGuard {
    name: &'static str,
    predicate: fn(&Product, &SaleContext) -> bool,
    rejection: VendingError,
}

impl SaleGuard {
    /// Create a guard from a pure predicate and the error it reports.
    pub const fn new(
        name: &'static str,
        predicate: fn(&Product, &SaleContext) -> bool,
        rejection: VendingError,
    ) -> Self {
        Self {
            name,
            predicate,
            rejection,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Check the guard, returning its rejection when the predicate fails.
    pub fn check(&self, product: &Product, context: &SaleContext) -> Result<(), VendingError> {
        if (self.predicate)(product, context) {
            Ok(())
        } else {
            Err(self.rejection)
        }
    }

    /// Stock, funds, then freshness.
    pub const STANDARD: [SaleGuard; 3] = [
        SaleGuard::new("in_stock", in_stock, VendingError::ProductUnavailable),
        SaleGuard::new("affordable", affordable, VendingError::InsufficientFunds),
        SaleGuard::new("fresh", fresh, VendingError::ProductExpired),
    ];

    /// Evaluate the standard guards, stopping at the first rejection.
    pub fn evaluate_all(product: &Product, context: &SaleContext) -> Result<(), VendingError> {
        Self::STANDARD
            .iter()
            .try_for_each(|guard| guard.check(product, context))
    }
}

impl std::fmt::Debug for SaleGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaleGuard")
            .field("name", &self.name)
            .field("rejection", &self.rejection)
            .finish()
    }
}

fn in_stock(product: &Product, _context: &SaleContext) -> bool {
    product.is_in_stock()
}

fn affordable(product: &Product, context: &SaleContext) -> bool {
    context.balance >= product.price
}

fn fresh(product: &Product, context: &SaleContext) -> bool {
    !product.is_expired_at(context.now)
}
