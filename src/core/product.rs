//! Catalog entries.
//!
//! A [`ProductSpec`] is the construction record handed to the machine at
//! setup; a [`Product`] is the live slot it becomes, with an absolute
//! expiration instant and a quantity that only committed sales decrement.

use super::money::Money;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// One sellable slot in the machine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Lookup key. Not unique by construction; the first match wins.
    pub name: String,
    /// Units left in the slot.
    pub quantity: u32,
    pub price: Money,
    /// Sales are rejected once the current time reaches this instant.
    pub expiration: Option<DateTime<Utc>>,
}

impl Product {
    pub fn new(name: impl Into<String>, quantity: u32, price: Money) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
            expiration: None,
        }
    }

    /// Set an absolute expiration instant.
    pub fn expiring_at(mut self, expiration: DateTime<Utc>) -> Self {
        self.expiration = Some(expiration);
        self
    }

    /// Materialize a spec, resolving its day offset against `reference`.
    ///
    /// Returns `None` if the offset lands outside the representable dates.
    pub fn from_spec(spec: ProductSpec, reference: DateTime<Utc>) -> Option<Self> {
        let expiration = match spec.expires_in_days {
            Some(days) => Some(reference.checked_add_signed(Duration::try_days(days)?)?),
            None => None,
        };

        Some(Self {
            name: spec.name,
            quantity: spec.quantity,
            price: spec.price,
            expiration,
        })
    }

    pub fn is_in_stock(&self) -> bool {
        self.quantity > 0
    }

    /// Expired when `now` is at or past the expiration instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiration.is_some_and(|expiration| now >= expiration)
    }
}

/// Construction record for a catalog slot.
///
/// # Example
///
/// ```rust
/// use vending_machine::core::{Money, ProductSpec};
///
/// let milk = ProductSpec::new("Milk", 4, Money::from_units(3)).expires_in_days(2);
/// assert_eq!(milk.expires_in_days, Some(2));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductSpec {
    pub name: String,
    pub quantity: u32,
    pub price: Money,
    /// Days from the reference time until expiration. Negative values
    /// describe stock that is already expired.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in_days: Option<i64>,
}

impl ProductSpec {
    pub fn new(name: impl Into<String>, quantity: u32, price: Money) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
            expires_in_days: None,
        }
    }

    pub fn expires_in_days(mut self, days: i64) -> Self {
        self.expires_in_days = Some(days);
        self
    }
}
