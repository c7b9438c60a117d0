//! Monetary amounts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// A non-negative amount of money in minor units (cents).
///
/// Serializes as a bare integer of cents so configuration files stay exact.
///
/// # Example
///
/// ```rust
/// use vending_machine::core::Money;
///
/// let price = Money::from_units(5);
/// let paid = Money::from_cents(800);
///
/// assert_eq!(paid.checked_sub(price), Some(Money::from_cents(300)));
/// assert_eq!(price.to_string(), "5.00");
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Money(cents)
    }

    /// Whole currency units, e.g. `from_units(5)` is `5.00`.
    ///
    /// Saturates at the largest representable amount.
    pub const fn from_units(units: u64) -> Self {
        Money(units.saturating_mul(100))
    }

    /// Whole currency units, `None` if the amount is not representable.
    pub const fn checked_from_units(units: u64) -> Option<Self> {
        match units.checked_mul(100) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Add, returning `None` on overflow.
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Subtract, returning `None` if the result would be negative.
    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }
}

/// Panics on overflow like integer addition; use [`Money::checked_add`] for
/// amounts that come from outside.
impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 += other.0;
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
