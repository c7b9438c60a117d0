//! The vending machine.
//!
//! A machine owns its catalog and the money inserted so far. Every call to
//! [`VendingMachine::purchase`] or [`VendingMachine::collect_change`] runs to
//! completion and either succeeds or reports the first failure it met.
//! Failures never undo earlier steps of the same call:
//! - money credited before a failed lookup stays in the balance
//! - a sale committed before a dispenser jam stays committed
//! - change released before a jam is gone from the balance

mod error;

pub use error::VendingError;

use crate::core::{
    Money, Product, SaleContext, SaleGuard, TransactionJournal, TransactionKind,
    TransactionRecord,
};
use crate::faults::{FaultGenerator, RandomFaults};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Receipt for a product that reached the tray.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    pub product: String,
    pub price: Money,
    /// Balance left for further purchases or change.
    pub balance: Money,
}

/// Vending machine with an injected source of hardware faults.
pub struct VendingMachine<F: FaultGenerator = RandomFaults> {
    catalog: Vec<Product>,
    balance: Money,
    faults: F,
    journal: TransactionJournal,
}

impl<F: FaultGenerator> VendingMachine<F> {
    /// Create a machine with a zero balance.
    pub fn new(catalog: Vec<Product>, faults: F) -> Self {
        Self {
            catalog,
            balance: Money::ZERO,
            faults,
            journal: TransactionJournal::new(),
        }
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    /// First product with this name.
    pub fn product(&self, name: &str) -> Option<&Product> {
        self.catalog.iter().find(|product| product.name == name)
    }

    pub fn journal(&self) -> &TransactionJournal {
        &self.journal
    }

    pub fn faults(&self) -> &F {
        &self.faults
    }

    pub fn faults_mut(&mut self) -> &mut F {
        &mut self.faults
    }

    /// Insert `inserted` and buy `product_name`, checking expiration against
    /// the current time.
    pub fn purchase(
        &mut self,
        product_name: &str,
        inserted: Money,
    ) -> Result<Delivery, VendingError> {
        self.purchase_at(product_name, inserted, Utc::now())
    }

    /// Insert `inserted` and buy `product_name` as of `now`.
    ///
    /// An inserted amount of zero skips the money reader and buys with the
    /// existing balance. Money the balance cannot hold is refused as
    /// unrecognized.
    #[instrument(skip(self, now), fields(balance = %self.balance))]
    pub fn purchase_at(
        &mut self,
        product_name: &str,
        inserted: Money,
        now: DateTime<Utc>,
    ) -> Result<Delivery, VendingError> {
        let result = self.try_purchase(product_name, inserted, now);

        match &result {
            Ok(delivery) => info!(
                product = %delivery.product,
                price = %delivery.price,
                balance = %delivery.balance,
                "product delivered"
            ),
            Err(error) => warn!(%error, balance = %self.balance, "purchase failed"),
        }

        self.record(
            TransactionKind::Purchase {
                product: product_name.to_string(),
                inserted,
            },
            result.as_ref().err().copied(),
        );
        result
    }

    fn try_purchase(
        &mut self,
        product_name: &str,
        inserted: Money,
        now: DateTime<Utc>,
    ) -> Result<Delivery, VendingError> {
        let credited = self
            .balance
            .checked_add(inserted)
            .ok_or(VendingError::MoneyNotRecognized)?;
        if !inserted.is_zero() && !self.faults.money_recognized() {
            return Err(VendingError::MoneyNotRecognized);
        }
        self.balance = credited;

        let product = self
            .catalog
            .iter_mut()
            .find(|product| product.name == product_name)
            .ok_or(VendingError::ProductNotFound)?;

        let context = SaleContext {
            balance: self.balance,
            now,
        };
        SaleGuard::evaluate_all(product, &context)?;

        // Guards passed, so neither subtraction can underflow.
        self.balance = self
            .balance
            .checked_sub(product.price)
            .ok_or(VendingError::InsufficientFunds)?;
        product.quantity -= 1;
        debug!(remaining = product.quantity, "sale committed");

        if self.faults.product_jammed() {
            return Err(VendingError::ProductStuck);
        }

        Ok(Delivery {
            product: product.name.clone(),
            price: product.price,
            balance: self.balance,
        })
    }

    /// Release the whole balance as change.
    ///
    /// The balance is zero afterwards even when the dispenser jams; jammed
    /// coins are stuck in the hardware, not kept by the machine.
    #[instrument(skip(self), fields(balance = %self.balance))]
    pub fn collect_change(&mut self) -> Result<Money, VendingError> {
        let amount = std::mem::take(&mut self.balance);

        let result = if self.faults.change_jammed() {
            warn!(%amount, "change got stuck");
            Err(VendingError::ChangeStuck)
        } else {
            info!(%amount, "change returned");
            Ok(amount)
        };

        self.record(
            TransactionKind::CollectChange { amount },
            result.as_ref().err().copied(),
        );
        result
    }

    fn record(&mut self, kind: TransactionKind, error: Option<VendingError>) {
        self.journal.append(TransactionRecord {
            kind,
            error,
            balance_after: self.balance,
            timestamp: Utc::now(),
        });
    }
}
