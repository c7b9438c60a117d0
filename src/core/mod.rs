//! Core vending types and logic.
//!
//! This module contains the pure part of the machine:
//! - Money and catalog records
//! - Guard predicates that decide whether a sale may be committed
//! - The transaction journal
//!
//! Nothing here draws random numbers or reads the clock on its own; the
//! machine passes those in.

mod guard;
mod journal;
mod money;
mod product;

pub use guard::{SaleContext, SaleGuard};
pub use journal::{TransactionJournal, TransactionKind, TransactionRecord};
pub use money::Money;
pub use product::{Product, ProductSpec};
