//! Build errors for the machine builder.

use thiserror::Error;

/// Errors that can occur when building a vending machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Catalog is empty. Add at least one product with .product(spec)")]
    EmptyCatalog,

    #[error("Product at position {index} has a blank name")]
    BlankProductName { index: usize },

    #[error("Product at position {index} expires outside the representable date range")]
    ExpirationOutOfRange { index: usize },
}
