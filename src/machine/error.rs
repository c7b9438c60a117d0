//! Transaction errors.

use crate::config::Locale;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors a purchase or change collection can report.
///
/// All of them are recoverable by the caller, who decides whether to retry
/// or give up. None carries a payload; each maps to one fixed message.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VendingError {
    #[error("Product not found")]
    ProductNotFound,

    #[error("Out of stock")]
    ProductUnavailable,

    #[error("Insufficient funds")]
    InsufficientFunds,

    #[error("Product expired")]
    ProductExpired,

    #[error("Product got stuck")]
    ProductStuck,

    #[error("Change got stuck")]
    ChangeStuck,

    #[error("Money not recognized")]
    MoneyNotRecognized,
}

impl VendingError {
    pub const ALL: [VendingError; 7] = [
        Self::ProductNotFound,
        Self::ProductUnavailable,
        Self::InsufficientFunds,
        Self::ProductExpired,
        Self::ProductStuck,
        Self::ChangeStuck,
        Self::MoneyNotRecognized,
    ];

    /// Fixed display message in the requested language.
    pub fn localized(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::English => match self {
                Self::ProductNotFound => "Product not found",
                Self::ProductUnavailable => "Out of stock",
                Self::InsufficientFunds => "Insufficient funds",
                Self::ProductExpired => "Product expired",
                Self::ProductStuck => "Product got stuck",
                Self::ChangeStuck => "Change got stuck",
                Self::MoneyNotRecognized => "Money not recognized",
            },
            Locale::Portuguese => match self {
                Self::ProductNotFound => "Produto não encontrado",
                Self::ProductUnavailable => "Acabou o estoque",
                Self::InsufficientFunds => "Dinheiro insuficiente",
                Self::ProductExpired => "Produto vencido",
                Self::ProductStuck => "Produto ficou preso",
                Self::ChangeStuck => "Troco ficou preso",
                Self::MoneyNotRecognized => "Dinheiro não reconhecido",
            },
        }
    }

    /// Simulated hardware faults, as opposed to business rejections.
    pub fn is_hardware_fault(&self) -> bool {
        matches!(
            self,
            Self::ProductStuck | Self::ChangeStuck | Self::MoneyNotRecognized
        )
    }
}
