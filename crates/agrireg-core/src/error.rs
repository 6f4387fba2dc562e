//! # Error Types
//!
//! Errors for tax-identifier handling. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations.
//!
//! Note the asymmetry: the `validate_*` functions never error — a malformed
//! candidate is simply invalid (`false`). Errors here surface only from the
//! check-digit calculator (precondition violation, a programmer error) and
//! from the validating newtype constructors.

use thiserror::Error;

/// Errors from tax-identifier parsing and check-digit computation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaxIdError {
    /// The check-digit calculator was handed a base that is not 12
    /// alphanumeric characters, or is the all-zero sentinel. This is a
    /// misuse signal and fails loudly rather than producing wrong digits.
    #[error("cannot compute CNPJ check digits: {0:?} is not a usable 12-character base")]
    InvalidDvInput(String),

    /// The candidate is not a structurally and arithmetically valid CPF.
    #[error("invalid CPF: {0:?}")]
    InvalidCpf(String),

    /// The candidate is not a structurally and arithmetically valid CNPJ.
    #[error("invalid CNPJ: {0:?}")]
    InvalidCnpj(String),
}
