//! # agrireg-core — Foundational Types for the Rural-Producer Registry
//!
//! This crate is the leaf of the registry workspace. It owns the one piece of
//! deterministic arithmetic in the system — Brazilian tax-identifier (CPF and
//! CNPJ) validation and check-digit computation — plus the validated identity
//! newtypes built on top of it.
//!
//! ## Key Design Principles
//!
//! 1. **Pure validation functions.** [`taxid`] is stateless: module-level
//!    constant tables and free functions. A candidate identifier either
//!    validates or it does not; nothing is created or mutated.
//!
//! 2. **Newtype wrappers for identifiers.** [`Cpf`], [`Cnpj`], [`FarmerId`],
//!    [`FarmId`] — no bare strings for identifiers. The tax-id newtypes can
//!    only be constructed through their validating parsers, so holding a
//!    `Cpf` *is* the proof that the digits check out.
//!
//! 3. **Exactly one tax identity.** [`TaxId`] is an enum of `Cpf` or `Cnpj`;
//!    a producer carrying both (or neither) is unrepresentable downstream.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `agrireg-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod identity;
pub mod taxid;

// Re-export primary types for ergonomic imports.
pub use error::TaxIdError;
pub use identity::{Cnpj, Cpf, FarmId, FarmerId, TaxId};
pub use taxid::{calculate_dv, strip_mask, validate_cnpj, validate_cpf};
