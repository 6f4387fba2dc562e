//! # agrireg-registry — Registration-Time Domain Rules
//!
//! Admission rules applied before a producer or farm enters the registry.
//! Each rule set takes an untrusted `New*` request and either returns a
//! validated domain object with a freshly generated identifier, or a
//! [`RegistrationError`] naming the first rule the request broke.
//!
//! Rules are pure apart from a `tracing::warn!` at each rejection point;
//! nothing here touches storage or the network.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Rejections are typed errors, never process-level failures.

pub mod error;
pub mod farm;
pub mod farmer;

pub use error::RegistrationError;
pub use farm::{Farm, NewFarm};
pub use farmer::{Farmer, NewFarmer};
