//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the registry's identifiers. These prevent accidental
//! identifier confusion — you cannot pass a `FarmerId` where a `FarmId` is
//! expected, and you cannot hold a [`Cpf`] or [`Cnpj`] that did not pass
//! check-digit validation.
//!
//! The tax-id newtypes store the mask-stripped form and re-apply the
//! conventional formatting mask on demand. They deserialize through their
//! validating constructors, so a `Cpf` arriving over the wire is as trusted
//! as one parsed locally.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TaxIdError;
use crate::taxid::{strip_mask, validate_cnpj, validate_cpf};

/// A validated CPF, stored as its 11 mask-stripped digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf(String);

/// A validated CNPJ, stored as its 14 mask-stripped characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cnpj(String);

/// Exactly one Brazilian tax identity: natural person or legal entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxId {
    /// Natural-person registry number.
    Cpf(Cpf),
    /// Legal-entity registry number.
    Cnpj(Cnpj),
}

/// Unique identifier for a registered rural producer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FarmerId(pub Uuid);

/// Unique identifier for a registered farm.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FarmId(pub Uuid);

impl Cpf {
    /// Parse and validate a CPF candidate, masked or unmasked.
    ///
    /// # Errors
    ///
    /// Returns [`TaxIdError::InvalidCpf`] if the candidate fails
    /// [`validate_cpf`].
    pub fn parse(candidate: &str) -> Result<Self, TaxIdError> {
        if validate_cpf(candidate) {
            Ok(Self(strip_mask(candidate)))
        } else {
            Err(TaxIdError::InvalidCpf(candidate.to_string()))
        }
    }

    /// The mask-stripped 11-digit form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Render with the conventional `ddd.ddd.ddd-dd` mask.
    pub fn formatted(&self) -> String {
        format!(
            "{}.{}.{}-{}",
            &self.0[..3],
            &self.0[3..6],
            &self.0[6..9],
            &self.0[9..]
        )
    }
}

impl Cnpj {
    /// Parse and validate a CNPJ candidate, masked or unmasked.
    ///
    /// # Errors
    ///
    /// Returns [`TaxIdError::InvalidCnpj`] if the candidate fails
    /// [`validate_cnpj`].
    pub fn parse(candidate: &str) -> Result<Self, TaxIdError> {
        if validate_cnpj(candidate) {
            Ok(Self(strip_mask(candidate)))
        } else {
            Err(TaxIdError::InvalidCnpj(candidate.to_string()))
        }
    }

    /// The mask-stripped 14-character form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 12-character base preceding the check digits.
    pub fn base(&self) -> &str {
        &self.0[..12]
    }

    /// The two trailing check digits.
    pub fn check_digits(&self) -> &str {
        &self.0[12..]
    }

    /// Render with the conventional `dd.ddd.ddd/dddd-dd` mask.
    pub fn formatted(&self) -> String {
        format!(
            "{}.{}.{}/{}-{}",
            &self.0[..2],
            &self.0[2..5],
            &self.0[5..8],
            &self.0[8..12],
            &self.0[12..]
        )
    }
}

impl TryFrom<String> for Cpf {
    type Error = TaxIdError;

    fn try_from(candidate: String) -> Result<Self, Self::Error> {
        Self::parse(&candidate)
    }
}

impl From<Cpf> for String {
    fn from(cpf: Cpf) -> Self {
        cpf.0
    }
}

impl TryFrom<String> for Cnpj {
    type Error = TaxIdError;

    fn try_from(candidate: String) -> Result<Self, Self::Error> {
        Self::parse(&candidate)
    }
}

impl From<Cnpj> for String {
    fn from(cnpj: Cnpj) -> Self {
        cnpj.0
    }
}

impl FarmerId {
    /// Generate a new random producer identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl FarmId {
    /// Generate a new random farm identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for Cnpj {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for TaxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cpf(cpf) => write!(f, "cpf:{cpf}"),
            Self::Cnpj(cnpj) => write!(f, "cnpj:{cnpj}"),
        }
    }
}

impl std::fmt::Display for FarmerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "farmer:{}", self.0)
    }
}

impl std::fmt::Display for FarmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "farm:{}", self.0)
    }
}
