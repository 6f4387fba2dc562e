//! # Farmer Admission
//!
//! A producer registers with a name and exactly one tax identity: a CPF for
//! a natural person or a CNPJ for a legal entity. The rules run in a fixed
//! order so callers always see the highest-priority rejection first:
//! exclusivity, presence, identifier validity, then name length.

use serde::{Deserialize, Serialize};

use agrireg_core::{Cnpj, Cpf, FarmerId, TaxId};

use crate::error::RegistrationError;

/// Minimum length of a producer name, in characters.
pub const MIN_NAME_LEN: usize = 2;

/// An untrusted farmer-registration request.
///
/// `cpf` and `cnpj` are raw candidate strings, masked or unmasked; exactly
/// one of them must be present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFarmer {
    /// Producer name.
    pub name: String,
    /// Natural-person tax identifier candidate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    /// Legal-entity tax identifier candidate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cnpj: Option<String>,
}

/// A producer that passed admission, with a generated identifier and a
/// validated tax identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Farmer {
    /// Registry identifier, generated at admission.
    pub id: FarmerId,
    /// Producer name.
    pub name: String,
    /// The one validated tax identity.
    pub tax_id: TaxId,
}

impl NewFarmer {
    /// Run the admission rules, producing a [`Farmer`] on success.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule: [`RegistrationError::BothTaxIds`],
    /// [`RegistrationError::MissingTaxId`], [`RegistrationError::InvalidCpf`],
    /// [`RegistrationError::InvalidCnpj`], or
    /// [`RegistrationError::NameTooShort`].
    pub fn validate(self) -> Result<Farmer, RegistrationError> {
        let tax_id = match (self.cpf.as_deref(), self.cnpj.as_deref()) {
            (Some(_), Some(_)) => {
                tracing::warn!(name = %self.name, "farmer submitted both CNPJ and CPF");
                return Err(RegistrationError::BothTaxIds);
            }
            (None, None) => {
                tracing::warn!(name = %self.name, "farmer submitted neither CNPJ nor CPF");
                return Err(RegistrationError::MissingTaxId);
            }
            (Some(cpf), None) => match Cpf::parse(cpf) {
                Ok(cpf) => TaxId::Cpf(cpf),
                Err(_) => {
                    tracing::warn!(cpf, "rejected farmer with invalid CPF");
                    return Err(RegistrationError::InvalidCpf(cpf.to_string()));
                }
            },
            (None, Some(cnpj)) => match Cnpj::parse(cnpj) {
                Ok(cnpj) => TaxId::Cnpj(cnpj),
                Err(_) => {
                    tracing::warn!(cnpj, "rejected farmer with invalid CNPJ");
                    return Err(RegistrationError::InvalidCnpj(cnpj.to_string()));
                }
            },
        };

        if self.name.chars().count() < MIN_NAME_LEN {
            tracing::warn!(name = %self.name, "rejected farmer with too-short name");
            return Err(RegistrationError::NameTooShort);
        }

        Ok(Farmer {
            id: FarmerId::new(),
            name: self.name,
            tax_id,
        })
    }
}
