//! Typed rejection reasons for registration requests.

use thiserror::Error;

/// The first rule a registration request violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistrationError {
    /// A producer is either a natural person (CPF) or a legal entity
    /// (CNPJ), never both.
    #[error("farmer cannot have both CNPJ and CPF")]
    BothTaxIds,

    /// A producer must carry one tax identity.
    #[error("farmer must have either CNPJ or CPF")]
    MissingTaxId,

    /// The supplied CPF failed structural or check-digit validation.
    #[error("invalid CPF: {0:?}")]
    InvalidCpf(String),

    /// The supplied CNPJ failed structural or check-digit validation.
    #[error("invalid CNPJ: {0:?}")]
    InvalidCnpj(String),

    /// Producer names carry a 2-character minimum.
    #[error("farmer name must be at least 2 characters")]
    NameTooShort,

    /// Hectare areas must be finite and non-negative.
    #[error("farm areas must be non-negative")]
    NegativeArea,

    #[error("cultivation area cannot be greater than total area")]
    CultivationExceedsTotal,

    #[error("vegetation area cannot be greater than total area")]
    VegetationExceedsTotal,

    #[error("cultivation and vegetation area cannot be greater than total area")]
    CombinedAreaExceedsTotal,
}
