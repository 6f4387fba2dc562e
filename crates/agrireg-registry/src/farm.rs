//! # Farm Admission
//!
//! Area arithmetic for a farm registration: cultivation and vegetation
//! areas, individually and combined, may never exceed the total area.
//! Areas are hectares as `f64`, matching the registry's wire format;
//! non-finite values are rejected up front so the comparisons are total.

use serde::{Deserialize, Serialize};

use agrireg_core::{FarmId, FarmerId};

use crate::error::RegistrationError;

/// An untrusted farm-registration request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFarm {
    /// Farm name.
    pub name: String,
    /// Municipality.
    pub city: String,
    /// Federative unit, e.g. `SP`.
    pub state: String,
    /// Total farm area in hectares.
    pub total_area: f64,
    /// Cultivated area in hectares.
    pub cultivation_area: f64,
    /// Preserved-vegetation area in hectares.
    pub vegetation_area: f64,
    /// Owning producer.
    pub farmer_id: FarmerId,
}

/// A farm that passed admission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Farm {
    /// Registry identifier, generated at admission.
    pub id: FarmId,
    /// Owning producer.
    pub farmer_id: FarmerId,
    /// Farm name.
    pub name: String,
    /// Municipality.
    pub city: String,
    /// Federative unit.
    pub state: String,
    /// Total farm area in hectares.
    pub total_area: f64,
    /// Cultivated area in hectares.
    pub cultivation_area: f64,
    /// Preserved-vegetation area in hectares.
    pub vegetation_area: f64,
}

impl NewFarm {
    /// Run the admission rules, producing a [`Farm`] on success.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule: [`RegistrationError::NegativeArea`],
    /// [`RegistrationError::CultivationExceedsTotal`],
    /// [`RegistrationError::VegetationExceedsTotal`], or
    /// [`RegistrationError::CombinedAreaExceedsTotal`].
    pub fn validate(self) -> Result<Farm, RegistrationError> {
        for area in [self.total_area, self.cultivation_area, self.vegetation_area] {
            if !area.is_finite() || area < 0.0 {
                tracing::warn!(area, "rejected farm with negative or non-finite area");
                return Err(RegistrationError::NegativeArea);
            }
        }

        if self.cultivation_area > self.total_area {
            tracing::warn!(
                cultivation = self.cultivation_area,
                total = self.total_area,
                "rejected farm: cultivation area exceeds total"
            );
            return Err(RegistrationError::CultivationExceedsTotal);
        }
        if self.vegetation_area > self.total_area {
            tracing::warn!(
                vegetation = self.vegetation_area,
                total = self.total_area,
                "rejected farm: vegetation area exceeds total"
            );
            return Err(RegistrationError::VegetationExceedsTotal);
        }
        if self.cultivation_area + self.vegetation_area > self.total_area {
            tracing::warn!(
                cultivation = self.cultivation_area,
                vegetation = self.vegetation_area,
                total = self.total_area,
                "rejected farm: combined area exceeds total"
            );
            return Err(RegistrationError::CombinedAreaExceedsTotal);
        }

        Ok(Farm {
            id: FarmId::new(),
            farmer_id: self.farmer_id,
            name: self.name,
            city: self.city,
            state: self.state,
            total_area: self.total_area,
            cultivation_area: self.cultivation_area,
            vegetation_area: self.vegetation_area,
        })
    }
}
