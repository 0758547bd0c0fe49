//! Safe house domain entity and related types.

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Physical safe house location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeHouse {
    id: Uuid,
    postal_code: String,
    number: String,
    complement: String,
}

impl SafeHouse {
    /// Create a new safe house with a fresh id.
    ///
    /// # Errors
    /// Returns a validation error if the postal code or number is blank.
    pub fn new(postal_code: &str, number: &str, complement: Option<&str>) -> AppResult<Self> {
        let mut safe_house = Self {
            id: Uuid::new_v4(),
            postal_code: String::new(),
            number: String::new(),
            complement: String::new(),
        };

        safe_house.set_postal_code(postal_code)?;
        safe_house.set_number(number)?;
        safe_house.set_complement(complement);

        Ok(safe_house)
    }

    /// Rebuild a safe house from stored state without re-validating.
    pub(crate) fn restore(id: Uuid, postal_code: String, number: String, complement: String) -> Self {
        Self {
            id,
            postal_code,
            number,
            complement,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn complement(&self) -> &str {
        &self.complement
    }

    pub fn set_postal_code(&mut self, postal_code: &str) -> AppResult<()> {
        let postal_code = postal_code.trim();
        if postal_code.is_empty() {
            return Err(AppError::validation("Postal code is required."));
        }

        self.postal_code = postal_code.to_string();
        Ok(())
    }

    pub fn set_number(&mut self, number: &str) -> AppResult<()> {
        let number = number.trim();
        if number.is_empty() {
            return Err(AppError::validation("Number is required."));
        }

        self.number = number.to_string();
        Ok(())
    }

    /// Never fails; an absent complement is stored as an empty string.
    pub fn set_complement(&mut self, complement: Option<&str>) {
        self.complement = complement.map(str::trim).unwrap_or_default().to_string();
    }
}

/// Safe house response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SafeHouseResponse {
    /// Unique identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// Postal code
    #[schema(example = "01310-100")]
    pub postal_code: String,
    /// Street number
    #[schema(example = "1578")]
    pub number: String,
    /// Complement (empty when not given)
    #[schema(example = "Block B")]
    pub complement: String,
}

impl From<SafeHouse> for SafeHouseResponse {
    fn from(safe_house: SafeHouse) -> Self {
        Self {
            id: safe_house.id,
            postal_code: safe_house.postal_code,
            number: safe_house.number,
            complement: safe_house.complement,
        }
    }
}
