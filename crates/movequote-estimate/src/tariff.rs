//! Pricing constants.

use std::path::Path;

use movequote_types::{MoveSize, QuoteError, Result};
use serde::{Deserialize, Serialize};

/// Standard base rate in currency units per kilometer.
pub const BASE_RATE_PER_KM: f64 = 500.0;

/// Standard flat fee for the packing service.
pub const PACKING_FEE: f64 = 3000.0;

/// Standard currency label.
pub const CURRENCY: &str = "Ksh";

/// Price multiplier per home size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeMultipliers {
    /// Multiplier for a bedsitter.
    pub bedsitter: f64,
    /// Multiplier for a one-bedroom home.
    #[serde(rename = "one bedroom")]
    pub one_bedroom: f64,
    /// Multiplier for a studio.
    pub studio: f64,
    /// Multiplier for a two-bedroom home.
    #[serde(rename = "two bedroom")]
    pub two_bedroom: f64,
}

impl SizeMultipliers {
    /// Returns the standard multipliers.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            bedsitter: MoveSize::Bedsitter.multiplier(),
            one_bedroom: MoveSize::OneBedroom.multiplier(),
            studio: MoveSize::Studio.multiplier(),
            two_bedroom: MoveSize::TwoBedroom.multiplier(),
        }
    }

    /// Returns the multiplier for a size.
    #[must_use]
    pub const fn get(&self, size: MoveSize) -> f64 {
        match size {
            MoveSize::Bedsitter => self.bedsitter,
            MoveSize::OneBedroom => self.one_bedroom,
            MoveSize::Studio => self.studio,
            MoveSize::TwoBedroom => self.two_bedroom,
        }
    }
}

impl Default for SizeMultipliers {
    fn default() -> Self {
        Self::standard()
    }
}

/// Rates used to turn a distance into a price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tariff {
    /// Currency label used when formatting prices.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Price per kilometer before the size multiplier.
    pub base_rate_per_km: f64,
    /// Flat packing service fee.
    pub packing_fee: f64,
    /// Multiplier per home size.
    #[serde(default)]
    pub size_multipliers: SizeMultipliers,
}

fn default_currency() -> String {
    CURRENCY.to_string()
}

impl Tariff {
    /// Returns the standard tariff.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            currency: default_currency(),
            base_rate_per_km: BASE_RATE_PER_KM,
            packing_fee: PACKING_FEE,
            size_multipliers: SizeMultipliers::standard(),
        }
    }

    /// Creates a tariff from a JSON string and validates it.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or a rate is negative or not finite.
    pub fn from_json(json: &str) -> Result<Self> {
        let tariff: Self = serde_json::from_str(json)?;
        tariff.validate()?;
        Ok(tariff)
    }

    /// Loads a tariff from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid tariff.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Checks that every rate is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidTariff`] naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        let rates = [
            ("base_rate_per_km", self.base_rate_per_km),
            ("packing_fee", self.packing_fee),
        ];
        let multipliers = MoveSize::all()
            .iter()
            .map(|size| (size.as_str(), self.size_multipliers.get(*size)));

        for (name, value) in rates.into_iter().chain(multipliers) {
            if !value.is_finite() || value < 0.0 {
                return Err(QuoteError::InvalidTariff(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Returns the multiplier for a size.
    #[must_use]
    pub const fn multiplier(&self, size: MoveSize) -> f64 {
        self.size_multipliers.get(size)
    }

    /// Serializes the tariff as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for Tariff {
    fn default() -> Self {
        Self::standard()
    }
}
