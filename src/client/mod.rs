//! Prediction service client and wire types.

pub mod genderize;

pub use genderize::GenderizeClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::Result;
use crate::validate::ValidName;

/// Binary gender label used by the prediction service and the local store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for parsing a gender label from text.
#[derive(Debug, Clone, Error)]
#[error("Expected 'male' or 'female', got '{0}'.")]
pub struct InvalidGender(String);

impl std::str::FromStr for Gender {
    type Err = InvalidGender;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            _ => Err(InvalidGender(s.to_string())),
        }
    }
}

/// One prediction from the service.
///
/// `gender: None` means the service does not know the name. That is a valid
/// empty result, distinct from a transport failure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Prediction {
    /// The name as echoed back by the service.
    pub name: String,
    /// Predicted gender, absent for unknown names.
    pub gender: Option<Gender>,
    /// Service confidence in the prediction, 0.0 to 1.0.
    pub probability: Option<f64>,
    /// Sample size behind the prediction, when the service reports one.
    pub count: Option<u64>,
}

/// Prediction source seam.
///
/// The production implementation is [`GenderizeClient`]; tests substitute
/// scripted responses so the action boundary can be exercised offline.
#[async_trait]
pub trait Predictor {
    /// Look up the predicted gender for a validated name.
    async fn predict(&self, name: &ValidName) -> Result<Prediction>;
}
