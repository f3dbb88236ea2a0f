use serde::{Deserialize, Serialize};

use crate::error::PolicyError;
use crate::luggage::item::LuggageItem;

/// Serialized with the capitalized spellings the booking records use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TravelClass {
    Economy,
    Business,
    First,
}

impl TravelClass {
    pub fn parse(value: &str) -> Result<Self, PolicyError> {
        match value.trim().to_lowercase().as_str() {
            "economy" => Ok(Self::Economy),
            "business" => Ok(Self::Business),
            "first" => Ok(Self::First),
            _ => Err(PolicyError::UnknownTravelClass(value.to_string())),
        }
    }

    pub fn as_code(self) -> &'static str {
        match self {
            Self::Economy => "Economy",
            Self::Business => "Business",
            Self::First => "First",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeCategory {
    Adult,
    Child,
    Infant,
}

impl AgeCategory {
    pub fn parse(value: &str) -> Result<Self, PolicyError> {
        match value.trim().to_lowercase().as_str() {
            "adult" => Ok(Self::Adult),
            "child" => Ok(Self::Child),
            "infant" => Ok(Self::Infant),
            _ => Err(PolicyError::UnknownAgeCategory(value.to_string())),
        }
    }

    pub fn as_code(self) -> &'static str {
        match self {
            Self::Adult => "adult",
            Self::Child => "child",
            Self::Infant => "infant",
        }
    }
}

/// One passenger's bags for a single evaluation. The input order carries no
/// meaning beyond serving as the tie-break base for the engine's own sorts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceRequest {
    pub travel_class: TravelClass,
    pub age_category: AgeCategory,
    #[serde(default)]
    pub luggages: Vec<LuggageItem>,
}

impl ComplianceRequest {
    pub fn new(travel_class: TravelClass, age_category: AgeCategory) -> Self {
        Self {
            travel_class,
            age_category,
            luggages: Vec::new(),
        }
    }

    pub fn with_luggage(mut self, item: LuggageItem) -> Self {
        self.luggages.push(item);
        self
    }
}
