use std::fmt;

use serde::{Deserialize, Serialize};

/// Where the passenger intends to stow a bag. `Special` exists on the wire
/// for oddball freight bookings but is rejected by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageTier {
    #[serde(rename = "carry-on")]
    CarryOn,
    #[serde(rename = "personal")]
    Personal,
    #[serde(rename = "checked")]
    Checked,
    #[serde(rename = "special")]
    Special,
}

impl StorageTier {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "carry-on" | "carry_on" | "cabin" => Some(Self::CarryOn),
            "personal" => Some(Self::Personal),
            "checked" => Some(Self::Checked),
            "special" => Some(Self::Special),
            _ => None,
        }
    }

    pub fn as_code(self) -> &'static str {
        match self {
            Self::CarryOn => "carry-on",
            Self::Personal => "personal",
            Self::Checked => "checked",
            Self::Special => "special",
        }
    }
}

impl fmt::Display for StorageTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Three linear measures in a single unit. Mixed-unit items are not
/// representable; the unit travels with the record for serialization only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub height: f64,
    pub width: f64,
    pub depth: f64,
    pub unit: String,
}

impl Dimensions {
    pub fn cm(height: f64, width: f64, depth: f64) -> Self {
        Self {
            height,
            width,
            depth,
            unit: "cm".to_string(),
        }
    }

    /// Axes in the order the per-axis carry-on limits are declared.
    pub fn as_axes(&self) -> [f64; 3] {
        [self.height, self.width, self.depth]
    }

    /// Sum of the three dimensions, the checked-tier size measure.
    pub fn linear_sum(&self) -> f64 {
        self.height + self.width + self.depth
    }
}

/// One bag as declared by the passenger. Immutable once constructed;
/// equality is structural across every field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LuggageItem {
    pub storage: StorageTier,
    #[serde(default)]
    pub excess: bool,
    #[serde(default)]
    pub special: bool,
    #[serde(default)]
    pub compliance: bool,
    pub weight: f64,
    #[serde(flatten)]
    pub dimensions: Dimensions,
}

impl LuggageItem {
    pub fn new(storage: StorageTier, weight: f64, dimensions: Dimensions) -> Self {
        Self {
            storage,
            excess: false,
            special: false,
            compliance: false,
            weight,
            dimensions,
        }
    }
}
