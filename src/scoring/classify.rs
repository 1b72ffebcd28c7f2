use serde::Serialize;
use std::fmt;

// Both thresholds are exclusive: 7.0 is Moderate, 5.0 is Low.
pub const HIGH_THRESHOLD: f64 = 7.0;
pub const MODERATE_THRESHOLD: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    High,
    Moderate,
    Low,
}

impl Classification {
    pub fn label(self) -> &'static str {
        match self {
            Classification::High => "High Investability",
            Classification::Moderate => "Moderate Investability",
            Classification::Low => "Low Investability",
        }
    }

    pub fn recommendation(self) -> &'static str {
        match self {
            Classification::High => "Strong potential for investment.",
            Classification::Moderate => "Requires further assessment.",
            Classification::Low => "Consider revising the business model.",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn classify(score: f64) -> Classification {
    if score > HIGH_THRESHOLD {
        Classification::High
    } else if score > MODERATE_THRESHOLD {
        Classification::Moderate
    } else {
        Classification::Low
    }
}
