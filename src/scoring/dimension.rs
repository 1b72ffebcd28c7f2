use crate::error::{InvestabilityError, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    MarketGrowthPotential,
    Profitability,
    CompetitiveAdvantage,
    ManagementQuality,
    InnovationAndRnd,
    RegulatoryEnvironment,
    FinancialStability,
    SustainabilityAndEsg,
}

impl Dimension {
    pub const ALL: [Dimension; 8] = [
        Dimension::MarketGrowthPotential,
        Dimension::Profitability,
        Dimension::CompetitiveAdvantage,
        Dimension::ManagementQuality,
        Dimension::InnovationAndRnd,
        Dimension::RegulatoryEnvironment,
        Dimension::FinancialStability,
        Dimension::SustainabilityAndEsg,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Dimension::MarketGrowthPotential => "Market Growth Potential",
            Dimension::Profitability => "Profitability",
            Dimension::CompetitiveAdvantage => "Competitive Advantage",
            Dimension::ManagementQuality => "Management Quality",
            Dimension::InnovationAndRnd => "Innovation and R&D",
            Dimension::RegulatoryEnvironment => "Regulatory Environment",
            Dimension::FinancialStability => "Financial Stability",
            Dimension::SustainabilityAndEsg => "Sustainability and ESG",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dimension {
    type Err = InvestabilityError;

    fn from_str(s: &str) -> Result<Self> {
        Dimension::ALL
            .into_iter()
            .find(|dimension| dimension.name() == s)
            .ok_or_else(|| InvestabilityError::InvalidInput(format!("unknown dimension: '{s}'")))
    }
}

impl Serialize for Dimension {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
