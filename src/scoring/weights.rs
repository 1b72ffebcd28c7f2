use super::dimension::Dimension;
use super::ratings::MAX_RATING;
use crate::error::{InvestabilityError, Result};
use serde::Serialize;
use std::collections::BTreeMap;

pub const STANDARD_CREDITS: [(Dimension, u32); 8] = [
    (Dimension::MarketGrowthPotential, 12),
    (Dimension::Profitability, 10),
    (Dimension::CompetitiveAdvantage, 10),
    (Dimension::ManagementQuality, 8),
    (Dimension::InnovationAndRnd, 8),
    (Dimension::RegulatoryEnvironment, 6),
    (Dimension::FinancialStability, 4),
    (Dimension::SustainabilityAndEsg, 2),
];

// Weighted sums of ratings must stay within u32.
pub const MAX_TOTAL_CREDITS: u32 = u32::MAX / MAX_RATING as u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WeightTable {
    credits: BTreeMap<Dimension, u32>,
}

impl WeightTable {
    pub fn standard() -> Self {
        Self {
            credits: STANDARD_CREDITS.into_iter().collect(),
        }
    }

    pub fn new(entries: impl IntoIterator<Item = (Dimension, u32)>) -> Result<Self> {
        let mut credits = BTreeMap::new();
        let mut total: u32 = 0;
        for (dimension, credit) in entries {
            if credit == 0 {
                return Err(InvestabilityError::InvalidInput(format!(
                    "weight for '{dimension}' must be positive"
                )));
            }
            total = total
                .checked_add(credit)
                .filter(|total| *total <= MAX_TOTAL_CREDITS)
                .ok_or_else(|| {
                    InvestabilityError::InvalidInput(format!(
                        "weights must sum to at most {MAX_TOTAL_CREDITS}"
                    ))
                })?;
            if credits.insert(dimension, credit).is_some() {
                return Err(InvestabilityError::InvalidInput(format!(
                    "duplicate weight for '{dimension}'"
                )));
            }
        }

        let missing = Dimension::ALL
            .iter()
            .filter(|dimension| !credits.contains_key(dimension))
            .map(|dimension| dimension.name())
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(InvestabilityError::InvalidInput(format!(
                "weight table is missing dimension(s): {}",
                missing.join(", ")
            )));
        }

        Ok(Self { credits })
    }

    pub fn get(&self, dimension: Dimension) -> Option<u32> {
        self.credits.get(&dimension).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, u32)> + '_ {
        self.credits.iter().map(|(dimension, credit)| (*dimension, *credit))
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.credits.keys().any(|dimension| dimension.name() == name)
    }

    pub fn total(&self) -> u32 {
        self.credits.values().sum()
    }

    pub fn weighted_mean(&self, value: impl Fn(Dimension) -> f64) -> f64 {
        let numerator: f64 = self
            .iter()
            .map(|(dimension, credit)| value(dimension) * f64::from(credit))
            .sum();
        numerator / f64::from(self.total())
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_totals_sixty() {
        assert_eq!(WeightTable::standard().total(), 60);
    }

    #[test]
    fn standard_table_matches_credit_order() {
        let table = WeightTable::standard();
        assert_eq!(table.get(Dimension::MarketGrowthPotential), Some(12));
        assert_eq!(table.get(Dimension::InnovationAndRnd), Some(8));
        assert_eq!(table.get(Dimension::SustainabilityAndEsg), Some(2));
    }

    #[test]
    fn total_tracks_custom_weights() {
        let table = WeightTable::new(Dimension::ALL.into_iter().map(|d| (d, 3)))
            .expect("uniform table should build");
        assert_eq!(table.total(), 24);
        assert_eq!(table.weighted_mean(|_| 4.0), 4.0);
    }

    #[test]
    fn new_rejects_zero_weight() {
        let entries = STANDARD_CREDITS.into_iter().map(|(dimension, credit)| {
            if dimension == Dimension::Profitability {
                (dimension, 0)
            } else {
                (dimension, credit)
            }
        });
        let err = WeightTable::new(entries).expect_err("zero weight should fail");
        assert!(err.to_string().contains("must be positive"));
    }

    #[test]
    fn new_rejects_missing_dimension() {
        let entries = STANDARD_CREDITS
            .into_iter()
            .filter(|(dimension, _)| *dimension != Dimension::FinancialStability);
        let err = WeightTable::new(entries).expect_err("missing dimension should fail");
        assert!(err.to_string().contains("Financial Stability"));
    }

    #[test]
    fn new_rejects_credits_whose_weighted_sum_overflows() {
        let err = WeightTable::new(Dimension::ALL.into_iter().map(|d| (d, u32::MAX / 4)))
            .expect_err("oversized credits should fail");
        assert!(matches!(err, InvestabilityError::InvalidInput(_)));
        assert!(err.to_string().contains("sum to at most"));
    }

    #[test]
    fn new_accepts_credits_up_to_the_cap() {
        let mut entries = Dimension::ALL.into_iter().map(|d| (d, 1)).collect::<Vec<_>>();
        entries[0].1 = MAX_TOTAL_CREDITS - 7;
        let table = WeightTable::new(entries).expect("table at the cap should build");
        assert_eq!(table.total(), MAX_TOTAL_CREDITS);
        let top = table.weighted_mean(|_| 10.0);
        assert!((top - 10.0).abs() < 1e-9);
    }

    #[test]
    fn new_rejects_duplicate_dimension() {
        let entries = STANDARD_CREDITS
            .into_iter()
            .chain([(Dimension::Profitability, 1)]);
        let err = WeightTable::new(entries).expect_err("duplicate should fail");
        assert!(err.to_string().contains("duplicate weight"));
    }
}
