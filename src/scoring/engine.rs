use super::classify::{classify, Classification};
use super::dimension::Dimension;
use super::ratings::ParameterSet;
use super::weights::WeightTable;
use crate::error::{InvestabilityError, Result};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct Contribution {
    pub dimension: Dimension,
    pub rating: u8,
    pub weight: u32,
    pub weighted: u32,
    pub contribution: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub ratings: ParameterSet,
    pub score: f64,
    pub classification: Classification,
    pub recommendation: &'static str,
    pub contributions: Vec<Contribution>,
}

/// Both maps must cover the same dimensions and every rating must be in `[1, 10]`;
/// anything else is `InvalidInput`.
pub fn compute_score(ratings: &BTreeMap<String, i64>, weights: &WeightTable) -> Result<f64> {
    let extra = ratings
        .keys()
        .filter(|name| !weights.contains_name(name))
        .map(String::as_str)
        .collect::<Vec<_>>();
    if !extra.is_empty() {
        return Err(InvestabilityError::InvalidInput(format!(
            "rating(s) without a weight: {}",
            extra.join(", ")
        )));
    }

    let missing = weights
        .iter()
        .map(|(dimension, _)| dimension.name())
        .filter(|name| !ratings.contains_key(*name))
        .collect::<Vec<_>>();
    if !missing.is_empty() {
        return Err(InvestabilityError::InvalidInput(format!(
            "missing rating for: {}",
            missing.join(", ")
        )));
    }

    let params = ParameterSet::from_map(ratings)?;
    Ok(score(&params, weights))
}

pub fn score(params: &ParameterSet, weights: &WeightTable) -> f64 {
    let value = weights.weighted_mean(|dimension| {
        params.get(dimension).map(f64::from).unwrap_or_default()
    });
    tracing::debug!(score = value, total_weight = weights.total(), "computed investability score");
    value
}

pub fn assess(params: &ParameterSet, weights: &WeightTable) -> Assessment {
    let total = f64::from(weights.total());
    let contributions = weights
        .iter()
        .map(|(dimension, weight)| {
            let rating = params.get(dimension).unwrap_or_default();
            let weighted = u32::from(rating) * weight;
            Contribution {
                dimension,
                rating,
                weight,
                weighted,
                contribution: f64::from(weighted) / total,
            }
        })
        .collect();

    let value = score(params, weights);
    let classification = classify(value);
    Assessment {
        ratings: params.clone(),
        score: value,
        classification,
        recommendation: classification.recommendation(),
        contributions,
    }
}
