use super::dimension::Dimension;
use crate::error::{InvestabilityError, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use toml::Value;

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 10;
pub const DEFAULT_RATING: i64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParameterSet {
    ratings: BTreeMap<Dimension, u8>,
}

impl ParameterSet {
    pub fn uniform(rating: i64) -> Result<Self> {
        Self::from_map(
            &Dimension::ALL
                .iter()
                .map(|dimension| (dimension.name().to_string(), rating))
                .collect(),
        )
    }

    pub fn from_map(ratings: &BTreeMap<String, i64>) -> Result<Self> {
        let mut validated = BTreeMap::new();
        for (name, value) in ratings {
            let dimension: Dimension = name.parse()?;
            validated.insert(dimension, check_range(dimension, *value)?);
        }

        let missing = Dimension::ALL
            .iter()
            .filter(|dimension| !validated.contains_key(dimension))
            .map(|dimension| dimension.name())
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(InvestabilityError::InvalidInput(format!(
                "missing rating for: {}",
                missing.join(", ")
            )));
        }

        Ok(Self { ratings: validated })
    }

    pub fn from_raw(ratings: &BTreeMap<String, String>) -> Result<Self> {
        let mut parsed = BTreeMap::new();
        for (name, raw) in ratings {
            let value = raw.trim().parse::<i64>().map_err(|_| {
                InvestabilityError::InvalidInput(format!(
                    "rating for '{name}' is not a number: '{raw}'"
                ))
            })?;
            parsed.insert(name.clone(), value);
        }
        Self::from_map(&parsed)
    }

    pub fn from_toml(table: &toml::Table) -> Result<Self> {
        let mut parsed = BTreeMap::new();
        for (name, value) in table {
            match value {
                Value::Integer(rating) => {
                    parsed.insert(name.clone(), *rating);
                }
                other => {
                    return Err(InvestabilityError::InvalidInput(format!(
                        "rating for '{name}' is not an integer: {other}"
                    )));
                }
            }
        }
        Self::from_map(&parsed)
    }

    // `default` fills dimensions the pairs leave out.
    pub fn from_pairs(pairs: &[String], default: Option<i64>) -> Result<Self> {
        Self::from_raw(&pairs_to_raw(pairs, default)?)
    }

    pub fn get(&self, dimension: Dimension) -> Option<u8> {
        self.ratings.get(&dimension).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, u8)> + '_ {
        self.ratings.iter().map(|(dimension, rating)| (*dimension, *rating))
    }

    pub fn min(&self) -> u8 {
        self.ratings.values().copied().min().unwrap_or(MIN_RATING as u8)
    }

    pub fn max(&self) -> u8 {
        self.ratings.values().copied().max().unwrap_or(MAX_RATING as u8)
    }

    pub fn to_toml(&self) -> toml::Table {
        self.iter()
            .map(|(dimension, rating)| {
                (dimension.name().to_string(), Value::Integer(i64::from(rating)))
            })
            .collect()
    }
}

pub(crate) fn pairs_to_raw(
    pairs: &[String],
    default: Option<i64>,
) -> Result<BTreeMap<String, String>> {
    let mut raw = BTreeMap::new();
    for pair in pairs {
        let (name, value) = pair.split_once('=').ok_or_else(|| {
            InvestabilityError::InvalidInput(format!("expected 'Name=value', got '{pair}'"))
        })?;
        let name = name.trim().to_string();
        if raw.insert(name.clone(), value.trim().to_string()).is_some() {
            return Err(InvestabilityError::InvalidInput(format!(
                "rating for '{name}' given more than once"
            )));
        }
    }

    if let Some(default) = default {
        for dimension in Dimension::ALL {
            raw.entry(dimension.name().to_string())
                .or_insert_with(|| default.to_string());
        }
    }

    Ok(raw)
}

pub(crate) fn check_range(dimension: Dimension, value: i64) -> Result<u8> {
    if !(MIN_RATING..=MAX_RATING).contains(&value) {
        return Err(InvestabilityError::InvalidInput(format!(
            "rating for '{dimension}' must be between {MIN_RATING} and {MAX_RATING} (found {value})"
        )));
    }
    Ok(value as u8)
}
