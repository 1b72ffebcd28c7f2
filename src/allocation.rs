use crate::error::{InvestabilityError, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Inr,
    Usd,
}

impl Currency {
    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Inr => "₹",
            Currency::Usd => "$",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Allocation {
    pub company: String,
    pub score: f64,
    pub share: f64,
    pub amount: f64,
}

pub fn allocate(fund: f64, scored: &[(String, f64)], top: Option<usize>) -> Result<Vec<Allocation>> {
    if !fund.is_finite() || fund <= 0.0 {
        return Err(InvestabilityError::InvalidAllocation(format!(
            "fund must be a positive amount (found {fund})"
        )));
    }
    if top == Some(0) {
        return Err(InvestabilityError::InvalidAllocation(
            "top must select at least one company".to_string(),
        ));
    }
    if scored.is_empty() {
        return Err(InvestabilityError::InvalidAllocation(
            "no companies to allocate to".to_string(),
        ));
    }
    if let Some((company, score)) = scored
        .iter()
        .find(|(_, score)| !score.is_finite() || *score <= 0.0)
    {
        return Err(InvestabilityError::InvalidAllocation(format!(
            "score for '{company}' must be a positive number (found {score})"
        )));
    }

    let mut ranked = scored.to_vec();
    ranked.sort_by(|(left_name, left), (right_name, right)| {
        right
            .total_cmp(left)
            .then_with(|| left_name.cmp(right_name))
    });
    if let Some(top) = top {
        ranked.truncate(top);
    }

    let total: f64 = ranked.iter().map(|(_, score)| score).sum();
    tracing::debug!(companies = ranked.len(), total_score = total, fund, "allocating fund");

    Ok(ranked
        .into_iter()
        .map(|(company, score)| {
            let share = score / total;
            Allocation {
                company,
                score,
                share,
                amount: share * fund,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(entries: &[(&str, f64)]) -> Vec<(String, f64)> {
        entries
            .iter()
            .map(|(name, score)| (name.to_string(), *score))
            .collect()
    }

    #[test]
    fn allocation_is_proportional_to_score() {
        let allocations = allocate(
            1_000_000.0,
            &scored(&[("Company A", 8.0), ("Company B", 6.0), ("Company C", 6.0)]),
            None,
        )
        .expect("allocation should succeed");

        assert_eq!(allocations[0].company, "Company A");
        assert!((allocations[0].amount - 400_000.0).abs() < 1e-6);
        assert!((allocations[1].amount - 300_000.0).abs() < 1e-6);
        let total: f64 = allocations.iter().map(|a| a.amount).sum();
        assert!((total - 1_000_000.0).abs() < 1e-6);
        let shares: f64 = allocations.iter().map(|a| a.share).sum();
        assert!((shares - 1.0).abs() < 1e-12);
    }

    #[test]
    fn top_keeps_highest_scores_with_name_tiebreak() {
        let allocations = allocate(
            5_000_000.0,
            &scored(&[
                ("Delta", 5.5),
                ("Alpha", 9.0),
                ("Charlie", 7.0),
                ("Bravo", 7.0),
            ]),
            Some(3),
        )
        .expect("allocation should succeed");

        let names = allocations.iter().map(|a| a.company.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Alpha", "Bravo", "Charlie"]);
        let total: f64 = allocations.iter().map(|a| a.amount).sum();
        assert!((total - 5_000_000.0).abs() < 1e-6);
    }

    #[test]
    fn allocation_rejects_bad_inputs() {
        let companies = scored(&[("A", 5.0)]);
        assert!(allocate(0.0, &companies, None).is_err());
        assert!(allocate(f64::NAN, &companies, None).is_err());
        assert!(allocate(100.0, &companies, Some(0)).is_err());
        let err = allocate(100.0, &[], None).expect_err("empty should fail");
        assert!(matches!(err, InvestabilityError::InvalidAllocation(_)));
    }

    #[test]
    fn allocation_rejects_scores_that_cannot_be_split() {
        for bad in [0.0, -2.5, f64::NAN, f64::INFINITY] {
            let companies = scored(&[("Acme", 6.0), ("Globex", bad)]);
            let err = allocate(1_000.0, &companies, None).expect_err("bad score should fail");
            assert!(matches!(err, InvestabilityError::InvalidAllocation(_)));
            assert!(err.to_string().contains("Globex"));
        }

        let zeros = scored(&[("Acme", 0.0), ("Globex", 0.0)]);
        let err = allocate(1_000.0, &zeros, Some(1)).expect_err("all-zero scores should fail");
        assert!(matches!(err, InvestabilityError::InvalidAllocation(_)));
    }

    #[test]
    fn currency_symbols() {
        assert_eq!(Currency::Inr.symbol(), "₹");
        assert_eq!(Currency::Usd.symbol(), "$");
    }
}
