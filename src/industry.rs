use crate::error::{InvestabilityError, Result};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Industry {
    pub name: &'static str,
    pub cagr: &'static str,
    pub market_growth: &'static str,
    pub profitability: &'static str,
}

static INDUSTRIES: [Industry; 7] = [
    Industry {
        name: "Fintech",
        cagr: "15-20%",
        market_growth: "Strong digital adoption",
        profitability: "High",
    },
    Industry {
        name: "Pharma",
        cagr: "30%",
        market_growth: "Growing AI diagnostics",
        profitability: "R&D heavy",
    },
    Industry {
        name: "FMCG",
        cagr: "9.4%",
        market_growth: "Online FMCG boom",
        profitability: "Consistent",
    },
    Industry {
        name: "Edtech",
        cagr: "15-18%",
        market_growth: "Digital education growth",
        profitability: "Moderate",
    },
    Industry {
        name: "Quick Commerce",
        cagr: "25-30%",
        market_growth: "Fast deliveries demand",
        profitability: "Growing",
    },
    Industry {
        name: "EV & Automobiles",
        cagr: "66.52%",
        market_growth: "Electric mobility transition",
        profitability: "Tech intensive",
    },
    Industry {
        name: "Renewable Energy",
        cagr: "25-30%",
        market_growth: "Sustainability investments",
        profitability: "Capital intensive",
    },
];

pub fn industries() -> &'static [Industry] {
    &INDUSTRIES
}

pub fn lookup(name: &str) -> Result<&'static Industry> {
    let name = name.trim();
    INDUSTRIES
        .iter()
        .find(|industry| industry.name == name)
        .or_else(|| {
            INDUSTRIES
                .iter()
                .find(|industry| industry.name.eq_ignore_ascii_case(name))
        })
        .ok_or_else(|| InvestabilityError::UnknownIndustry(name.to_string()))
}
