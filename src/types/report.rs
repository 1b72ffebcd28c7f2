use crate::allocation::{Allocation, Currency};
use crate::industry::Industry;
use crate::portfolio::CompanyAssessment;
use crate::scoring::Assessment;
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ReportHeader {
    pub version: String,
    pub generated_at: String,
}

impl ReportHeader {
    pub fn now() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    #[serde(flatten)]
    pub header: ReportHeader,
    pub assessment: Assessment,
    pub industry: Option<&'static Industry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PortfolioReport {
    #[serde(flatten)]
    pub header: ReportHeader,
    pub companies: Vec<CompanyAssessment>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AllocationReport {
    #[serde(flatten)]
    pub header: ReportHeader,
    pub fund: f64,
    pub currency: Currency,
    pub allocations: Vec<Allocation>,
}

impl ScoreReport {
    pub fn new(assessment: Assessment, industry: Option<&'static Industry>) -> Self {
        Self {
            header: ReportHeader::now(),
            assessment,
            industry,
        }
    }
}

impl PortfolioReport {
    pub fn new(companies: Vec<CompanyAssessment>) -> Self {
        Self {
            header: ReportHeader::now(),
            companies,
        }
    }
}

impl AllocationReport {
    pub fn new(fund: f64, currency: Currency, allocations: Vec<Allocation>) -> Self {
        Self {
            header: ReportHeader::now(),
            fund,
            currency,
            allocations,
        }
    }
}
