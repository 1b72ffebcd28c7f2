pub mod json;
pub mod md;

use crate::error::InvestabilityError;
use crate::industry::Industry;
use crate::scoring::WeightTable;
use crate::types::report::{AllocationReport, PortfolioReport, ScoreReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

#[derive(Debug, Clone, Copy)]
pub enum Report<'a> {
    Score(&'a ScoreReport),
    Portfolio(&'a PortfolioReport),
    Allocation(&'a AllocationReport),
    Weights(&'a WeightTable),
    Industries(&'a [Industry]),
}

pub fn render(report: Report<'_>, format: OutputFormat) -> Result<String, InvestabilityError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(InvestabilityError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
