use super::Report;
use crate::industry::Industry;
use crate::scoring::{Assessment, WeightTable};
use crate::types::report::{AllocationReport, PortfolioReport, ScoreReport};

pub fn to_markdown(report: Report<'_>) -> String {
    match report {
        Report::Score(report) => score_markdown(report),
        Report::Portfolio(report) => portfolio_markdown(report),
        Report::Allocation(report) => allocation_markdown(report),
        Report::Weights(table) => weights_markdown(table),
        Report::Industries(industries) => industries_markdown(industries),
    }
}

fn score_markdown(report: &ScoreReport) -> String {
    let mut output = String::new();
    output.push_str("# Investability Report\n\n");
    push_assessment(&mut output, &report.assessment);

    if let Some(industry) = report.industry {
        output.push_str("## Industry Insights\n\n");
        push_industry(&mut output, industry);
    }
    output
}

fn portfolio_markdown(report: &PortfolioReport) -> String {
    let mut output = String::new();
    output.push_str("# Portfolio Report\n\n");
    if report.companies.is_empty() {
        output.push_str("- none\n");
        return output;
    }

    for company in &report.companies {
        output.push_str(&format!("## {}\n\n", company.name));
        if let Some(industry) = company.industry {
            output.push_str(&format!("Industry: {} (CAGR {})\n\n", industry.name, industry.cagr));
        }
        push_assessment(&mut output, &company.assessment);
    }
    output
}

fn allocation_markdown(report: &AllocationReport) -> String {
    let symbol = report.currency.symbol();
    let mut output = String::new();
    output.push_str("# Investment Allocation\n\n");
    output.push_str(&format!("Fund: {}{}\n\n", symbol, group_thousands(report.fund)));
    output.push_str("| Company | Score | Share | Amount |\n|---|---|---|---|\n");
    for allocation in &report.allocations {
        output.push_str(&format!(
            "| {} | {:.2} | {:.1}% | {}{} |\n",
            allocation.company,
            allocation.score,
            allocation.share * 100.0,
            symbol,
            group_thousands(allocation.amount)
        ));
    }
    output
}

fn weights_markdown(table: &WeightTable) -> String {
    let mut output = String::new();
    output.push_str("# Weight Table\n\n");
    output.push_str("| Dimension | Credits |\n|---|---|\n");
    for (dimension, credit) in table.iter() {
        output.push_str(&format!("| {dimension} | {credit} |\n"));
    }
    output.push_str(&format!("\nTotal: {}\n", table.total()));
    output
}

fn industries_markdown(industries: &[Industry]) -> String {
    let mut output = String::new();
    output.push_str("# Industry Insights\n\n");
    for industry in industries {
        output.push_str(&format!("## {}\n\n", industry.name));
        push_industry(&mut output, industry);
    }
    output
}

fn push_assessment(output: &mut String, assessment: &Assessment) {
    output.push_str(&format!(
        "Investability Index: {:.2}/10\n\n",
        assessment.score
    ));
    output.push_str(&format!(
        "{}: {}\n\n",
        assessment.classification, assessment.recommendation
    ));
    output.push_str("| Dimension | Rating | Credits | Contribution |\n|---|---|---|---|\n");
    for contribution in &assessment.contributions {
        output.push_str(&format!(
            "| {} | {} | {} | {:.2} |\n",
            contribution.dimension,
            contribution.rating,
            contribution.weight,
            contribution.contribution
        ));
    }
    output.push('\n');
}

fn push_industry(output: &mut String, industry: &Industry) {
    output.push_str(&format!(
        "- CAGR: {}\n- Market Growth Potential: {}\n- Profitability: {}\n\n",
        industry.cagr, industry.market_growth, industry.profitability
    ));
}

fn group_thousands(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::new();
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}
