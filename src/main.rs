mod cli;

use clap::Parser;
use investability::error::{InvestabilityError, Result};
use investability::exit_code;
use investability::portfolio::{Company, Portfolio};
use investability::report::{self, OutputFormat, Report};
use investability::scoring::{self, ParameterSet, WeightTable};
use investability::types::config::{InvestabilityConfig, ReportFormatConfig};
use investability::types::report::{AllocationReport, PortfolioReport, ScoreReport};
use investability::{allocation, config, industry, logging};

fn output_format(flag: Option<cli::ReportFormat>, config: &InvestabilityConfig) -> OutputFormat {
    match flag {
        Some(cli::ReportFormat::Json) => OutputFormat::Json,
        Some(cli::ReportFormat::Md) => OutputFormat::Md,
        None => match config.report_format() {
            Some(ReportFormatConfig::Json) => OutputFormat::Json,
            Some(ReportFormatConfig::Md) | None => OutputFormat::Md,
        },
    }
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    if !cli.config_dir.exists() {
        return Err(InvestabilityError::PathNotFound(
            cli.config_dir.display().to_string(),
        ));
    }
    let config = match config::load_config(&cli.config_dir)? {
        Some(config) => config,
        None => {
            tracing::info!(
                "no investability.toml found in {}, using defaults",
                cli.config_dir.display()
            );
            InvestabilityConfig::default()
        }
    };
    let weights = WeightTable::standard();

    match cli.command {
        cli::Commands::Score(cmd) => {
            let params = ParameterSet::from_pairs(&cmd.ratings.ratings, cmd.ratings.default)?;
            let industry = cmd
                .industry
                .as_deref()
                .or_else(|| config.default_industry())
                .map(industry::lookup)
                .transpose()?;

            let report = ScoreReport::new(scoring::assess(&params, &weights), industry);
            let rendered = report::render(
                Report::Score(&report),
                output_format(cmd.format, &config),
            )?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Weights(cmd) => {
            let rendered = report::render(
                Report::Weights(&weights),
                output_format(cmd.format, &config),
            )?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Industry(cmd) => {
            let selected = match cmd.name.as_deref() {
                Some(name) => std::slice::from_ref(industry::lookup(name)?),
                None => industry::industries(),
            };
            let rendered = report::render(
                Report::Industries(selected),
                output_format(cmd.format, &config),
            )?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Portfolio(cli::PortfolioCommand::Add(cmd)) => {
            let params = ParameterSet::from_pairs(&cmd.ratings.ratings, cmd.ratings.default)?;
            let mut portfolio = Portfolio::load(&cmd.file)?;
            portfolio.add(Company::new(&cmd.name, cmd.industry.as_deref(), &params))?;
            portfolio.save(&cmd.file)?;

            let score = scoring::score(&params, &weights);
            println!(
                "added {} ({:.2}/10, {}) to {}",
                cmd.name.trim(),
                score,
                scoring::classify(score),
                cmd.file.display()
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Portfolio(cli::PortfolioCommand::List(cmd)) => {
            if !cmd.file.exists() {
                return Err(InvestabilityError::PathNotFound(cmd.file.display().to_string()));
            }
            let portfolio = Portfolio::load(&cmd.file)?;
            let report = PortfolioReport::new(portfolio.assess_all(&weights)?);
            let rendered = report::render(
                Report::Portfolio(&report),
                output_format(cmd.format, &config),
            )?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Allocate(cmd) => {
            if !cmd.file.exists() {
                return Err(InvestabilityError::PathNotFound(cmd.file.display().to_string()));
            }
            let settings = config.allocation_settings();
            let fund = cmd.fund.unwrap_or(settings.fund);
            let currency = cmd.currency.unwrap_or(settings.currency);
            let top = if cmd.all {
                None
            } else {
                Some(cmd.top.unwrap_or(settings.top))
            };

            let portfolio = Portfolio::load(&cmd.file)?;
            let scored = portfolio
                .assess_all(&weights)?
                .into_iter()
                .map(|company| (company.name, company.assessment.score))
                .collect::<Vec<_>>();
            if top.is_some_and(|top| scored.len() < top) {
                tracing::warn!(
                    companies = scored.len(),
                    "portfolio has fewer companies than requested, funding all"
                );
            }

            let allocations = allocation::allocate(fund, &scored, top)?;
            let report = AllocationReport::new(fund, currency, allocations);
            let rendered = report::render(
                Report::Allocation(&report),
                output_format(cmd.format, &config),
            )?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
