use investability::allocation::Currency;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "investability",
    version,
    about = "Startup Investability Index scoring CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding investability.toml
    #[arg(long, global = true, default_value = ".")]
    pub config_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one startup from its dimension ratings
    Score(ScoreCommand),
    /// Show the dimension weight table
    Weights(WeightsCommand),
    /// List industry insights, or show one industry
    Industry(IndustryCommand),
    /// Manage a portfolio file of named companies
    #[command(subcommand)]
    Portfolio(PortfolioCommand),
    /// Split a fund across the best-scoring companies of a portfolio
    Allocate(AllocateCommand),
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct RatingArgs {
    /// Rating as "Dimension Name=N", N in 1..=10 (repeatable)
    #[arg(short, long = "rating", value_name = "NAME=N")]
    pub ratings: Vec<String>,

    /// Rating applied to every dimension not given with --rating
    #[arg(long, value_name = "N")]
    pub default: Option<i64>,
}

#[derive(Args)]
pub struct ScoreCommand {
    #[command(flatten)]
    pub ratings: RatingArgs,
    #[arg(long)]
    pub industry: Option<String>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct WeightsCommand {
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct IndustryCommand {
    pub name: Option<String>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Subcommand)]
pub enum PortfolioCommand {
    /// Add a company to the portfolio file, creating it if needed
    Add(PortfolioAddCommand),
    /// Score every company in the portfolio file
    List(PortfolioListCommand),
}

#[derive(Args)]
pub struct PortfolioAddCommand {
    pub file: PathBuf,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub industry: Option<String>,
    #[command(flatten)]
    pub ratings: RatingArgs,
}

#[derive(Args)]
pub struct PortfolioListCommand {
    pub file: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct AllocateCommand {
    pub file: PathBuf,
    #[arg(long)]
    pub fund: Option<f64>,
    #[arg(long, value_enum)]
    pub currency: Option<Currency>,
    /// Number of top-scoring companies to fund
    #[arg(long)]
    pub top: Option<usize>,
    /// Fund every company instead of the top N
    #[arg(long, conflicts_with = "top")]
    pub all: bool,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}
