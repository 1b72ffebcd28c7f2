//! Investability Index scoring: eight weighted dimensions, a High/Moderate/Low
//! classification, industry benchmarks, portfolios and fund allocation.

pub mod allocation;
pub mod config;
pub mod error;
pub mod industry;
pub mod logging;
pub mod portfolio;
pub mod report;
pub mod scoring;
pub mod types;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}
