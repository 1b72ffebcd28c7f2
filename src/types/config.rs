use crate::allocation::Currency;
use crate::error::InvestabilityError;
use crate::industry;
use serde::Deserialize;

pub const DEFAULT_FUND: f64 = 10_000_000.0;
pub const DEFAULT_TOP: usize = 3;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvestabilityConfig {
    pub allocation: Option<AllocationConfig>,
    pub industry: Option<IndustryConfig>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AllocationConfig {
    pub fund: Option<f64>,
    pub currency: Option<Currency>,
    pub top: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndustryConfig {
    pub default: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormatConfig {
    Md,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<ReportFormatConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllocationSettings {
    pub fund: f64,
    pub currency: Currency,
    pub top: usize,
}

impl Default for AllocationSettings {
    fn default() -> Self {
        Self {
            fund: DEFAULT_FUND,
            currency: Currency::Inr,
            top: DEFAULT_TOP,
        }
    }
}

impl InvestabilityConfig {
    pub fn allocation_settings(&self) -> AllocationSettings {
        let defaults = AllocationSettings::default();
        match &self.allocation {
            Some(allocation) => AllocationSettings {
                fund: allocation.fund.unwrap_or(defaults.fund),
                currency: allocation.currency.unwrap_or(defaults.currency),
                top: allocation.top.unwrap_or(defaults.top),
            },
            None => defaults,
        }
    }

    pub fn default_industry(&self) -> Option<&str> {
        self.industry
            .as_ref()
            .and_then(|industry| industry.default.as_deref())
    }

    pub fn report_format(&self) -> Option<ReportFormatConfig> {
        self.report.as_ref().and_then(|report| report.format)
    }

    pub fn validate(&self) -> Result<(), InvestabilityError> {
        if let Some(allocation) = &self.allocation {
            if let Some(fund) = allocation.fund {
                if !fund.is_finite() || fund <= 0.0 {
                    return Err(InvestabilityError::ConfigParse(format!(
                        "allocation.fund must be greater than 0 (found {fund})"
                    )));
                }
            }
            if allocation.top == Some(0) {
                return Err(InvestabilityError::ConfigParse(
                    "allocation.top must be greater than 0".to_string(),
                ));
            }
        }

        if let Some(name) = self.default_industry() {
            if industry::lookup(name).is_err() {
                return Err(InvestabilityError::ConfigParse(format!(
                    "industry.default is not a known industry: {name}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_config_uses_defaults() {
        let cfg: InvestabilityConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.allocation_settings(), AllocationSettings::default());
        assert!(cfg.default_industry().is_none());
        assert!(cfg.report_format().is_none());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[allocation]
fund = 5000000.0
currency = "usd"
top = 2

[industry]
default = "Pharma"

[report]
format = "json"
"#;
        let cfg: InvestabilityConfig = toml::from_str(toml_str).expect("full config should parse");
        assert_eq!(
            cfg.allocation_settings(),
            AllocationSettings {
                fund: 5_000_000.0,
                currency: Currency::Usd,
                top: 2,
            }
        );
        assert_eq!(cfg.default_industry(), Some("Pharma"));
        assert_eq!(cfg.report_format(), Some(ReportFormatConfig::Json));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn allocation_settings_fill_missing_fields() {
        let cfg: InvestabilityConfig = toml::from_str(
            r#"
[allocation]
currency = "usd"
"#,
        )
        .expect("config should parse");
        let settings = cfg.allocation_settings();
        assert_eq!(settings.fund, DEFAULT_FUND);
        assert_eq!(settings.currency, Currency::Usd);
        assert_eq!(settings.top, DEFAULT_TOP);
    }

    #[test]
    fn validate_rejects_non_positive_fund() {
        let cfg: InvestabilityConfig = toml::from_str(
            r#"
[allocation]
fund = 0.0
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("allocation.fund must be greater than 0"));
    }

    #[test]
    fn validate_rejects_zero_top() {
        let cfg: InvestabilityConfig = toml::from_str(
            r#"
[allocation]
top = 0
"#,
        )
        .expect("config should parse");
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_unknown_default_industry() {
        let cfg: InvestabilityConfig = toml::from_str(
            r#"
[industry]
default = "Shipbuilding"
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("industry.default"));
    }

    #[test]
    fn unknown_currency_fails_to_parse() {
        let result: Result<InvestabilityConfig, _> = toml::from_str(
            r#"
[allocation]
currency = "eur"
"#,
        );
        assert!(result.is_err());
    }
}
