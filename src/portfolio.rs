use crate::error::{InvestabilityError, Result};
use crate::industry::{self, Industry};
use crate::scoring::{assess, Assessment, ParameterSet, WeightTable};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default)]
    pub ratings: toml::Table,
}

impl Company {
    pub fn new(name: &str, industry: Option<&str>, ratings: &ParameterSet) -> Self {
        Self {
            name: name.trim().to_string(),
            industry: industry.map(|industry| industry.trim().to_string()),
            ratings: ratings.to_toml(),
        }
    }

    pub fn parameters(&self) -> Result<ParameterSet> {
        ParameterSet::from_toml(&self.ratings).map_err(|err| self.scoped(err))
    }

    pub fn industry(&self) -> Result<Option<&'static Industry>> {
        self.industry.as_deref().map(industry::lookup).transpose()
    }

    fn scoped(&self, err: InvestabilityError) -> InvestabilityError {
        match err {
            InvestabilityError::InvalidInput(message) => {
                InvestabilityError::InvalidInput(format!("company '{}': {message}", self.name))
            }
            other => other,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyAssessment {
    pub name: String,
    pub industry: Option<&'static Industry>,
    pub assessment: Assessment,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    #[serde(default, rename = "company")]
    pub companies: Vec<Company>,
}

impl Portfolio {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "portfolio file not found, starting empty");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let portfolio: Portfolio = toml::from_str(&content)
            .map_err(|e| InvestabilityError::ConfigParse(format!("{}: {}", path.display(), e)))?;
        tracing::debug!(
            path = %path.display(),
            companies = portfolio.companies.len(),
            "loaded portfolio"
        );
        Ok(portfolio)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn add(&mut self, mut company: Company) -> Result<()> {
        company.name = company.name.trim().to_string();
        if company.name.is_empty() {
            return Err(InvestabilityError::InvalidInput(
                "company name must not be empty".to_string(),
            ));
        }
        if self
            .companies
            .iter()
            .any(|existing| existing.name.trim().eq_ignore_ascii_case(&company.name))
        {
            return Err(InvestabilityError::InvalidInput(format!(
                "company '{}' already exists",
                company.name
            )));
        }
        if let Some(industry) = company.industry()? {
            company.industry = Some(industry.name.to_string());
        }
        company.parameters()?;

        self.companies.push(company);
        Ok(())
    }

    pub fn assess_all(&self, weights: &WeightTable) -> Result<Vec<CompanyAssessment>> {
        self.companies
            .iter()
            .map(|company| {
                Ok(CompanyAssessment {
                    name: company.name.clone(),
                    industry: company.industry()?,
                    assessment: assess(&company.parameters()?, weights),
                })
            })
            .collect()
    }
}
