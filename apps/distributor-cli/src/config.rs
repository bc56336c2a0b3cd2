use crate::error::{CliError, CliResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Distribution configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionConfig {
    /// Human-readable distribution name (for organization)
    pub name: String,

    /// Path to the eligibility CSV, relative to the config file
    pub eligibility_csv: PathBuf,

    /// Flat amount paid per claim
    pub amount_per_claim: u64,

    /// Total payout balance. Defaults to exactly enough for every claim.
    #[serde(default)]
    pub funding: Option<u64>,
}

impl DistributionConfig {
    pub fn load(path: &Path) -> CliResult<Self> {
        let contents = fs::read_to_string(path)?;
        let mut config: DistributionConfig = serde_yaml::from_str(&contents)?;

        if config.name.trim().is_empty() {
            return Err(CliError::InvalidConfig("name must not be empty".to_string()));
        }
        if config.amount_per_claim == 0 {
            return Err(CliError::InvalidConfig(
                "amount_per_claim must be greater than zero".to_string(),
            ));
        }

        if config.eligibility_csv.is_relative() {
            if let Some(dir) = path.parent() {
                config.eligibility_csv = dir.join(&config.eligibility_csv);
            }
        }

        Ok(config)
    }

    /// Funding to compile with, given the number of eligible identities.
    pub fn funding_for(&self, eligible: usize) -> CliResult<u64> {
        match self.funding {
            Some(funding) => Ok(funding),
            None => self
                .amount_per_claim
                .checked_mul(eligible as u64)
                .ok_or_else(|| {
                    CliError::InvalidConfig(format!(
                        "funding overflows for {} claims of {}",
                        eligible, self.amount_per_claim
                    ))
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_resolves_relative_csv_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("distribution.yaml");
        fs::write(
            &path,
            "name: spring-drop\neligibility_csv: eligibility.csv\namount_per_claim: 500\nfunding: 10000\n",
        )
        .unwrap();

        let config = DistributionConfig::load(&path).unwrap();
        assert_eq!(config.name, "spring-drop");
        assert_eq!(config.eligibility_csv, dir.path().join("eligibility.csv"));
        assert_eq!(config.amount_per_claim, 500);
        assert_eq!(config.funding_for(3).unwrap(), 10_000);
    }

    #[test]
    fn test_default_funding_covers_every_claim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("distribution.yaml");
        fs::write(
            &path,
            "name: drop\neligibility_csv: /tmp/e.csv\namount_per_claim: 7\n",
        )
        .unwrap();

        let config = DistributionConfig::load(&path).unwrap();
        assert_eq!(config.eligibility_csv, PathBuf::from("/tmp/e.csv"));
        assert_eq!(config.funding_for(6).unwrap(), 42);
    }

    #[test]
    fn test_rejects_zero_amount() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("distribution.yaml");
        fs::write(&path, "name: drop\neligibility_csv: e.csv\namount_per_claim: 0\n").unwrap();

        assert!(matches!(
            DistributionConfig::load(&path),
            Err(CliError::InvalidConfig(_))
        ));
    }
}
