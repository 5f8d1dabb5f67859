use crate::defaults::*;
use crate::models::PotentialFamily;
use anyhow::{Context, Result};
use fssh_dynamics::DynamicsError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_jobtype() -> String {
    String::from(JOBTYPE)
}
fn default_verbose() -> i8 {
    VERBOSE
}
fn default_potential() -> PotentialFamily {
    POTENTIAL
}
fn default_gap_threshold() -> f64 {
    GAP_THRESHOLD
}
fn default_model_config() -> ModelConfig {
    ModelConfig {
        potential: default_potential(),
        gap_threshold: default_gap_threshold(),
    }
}
fn default_scan_pmin() -> f64 {
    SCAN_PMIN
}
fn default_scan_pmax() -> f64 {
    SCAN_PMAX
}
fn default_scan_npoints() -> usize {
    SCAN_NPOINTS
}
fn default_scan_config() -> ScanConfig {
    ScanConfig {
        pmin: default_scan_pmin(),
        pmax: default_scan_pmax(),
        npoints: default_scan_npoints(),
    }
}

/// Global settings of the program that are read from the file "fssh.toml".
/// The settings of the dynamics itself are stored in the file "dynamics.toml"
/// and are handled by the
/// [DynamicConfiguration](fssh_dynamics::initialization::DynamicConfiguration).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Configuration {
    #[serde(default = "default_jobtype")]
    pub jobtype: String,
    #[serde(default = "default_verbose")]
    pub verbose: i8,
    #[serde(default = "default_model_config")]
    pub model: ModelConfig,
    #[serde(default = "default_scan_config")]
    pub scan: ScanConfig,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            jobtype: default_jobtype(),
            verbose: default_verbose(),
            model: default_model_config(),
            scan: default_scan_config(),
        }
    }
}

impl Configuration {
    /// Parse the configuration from a toml string
    pub fn from_toml(config_string: &str) -> Result<Self> {
        let config: Configuration =
            toml::from_str(config_string).context("the configuration file could not be parsed")?;
        Ok(config)
    }

    /// Replace the model potential by the family with the name `name`
    pub fn set_potential(&mut self, name: &str) -> Result<(), DynamicsError> {
        self.model.potential = name.parse::<PotentialFamily>()?;
        Ok(())
    }

    /// Write the configuration to `file_path`, so that the user can see all
    /// options that were used
    pub fn write(&self, file_path: &Path) -> Result<()> {
        let config_string: String =
            toml::to_string(self).context("unable to serialize the configuration")?;
        fs::write(file_path, config_string)
            .with_context(|| format!("unable to write config file {}", file_path.display()))?;
        Ok(())
    }
}

/// Selection of the model potential
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ModelConfig {
    #[serde(default = "default_potential")]
    pub potential: PotentialFamily,
    /// smallest adiabatic gap in Hartree for which the coupling is evaluated
    #[serde(default = "default_gap_threshold")]
    pub gap_threshold: f64,
}

/// Grid of the potential scan
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ScanConfig {
    #[serde(default = "default_scan_pmin")]
    pub pmin: f64,
    #[serde(default = "default_scan_pmax")]
    pub pmax: f64,
    #[serde(default = "default_scan_npoints")]
    pub npoints: usize,
}
