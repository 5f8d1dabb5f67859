use crate::defaults::*;
use crate::errors::DynamicsError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_nstep() -> usize {
    NSTEP
}
fn default_stepsize() -> f64 {
    STEPSIZE
}
fn default_mass() -> f64 {
    MASS
}
fn default_pmin() -> f64 {
    PMIN
}
fn default_pmax() -> f64 {
    PMAX
}
fn default_start_position() -> f64 {
    START_POSITION
}
fn default_momenta() -> Vec<f64> {
    MOMENTA.to_vec()
}
fn default_ntraj() -> usize {
    NTRAJ
}
fn default_initial_state() -> usize {
    INITIAL_STATE
}
fn default_print_probabilities() -> bool {
    PRINT_PROBABILITIES
}
fn default_print_trace() -> bool {
    PRINT_TRACE
}
fn default_print_configuration() -> PrintConfiguration {
    PrintConfiguration {
        print_probabilities: default_print_probabilities(),
        print_trace: default_print_trace(),
    }
}

/// Struct that loads the configuration of the dynamics from the file "dynamics.toml"
/// It holds the settings of the nuclear propagation, the simulation domain, the
/// ensemble and the [PrintConfiguration]
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DynamicConfiguration {
    #[serde(default = "default_nstep")]
    pub nstep: usize,
    #[serde(default = "default_stepsize")]
    pub stepsize: f64,
    #[serde(default = "default_mass")]
    pub mass: f64,
    #[serde(default = "default_pmin")]
    pub pmin: f64,
    #[serde(default = "default_pmax")]
    pub pmax: f64,
    #[serde(default = "default_start_position")]
    pub start_position: f64,
    #[serde(default = "default_momenta")]
    pub momenta: Vec<f64>,
    #[serde(default = "default_ntraj")]
    pub ntraj: usize,
    #[serde(default = "default_initial_state")]
    pub initial_state: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default = "default_print_configuration")]
    pub print_config: PrintConfiguration,
}

impl Default for DynamicConfiguration {
    fn default() -> Self {
        DynamicConfiguration {
            nstep: default_nstep(),
            stepsize: default_stepsize(),
            mass: default_mass(),
            pmin: default_pmin(),
            pmax: default_pmax(),
            start_position: default_start_position(),
            momenta: default_momenta(),
            ntraj: default_ntraj(),
            initial_state: default_initial_state(),
            seed: None,
            print_config: default_print_configuration(),
        }
    }
}

impl DynamicConfiguration {
    /// Read the configuration file from the directory `dir`. If it does not exist
    /// the default settings are used and written to the directory, so that
    /// the user can see all the available options.
    pub fn new(dir: &Path) -> Result<Self, DynamicsError> {
        let config_file_path = dir.join(CONFIG_FILE_NAME);
        let config_string: String = if config_file_path.exists() {
            fs::read_to_string(&config_file_path)?
        } else {
            String::from("")
        };
        let config: Self = Self::from_toml(&config_string)?;
        if !config_file_path.exists() {
            fs::write(&config_file_path, toml::to_string(&config)?)?;
        }
        Ok(config)
    }

    /// Parse and validate the settings from a toml string. Missing keys fall
    /// back to their defaults.
    pub fn from_toml(config_string: &str) -> Result<Self, DynamicsError> {
        let config: Self = toml::from_str(config_string)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that can not describe a trajectory, before any
    /// trajectory is started.
    pub fn validate(&self) -> Result<(), DynamicsError> {
        if !(self.mass > 0.0) {
            return Err(DynamicsError::invalid(format!(
                "the mass has to be positive, got {}",
                self.mass
            )));
        }
        if !(self.stepsize > 0.0) {
            return Err(DynamicsError::invalid(format!(
                "the stepsize has to be positive, got {}",
                self.stepsize
            )));
        }
        if !(self.pmin < self.pmax) {
            return Err(DynamicsError::invalid(format!(
                "the domain [{}, {}] is empty",
                self.pmin, self.pmax
            )));
        }
        if !(self.start_position > self.pmin && self.start_position < self.pmax) {
            return Err(DynamicsError::invalid(format!(
                "the start position {} lies outside of the domain ({}, {})",
                self.start_position, self.pmin, self.pmax
            )));
        }
        if self.nstep == 0 {
            return Err(DynamicsError::invalid("the step ceiling nstep has to be positive"));
        }
        if self.ntraj == 0 {
            return Err(DynamicsError::invalid("at least one trajectory is required"));
        }
        if self.initial_state >= NSTATES {
            return Err(DynamicsError::invalid(format!(
                "the initial state {} does not exist, the model has {} states",
                self.initial_state, NSTATES
            )));
        }
        if let Some(momentum) = self.momenta.iter().find(|p| !p.is_finite()) {
            return Err(DynamicsError::invalid(format!(
                "the momentum {} is not finite",
                momentum
            )));
        }
        Ok(())
    }
}

/// Struct that controls the output of the simulation
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PrintConfiguration {
    #[serde(default = "default_print_probabilities")]
    pub print_probabilities: bool,
    #[serde(default = "default_print_trace")]
    pub print_trace: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_gives_defaults() {
        let config = DynamicConfiguration::from_toml("").unwrap();
        assert_eq!(config.nstep, NSTEP);
        assert_eq!(config.mass, MASS);
        assert_eq!(config.momenta, vec![20.0]);
        assert_eq!(config.initial_state, 0);
        assert!(config.seed.is_none());
        assert!(!config.print_config.print_trace);
    }

    #[test]
    fn config_keys_are_read() {
        let config = DynamicConfiguration::from_toml(
            "mass = 1000.0\nstepsize = 0.5\nmomenta = [10.0, 15.0]\nseed = 7\n\n\
             [print_config]\nprint_trace = true\n",
        )
        .unwrap();
        assert_eq!(config.mass, 1000.0);
        assert_eq!(config.stepsize, 0.5);
        assert_eq!(config.momenta, vec![10.0, 15.0]);
        assert_eq!(config.seed, Some(7));
        assert!(config.print_config.print_trace);
        assert!(config.print_config.print_probabilities);
    }

    #[test]
    fn non_positive_mass_is_rejected() {
        let result = DynamicConfiguration::from_toml("mass = 0.0");
        assert!(matches!(result, Err(DynamicsError::InvalidConfiguration(_))));
        let result = DynamicConfiguration::from_toml("mass = -2000.0");
        assert!(matches!(result, Err(DynamicsError::InvalidConfiguration(_))));
    }

    #[test]
    fn non_positive_stepsize_is_rejected() {
        let result = DynamicConfiguration::from_toml("stepsize = 0.0");
        assert!(matches!(result, Err(DynamicsError::InvalidConfiguration(_))));
    }

    #[test]
    fn start_outside_of_domain_is_rejected() {
        let result = DynamicConfiguration::from_toml("start_position = -10.5");
        assert!(matches!(result, Err(DynamicsError::InvalidConfiguration(_))));
        let result = DynamicConfiguration::from_toml("start_position = 10.0");
        assert!(matches!(result, Err(DynamicsError::InvalidConfiguration(_))));
    }

    #[test]
    fn empty_domain_is_rejected() {
        let result = DynamicConfiguration::from_toml("pmin = 5.0\npmax = 5.0");
        assert!(matches!(result, Err(DynamicsError::InvalidConfiguration(_))));
        let result = DynamicConfiguration::from_toml("pmin = 5.0\npmax = -5.0");
        assert!(matches!(result, Err(DynamicsError::InvalidConfiguration(_))));
    }

    #[test]
    fn zero_step_ceiling_is_rejected() {
        let result = DynamicConfiguration::from_toml("nstep = 0");
        assert!(matches!(result, Err(DynamicsError::InvalidConfiguration(_))));
    }

    #[test]
    fn empty_ensemble_is_rejected() {
        let result = DynamicConfiguration::from_toml("ntraj = 0");
        assert!(matches!(result, Err(DynamicsError::InvalidConfiguration(_))));
    }

    #[test]
    fn unknown_initial_state_is_rejected() {
        let result = DynamicConfiguration::from_toml("initial_state = 2");
        assert!(matches!(result, Err(DynamicsError::InvalidConfiguration(_))));
        assert!(DynamicConfiguration::from_toml("initial_state = 1").is_ok());
    }

    #[test]
    fn non_finite_momentum_is_rejected() {
        let result = DynamicConfiguration::from_toml("momenta = [10.0, nan]");
        assert!(matches!(result, Err(DynamicsError::InvalidConfiguration(_))));
        let result = DynamicConfiguration::from_toml("momenta = [inf]");
        assert!(matches!(result, Err(DynamicsError::InvalidConfiguration(_))));
    }

    #[test]
    fn config_round_trips_through_toml() {
        let mut config = DynamicConfiguration::default();
        config.seed = Some(3);
        let string = toml::to_string(&config).unwrap();
        let parsed = DynamicConfiguration::from_toml(&string).unwrap();
        assert_eq!(parsed.seed, Some(3));
        assert_eq!(parsed.momenta, config.momenta);
    }
}
