use crate::defaults::CONFIG_FILE_NAME;
use crate::io::Configuration;
use anyhow::{Context, Result};
use fssh_dynamics::initialization::DynamicConfiguration;
use std::fs;
use std::path::Path;

/// Read the global configuration from the directory `dir`.
pub fn read_input(dir: &Path) -> Result<Configuration> {
    // The configuration file is read, if it does not exist in the directory
    // the program initializes the default settings and writes a configuration file
    // to the directory.
    let config_file_path = dir.join(CONFIG_FILE_NAME);
    let config_string: String = if config_file_path.exists() {
        fs::read_to_string(&config_file_path)
            .with_context(|| format!("unable to read config file {}", config_file_path.display()))?
    } else {
        String::from("")
    };
    // Load the configuration.
    let config: Configuration = Configuration::from_toml(&config_string)
        .with_context(|| format!("invalid config file {}", config_file_path.display()))?;
    // The configuration file is saved if it does not exist already so that the user can see
    // all the used options.
    if !config_file_path.exists() {
        config.write(&config_file_path)?;
    }
    Ok(config)
}

/// Read the settings of the dynamics from the directory `dir`.
pub fn read_dynamic_input(dir: &Path) -> Result<DynamicConfiguration> {
    let config: DynamicConfiguration = DynamicConfiguration::new(dir)
        .with_context(|| format!("unable to load the dynamics settings from {}", dir.display()))?;
    Ok(config)
}
