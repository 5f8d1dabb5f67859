use thiserror::Error;

/// Errors of the surface hopping dynamics.
#[derive(Error, Debug)]
pub enum DynamicsError {
    /// The input settings can not describe a physical trajectory
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The electronic structure can not be evaluated reliably at this position,
    /// e.g. the adiabatic energy gap closes
    #[error("Numerical instability at x = {position}: {message}")]
    NumericalInstability { position: f64, message: String },

    #[error("Unknown potential family: {0}")]
    UnknownPotential(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DynamicsError {
    pub fn invalid(message: impl Into<String>) -> Self {
        DynamicsError::InvalidConfiguration(message.into())
    }

    pub fn instability(position: f64, message: impl Into<String>) -> Self {
        DynamicsError::NumericalInstability {
            position,
            message: message.into(),
        }
    }
}

impl From<serde_yaml::Error> for DynamicsError {
    fn from(err: serde_yaml::Error) -> Self {
        DynamicsError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for DynamicsError {
    fn from(err: toml::de::Error) -> Self {
        DynamicsError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for DynamicsError {
    fn from(err: toml::ser::Error) -> Self {
        DynamicsError::Serialization(err.to_string())
    }
}
