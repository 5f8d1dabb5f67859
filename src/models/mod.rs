mod tully;

use fssh_dynamics::DynamicsError;
use ndarray::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
pub use tully::{dual_avoided_crossing, extended_coupling, single_avoided_crossing};

/// The parametrized two-state model potentials
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PotentialFamily {
    /// Single avoided crossing
    #[serde(rename = "SAC")]
    Sac,
    /// Dual avoided crossing
    #[serde(rename = "DAC")]
    Dac,
    /// Extended coupling with reflection
    #[serde(rename = "ECR")]
    Ecr,
}

impl PotentialFamily {
    /// Diabatic potential matrix and its derivative with respect to the
    /// nuclear coordinate at the position `p`
    pub fn diabatic(&self, p: f64) -> (Array2<f64>, Array2<f64>) {
        match self {
            PotentialFamily::Sac => single_avoided_crossing(p),
            PotentialFamily::Dac => dual_avoided_crossing(p),
            PotentialFamily::Ecr => extended_coupling(p),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PotentialFamily::Sac => "SAC",
            PotentialFamily::Dac => "DAC",
            PotentialFamily::Ecr => "ECR",
        }
    }
}

impl fmt::Display for PotentialFamily {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PotentialFamily {
    type Err = DynamicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SAC" => Ok(PotentialFamily::Sac),
            "DAC" => Ok(PotentialFamily::Dac),
            "ECR" => Ok(PotentialFamily::Ecr),
            _ => Err(DynamicsError::UnknownPotential(s.to_string())),
        }
    }
}
