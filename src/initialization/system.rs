use crate::adiabatic::{adiabatic_transform, scan_potential};
use crate::io::Configuration;
use crate::models::PotentialFamily;
use fssh_dynamics::interface::AdiabaticData;
use fssh_dynamics::DynamicsError;
use ndarray::prelude::*;

/// Type that holds the electronic structure of a one-dimensional model: the
/// potential family and the smallest adiabatic gap that is accepted.
#[derive(Debug, Clone)]
pub struct ModelSystem {
    pub config: Configuration,
    pub potential: PotentialFamily,
    pub gap_threshold: f64,
    /// number of evaluations of the adiabatic data
    pub n_calls: usize,
}

impl From<Configuration> for ModelSystem {
    fn from(config: Configuration) -> Self {
        ModelSystem {
            potential: config.model.potential,
            gap_threshold: config.model.gap_threshold,
            config,
            n_calls: 0,
        }
    }
}

impl From<PotentialFamily> for ModelSystem {
    /// Model with the default settings
    fn from(potential: PotentialFamily) -> Self {
        let mut config: Configuration = Configuration::default();
        config.model.potential = potential;
        ModelSystem::from(config)
    }
}

impl ModelSystem {
    /// Energies, nonadiabatic coupling and forces at the position `coordinate`
    pub fn adiabatic_data(&mut self, coordinate: f64) -> Result<AdiabaticData, DynamicsError> {
        self.n_calls += 1;
        let (v, v_der): (Array2<f64>, Array2<f64>) = self.potential.diabatic(coordinate);
        adiabatic_transform(v.view(), v_der.view(), coordinate, self.gap_threshold)
    }

    /// Adiabatic data on the grid of the scan settings
    pub fn potential_scan(&self) -> Result<Array2<f64>, DynamicsError> {
        let positions: Array1<f64> = Array1::linspace(
            self.config.scan.pmin,
            self.config.scan.pmax,
            self.config.scan.npoints,
        );
        scan_potential(self.potential, positions.view(), self.gap_threshold)
    }
}
