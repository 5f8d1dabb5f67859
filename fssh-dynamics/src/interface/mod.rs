use crate::errors::DynamicsError;
pub use ndarray::prelude::*;

/// Adiabatic electronic structure at a single nuclear position.
/// The energies are ordered ascending, the nonadiabatic coupling matrix is
/// antisymmetric and the forces are the negative gradients of the adiabatic
/// surfaces.
#[derive(Debug, Clone, PartialEq)]
pub struct AdiabaticData {
    pub energies: Array1<f64>,
    pub nonadiabatic_scalar: Array2<f64>,
    pub forces: Array1<f64>,
}

impl AdiabaticData {
    pub fn new(
        energies: Array1<f64>,
        nonadiabatic_scalar: Array2<f64>,
        forces: Array1<f64>,
    ) -> Self {
        AdiabaticData {
            energies,
            nonadiabatic_scalar,
            forces,
        }
    }

    /// Energy gap between the upper and the lower surface
    pub fn gap(&self) -> f64 {
        self.energies[1] - self.energies[0]
    }
}

/// Trait that provides an interface for the electronic structure of a model system.
/// The function compute data returns the adiabatic energies, the nonadiabatic
/// coupling and the forces of both states at the given coordinate.
pub trait AdiabaticInterface {
    fn compute_data(&mut self, coordinate: f64) -> Result<AdiabaticData, DynamicsError>;
}
