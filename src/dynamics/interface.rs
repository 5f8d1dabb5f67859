use crate::initialization::ModelSystem;
use fssh_dynamics::interface::{AdiabaticData, AdiabaticInterface};
use fssh_dynamics::DynamicsError;
use log::trace;

impl AdiabaticInterface for ModelSystem {
    // Return the energies, the nonadiabatic coupling and the forces of both states
    fn compute_data(&mut self, coordinate: f64) -> Result<AdiabaticData, DynamicsError> {
        let data: AdiabaticData = self.adiabatic_data(coordinate)?;
        trace!("x: {:>12.6} gap: {:.6e}", coordinate, data.gap());
        Ok(data)
    }
}
