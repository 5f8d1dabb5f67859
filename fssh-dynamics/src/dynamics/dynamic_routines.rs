use crate::errors::DynamicsError;
use crate::initialization::Simulation;
use crate::interface::{AdiabaticData, AdiabaticInterface};

impl Simulation {
    /// Acceleration on the active surface
    pub fn get_acceleration(&self) -> f64 {
        self.forces[self.state] / self.mass
    }

    // Velocity Verlet routines
    pub fn get_coord_verlet(&self) -> f64 {
        self.coordinate
            + self.stepsize * self.velocity
            + 0.5 * self.stepsize.powi(2) * self.get_acceleration()
    }

    pub fn get_velocity_verlet(&self, old_acceleration: f64) -> f64 {
        self.velocity + 0.5 * self.stepsize * (old_acceleration + self.get_acceleration())
    }

    /// One velocity-Verlet step on the active surface. The adiabatic data are
    /// recomputed at the new coordinate and stored for the next step.
    pub fn verlet_step(
        &mut self,
        interface: &mut dyn AdiabaticInterface,
    ) -> Result<(), DynamicsError> {
        let old_acceleration: f64 = self.get_acceleration();
        self.coordinate = self.get_coord_verlet();
        self.get_adiabatic_data(interface)?;
        self.velocity = self.get_velocity_verlet(old_acceleration);
        Ok(())
    }

    /// Calculate the energies, forces and the nonadiabatic coupling at the current
    /// coordinate using the [AdiabaticInterface]
    pub fn get_adiabatic_data(
        &mut self,
        interface: &mut dyn AdiabaticInterface,
    ) -> Result<(), DynamicsError> {
        let data: AdiabaticData = interface.compute_data(self.coordinate)?;
        self.energies = data.energies;
        self.nonadiabatic_scalar = data.nonadiabatic_scalar;
        self.forces = data.forces;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::initialization::DynamicConfiguration;
    use approx::assert_relative_eq;
    use ndarray::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Two uncoupled harmonic surfaces E_k = 1/2 k x^2 + shift
    struct Harmonic {
        constants: [f64; 2],
    }

    impl AdiabaticInterface for Harmonic {
        fn compute_data(&mut self, coordinate: f64) -> Result<AdiabaticData, DynamicsError> {
            let energies: Array1<f64> = array![
                0.5 * self.constants[0] * coordinate.powi(2),
                0.5 * self.constants[1] * coordinate.powi(2) + 1.0
            ];
            let forces: Array1<f64> = array![
                -self.constants[0] * coordinate,
                -self.constants[1] * coordinate
            ];
            Ok(AdiabaticData::new(energies, Array2::zeros((2, 2)), forces))
        }
    }

    #[test]
    fn free_particle_moves_uniformly() {
        let config = DynamicConfiguration::default();
        let mut simulation = Simulation::new(&config, 20.0, StdRng::seed_from_u64(1)).unwrap();
        let mut interface = Harmonic { constants: [0.0, 0.0] };
        simulation.get_adiabatic_data(&mut interface).unwrap();
        for _ in 0..10 {
            simulation.verlet_step(&mut interface).unwrap();
        }
        assert_relative_eq!(simulation.velocity, 0.01, epsilon = 1e-15);
        assert_relative_eq!(simulation.coordinate, -9.9999 + 0.1, epsilon = 1e-12);
    }

    #[test]
    fn harmonic_oscillator_conserves_energy() {
        let mut config = DynamicConfiguration::default();
        config.start_position = 1.0;
        config.stepsize = 0.5;
        let mut simulation = Simulation::new(&config, 0.0, StdRng::seed_from_u64(1)).unwrap();
        let mut interface = Harmonic { constants: [0.01, 0.02] };
        simulation.get_adiabatic_data(&mut interface).unwrap();
        let initial: f64 = simulation.get_total_energy();
        for _ in 0..2000 {
            simulation.verlet_step(&mut interface).unwrap();
        }
        assert_relative_eq!(simulation.get_total_energy(), initial, epsilon = 1e-6);
    }

    #[test]
    fn active_state_selects_the_force() {
        let mut config = DynamicConfiguration::default();
        config.start_position = 1.0;
        let mut interface = Harmonic { constants: [0.01, 0.02] };
        let mut lower = Simulation::new(&config, 0.0, StdRng::seed_from_u64(1)).unwrap();
        let mut upper = Simulation::new(&config, 0.0, StdRng::seed_from_u64(1)).unwrap();
        upper.state = 1;
        lower.get_adiabatic_data(&mut interface).unwrap();
        upper.get_adiabatic_data(&mut interface).unwrap();
        lower.verlet_step(&mut interface).unwrap();
        upper.verlet_step(&mut interface).unwrap();
        assert!(upper.velocity < lower.velocity);
        assert!(lower.velocity < 0.0);
    }
}
