use crate::errors::DynamicsError;
use crate::initialization::{Simulation, TrajectoryStatus};
use crate::interface::AdiabaticInterface;
use crate::output::TrajectoryStep;
use log::{trace, warn};
use serde::{Deserialize, Serialize};

/// Asymptotic channel of a trajectory that left the simulation domain
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    ReflectedLower,
    TransmittedLower,
    ReflectedUpper,
    TransmittedUpper,
}

impl Outcome {
    /// Classify by the active state and the side of the domain on which the
    /// particle left
    pub fn classify(state: usize, coordinate: f64) -> Outcome {
        match (state, coordinate < 0.0) {
            (0, true) => Outcome::ReflectedLower,
            (0, false) => Outcome::TransmittedLower,
            (_, true) => Outcome::ReflectedUpper,
            (_, false) => Outcome::TransmittedUpper,
        }
    }
}

/// Summary of a finished trajectory
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TrajectoryResult {
    /// None if the step ceiling was reached inside of the domain
    pub outcome: Option<Outcome>,
    pub steps: usize,
    pub coordinate: f64,
    pub velocity: f64,
    pub state: usize,
    pub n_hops: usize,
    pub n_frustrated: usize,
    pub norm: f64,
    pub energy_drift: f64,
    #[serde(skip)]
    pub trace: Option<Vec<TrajectoryStep>>,
}

impl Simulation {
    /// Run the trajectory until the particle leaves the domain or the step
    /// ceiling is reached.
    pub fn run_trajectory(
        &mut self,
        interface: &mut dyn AdiabaticInterface,
    ) -> Result<TrajectoryResult, DynamicsError> {
        self.initiate_trajectory(interface)?;

        while self.status == TrajectoryStatus::Propagating {
            self.surface_hopping_step(interface)?;
        }
        Ok(self.get_result())
    }

    /// Evaluate the adiabatic data at the start position
    pub fn initiate_trajectory(
        &mut self,
        interface: &mut dyn AdiabaticInterface,
    ) -> Result<(), DynamicsError> {
        self.get_adiabatic_data(interface)?;
        self.initial_energy = self.get_total_energy();
        self.record_step();
        Ok(())
    }

    /// A single step of the dynamics: integration of the electronic coefficients,
    /// hopping procedure and velocity-Verlet step of the nucleus, in this order.
    /// The electronic steps use the adiabatic data of the last nuclear step.
    pub fn surface_hopping_step(
        &mut self,
        interface: &mut dyn AdiabaticInterface,
    ) -> Result<(), DynamicsError> {
        self.coefficients = self.rk_integration();
        self.get_new_state();
        self.verlet_step(interface)?;

        self.step += 1;
        self.actual_time += self.stepsize;
        trace!(
            "step {:>7} x: {:>12.6} v: {:>12.6e} state: {} norm: {:.8}",
            self.step,
            self.coordinate,
            self.velocity,
            self.state + 1,
            self.get_norm()
        );
        self.record_step();

        if !self.inside_domain() {
            self.status = TrajectoryStatus::Exited;
        } else if self.step >= self.config.nstep {
            warn!(
                "trajectory reached the step ceiling of {} steps at x = {:.5}",
                self.config.nstep, self.coordinate
            );
            self.status = TrajectoryStatus::StepLimitReached;
        }
        Ok(())
    }

    fn record_step(&mut self) {
        if self.trace.is_some() {
            let step = TrajectoryStep::new(
                self.step,
                self.actual_time,
                self.coordinate,
                self.velocity,
                self.state,
                self.coefficients.view(),
                self.energies.view(),
                self.nonadiabatic_scalar[[0, 1]],
            );
            if let Some(trace) = self.trace.as_mut() {
                trace.push(step);
            }
        }
    }

    pub fn get_result(&mut self) -> TrajectoryResult {
        let outcome: Option<Outcome> = match self.status {
            TrajectoryStatus::Exited => Some(Outcome::classify(self.state, self.coordinate)),
            _ => None,
        };
        TrajectoryResult {
            outcome,
            steps: self.step,
            coordinate: self.coordinate,
            velocity: self.velocity,
            state: self.state,
            n_hops: self.n_hops,
            n_frustrated: self.n_frustrated,
            norm: self.get_norm(),
            energy_drift: self.get_total_energy() - self.initial_energy,
            trace: self.trace.take(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::initialization::DynamicConfiguration;
    use crate::interface::AdiabaticData;
    use ndarray::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Flat surfaces with a constant coupling inside |x| < 1
    struct Flat {
        gap: f64,
        coupling: f64,
    }

    impl AdiabaticInterface for Flat {
        fn compute_data(&mut self, coordinate: f64) -> Result<AdiabaticData, DynamicsError> {
            let d: f64 = if coordinate.abs() < 1.0 { self.coupling } else { 0.0 };
            Ok(AdiabaticData::new(
                array![0.0, self.gap],
                array![[0.0, d], [-d, 0.0]],
                Array1::zeros(2),
            ))
        }
    }

    #[test]
    fn outcome_buckets() {
        assert_eq!(Outcome::classify(0, -10.0), Outcome::ReflectedLower);
        assert_eq!(Outcome::classify(0, 10.0), Outcome::TransmittedLower);
        assert_eq!(Outcome::classify(1, -10.0), Outcome::ReflectedUpper);
        assert_eq!(Outcome::classify(1, 10.0), Outcome::TransmittedUpper);
    }

    #[test]
    fn uncoupled_particle_is_transmitted_on_the_lower_surface() {
        let config = DynamicConfiguration::default();
        let mut simulation = Simulation::new(&config, 20.0, StdRng::seed_from_u64(5)).unwrap();
        let mut interface = Flat { gap: 0.1, coupling: 0.0 };
        let result = simulation.run_trajectory(&mut interface).unwrap();
        assert_eq!(result.outcome, Some(Outcome::TransmittedLower));
        assert_eq!(simulation.status, TrajectoryStatus::Exited);
        // 20 bohr with 0.01 bohr per step
        assert!(result.steps >= 1999 && result.steps <= 2001);
        assert_eq!(result.n_hops, 0);
    }

    #[test]
    fn step_ceiling_gives_inconclusive_result() {
        let mut config = DynamicConfiguration::default();
        config.nstep = 100;
        let mut simulation = Simulation::new(&config, 20.0, StdRng::seed_from_u64(5)).unwrap();
        let mut interface = Flat { gap: 0.1, coupling: 0.0 };
        let result = simulation.run_trajectory(&mut interface).unwrap();
        assert_eq!(result.outcome, None);
        assert_eq!(result.steps, 100);
        assert_eq!(simulation.status, TrajectoryStatus::StepLimitReached);
    }

    #[test]
    fn trace_is_recorded_on_request() {
        let mut config = DynamicConfiguration::default();
        config.print_config.print_trace = true;
        config.nstep = 50;
        let mut simulation = Simulation::new(&config, 20.0, StdRng::seed_from_u64(5)).unwrap();
        let mut interface = Flat { gap: 0.1, coupling: 0.0 };
        let result = simulation.run_trajectory(&mut interface).unwrap();
        let trace = result.trace.unwrap();
        assert_eq!(trace.len(), 51);
        assert_eq!(trace[0].step, 0);
        assert_eq!(trace[50].step, 50);
    }

    #[test]
    fn hops_conserve_the_total_energy() {
        let mut config = DynamicConfiguration::default();
        config.start_position = -2.0;
        let mut interface = Flat { gap: 0.01, coupling: 2.0 };
        for seed in 0..20 {
            let mut simulation =
                Simulation::new(&config, 20.0, StdRng::seed_from_u64(seed)).unwrap();
            let result = simulation.run_trajectory(&mut interface).unwrap();
            assert!(result.outcome.is_some());
            assert!(result.energy_drift.abs() < 1e-12, "drift: {}", result.energy_drift);
        }
    }
}
