use crate::dynamics::simulation::{Outcome, TrajectoryResult};
use crate::errors::DynamicsError;
use crate::initialization::{DynamicConfiguration, Simulation};
use crate::interface::AdiabaticInterface;
use crate::output::TrajectoryStep;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Outcome statistics of an ensemble of trajectories with the same initial momentum
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct EnsembleResult {
    pub momentum: f64,
    pub ntraj: usize,
    pub reflected_lower: usize,
    pub transmitted_lower: usize,
    pub reflected_upper: usize,
    pub transmitted_upper: usize,
    /// trajectories that reached the step ceiling inside of the domain
    pub inconclusive: usize,
    pub n_hops: usize,
    pub n_frustrated: usize,
}

impl EnsembleResult {
    pub fn new(momentum: f64) -> Self {
        EnsembleResult {
            momentum,
            ..Default::default()
        }
    }

    /// Add a finished trajectory to the statistics
    pub fn add(&mut self, result: &TrajectoryResult) {
        self.ntraj += 1;
        self.n_hops += result.n_hops;
        self.n_frustrated += result.n_frustrated;
        match result.outcome {
            Some(Outcome::ReflectedLower) => self.reflected_lower += 1,
            Some(Outcome::TransmittedLower) => self.transmitted_lower += 1,
            Some(Outcome::ReflectedUpper) => self.reflected_upper += 1,
            Some(Outcome::TransmittedUpper) => self.transmitted_upper += 1,
            None => self.inconclusive += 1,
        }
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        match outcome {
            Outcome::ReflectedLower => self.reflected_lower,
            Outcome::TransmittedLower => self.transmitted_lower,
            Outcome::ReflectedUpper => self.reflected_upper,
            Outcome::TransmittedUpper => self.transmitted_upper,
        }
    }

    /// Number of trajectories that left the domain
    pub fn conclusive(&self) -> usize {
        self.reflected_lower
            + self.transmitted_lower
            + self.reflected_upper
            + self.transmitted_upper
    }

    /// Probability of an outcome, normalized by the size of the ensemble
    pub fn probability(&self, outcome: Outcome) -> f64 {
        if self.ntraj == 0 {
            return 0.0;
        }
        self.count(outcome) as f64 / self.ntraj as f64
    }

    /// Probabilities in the order refl. lower, trans. lower, refl. upper, trans. upper
    pub fn probabilities(&self) -> [f64; 4] {
        [
            self.probability(Outcome::ReflectedLower),
            self.probability(Outcome::TransmittedLower),
            self.probability(Outcome::ReflectedUpper),
            self.probability(Outcome::TransmittedUpper),
        ]
    }
}

/// Run `config.ntraj` independent trajectories with the same initial momentum.
/// Every trajectory owns a generator that is seeded from `rng`, so the ensemble
/// is reproducible for a seeded `rng`. The trace of the first trajectory is
/// returned if it was requested in the
/// [PrintConfiguration](crate::initialization::PrintConfiguration).
pub fn run_ensemble(
    interface: &mut dyn AdiabaticInterface,
    config: &DynamicConfiguration,
    momentum: f64,
    rng: &mut StdRng,
) -> Result<(EnsembleResult, Option<Vec<TrajectoryStep>>), DynamicsError> {
    config.validate()?;
    let mut ensemble: EnsembleResult = EnsembleResult::new(momentum);
    let mut first_trace: Option<Vec<TrajectoryStep>> = None;

    for traj in 0..config.ntraj {
        let trajectory_rng: StdRng = StdRng::seed_from_u64(rng.gen::<u64>());
        let mut simulation: Simulation = Simulation::new(config, momentum, trajectory_rng)?;
        if traj > 0 {
            simulation.trace = None;
        }
        let mut result: TrajectoryResult = simulation.run_trajectory(interface)?;
        debug!(
            "trajectory {:>5}: {:?} after {} steps, state {}, hops: {}, frustrated: {}, \
             norm: {:.8}",
            traj + 1,
            result.outcome,
            result.steps,
            result.state + 1,
            result.n_hops,
            result.n_frustrated,
            result.norm
        );
        if first_trace.is_none() {
            first_trace = result.trace.take();
        }
        ensemble.add(&result);
    }
    Ok((ensemble, first_trace))
}

/// Run one ensemble for every momentum of the configuration. The generator is
/// seeded from `config.seed` or from the system entropy if no seed is given.
pub fn run_momentum_scan(
    interface: &mut dyn AdiabaticInterface,
    config: &DynamicConfiguration,
) -> Result<Vec<(EnsembleResult, Option<Vec<TrajectoryStep>>)>, DynamicsError> {
    config.validate()?;
    let mut rng: StdRng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut results = Vec::with_capacity(config.momenta.len());
    for momentum in config.momenta.iter() {
        let (ensemble, trace) = run_ensemble(interface, config, *momentum, &mut rng)?;
        let probabilities: [f64; 4] = ensemble.probabilities();
        info!(
            "{:>10.3} {:>12.6} {:>12.6} {:>12.6} {:>12.6} {:>8}",
            momentum,
            probabilities[0],
            probabilities[1],
            probabilities[2],
            probabilities[3],
            ensemble.inconclusive
        );
        results.push((ensemble, trace));
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::AdiabaticData;
    use ndarray::prelude::*;

    /// Avoided crossing with a localized coupling
    struct Crossing;

    impl AdiabaticInterface for Crossing {
        fn compute_data(&mut self, coordinate: f64) -> Result<AdiabaticData, DynamicsError> {
            let d: f64 = 0.5 * (-coordinate.powi(2)).exp();
            Ok(AdiabaticData::new(
                array![0.0, 0.02],
                array![[0.0, d], [-d, 0.0]],
                Array1::zeros(2),
            ))
        }
    }

    /// Electronic structure that breaks down right of `threshold`
    struct ClosingGap {
        threshold: f64,
    }

    impl AdiabaticInterface for ClosingGap {
        fn compute_data(&mut self, coordinate: f64) -> Result<AdiabaticData, DynamicsError> {
            if coordinate > self.threshold {
                return Err(DynamicsError::instability(coordinate, "gap"));
            }
            Crossing.compute_data(coordinate)
        }
    }

    fn config(ntraj: usize, seed: u64) -> DynamicConfiguration {
        let mut config = DynamicConfiguration::default();
        config.ntraj = ntraj;
        config.seed = Some(seed);
        config
    }

    #[test]
    fn counts_sum_to_ensemble_size() {
        let config = config(25, 3);
        let mut rng = StdRng::seed_from_u64(3);
        let (ensemble, _) = run_ensemble(&mut Crossing, &config, 20.0, &mut rng).unwrap();
        assert_eq!(ensemble.ntraj, 25);
        assert_eq!(ensemble.conclusive() + ensemble.inconclusive, 25);
        let total: f64 = ensemble.probabilities().iter().sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn inconclusive_trajectories_are_not_counted_as_outcomes() {
        let mut config = config(4, 3);
        config.nstep = 10;
        let mut rng = StdRng::seed_from_u64(3);
        let (ensemble, _) = run_ensemble(&mut Crossing, &config, 20.0, &mut rng).unwrap();
        assert_eq!(ensemble.inconclusive, 4);
        assert_eq!(ensemble.conclusive(), 0);
        assert_eq!(ensemble.probabilities(), [0.0; 4]);
    }

    #[test]
    fn instability_inside_the_domain_stops_the_ensemble() {
        let config = config(5, 3);
        let mut rng = StdRng::seed_from_u64(3);
        let mut interface = ClosingGap { threshold: -9.0 };
        let result = run_ensemble(&mut interface, &config, 20.0, &mut rng);
        match result {
            Err(DynamicsError::NumericalInstability { position, message }) => {
                assert!(position > -9.0 && position < -8.9);
                assert_eq!(message, "gap");
            }
            other => panic!("expected a numerical instability, got {:?}", other.map(|r| r.0)),
        }
    }

    #[test]
    fn instability_is_returned_from_a_single_trajectory() {
        let config = config(1, 3);
        let mut interface = ClosingGap { threshold: -9.0 };
        let mut simulation = Simulation::new(&config, 20.0, StdRng::seed_from_u64(3)).unwrap();
        let result = simulation.run_trajectory(&mut interface);
        assert!(matches!(result, Err(DynamicsError::NumericalInstability { .. })));
    }

    #[test]
    fn seeded_scan_is_reproducible() {
        let mut config = config(10, 17);
        config.momenta = vec![15.0, 25.0];
        let first = run_momentum_scan(&mut Crossing, &config).unwrap();
        let second = run_momentum_scan(&mut Crossing, &config).unwrap();
        assert_eq!(first.len(), 2);
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.0, b.0);
        }
    }

    #[test]
    fn probabilities_are_normalized_by_ensemble_size() {
        let mut ensemble = EnsembleResult::new(10.0);
        ensemble.ntraj = 4;
        ensemble.transmitted_lower = 2;
        ensemble.reflected_upper = 1;
        ensemble.inconclusive = 1;
        assert_eq!(ensemble.probability(Outcome::TransmittedLower), 0.5);
        assert_eq!(ensemble.probability(Outcome::ReflectedUpper), 0.25);
        assert_eq!(ensemble.conclusive(), 3);
    }
}
