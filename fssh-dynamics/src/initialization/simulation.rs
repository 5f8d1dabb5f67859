use crate::c64;
use crate::defaults::NSTATES;
use crate::errors::DynamicsError;
use crate::initialization::DynamicConfiguration;
use crate::output::TrajectoryStep;
use ndarray::prelude::*;
use rand::rngs::StdRng;

/// Lifecycle of a single trajectory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrajectoryStatus {
    Propagating,
    Exited,
    StepLimitReached,
}

/// Struct that holds the [DynamicConfiguration] and the state of a single
/// trajectory: the nuclear coordinate and velocity, the electronic coefficients,
/// the active state and the adiabatic data at the current position.
pub struct Simulation {
    pub stepsize: f64,
    pub actual_time: f64,
    pub mass: f64,
    pub config: DynamicConfiguration,
    pub coefficients: Array1<c64>,
    pub coordinate: f64,
    pub velocity: f64,
    pub energies: Array1<f64>,
    pub nonadiabatic_scalar: Array2<f64>,
    pub forces: Array1<f64>,
    pub state: usize,
    pub step: usize,
    pub status: TrajectoryStatus,
    pub initial_energy: f64,
    pub n_hops: usize,
    pub n_frustrated: usize,
    pub trace: Option<Vec<TrajectoryStep>>,
    pub rng: StdRng,
}

impl Simulation {
    /// Initialize the struct [Simulation] for a particle with the given momentum.
    /// The electronic state is populated completely in the initial state. The
    /// random number generator is owned by the trajectory, so that independent
    /// trajectories draw from independent streams.
    pub fn new(
        config: &DynamicConfiguration,
        momentum: f64,
        rng: StdRng,
    ) -> Result<Simulation, DynamicsError> {
        config.validate()?;

        // initialize coefficients
        let mut coefficients: Array1<c64> = Array1::zeros(NSTATES);
        coefficients[config.initial_state] = c64::from(1.0);

        let record_trace: bool = config.print_config.print_trace;

        Ok(Simulation {
            stepsize: config.stepsize,
            actual_time: 0.0,
            mass: config.mass,
            coefficients,
            coordinate: config.start_position,
            velocity: momentum / config.mass,
            energies: Array1::zeros(NSTATES),
            nonadiabatic_scalar: Array2::zeros((NSTATES, NSTATES)),
            forces: Array1::zeros(NSTATES),
            state: config.initial_state,
            step: 0,
            status: TrajectoryStatus::Propagating,
            initial_energy: 0.0,
            n_hops: 0,
            n_frustrated: 0,
            trace: if record_trace { Some(Vec::new()) } else { None },
            config: config.clone(),
            rng,
        })
    }

    pub fn get_kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.powi(2)
    }

    /// Kinetic energy plus the potential energy of the active surface
    pub fn get_total_energy(&self) -> f64 {
        self.get_kinetic_energy() + self.energies[self.state]
    }

    /// Sum of the electronic populations, which drifts slightly, since the
    /// coefficients are not renormalized.
    pub fn get_norm(&self) -> f64 {
        self.coefficients.iter().map(|c| c.norm_sqr()).sum()
    }

    pub fn inside_domain(&self) -> bool {
        self.coordinate > self.config.pmin && self.coordinate < self.config.pmax
    }
}
