use crate::c64;
use crate::initialization::Simulation;
use log::{debug, trace};
use ndarray::prelude::*;
use rand::distributions::Standard;
use rand::Rng;

/// Result of the hopping procedure of a single time step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HopResult {
    /// The trajectory stays on the active state
    NoHop,
    /// A hop was selected, but the kinetic energy can not pay for the
    /// potential energy of the target state
    Frustrated { target: usize },
    /// The trajectory switches to `state` with the rescaled `velocity`
    Hop { state: usize, velocity: f64 },
}

impl Simulation {
    /// Fewest switches hopping procedure of Tully,
    /// J. Chem. Phys. 93, 1061 (1990).
    /// Exactly one uniform random number is drawn per call. After an accepted
    /// hop the active state and the rescaled velocity are stored.
    pub fn get_new_state(&mut self) -> HopResult {
        let random_number: f64 = self.rng.sample(Standard);
        let result: HopResult = hopping_decision(
            self.coefficients.view(),
            self.energies.view(),
            self.nonadiabatic_scalar.view(),
            self.velocity,
            self.mass,
            self.state,
            self.stepsize,
            random_number,
        );

        match result {
            HopResult::Hop { state, velocity } => {
                debug!(
                    "step {:>7}: hop {} -> {} at x = {:.5}, pot. diff. {:.6} Hartree",
                    self.step,
                    self.state + 1,
                    state + 1,
                    self.coordinate,
                    self.energies[self.state] - self.energies[state]
                );
                self.state = state;
                self.velocity = velocity;
                self.n_hops += 1;
            }
            HopResult::Frustrated { target } => {
                debug!(
                    "step {:>7}: frustrated hop {} -> {} at x = {:.5}",
                    self.step,
                    self.state + 1,
                    target + 1,
                    self.coordinate
                );
                self.n_frustrated += 1;
            }
            HopResult::NoHop => {}
        }
        result
    }
}

/// Density matrix a_kj = c_k c_j^*
pub fn density_matrix(coefficients: ArrayView1<c64>) -> Array2<c64> {
    let nstates: usize = coefficients.len();
    Array2::from_shape_fn((nstates, nstates), |(k, j)| {
        coefficients[k] * coefficients[j].conj()
    })
}

/// Population flux between the states,
/// b_kl = 2 Im(a_kl^* V_kl) - 2 Re(a_kl^* v d_kl)
/// with the diagonal adiabatic energy matrix V
pub fn population_flux(
    density: ArrayView2<c64>,
    energies: ArrayView1<f64>,
    nonadiabatic_scalar: ArrayView2<f64>,
    velocity: f64,
) -> Array2<f64> {
    let nstates: usize = energies.len();
    Array2::from_shape_fn((nstates, nstates), |(k, l)| {
        let a_conj: c64 = density[[k, l]].conj();
        let potential: f64 = if k == l { energies[k] } else { 0.0 };
        2.0 * (a_conj * potential).im - 2.0 * (a_conj * velocity * nonadiabatic_scalar[[k, l]]).re
    })
}

/// Probability to hop from the state `old_state` to `new_state` within one time step,
/// g = dt b_jk / a_kk
pub fn hopping_probability(
    coefficients: ArrayView1<c64>,
    energies: ArrayView1<f64>,
    nonadiabatic_scalar: ArrayView2<f64>,
    velocity: f64,
    old_state: usize,
    new_state: usize,
    stepsize: f64,
) -> f64 {
    let density: Array2<c64> = density_matrix(coefficients);
    let flux: Array2<f64> =
        population_flux(density.view(), energies, nonadiabatic_scalar, velocity);
    let probability: f64 =
        stepsize * flux[[new_state, old_state]] / density[[old_state, old_state]].re;
    // an empty active state gives 0/0
    if probability.is_finite() {
        probability
    } else {
        0.0
    }
}

/// Velocity after a hop from `old_state` to `new_state`, so that the total energy
/// 1/2 m v^2 + E_state is conserved. Returns None if the kinetic energy is not
/// sufficient to reach the new state (frustrated hop).
pub fn rescaled_velocity(
    velocity: f64,
    mass: f64,
    energies: ArrayView1<f64>,
    old_state: usize,
    new_state: usize,
) -> Option<f64> {
    let kinetic_energy: f64 = 0.5 * mass * velocity.powi(2);
    let available: f64 = kinetic_energy + energies[old_state] - energies[new_state];
    if available > 0.0 {
        Some(velocity.signum() * (2.0 / mass * available).sqrt())
    } else {
        None
    }
}

/// Hopping decision for a two state system. The hop from the active state to the
/// other state is selected if its probability exceeds `random_number`. A selected
/// hop is only carried out if the total energy can be conserved by rescaling the
/// velocity. For the hop upwards this requires 1/2 m v^2 > E_2 - E_1.
pub fn hopping_decision(
    coefficients: ArrayView1<c64>,
    energies: ArrayView1<f64>,
    nonadiabatic_scalar: ArrayView2<f64>,
    velocity: f64,
    mass: f64,
    state: usize,
    stepsize: f64,
    random_number: f64,
) -> HopResult {
    let target: usize = 1 - state;
    let probability: f64 = hopping_probability(
        coefficients,
        energies,
        nonadiabatic_scalar,
        velocity,
        state,
        target,
        stepsize,
    );
    trace!(
        "hopping probability {} -> {}: {:.6e}, random number: {:.6}",
        state + 1,
        target + 1,
        probability,
        random_number
    );
    if probability <= random_number {
        return HopResult::NoHop;
    }
    match rescaled_velocity(velocity, mass, energies, state, target) {
        Some(velocity) => HopResult::Hop {
            state: target,
            velocity,
        },
        None => HopResult::Frustrated { target },
    }
}
