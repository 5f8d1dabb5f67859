use crate::c64;
use crate::initialization::Simulation;
use ndarray::prelude::*;

impl Simulation {
    /// Propagate the electronic coefficients over one nuclear time step.
    /// The energies, the nonadiabatic coupling and the velocity of the last
    /// nuclear step are kept frozen during the integration (classical path
    /// approximation).
    pub fn rk_integration(&self) -> Array1<c64> {
        let hamiltonian: Array2<c64> = electronic_hamiltonian(
            self.energies.view(),
            self.nonadiabatic_scalar.view(),
            self.velocity,
        );
        runge_kutta_integration(self.coefficients.view(), hamiltonian.view(), self.stepsize)
    }
}

/// Effective electronic Hamiltonian of the time-dependent Schroedinger equation
/// in the adiabatic basis (hbar = 1):
/// i dc_k/dt = sum_j c_j (E_k delta_kj - i v d_kj)
pub fn electronic_hamiltonian(
    energies: ArrayView1<f64>,
    nonadiabatic_scalar: ArrayView2<f64>,
    velocity: f64,
) -> Array2<c64> {
    let nstates: usize = energies.len();
    let mut hamiltonian: Array2<c64> = Array2::zeros((nstates, nstates));
    for k in 0..nstates {
        for j in 0..nstates {
            hamiltonian[[k, j]] = if k == j {
                c64::from(energies[k])
            } else {
                -c64::i() * velocity * nonadiabatic_scalar[[k, j]]
            };
        }
    }
    hamiltonian
}

/// Calculate one step of the 4th order Runge-Kutta method for dc/dt = -i H c
/// with a time-independent Hamiltonian H
pub fn runge_kutta_integration(
    coefficients: ArrayView1<c64>,
    hamiltonian: ArrayView2<c64>,
    stepsize: f64,
) -> Array1<c64> {
    let k_1: Array1<c64> = runge_kutta_helper(hamiltonian, coefficients) * stepsize;
    let c_2: Array1<c64> = &coefficients + &(&k_1 * 0.5);

    let k_2: Array1<c64> = runge_kutta_helper(hamiltonian, c_2.view()) * stepsize;
    let c_3: Array1<c64> = &coefficients + &(&k_2 * 0.5);

    let k_3: Array1<c64> = runge_kutta_helper(hamiltonian, c_3.view()) * stepsize;
    let c_4: Array1<c64> = &coefficients + &k_3;

    let k_4: Array1<c64> = runge_kutta_helper(hamiltonian, c_4.view()) * stepsize;

    &coefficients + &((k_1 + k_2 * 2.0 + k_3 * 2.0 + k_4) / 6.0)
}

/// Time derivative of the coefficients
fn runge_kutta_helper(hamiltonian: ArrayView2<c64>, coefficients: ArrayView1<c64>) -> Array1<c64> {
    hamiltonian.dot(&coefficients).mapv(|val| -c64::i() * val)
}
