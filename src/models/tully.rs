//! Diabatic potentials of the three one-dimensional model problems of
//! Tully, J. Chem. Phys. 93, 1061 (1990). Every function returns the symmetric
//! 2x2 diabatic matrix and its analytic derivative at the position `p`.
use ndarray::prelude::*;

// Single avoided crossing
const SAC_A: f64 = 0.01;
const SAC_B: f64 = 1.6;
const SAC_C: f64 = 0.005;
const SAC_D: f64 = 1.0;

// Dual avoided crossing
const DAC_A: f64 = 0.1;
const DAC_B: f64 = 0.28;
const DAC_C: f64 = 0.015;
const DAC_D: f64 = 0.06;
const DAC_E0: f64 = 0.05;

// Extended coupling with reflection
const ECR_A: f64 = 6.0e-4;
const ECR_B: f64 = 0.10;
const ECR_C: f64 = 0.90;

fn symmetric(diagonal: [f64; 2], off_diagonal: f64) -> Array2<f64> {
    array![[diagonal[0], off_diagonal], [off_diagonal, diagonal[1]]]
}

pub fn single_avoided_crossing(p: f64) -> (Array2<f64>, Array2<f64>) {
    let decay: f64 = (-SAC_B * p.abs()).exp();
    // sign(0) = 0, f64::signum would give 1 at +0.0
    let v_00: f64 = if p > 0.0 {
        SAC_A * (1.0 - decay)
    } else if p < 0.0 {
        -SAC_A * (1.0 - decay)
    } else {
        0.0
    };
    let v_00_der: f64 = SAC_A * SAC_B * decay;
    let gauss: f64 = (-SAC_D * p.powi(2)).exp();
    let v_01: f64 = SAC_C * gauss;
    let v_01_der: f64 = -2.0 * SAC_C * SAC_D * p * gauss;

    (
        symmetric([v_00, -v_00], v_01),
        symmetric([v_00_der, -v_00_der], v_01_der),
    )
}

pub fn dual_avoided_crossing(p: f64) -> (Array2<f64>, Array2<f64>) {
    let well: f64 = (-DAC_B * p.powi(2)).exp();
    let v_11: f64 = -DAC_A * well + DAC_E0;
    let v_11_der: f64 = 2.0 * DAC_A * DAC_B * p * well;
    let gauss: f64 = (-DAC_D * p.powi(2)).exp();
    let v_01: f64 = DAC_C * gauss;
    let v_01_der: f64 = -2.0 * DAC_C * DAC_D * p * gauss;

    (
        symmetric([0.0, v_11], v_01),
        symmetric([0.0, v_11_der], v_01_der),
    )
}

pub fn extended_coupling(p: f64) -> (Array2<f64>, Array2<f64>) {
    let (v_01, v_01_der): (f64, f64) = if p < 0.0 {
        let growth: f64 = (ECR_C * p).exp();
        (ECR_B * growth, ECR_B * ECR_C * growth)
    } else if p > 0.0 {
        let decay: f64 = (-ECR_C * p).exp();
        (ECR_B * (2.0 - decay), ECR_B * ECR_C * decay)
    } else {
        (ECR_B, ECR_B * ECR_C)
    };

    (
        symmetric([ECR_A, -ECR_A], v_01),
        symmetric([0.0, 0.0], v_01_der),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn sac_limits() {
        let (v_left, _) = single_avoided_crossing(-10.0);
        let (v_right, _) = single_avoided_crossing(10.0);
        assert_abs_diff_eq!(v_left[[0, 0]], -SAC_A, epsilon = 1e-8);
        assert_abs_diff_eq!(v_right[[0, 0]], SAC_A, epsilon = 1e-8);
        assert_abs_diff_eq!(v_right[[1, 1]], -SAC_A, epsilon = 1e-8);
    }

    #[test]
    fn sac_is_exact_at_origin() {
        let (v, v_der) = single_avoided_crossing(0.0);
        assert_eq!(v[[0, 0]], 0.0);
        assert_eq!(v[[1, 1]], 0.0);
        assert_eq!(v[[0, 1]], SAC_C);
        assert_eq!(v_der[[0, 0]], SAC_A * SAC_B);
        assert_eq!(v_der[[0, 1]], 0.0);
    }

    #[test]
    fn dac_well_depth() {
        let (v, _) = dual_avoided_crossing(0.0);
        assert_abs_diff_eq!(v[[1, 1]], DAC_E0 - DAC_A, epsilon = 1e-15);
        assert_eq!(v[[0, 0]], 0.0);
        assert_abs_diff_eq!(v[[0, 1]], DAC_C, epsilon = 1e-15);
    }

    #[test]
    fn ecr_coupling_plateaus() {
        let (v_left, _) = extended_coupling(-10.0);
        let (v_right, _) = extended_coupling(10.0);
        assert_abs_diff_eq!(v_left[[0, 1]], 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(v_right[[0, 1]], 2.0 * ECR_B, epsilon = 1e-4);
    }
}
