use crate::models::PotentialFamily;
use fssh_dynamics::interface::AdiabaticData;
use fssh_dynamics::DynamicsError;
use nalgebra::{Matrix2, SymmetricEigen};
use ndarray::prelude::*;

/// Eigenvalues in ascending order and the orthonormal eigenvectors (columns)
/// of a real symmetric 2x2 matrix.
/// The sign of the upper eigenvector is fixed so that its component on the
/// second diabatic state is non-negative (the first component, if the second
/// one vanishes). The lower eigenvector is chosen so that the eigenvector
/// matrix is a proper rotation. For a positive diabatic coupling the
/// eigenvectors are then continuous functions of the coordinate.
pub fn diagonalize(v: ArrayView2<f64>) -> (Array1<f64>, Array2<f64>) {
    let matrix: Matrix2<f64> = Matrix2::new(v[[0, 0]], v[[0, 1]], v[[1, 0]], v[[1, 1]]);
    let eigen = SymmetricEigen::new(matrix);

    let order: [usize; 2] = if eigen.eigenvalues[0] <= eigen.eigenvalues[1] {
        [0, 1]
    } else {
        [1, 0]
    };
    let energies: Array1<f64> = array![eigen.eigenvalues[order[0]], eigen.eigenvalues[order[1]]];
    let mut eigenvectors: Array2<f64> =
        Array2::from_shape_fn((2, 2), |(i, j)| eigen.eigenvectors[(i, order[j])]);

    // gauge of the upper state
    let upper_sign: f64 = if eigenvectors[[1, 1]] < 0.0
        || (eigenvectors[[1, 1]] == 0.0 && eigenvectors[[0, 1]] < 0.0)
    {
        -1.0
    } else {
        1.0
    };
    eigenvectors.column_mut(1).mapv_inplace(|val| val * upper_sign);

    // det(U) = +1
    let det: f64 = eigenvectors[[0, 0]] * eigenvectors[[1, 1]]
        - eigenvectors[[0, 1]] * eigenvectors[[1, 0]];
    if det < 0.0 {
        eigenvectors.column_mut(0).mapv_inplace(|val| -val);
    }
    (energies, eigenvectors)
}

/// Transform the diabatic potential `v` and its derivative `v_der` at `position`
/// into the adiabatic representation. The derivative is rotated into the
/// eigenbasis, M = U^T V' U. Its diagonal gives the forces F_k = -M_kk and the
/// off-diagonal the nonadiabatic coupling d_01 = M_01 / (E_2 - E_1) = -d_10.
/// An adiabatic gap below `gap_threshold` or a non-finite matrix element is
/// reported as [DynamicsError::NumericalInstability].
pub fn adiabatic_transform(
    v: ArrayView2<f64>,
    v_der: ArrayView2<f64>,
    position: f64,
    gap_threshold: f64,
) -> Result<AdiabaticData, DynamicsError> {
    if v.iter().chain(v_der.iter()).any(|val| !val.is_finite()) {
        return Err(DynamicsError::instability(
            position,
            "non-finite diabatic matrix element",
        ));
    }
    let (energies, eigenvectors): (Array1<f64>, Array2<f64>) = diagonalize(v);

    let gap: f64 = energies[1] - energies[0];
    // also catches a NaN gap
    if !(gap >= gap_threshold) {
        return Err(DynamicsError::instability(
            position,
            format!(
                "adiabatic energy gap {:.3e} is below the threshold {:.3e}",
                gap, gap_threshold
            ),
        ));
    }

    let rotated: Array2<f64> = eigenvectors.t().dot(&v_der).dot(&eigenvectors);
    let coupling: f64 = rotated[[0, 1]] / gap;
    let nonadiabatic_scalar: Array2<f64> = array![[0.0, coupling], [-coupling, 0.0]];
    let forces: Array1<f64> = array![-rotated[[0, 0]], -rotated[[1, 1]]];

    if !coupling.is_finite() || forces.iter().any(|val| !val.is_finite()) {
        return Err(DynamicsError::instability(
            position,
            "non-finite coupling or force",
        ));
    }
    Ok(AdiabaticData::new(energies, nonadiabatic_scalar, forces))
}

/// Evaluate the adiabatic data of a model on a grid of positions. Every row
/// of the returned table holds the position, E_1, E_2, d_01, F_1 and F_2.
pub fn scan_potential(
    family: PotentialFamily,
    positions: ArrayView1<f64>,
    gap_threshold: f64,
) -> Result<Array2<f64>, DynamicsError> {
    let mut table: Array2<f64> = Array2::zeros((positions.len(), 6));
    for (mut row, position) in table.outer_iter_mut().zip(positions.iter()) {
        let (v, v_der): (Array2<f64>, Array2<f64>) = family.diabatic(*position);
        let data: AdiabaticData =
            adiabatic_transform(v.view(), v_der.view(), *position, gap_threshold)?;
        row[0] = *position;
        row[1] = data.energies[0];
        row[2] = data.energies[1];
        row[3] = data.nonadiabatic_scalar[[0, 1]];
        row[4] = data.forces[0];
        row[5] = data.forces[1];
    }
    Ok(table)
}
