use crate::c64;
use crate::dynamics::EnsembleResult;
use crate::errors::DynamicsError;
use ndarray::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Struct that stores the state of a trajectory after a single step
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TrajectoryStep {
    pub step: usize,
    pub time: f64,
    pub position: f64,
    pub velocity: f64,
    pub state: usize,
    pub coefficients_real: Array1<f64>,
    pub coefficients_imag: Array1<f64>,
    pub energies: Array1<f64>,
    pub coupling: f64,
}

impl TrajectoryStep {
    pub fn new(
        step: usize,
        time: f64,
        coordinate: f64,
        velocity: f64,
        state: usize,
        coefficients: ArrayView1<c64>,
        energies: ArrayView1<f64>,
        coupling: f64,
    ) -> TrajectoryStep {
        TrajectoryStep {
            step,
            time,
            position: coordinate,
            velocity,
            state,
            coefficients_real: coefficients.mapv(|val| val.re),
            coefficients_imag: coefficients.mapv(|val| val.im),
            energies: energies.to_owned(),
            coupling,
        }
    }

    /// Population of the adiabatic states
    pub fn populations(&self) -> Array1<f64> {
        &self.coefficients_real * &self.coefficients_real
            + &self.coefficients_imag * &self.coefficients_imag
    }
}

/// Write the trace of a trajectory to `file_path` in the yaml file format.
pub fn write_trace(trace: &[TrajectoryStep], file_path: &Path) -> Result<(), DynamicsError> {
    let yaml: String = serde_yaml::to_string(trace)?;
    let file: File = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)?;
    let mut stream = BufWriter::new(file);
    stream.write_all(yaml.as_bytes())?;
    stream.flush()?;
    Ok(())
}

/// Print the outcome probabilities of the momentum scan to `file_path`.
/// Every line holds the momentum, the four probabilities in the order
/// refl. lower, trans. lower, refl. upper, trans. upper, the number of
/// inconclusive trajectories and the average number of hops.
pub fn write_probabilities(
    results: &[EnsembleResult],
    file_path: &Path,
) -> Result<(), DynamicsError> {
    let mut string: String = String::from(
        "# momentum\trefl_lower\ttrans_lower\trefl_upper\ttrans_upper\tinconclusive\tmean_hops\n",
    );
    for result in results.iter() {
        string.push_str(&result.momentum.to_string());
        for probability in result.probabilities().iter() {
            string.push('\t');
            string.push_str(&probability.to_string());
        }
        string.push('\t');
        string.push_str(&result.inconclusive.to_string());
        string.push('\t');
        let mean_hops: f64 = if result.ntraj > 0 {
            result.n_hops as f64 / result.ntraj as f64
        } else {
            0.0
        };
        string.push_str(&mean_hops.to_string());
        string.push('\n');
    }

    let file: File = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)?;
    let mut stream = BufWriter::new(file);
    stream.write_fmt(format_args!("{}", string))?;
    stream.flush()?;
    Ok(())
}
