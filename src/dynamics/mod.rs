mod interface;

use crate::defaults::SCAN_FILE_NAME;
use crate::initialization::ModelSystem;
use crate::io::write_potential_scan;
use crate::utils::Timer;
use anyhow::{Context, Result};
use fssh_dynamics::defaults::{PROBABILITY_FILE_NAME, TRACE_FILE_NAME};
use fssh_dynamics::dynamics::{run_momentum_scan, EnsembleResult};
use fssh_dynamics::initialization::DynamicConfiguration;
use fssh_dynamics::output::{
    print_footer_dynamics, print_header_dynamics, print_header_probabilities, write_probabilities,
    write_trace, TrajectoryStep,
};
use log::info;
use ndarray::prelude::*;
use std::path::{Path, PathBuf};

/// File of the trace of the first trajectory of the ensemble with index `index`.
/// With a single momentum the plain file name is used.
fn trace_file_path(dir: &Path, index: usize, n_momenta: usize) -> PathBuf {
    if n_momenta == 1 {
        dir.join(TRACE_FILE_NAME)
    } else {
        let stem: &str = TRACE_FILE_NAME.trim_end_matches(".yaml");
        dir.join(format!("{}_{:03}.yaml", stem, index + 1))
    }
}

impl ModelSystem {
    /// Run an ensemble of surface hopping trajectories for every momentum of the
    /// configuration and write the requested output files to `dir`.
    pub fn surface_hopping_dynamics(
        &mut self,
        config: &DynamicConfiguration,
        dir: &Path,
    ) -> Result<Vec<EnsembleResult>> {
        let timer: Timer = Timer::start();
        print_header_dynamics(config);
        info!("{:<40} {:>15}", "potential:", self.potential.name());
        print_header_probabilities();

        let results: Vec<(EnsembleResult, Option<Vec<TrajectoryStep>>)> =
            run_momentum_scan(self, config).context("the surface hopping dynamics failed")?;
        let n_momenta: usize = results.len();
        let mut ensembles: Vec<EnsembleResult> = Vec::with_capacity(n_momenta);

        for (index, (ensemble, trace)) in results.into_iter().enumerate() {
            if let Some(trace) = trace {
                if let Some(last) = trace.last() {
                    let populations: Array1<f64> = last.populations();
                    info!(
                        "traced trajectory at p = {:.3}: final populations {:.6} {:.6}",
                        ensemble.momentum, populations[0], populations[1]
                    );
                }
                let file_path: PathBuf = trace_file_path(dir, index, n_momenta);
                write_trace(&trace, &file_path)
                    .with_context(|| format!("unable to write {}", file_path.display()))?;
            }
            ensembles.push(ensemble);
        }

        if config.print_config.print_probabilities {
            let file_path: PathBuf = dir.join(PROBABILITY_FILE_NAME);
            write_probabilities(&ensembles, &file_path)
                .with_context(|| format!("unable to write {}", file_path.display()))?;
        }
        info!("{:<40} {:>15}", "evaluations of the potential:", self.n_calls);
        print_footer_dynamics(timer.elapsed());
        Ok(ensembles)
    }

    /// Evaluate the adiabatic energies, couplings and forces on the scan grid
    /// and write them to `dir`.
    pub fn run_potential_scan(&self, dir: &Path) -> Result<Array2<f64>> {
        let table: Array2<f64> = self
            .potential_scan()
            .context("the potential scan failed")?;
        let file_path: PathBuf = dir.join(SCAN_FILE_NAME);
        write_potential_scan(table.view(), &file_path)?;
        info!(
            "{} potential scan with {} points written to {}",
            self.potential,
            table.nrows(),
            file_path.display()
        );
        Ok(table)
    }
}
