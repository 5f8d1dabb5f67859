use super::ModelSystem;
use fssh_dynamics::DynamicsError;
use log::debug;

impl ModelSystem {
    /// Check the model and scan settings before any calculation is started
    pub fn input_check(&self) -> Result<(), DynamicsError> {
        debug!("{:^80}", "");
        debug!("{:-^80}", "");
        debug!("{:<40} {:>15}", "potential:", self.potential.name());
        debug!("{:<40} {:>15.3e}", "gap threshold:", self.gap_threshold);

        if !(self.gap_threshold > 0.0) {
            return Err(DynamicsError::invalid(format!(
                "the gap threshold has to be positive, got {}",
                self.gap_threshold
            )));
        }

        if self.config.jobtype == "scan" {
            let scan = &self.config.scan;
            if !(scan.pmin < scan.pmax) {
                return Err(DynamicsError::invalid(format!(
                    "the scan range [{}, {}] is empty",
                    scan.pmin, scan.pmax
                )));
            }
            if scan.npoints < 2 {
                return Err(DynamicsError::invalid(
                    "the potential scan needs at least two points",
                ));
            }
        }
        debug!("{:-^80}", "");
        Ok(())
    }
}
