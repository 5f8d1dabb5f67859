use crate::initialization::DynamicConfiguration;
use log::warn;

pub fn print_header_dynamics(config: &DynamicConfiguration) {
    warn!("{:^80}", "");
    warn!("{: ^80}", "Surface Hopping Dynamics");
    warn!("{:-^80}", "");
    warn!("{:<40} {:>15.4} a.u.", "mass:", config.mass);
    warn!("{:<40} {:>15.4} a.u.", "time step:", config.stepsize);
    warn!("{:<40} {:>15}", "maximum number of steps:", config.nstep);
    warn!(
        "{:<40} ({:.4}, {:.4})",
        "simulation domain:", config.pmin, config.pmax
    );
    warn!("{:<40} {:>15.4}", "start position:", config.start_position);
    warn!("{:<40} {:>15}", "initial state:", config.initial_state + 1);
    warn!("{:<40} {:>15}", "trajectories per momentum:", config.ntraj);
    match config.seed {
        Some(seed) => warn!("{:<40} {:>15}", "random seed:", seed),
        None => warn!("{:<40} {:>15}", "random seed:", "entropy"),
    }
    warn!("{:-^80}", "");
}

pub fn print_header_probabilities() {
    warn!(
        "{:>10} {:>12} {:>12} {:>12} {:>12} {:>8}",
        "momentum", "refl. 1", "trans. 1", "refl. 2", "trans. 2", "incompl."
    );
}

pub fn print_footer_dynamics(timing: f64) {
    warn!("{:-<80} ", "");
    warn!(
        "{:>68} {:>8.2} s",
        "Surface Hopping Dynamics finished in", timing
    );
}
