// config file
pub const CONFIG_FILE_NAME: &str = "dynamics.toml";
// ceiling for the number of nuclear steps of a single trajectory
pub const NSTEP: usize = 100000;
// nuclear stepsize in atomic units of time
pub const STEPSIZE: f64 = 1.0;
// mass of the particle in atomic units
pub const MASS: f64 = 2000.0;
// boundaries of the simulation domain in bohr
pub const PMIN: f64 = -10.0;
pub const PMAX: f64 = 10.0;
// initial position, left of the interaction region
pub const START_POSITION: f64 = -9.9999;
// initial momenta in atomic units, one ensemble is run for every entry
pub const MOMENTA: [f64; 1] = [20.0];
// number of trajectories per momentum
pub const NTRAJ: usize = 100;
// initial electronic state (0: lower adiabatic surface)
pub const INITIAL_STATE: usize = 0;
// number of electronic states of the model
pub const NSTATES: usize = 2;
pub const PRINT_PROBABILITIES: bool = true;
pub const PRINT_TRACE: bool = false;
// output files
pub const PROBABILITY_FILE_NAME: &str = "probabilities.dat";
pub const TRACE_FILE_NAME: &str = "trajectory.yaml";
