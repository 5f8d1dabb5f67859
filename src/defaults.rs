use crate::models::PotentialFamily;

// config file
pub const CONFIG_FILE_NAME: &str = "fssh.toml";
// jobtype
pub const JOBTYPE: &str = "dynamics";
// log level, 0 is info
pub const VERBOSE: i8 = 0;

// MODEL SETTINGS
pub const POTENTIAL: PotentialFamily = PotentialFamily::Sac;
// smallest adiabatic energy gap in Hartree, below which the nonadiabatic
// coupling is not evaluated
pub const GAP_THRESHOLD: f64 = 1.0e-8;

// Potential scan
pub const SCAN_PMIN: f64 = -10.0;
pub const SCAN_PMAX: f64 = 10.0;
pub const SCAN_NPOINTS: usize = 200;
pub const SCAN_FILE_NAME: &str = "potential_scan.dat";
