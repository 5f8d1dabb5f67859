pub use io::*;
pub use simulation::*;

pub mod io;
pub mod simulation;
