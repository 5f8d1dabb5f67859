pub use ensemble::*;
pub use hopping_routines::*;
pub use schroedinger_integration::*;
pub use simulation::*;

pub mod dynamic_routines;
pub mod ensemble;
pub mod hopping_routines;
pub mod schroedinger_integration;
pub mod simulation;
