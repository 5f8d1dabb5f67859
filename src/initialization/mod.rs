pub use system::*;

mod input_check;
pub mod system;
