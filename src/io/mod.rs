mod imprint;
mod input;
mod scan;
pub(crate) mod settings;

pub use imprint::{write_footer, write_header};
pub use input::*;
pub use scan::write_potential_scan;
pub use settings::Configuration;
