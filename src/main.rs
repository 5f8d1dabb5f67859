use crate::initialization::ModelSystem;
use crate::io::{read_dynamic_input, read_input, write_footer, write_header, Configuration};
use crate::utils::Timer;
use anyhow::{bail, Result};
use clap::{crate_name, crate_version, App, Arg};
use env_logger::Builder;
use fssh_dynamics::initialization::DynamicConfiguration;
use log::LevelFilter;
use std::io::Write;
use std::path::Path;

mod adiabatic;
mod defaults;
mod dynamics;
mod initialization;
mod io;
mod models;
mod utils;

fn main() -> Result<()> {
    // Input.
    let matches = App::new(crate_name!())
        .version(crate_version!())
        .about("fewest switches surface hopping on one-dimensional two-state models")
        .arg(
            Arg::new("directory")
                .help("Sets the directory that contains the configuration files")
                .takes_value(true)
                .default_value(".")
                .index(1),
        )
        .arg(
            Arg::new("potential")
                .short('p')
                .long("potential")
                .help("Overrides the model potential of the configuration file: SAC, DAC or ECR")
                .takes_value(true),
        )
        .get_matches();
    // The configuration files are read from the working directory, missing
    // files are written with the default settings.
    let dir: &Path = Path::new(matches.value_of("directory").unwrap_or("."));
    let mut config: Configuration = read_input(dir)?;
    if let Some(name) = matches.value_of("potential") {
        config.set_potential(name)?;
    }

    // Logging.
    // The log level is set.
    let log_level: LevelFilter = match config.verbose {
        2 => LevelFilter::Trace,
        1 => LevelFilter::Debug,
        0 => LevelFilter::Info,
        -1 => LevelFilter::Warn,
        -2 => LevelFilter::Error,
        _ => LevelFilter::Info,
    };
    // and the logger is build.
    Builder::new()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .filter(None, log_level)
        .init();

    // The program header is written to the command line.
    write_header();
    // and the total wall-time timer is started.
    let timer: Timer = Timer::start();

    // Computations.
    // ................................................................
    let mut system: ModelSystem = ModelSystem::from(config.clone());
    system.input_check()?;
    match config.jobtype.as_str() {
        "dynamics" => {
            let dynamics_config: DynamicConfiguration = read_dynamic_input(dir)?;
            system.surface_hopping_dynamics(&dynamics_config, dir)?;
        }
        // Evaluate the adiabatic surfaces on a grid
        "scan" => {
            system.run_potential_scan(dir)?;
        }
        jtype => {
            bail!(
                "Jobtype: {} is not available. Choose one of the available types: dynamics, scan",
                jtype
            );
        }
    }
    // ................................................................

    // Finished.
    // The total wall-time is printed together with the end statement.
    write_footer(timer);
    Ok(())
}
