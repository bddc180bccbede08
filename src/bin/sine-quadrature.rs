use std::io;
use std::process::ExitCode;

use log::{debug, info};

use sine_quadrature::{logger, Config, Error};

fn try_main() -> Result<(), Error> {
    let config = match std::env::args_os().nth(1) {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    logger::init(config.level_filter()?);
    info!("running with {config:?}");

    sine_quadrature::run(&config, io::stdin().lock(), io::stdout().lock())
}

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("{err:?}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
