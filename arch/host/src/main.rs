mod args;
mod terminal;

use anyhow::{Context, Result};
use kernel::debug::init_debug;
use kernel::kconfig::FrontEnd;
use log::{LevelFilter, info};
use crate::terminal::{STDERR_DEBUG, StdConsole};

fn main() -> Result<()> {
    let options = args::parse(std::env::args().skip(1)).context("invalid command line, try --help")?;
    if options.help {
        println!("{}", args::USAGE);
        return Ok(());
    }

    if options.verbose {
        init_debug(&STDERR_DEBUG, LevelFilter::Debug).context("logger already installed")?;
    }

    let config = options.config;
    info!("starting {:?} front-end with {:?}", config.front_end, config);

    let mut console = StdConsole::new();
    let summary = match config.front_end {
        FrontEnd::Prompt => prompt::prompt::main(&config, &mut console)?,
        FrontEnd::Form => form::form::main(&config, &mut console)?,
    };

    info!("session ended: {:?}", summary);
    Ok(())
}
