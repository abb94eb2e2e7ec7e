use clap::Parser;
use color_eyre::eyre::Result;

use prnotes::{cli, command};

fn initialize_logger(debug: bool) -> prnotes::Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("prnotes")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli_args = cli::Args::parse();

    initialize_logger(cli_args.debug)?;

    match &cli_args.command {
        cli::Command::Generate(args) => command::generate::execute(args)?,
        cli::Command::Collect(args) => command::collect::execute(args)?,
    }

    Ok(())
}
