/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::process;

use clap::Parser;
use physics::{Quantity, Unit, UnitError};

#[derive(Parser)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
/// Physical quantity calculator
///
/// Parses quantities such as "9.81 m/s^2" and optionally converts
/// them to another unit.
struct Args {
    #[clap(long)]
    /// Convert each quantity to this unit.
    to: Option<String>,
    #[clap(long, short)]
    /// Output JSON.
    json: bool,
    #[clap(long, short)]
    /// Output the quantity's dimensions.
    dimension: bool,
    #[clap(short, long, action = clap::ArgAction::Count)]
    /// Increase verbosity.
    verbose: u8,
    /// The quantities to parse.
    #[clap(required = true)]
    quantity: Vec<String>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = simplelog::TermLogger::init(
        match args.verbose {
            0 => simplelog::LevelFilter::Info,
            1 => simplelog::LevelFilter::Debug,
            2.. => simplelog::LevelFilter::Trace,
        },
        simplelog::ConfigBuilder::new().build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    if let Err(e) = run(&args) {
        log::debug!("exiting on error: {:?}", e);
        eprintln!("{}", e);
        process::exit(1)
    }
}

fn run(args: &Args) -> Result<(), UnitError> {
    let target = args.to.as_deref().map(Unit::parse).transpose()?;

    for input in &args.quantity {
        let quantity = Quantity::parse(input)?;
        log::debug!("parsed {:?} as {}", input, quantity);

        let quantity = match &target {
            Some(unit) => quantity.convert_to(unit)?,
            None => quantity,
        };

        match (args.dimension, args.json) {
            (true, true) => println!(
                "{}",
                serde_json::to_string(&quantity.unit().dimension()?)
                    .expect("serialization failed!?")
            ),
            (true, false) => println!("{}", quantity.unit().dimension()?),
            (false, true) => println!(
                "{}",
                serde_json::to_string(&quantity)
                    .expect("serialization failed!?")
            ),
            (false, false) => println!("{}", quantity),
        }
    }

    Ok(())
}
