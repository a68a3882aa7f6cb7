//! # tollgate CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

use tollgate_core::VehicleClass;

/// Tollgate — timed, usage-limited toll pass engine.
///
/// Runs the seeded lifecycle walkthrough and lists the pass catalog.
#[derive(Parser, Debug)]
#[command(name = "tollgate", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Walk the purchase/passage scenario with a manual clock.
    Demo,
    /// List purchasable pass options for a vehicle class.
    Options {
        /// Vehicle class to price for.
        #[arg(value_enum)]
        vehicle_class: VehicleClassArg,
    },
}

/// clap-friendly mirror of the domain vehicle class.
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
enum VehicleClassArg {
    TwoWheeler,
    FourWheeler,
}

impl From<VehicleClassArg> for VehicleClass {
    fn from(arg: VehicleClassArg) -> Self {
        match arg {
            VehicleClassArg::TwoWheeler => VehicleClass::TwoWheeler,
            VehicleClassArg::FourWheeler => VehicleClass::FourWheeler,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo => tollgate_cli::demo::run()?,
        Commands::Options { vehicle_class } => {
            let start = tollgate_core::Timestamp::now();
            let system = tollgate_cli::demo::seed_system(start);
            let options = system.pass_options(vehicle_class.into());
            println!("{}", serde_json::to_string_pretty(&options)?);
        }
    }

    Ok(())
}
