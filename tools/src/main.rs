use clap::Parser;
use log::{error, info};

mod commands;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Decimal places for printed values.
    #[arg(long, global = true, default_value_t = 6)]
    precision: usize,
}

#[derive(Parser, Debug)]
enum Commands {
    MapRect(commands::maprect::Config),
    MapPoints(commands::mappoints::Config),
    Invert(commands::invert::Config),
    PageToDevice(commands::pagetodevice::Config),
    Fit(commands::fit::Config),
    Resolution(commands::resolution::Config),
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let precision = cli.precision;
    info!("Run {:?} with precision {}", cli.command, precision);

    let result = match cli.command {
        Commands::MapRect(cfg) => commands::maprect::command(cfg, precision),
        Commands::MapPoints(cfg) => commands::mappoints::command(cfg, precision),
        Commands::Invert(cfg) => commands::invert::command(cfg, precision),
        Commands::PageToDevice(cfg) => commands::pagetodevice::command(cfg, precision),
        Commands::Fit(cfg) => commands::fit::command(cfg, precision),
        Commands::Resolution(cfg) => commands::resolution::command(cfg, precision),
    };
    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}
