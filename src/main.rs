mod app;
mod cli;
mod config;
mod consts;
mod context;
mod error;
mod utils;
mod version;

use clap::Parser;

use cli::Cli;
use config::Config;
use context::PackageContext;

fn main() {
    let cli = Cli::parse();

    // Keep stdout clean for machine consumers
    let config = if cli.json {
        Config::load_quiet()
    } else {
        Config::load()
    };
    let cli = cli.with_config(&config);

    let context = match PackageContext::discover() {
        Ok(context) => context.with_template(config.bidsmap_template),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = app::run(&cli, &context) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
