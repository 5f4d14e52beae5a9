use clap::Parser;

use categorize::config::{Cli, Config};

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let config = match Config::try_from(cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        },
    };

    if let Err(err) = categorize::run(&config) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }

    println!(
        "Categories successfully added and transactions saved to '{}'.",
        config.output_path.display()
    );
}
