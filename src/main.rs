use clap::Parser;
use memo::cli::commands::Cli;
use memo::cli::handlers;

fn main() {
    let cli = Cli::parse();

    let (config, data_file) = match handlers::prepare(&cli) {
        Ok(ready) => ready,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        // No subcommand → open the widget
        None => memo::tui::run(&config, &data_file),
        Some(command) => handlers::dispatch(command, &data_file, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
