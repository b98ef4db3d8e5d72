use clap::Parser;
use glide_bin::{
    cli::{Cli, Command},
    commands,
};
use glide_log::LogConfig;

fn main() {
    let cli = Cli::parse();

    // Logging is best effort; a replay still runs without a log file.
    let _log_guard = match glide_log::init(LogConfig {
        log_file_path: cli.log_file,
    }) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: Failed to initialize logging: {e}");
            None
        },
    };

    let mut stdout = std::io::stdout().lock();
    let result = match cli.command {
        Command::Replay(args) => commands::replay::handle(args, &mut stdout),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
