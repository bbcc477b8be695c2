use std::process::ExitCode;

use pirate_quest::{
    config::GameConfig,
    game::Session,
    io::sys,
    Error,
};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    // the game owns the terminal, so logs only go anywhere if someone asks for them
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let config = match GameConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let mut session = match Session::new(&config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut iosys = match sys::load() {
        Ok(io) => io,
        Err(errs) => {
            eprintln!("failed to load any IO system:");
            for (name, err) in errs {
                eprintln!("  {}: {}", name, err);
            }
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(start = %config.start_location, "session starting");
    let res = session.run(&mut *iosys);
    iosys.stop();

    match res {
        Ok(outcome) => {
            tracing::info!(?outcome, "session over");
            ExitCode::from(config.exit_code)
        }
        Err(Error::Closed) => {
            tracing::info!("closed by the player");
            ExitCode::from(config.exit_code)
        }
        Err(e) => {
            tracing::error!(error = %e, "session failed");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
