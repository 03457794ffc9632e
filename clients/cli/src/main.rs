use clap::Parser;
use colored::Colorize;
use deel_cli::{run_cli, Cli};
use dotenvy::dotenv;
use tracing::log::info;

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    // Load .env file. Best effort, and before parsing so that env-backed
    // flags can be set from it.
    let maybe_env = dotenv();
    let args = Cli::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();
    // We only log after we've initialized the logger with the desired log
    // level.
    match maybe_env {
        | Ok(path) => {
            info!("Loaded environment file from: {}", path.display())
        }
        | Err(e) => info!("Didn't load .env file: {e}"),
    };

    if let Err(err) = run_cli(args).await {
        eprintln!("{}", format!("{err:#}").red());
        std::process::exit(1);
    };
}
