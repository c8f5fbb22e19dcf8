use std::process;

use clap::Parser;

mod cli;
mod render;
mod terminal_navigator;

use cli::Cli;

/// Storefront command-line client: cart management and checkout.
#[tokio::main]
async fn main() {
    // Quiet by default so command output stays readable; RUST_LOG overrides.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    match cli.run().await {
        Ok(output) => println!("{output}"),
        Err(error) => {
            eprintln!("{error}");
            process::exit(1);
        }
    }
}
