// Agent Chain - demo entry point
// Runs the scripted scenarios and prints a report for each one

use agent_chain::config::{Config, OutputFormat};
use agent_chain::demo;
use tracing::info;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = Config::from_env();
    info!("Configuration loaded: {:?}", config);
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let reports = demo::run(&config.demo);

    match config.output.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        OutputFormat::Text => {
            for report in &reports {
                println!("{}", report);
            }
        }
    }

    Ok(())
}
