mod cli;
mod commands;

use std::process::ExitCode;

use blockshade_config::BlockshadeConfig;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use cli::Command;

fn main() -> ExitCode {
    let args = cli::parse();

    // Load errors are logged after the subscriber is installed.
    let loaded = blockshade_config::load_config(args.config.as_deref());

    let log_directive = match (&args.log_level, &loaded) {
        (Some(directive), _) => directive.clone(),
        (None, Ok(config)) => format!("blockshade={}", config.logging.level.as_directive()),
        (None, Err(_)) => "blockshade=info".to_string(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| LevelFilter::INFO.into()),
            ),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("blockshade v{} starting", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        BlockshadeConfig::default()
    });

    let result = match &args.command {
        Command::Render(render) => commands::render(render, config),
        Command::Shaders { out } => commands::shaders(out.as_deref()),
        Command::Classify { target } => Ok(commands::classify(target)),
        Command::Config { json } => commands::config(&config, *json),
    };

    match result {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
