use anyhow::Result;
use mixtral_invoke::{Error, InferenceInvoker, Invocation, config};
use tracing::info;

const DEFAULT_PROMPT: &str = "Complete the following: \"Once upon a time...\"";

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing config file means built-in defaults
    let config = match config::load().await {
        Ok(config) => config,
        Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => config::Config::default(),
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.logs.level.clone());

    if let Err(e) = validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_new(&log_level)?)
        .json()
        .with_writer(std::io::stderr)
        .init();

    let prompt = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_PROMPT.to_string());

    println!("\nModel: Mixtral 8x7B");
    println!("Prompt: {}", prompt);

    let invoker = InferenceInvoker::bedrock(config.invoker)?;

    info!(
        "Invoking {} in {} with log level: {}",
        invoker.model_id(),
        invoker.config().region,
        log_level
    );

    match invoker.invoke(&prompt).await? {
        Invocation::Completions(completions) => {
            for completion in completions {
                println!("Completion:");
                println!("{}", completion);
                println!("\n");
            }
        }
        Invocation::PermissionDenied { .. } => std::process::exit(1),
    }

    Ok(())
}
