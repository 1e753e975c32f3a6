use std::{env, io};

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing for the generator
///
/// Uses the RUST_LOG environment variable if set, otherwise only warnings
/// and errors are shown. Output goes to stderr so a document printed with
/// `--stdout` stays clean. `OPTREF_LOG_FORMAT=json` switches to JSON lines.
///
/// # Errors
/// Returns error if tracing subscriber initialization fails
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let format = env::var("OPTREF_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(env_filter);

    match format.as_str() {
        "json" => {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(io::stderr),
                )
                .try_init()?;
        }
        _ => {
            registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_level(true)
                        .with_writer(io::stderr),
                )
                .try_init()?;
        }
    }

    Ok(())
}
