//! Sends a few messages through the pipeline, good and bad
//!
//! Run with: cargo run --example send_message
//! More detail: RUST_LOG=sluice=debug cargo run --example send_message

use sluice::prelude::*;
use sluice::testing::LoggingCapability;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let pipeline = Pipeline::new(MessageValidator::default());

    let inputs = [
        ("+3581234567", "Hello world!".to_string()),
        ("bad", "x".repeat(161)),
        ("+1", "too short a number".to_string()),
    ];

    for (identifier, payload) in inputs {
        let raw = pipeline.validator().record(identifier, payload);
        match pipeline.run(raw).execute(&LoggingCapability).await {
            Ok(()) => tracing::info!("delivered"),
            Err(err) => match err.violations() {
                Some(violations) => tracing::error!(%violations, "{}", err.reason),
                None => tracing::error!(debug = ?err.debug, "{}", err.reason),
            },
        }
    }

    // A flaky gateway, called through the fault-raising form
    let gateway = |message: Message| async move {
        if message.identifier.starts_with("+358") {
            Ok(())
        } else {
            Err(format!("no route to {}", message.identifier))
        }
    };

    let raw = pipeline.validator().record("+3581234567", "Routed");
    pipeline.force(raw, &gateway).await?;
    tracing::info!("routed message accepted");

    let raw = pipeline.validator().record("+4412345678", "Unrouted");
    if let Err(err) = pipeline.force(raw, &gateway).await {
        tracing::error!("{err:#}");
        if let Some(structured) = err.downcast_ref::<StructuredError<String>>() {
            tracing::error!(fault = ?structured.fault(), "gateway refused");
        }
    }

    Ok(())
}
