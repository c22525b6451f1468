use single_thread_benchmark::{runner, Report, RunConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize logging; diagnostics go to stderr so the report file stays
    // the only artifact on disk.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "single_thread_benchmark=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = RunConfig::default();
    let config_json = serde_json::to_string(&config)?;
    tracing::debug!(config = %config_json, "effective run configuration");

    let cwd = std::env::current_dir()?;
    let mut report = Report::create(&cwd, config.label_width)?;
    tracing::info!(path = %report.path().display(), "report file created");

    runner::run(&config, &mut report, runner::standard_lineup())?;

    tracing::info!(path = %report.path().display(), "benchmark run complete");
    Ok(())
}
