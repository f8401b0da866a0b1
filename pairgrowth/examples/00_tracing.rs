mod common;

use pairgrowth::{Frequency, PairGrowth};
use tracing_subscriber::fmt::format::FmtSpan;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=debug and `--features tracing`
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let pg = PairGrowth::builder()
        .with_source(common::get_source())
        .frequency(Frequency::Weekly)
        .rolling_window_days(Some(90))
        .build()?;

    let _ = pg.run()?;
    Ok(())
}
