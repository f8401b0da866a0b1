use pairgrowth::{Asset, MarketChart, PairError, PriceSource, RawObservation};
use pairgrowth_mock::{Dataset, MockSource};
use std::path::PathBuf;
use std::sync::Arc;

/// Reads market-chart documents saved by an external fetcher, one file per asset.
pub struct ChartDirSource {
    dir: PathBuf,
}

impl PriceSource for ChartDirSource {
    fn name(&self) -> &'static str {
        "chart-dir"
    }

    fn daily_history(&self, asset: Asset) -> Result<Vec<RawObservation>, PairError> {
        let path = self.dir.join(format!("{}.json", asset.coin_id()));
        let text = std::fs::read_to_string(&path)
            .map_err(|e| PairError::source(self.name(), format!("{}: {e}", path.display())))?;
        MarketChart::from_json(&text)?.into_observations()
    }
}

#[must_use]
pub fn get_source() -> Arc<dyn PriceSource> {
    if let Ok(dir) = std::env::var("PAIRGROWTH_CHART_DIR") {
        // Expects bitcoin.json and ripple.json
        Arc::new(ChartDirSource { dir: dir.into() })
    } else if std::env::var("PAIRGROWTH_EXAMPLES_USE_CHART").is_ok() {
        println!("--- (Using canned market-chart fixture) ---");
        Arc::new(MockSource::with_dataset(Dataset::Chart))
    } else {
        println!("--- (Using generated mock history) ---");
        Arc::new(MockSource::new())
    }
}
