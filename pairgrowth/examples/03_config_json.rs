mod common;

use pairgrowth::{CompareConfig, PairGrowth};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Fields left out fall back to their defaults.
    let cfg: CompareConfig = serde_json::from_str(
        r#"{ "frequency": "Daily", "rolling_window_days": 30, "include_drawdown": true }"#,
    )?;

    let probe = PairGrowth::builder()
        .with_source(common::get_source())
        .config(cfg)
        .build()?;

    // Bound the rebase date by the shared coverage before running.
    let Some((start, end)) = probe.overlap()? else {
        println!("series do not overlap");
        return Ok(());
    };
    println!("overlap: {start} .. {end}");

    let mid = start + (end - start) / 2;
    let pg = PairGrowth::builder()
        .with_source(common::get_source())
        .config(cfg)
        .rebase_date(Some(mid))
        .build()?;

    let out = pg.run()?;
    println!("{}", out.report());
    println!("{}", serde_json::to_string_pretty(&out.summary)?);
    Ok(())
}
