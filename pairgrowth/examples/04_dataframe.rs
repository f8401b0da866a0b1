#[cfg(feature = "dataframe")]
mod common;
#[cfg(feature = "dataframe")]
use pairgrowth::{PairGrowth, ToDataFrame};

#[cfg(feature = "dataframe")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let pg = PairGrowth::builder()
        .with_source(common::get_source())
        .rolling_window_days(Some(180))
        .include_drawdown(true)
        .build()?;

    let out = pg.run()?;
    let df = out.table.to_dataframe()?;
    println!(
        "DataFrame shape: {} rows x {} cols",
        df.height(),
        df.width()
    );
    println!("{df}");
    Ok(())
}

#[cfg(not(feature = "dataframe"))]
fn main() {
    eprintln!("This example requires the 'dataframe' feature. Skipping.");
}
