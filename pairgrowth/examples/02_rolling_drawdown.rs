mod common;

use pairgrowth::{Frequency, PairGrowth};

fn pct(v: Option<f64>) -> String {
    v.map_or_else(|| "n/a".to_string(), |x| format!("{:.2}%", x * 100.0))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let pg = PairGrowth::builder()
        .with_source(common::get_source())
        .frequency(Frequency::Weekly)
        .rolling_window_days(Some(365))
        .include_drawdown(true)
        .use_log_for_zscore(true)
        .build()?;

    let out = pg.run()?;
    println!("columns: {}", out.table.column_names().join(", "));

    for row in out.table.rows.iter().rev().take(8).rev() {
        let rolling = row.rolling.unwrap_or_default();
        let dd = row.drawdown.unwrap_or_default();
        println!(
            "{}  btc 1y {:>9}  xrp 1y {:>9}  dd btc {:>8.2}%  dd xrp {:>8.2}%  z(log) xrp {:>6}",
            row.date,
            pct(rolling.btc_cagr),
            pct(rolling.xrp_cagr),
            dd.btc * 100.0,
            dd.xrp * 100.0,
            row.xrp_zscore.map_or_else(|| "n/a".to_string(), |z| format!("{z:.2}")),
        );
    }
    Ok(())
}
