mod common;

use pairgrowth::PairGrowth;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let pg = PairGrowth::builder()
        .with_source(common::get_source())
        .build()?;

    let out = pg.run()?;
    println!("{}", out.report());
    println!();

    println!("{:<12} {:>12} {:>10} {:>10} {:>12}", "date", "btc_usd", "btc_idx", "xrp_idx", "xrp/btc");
    for row in &out.table.rows {
        println!(
            "{:<12} {:>12.2} {:>10.4} {:>10.4} {:>12.8}",
            row.date, row.btc_price, row.btc_indexed, row.xrp_indexed, row.xrp_btc_ratio
        );
    }
    Ok(())
}
