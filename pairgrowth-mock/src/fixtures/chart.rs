use pairgrowth_core::Asset;

// 2020-01-01..=2020-01-07 at 00:00 and 12:00 UTC.
const BTC_CHART: &str = r#"{
  "prices": [
    [1577836800000, 7195.24], [1577880000000, 7180.10],
    [1577923200000, 7200.17], [1577966400000, 6985.47],
    [1578009600000, 6984.43], [1578052800000, 7344.88],
    [1578096000000, 7410.66], [1578139200000, 7354.12],
    [1578182400000, 7411.32], [1578225600000, 7358.75],
    [1578268800000, 7410.45], [1578312000000, 7769.22],
    [1578355200000, 7760.00], [1578398400000, 8163.69]
  ],
  "market_caps": [[1577836800000, 130580829149.0]],
  "total_volumes": [[1577836800000, 18565664996.0]]
}"#;

// Starts one day after BTC.
const XRP_CHART: &str = r#"{
  "prices": [
    [1577923200000, 0.1926], [1577966400000, 0.1880],
    [1578009600000, 0.1880], [1578052800000, 0.1932],
    [1578096000000, 0.1933], [1578139200000, 0.1925],
    [1578182400000, 0.1934], [1578225600000, 0.1931],
    [1578268800000, 0.1936], [1578312000000, 0.2003],
    [1578355200000, 0.2009], [1578398400000, 0.2120]
  ],
  "market_caps": [[1577923200000, 8290116430.0]],
  "total_volumes": []
}"#;

pub const fn document(asset: Asset) -> &'static str {
    match asset {
        Asset::Btc => BTC_CHART,
        Asset::Xrp => XRP_CHART,
    }
}
