use chrono::{Days, NaiveDate, NaiveTime};
use pairgrowth_core::{Asset, RawObservation};

/// Parameters of a synthetic daily price path.
struct Path {
    first: (i32, u32, u32),
    days: u64,
    base: f64,
    drift: f64,
    swing: f64,
    cycle: f64,
}

static BTC: Path = Path {
    first: (2019, 1, 1),
    days: 1096,
    base: 3800.0,
    drift: 0.0025,
    swing: 0.08,
    cycle: 23.0,
};

// Starts later and ends later than BTC so alignment has work to do.
static XRP: Path = Path {
    first: (2019, 2, 15),
    days: 1066,
    base: 0.30,
    drift: 0.0012,
    swing: 0.15,
    cycle: 17.0,
};

/// XRP day offset carrying a zero print.
pub const XRP_BAD_PRINT_DAY: u64 = 100;

fn path(asset: Asset) -> &'static Path {
    match asset {
        Asset::Btc => &BTC,
        Asset::Xrp => &XRP,
    }
}

#[allow(clippy::cast_precision_loss)]
fn price(p: &Path, n: u64) -> f64 {
    let n = n as f64;
    p.base * (1.0 + p.drift).powf(n) * p.swing.mul_add((n / p.cycle).sin(), 1.0)
}

/// Closing price on `date`, or `None` outside the fixture range.
pub fn close_on(asset: Asset, date: NaiveDate) -> Option<f64> {
    let p = path(asset);
    let first = NaiveDate::from_ymd_opt(p.first.0, p.first.1, p.first.2)?;
    let n = u64::try_from((date - first).num_days()).ok()?;
    if n >= p.days {
        return None;
    }
    if asset == Asset::Xrp && n == XRP_BAD_PRINT_DAY {
        return Some(0.0);
    }
    Some(price(p, n))
}

/// Daily history with a closing quote at 23:00 UTC. Every fifth day also
/// carries an earlier, superseded quote at midnight.
pub fn daily(asset: Asset) -> Vec<RawObservation> {
    let p = path(asset);
    let Some(first) = NaiveDate::from_ymd_opt(p.first.0, p.first.1, p.first.2) else {
        return Vec::new();
    };
    let close_time = NaiveTime::from_hms_opt(23, 0, 0).unwrap_or(NaiveTime::MIN);

    let mut out = Vec::new();
    for n in 0..p.days {
        let Some(date) = first.checked_add_days(Days::new(n)) else {
            break;
        };
        let Some(close) = close_on(asset, date) else {
            continue;
        };
        if n % 5 == 0 {
            out.push(RawObservation::at(
                date.and_time(NaiveTime::MIN).and_utc(),
                close * 0.97,
            ));
        }
        out.push(RawObservation::at(date.and_time(close_time).and_utc(), close));
    }
    out
}
