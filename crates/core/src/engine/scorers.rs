//! The seven factor scorers. Each is a pure, total function mapping a
//! candidate (plus request context where the factor calls for it) to a score
//! in [0, 100], monotone in its driving attribute.

use crate::domain::candidate::{Candidate, CatalystKind, Megatrend};
use crate::domain::input::{CatalystBias, RiskTolerance, MIN_HORIZON_YEARS, MAX_HORIZON_YEARS};
use std::collections::BTreeSet;

/// Linear position of `value` within [lo, hi], clamped to [0, 1].
fn scale(value: f64, lo: f64, hi: f64) -> f64 {
    ((value - lo) / (hi - lo)).clamp(0.0, 1.0)
}

/// Financial health: ROCE carries half the factor, margin trajectory and
/// balance-sheet headroom split the rest. Request-independent.
pub fn fundamentals(candidate: &Candidate) -> f64 {
    let a = &candidate.attributes;
    let roce = scale(a.roce_pct, 5.0, 30.0);
    let margin = scale(a.margin_trend_bps, -150.0, 250.0);
    let balance_sheet = 1.0 - scale(a.net_debt_to_ebitda, 0.0, 3.0);
    100.0 * (0.5 * roce + 0.25 * margin + 0.25 * balance_sheet)
}

/// Growth: blends near-term revenue momentum with structural runway. The
/// runway share of the blend rises linearly with the horizon, so longer
/// horizons reward durable growth over near-term spikes.
pub fn growth(candidate: &Candidate, horizon_years: u32) -> f64 {
    let a = &candidate.attributes;
    let t = scale(
        horizon_years as f64,
        MIN_HORIZON_YEARS as f64,
        MAX_HORIZON_YEARS as f64,
    );
    let runway_share = 0.35 + 0.40 * t;
    let momentum = scale(a.revenue_cagr_pct, 5.0, 35.0);
    let runway = scale(a.structural_runway_years, 2.0, 12.0);
    100.0 * ((1.0 - runway_share) * momentum + runway_share * runway)
}

/// Innovation velocity: R&D intensity plus commercialized platform count.
/// Request-independent.
pub fn innovation(candidate: &Candidate) -> f64 {
    let a = &candidate.attributes;
    let rnd = scale(a.rnd_intensity_pct, 0.0, 8.0);
    let platforms = scale(a.new_platform_count as f64, 0.0, 4.0);
    100.0 * (0.6 * rnd + 0.4 * platforms)
}

/// Catalyst density, with the bias-matched kind upweighted. Balanced bias
/// applies no modulation.
pub fn catalysts(candidate: &Candidate, bias: CatalystBias) -> f64 {
    let weighted: f64 = candidate
        .catalysts
        .iter()
        .map(|catalyst| match (bias, catalyst.kind) {
            (CatalystBias::Balanced, _) => 1.0,
            (CatalystBias::Structural, CatalystKind::Structural) => 1.25,
            (CatalystBias::Structural, CatalystKind::Cyclical) => 0.85,
            (CatalystBias::Cyclical, CatalystKind::Cyclical) => 1.25,
            (CatalystBias::Cyclical, CatalystKind::Structural) => 0.85,
        })
        .sum();
    100.0 * scale(weighted, 0.0, 4.0)
}

fn tolerance_multiplier(tolerance: RiskTolerance) -> f64 {
    match tolerance {
        RiskTolerance::Conservative => 1.3,
        RiskTolerance::Balanced => 1.0,
        RiskTolerance::Aggressive => 0.7,
    }
}

/// Risk adjustment: volatility and leverage penalties, scaled up for
/// conservative profiles and down for aggressive ones.
pub fn risk_adjusted(candidate: &Candidate, tolerance: RiskTolerance) -> f64 {
    let a = &candidate.attributes;
    let penalty =
        55.0 * scale(a.volatility_pct, 15.0, 60.0) + 25.0 * scale(a.net_debt_to_ebitda, 0.0, 3.0);
    (100.0 - penalty * tolerance_multiplier(tolerance)).clamp(0.0, 100.0)
}

/// Valuation sanity: the candidate's multiple against its sector benchmark.
/// At or below 0.8x the benchmark scores 100; the score declines linearly to
/// a floor of 20 at 2.5x and beyond.
pub fn valuation(candidate: &Candidate) -> f64 {
    let ratio = candidate.attributes.ev_to_ebitda / candidate.sector.benchmark_multiple();
    if ratio <= 0.8 {
        return 100.0;
    }
    if ratio >= 2.5 {
        return 20.0;
    }
    100.0 - (ratio - 0.8) / (2.5 - 0.8) * 80.0
}

/// Thematic alignment: overlap fraction with the requested megatrends, mapped
/// from a floor of 35 (no overlap) to 100 (full overlap). Zero overlap is not
/// disqualifying since the candidate may still score on other factors. An
/// empty focus set expresses no thematic view and scores a neutral 70.
pub fn megatrend_fit(candidate: &Candidate, focus: &BTreeSet<Megatrend>) -> f64 {
    if focus.is_empty() {
        return 70.0;
    }
    let overlap = candidate.megatrends.intersection(focus).count() as f64 / focus.len() as f64;
    35.0 + 65.0 * overlap
}
