//! Filtering, ranking, and allocation. Deterministic: total-score descending
//! with ticker-ascending tie-breaks, and allocations that sum to exactly 100.

use crate::domain::candidate::Sector;
use crate::domain::response::ScoredCandidate;
use std::collections::BTreeSet;

/// Ranked candidates surfaced with full diagnostics.
pub const TOP_PICKS: usize = 6;
/// Portfolio slots drawn from the head of the ranking.
pub const PORTFOLIO_SLOTS: usize = 4;
/// Watchlist band just below the top-pick cutoff.
pub const WATCHLIST_BAND: usize = 4;
/// Scores below this contribute nothing to proportional sizing.
pub const ALLOCATION_BASELINE: f64 = 55.0;

/// Drops avoided sectors and sorts the survivors: total score descending,
/// ties broken by ticker ascending.
pub fn rank(scored: Vec<ScoredCandidate>, avoid_sectors: &BTreeSet<Sector>) -> Vec<ScoredCandidate> {
    let mut ranked: Vec<ScoredCandidate> = scored
        .into_iter()
        .filter(|s| !avoid_sectors.contains(&s.candidate.sector))
        .collect();

    ranked.sort_by(|a, b| {
        b.scores
            .total_score
            .partial_cmp(&a.scores.total_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.candidate.ticker.cmp(&b.candidate.ticker))
    });

    ranked
}

/// Allocations (percent) for the first `PORTFOLIO_SLOTS` ranked candidates,
/// proportional to score above `ALLOCATION_BASELINE`. Equal-weight when no
/// slot clears the baseline. Each slot is rounded to one decimal with the
/// rounding residue assigned to the highest-ranked slot, so non-empty output
/// sums to exactly 100.0.
pub fn allocate(ranked: &[ScoredCandidate]) -> Vec<f64> {
    let slots = ranked.len().min(PORTFOLIO_SLOTS);
    if slots == 0 {
        return Vec::new();
    }

    let raw: Vec<f64> = ranked[..slots]
        .iter()
        .map(|s| (s.scores.total_score - ALLOCATION_BASELINE).max(0.0))
        .collect();
    let raw_sum: f64 = raw.iter().sum();

    let shares: Vec<f64> = if raw_sum <= 0.0 {
        vec![100.0 / slots as f64; slots]
    } else {
        raw.iter().map(|r| r / raw_sum * 100.0).collect()
    };

    let mut out: Vec<f64> = shares.iter().map(|s| (s * 10.0).round() / 10.0).collect();
    let tail: f64 = out[1..].iter().sum();
    out[0] = ((100.0 - tail) * 10.0).round() / 10.0;
    out
}
