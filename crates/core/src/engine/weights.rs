//! Weight derivation and aggregation. The one place where macro modifiers
//! and profile modifiers interact, kept as a standalone pure function so it
//! can be tested apart from the scorers.

use crate::domain::input::{AgentInput, PolicySupport};
use crate::domain::response::{FactorScores, WeightVector};

/// Inflation or repo rate above these levels shifts weight toward valuation
/// discipline and risk adjustment.
pub const HIGH_INFLATION_PCT: f64 = 6.0;
pub const HIGH_INTEREST_RATE_PCT: f64 = 7.0;

const BASE_WEIGHTS: WeightVector = WeightVector {
    fundamentals: 0.20,
    growth: 0.18,
    innovation: 0.12,
    catalysts: 0.12,
    risk_adjusted: 0.14,
    valuation: 0.14,
    megatrend_fit: 0.10,
};

/// Derives the applied weight vector for a request: base distribution, plus
/// policy-support and rate-regime modifiers, renormalized to sum to 1.
pub fn derive_weights(input: &AgentInput) -> WeightVector {
    let mut w = BASE_WEIGHTS;

    match input.macro_signals.policy_support {
        PolicySupport::Strong => {
            w.growth += 0.04;
            w.catalysts += 0.03;
        }
        PolicySupport::Weak => {
            w.risk_adjusted += 0.05;
        }
        PolicySupport::Neutral => {}
    }

    if input.macro_signals.inflation > HIGH_INFLATION_PCT
        || input.macro_signals.interest_rate > HIGH_INTEREST_RATE_PCT
    {
        w.valuation += 0.04;
        w.risk_adjusted += 0.04;
    }

    let sum = w.sum();
    WeightVector {
        fundamentals: w.fundamentals / sum,
        growth: w.growth / sum,
        innovation: w.innovation / sum,
        catalysts: w.catalysts / sum,
        risk_adjusted: w.risk_adjusted / sum,
        valuation: w.valuation / sum,
        megatrend_fit: w.megatrend_fit / sum,
    }
}

/// Weighted total over the seven sub-scores. Because the weights sum to 1
/// and every sub-score is in [0, 100], the total is in [0, 100].
pub fn aggregate(scores: &FactorScores, input: &AgentInput) -> (f64, WeightVector) {
    let w = derive_weights(input);
    let total = scores.fundamentals * w.fundamentals
        + scores.growth * w.growth
        + scores.innovation * w.innovation
        + scores.catalysts * w.catalysts
        + scores.risk_adjusted * w.risk_adjusted
        + scores.valuation * w.valuation
        + scores.megatrend_fit * w.megatrend_fit;
    (total.clamp(0.0, 100.0), w)
}
