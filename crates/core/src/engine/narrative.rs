//! Deterministic narrative templates. Every sentence here is selected by
//! numeric thresholds on the request and the computed scores; the same input
//! always yields the same text.

use crate::domain::candidate::Candidate;
use crate::domain::input::{AgentInput, CatalystBias, PolicySupport, RiskTolerance};
use crate::domain::response::{FactorScores, RiskDashboard, ScoredCandidate};
use crate::engine::weights::{HIGH_INFLATION_PCT, HIGH_INTEREST_RATE_PCT};

/// Sub-scores at or above this earn a "strength" rationale line.
pub const STRONG_FACTOR: f64 = 72.0;
/// Sub-scores at or below this earn a "watch-out" rationale line.
pub const WEAK_FACTOR: f64 = 45.0;

pub fn macro_narrative(input: &AgentInput) -> String {
    let m = &input.macro_signals;

    let growth_clause = if m.gdp_growth >= 7.0 {
        format!("GDP compounding at {:.1}% keeps the earnings upcycle intact", m.gdp_growth)
    } else if m.gdp_growth >= 6.0 {
        format!("GDP growth of {:.1}% supports a steady earnings trajectory", m.gdp_growth)
    } else {
        format!("GDP growth of {:.1}% argues for selectivity over beta", m.gdp_growth)
    };

    let price_clause = if m.inflation <= 4.0 {
        format!("inflation at {:.1}% is benign", m.inflation)
    } else if m.inflation <= HIGH_INFLATION_PCT {
        format!("inflation at {:.1}% is manageable", m.inflation)
    } else {
        format!("inflation at {:.1}% pressures margins and multiples", m.inflation)
    };

    let rate_clause = if m.interest_rate > HIGH_INTEREST_RATE_PCT {
        format!("a {:.2}% repo rate keeps valuation discipline front and centre", m.interest_rate)
    } else {
        format!("the {:.2}% repo rate leaves room for duration in growth names", m.interest_rate)
    };

    let policy_clause = match m.policy_support {
        PolicySupport::Strong => "Policy tailwinds are strong, favouring capex-linked and manufacturing themes.",
        PolicySupport::Neutral => "Policy remains neutral, so stock-specific execution carries the narrative.",
        PolicySupport::Weak => "Policy support is weak, so balance-sheet resilience takes priority.",
    };

    format!("{growth_clause}; {price_clause} and {rate_clause}. {policy_clause}")
}

pub fn strategy_summary(input: &AgentInput, picks: &[ScoredCandidate]) -> String {
    if picks.is_empty() {
        return format!(
            "No candidate clears the current constraints: every sector in the universe is \
             excluded or scores below conviction. Relax the avoided sectors or revisit the \
             macro assumptions to repopulate the shortlist for the {}-year blueprint.",
            input.horizon_years
        );
    }

    let bias_clause = match input.catalyst_bias {
        CatalystBias::Structural => "multi-year structural catalysts",
        CatalystBias::Balanced => "a balanced catalyst mix",
        CatalystBias::Cyclical => "near-term cyclical catalysts",
    };

    let posture = match input.risk_tolerance {
        RiskTolerance::Conservative => "a drawdown-aware posture",
        RiskTolerance::Balanced => "a balanced risk posture",
        RiskTolerance::Aggressive => "an aggressive compounding posture",
    };

    format!(
        "Deploying ₹{:.0} lakh across {} shortlisted names over a {}-year horizon with {}, \
         tilted toward {}. Top conviction: {} at a composite score of {:.1}.",
        input.deployable_capital,
        picks.len(),
        input.horizon_years,
        posture,
        bias_clause,
        picks[0].candidate.name,
        picks[0].scores.total_score
    )
}

pub fn risk_dashboard(input: &AgentInput, picks: &[ScoredCandidate]) -> RiskDashboard {
    let m = &input.macro_signals;

    let systemic = if m.inflation > HIGH_INFLATION_PCT || m.interest_rate > HIGH_INTEREST_RATE_PCT {
        "Rate regime is restrictive: multiple compression is the primary systemic risk, and \
         richly valued names are sized accordingly."
            .to_string()
    } else if matches!(m.policy_support, PolicySupport::Weak) {
        "Policy support is fading: watch for capex deferrals and order-book slippage across \
         cyclically exposed names."
            .to_string()
    } else {
        "Macro backdrop is supportive; the residual systemic risks are global risk-off \
         episodes and crude-led inflation surprises."
            .to_string()
    };

    let company_specific = if picks.is_empty() {
        "No holdings under current constraints, so company-specific risk is nil until the \
         filters are relaxed."
            .to_string()
    } else {
        let mean_volatility: f64 = picks
            .iter()
            .map(|p| p.candidate.attributes.volatility_pct)
            .sum::<f64>()
            / picks.len() as f64;
        if mean_volatility >= 40.0 {
            format!(
                "Shortlist carries elevated share-price volatility (mean {mean_volatility:.0}%); \
                 expect drawdowns en route and stagger entries."
            )
        } else {
            format!(
                "Shortlist volatility is moderate (mean {mean_volatility:.0}%); position-level \
                 risk is concentrated in execution, not in the tape."
            )
        }
    };

    let sizing_rule = match input.risk_tolerance {
        RiskTolerance::Conservative => {
            "Cap any single position at 20% of deployed capital and rebalance on 25% drawdowns."
        }
        RiskTolerance::Balanced => {
            "Cap any single position at 30% of deployed capital and review on 30% drawdowns."
        }
        RiskTolerance::Aggressive => {
            "Let winners run to 40% of deployed capital before trimming back to target."
        }
    };

    RiskDashboard {
        systemic,
        company_specific,
        mitigation_playbook: vec![
            sizing_rule.to_string(),
            "Stagger entries across two quarters instead of deploying in one shot.".to_string(),
            "Re-run the blueprint when a tracked catalyst lands or macro assumptions move."
                .to_string(),
        ],
    }
}

/// Rationale bullets in fixed factor order: one line per strong factor, one
/// per weak factor, and a conviction fallback when neither threshold fires.
pub fn rationale(scores: &FactorScores) -> Vec<String> {
    let factors: [(&str, f64, &str, &str); 7] = [
        (
            "Fundamentals",
            scores.fundamentals,
            "capital efficiency and margin trajectory stand out",
            "balance-sheet and margin profile needs monitoring",
        ),
        (
            "Growth",
            scores.growth,
            "growth runway comfortably outlasts the horizon",
            "growth may not sustain across the full horizon",
        ),
        (
            "Innovation",
            scores.innovation,
            "R&D cadence keeps the product edge compounding",
            "innovation pipeline is thin for the theme",
        ),
        (
            "Catalysts",
            scores.catalysts,
            "catalyst stack is dense on the preferred timeline",
            "few near catalysts; re-rating may take patience",
        ),
        (
            "Risk",
            scores.risk_adjusted,
            "volatility and leverage sit well inside tolerance",
            "volatility is high for the stated risk tolerance",
        ),
        (
            "Valuation",
            scores.valuation,
            "valuation leaves room for multiple expansion",
            "valuation already prices in much of the story",
        ),
        (
            "Megatrend",
            scores.megatrend_fit,
            "squarely aligned with the focus megatrends",
            "limited overlap with the chosen megatrends",
        ),
    ];

    let mut lines = Vec::new();
    for (label, value, strong_note, weak_note) in factors {
        if value >= STRONG_FACTOR {
            lines.push(format!("{label} {value:.0}/100: {strong_note}."));
        } else if value <= WEAK_FACTOR {
            lines.push(format!("{label} {value:.0}/100: {weak_note}."));
        }
    }

    if lines.is_empty() {
        lines.push(format!(
            "Broad-based profile with no outlier factor; composite conviction {:.1}/100.",
            scores.total_score
        ));
    }

    lines
}

/// One-line portfolio thesis naming the slot's single best factor.
pub fn thesis(candidate: &Candidate, scores: &FactorScores) -> String {
    let (driver, value) = best_factor(scores);
    format!(
        "{} pick in {}: {} ({value:.0}/100) anchors a composite score of {:.1}.",
        candidate.name,
        candidate.sector.as_str(),
        driver.to_lowercase(),
        scores.total_score
    )
}

/// Watchlist line: surfaced without diagnostics, so the narrative names the
/// candidate and its standout factor qualitatively and shows no scores.
pub fn watchlist_narrative(candidate: &Candidate, scores: &FactorScores) -> String {
    let (driver, _) = best_factor(scores);
    format!(
        "{} ({}): just below the cutoff; {} is the factor to watch.",
        candidate.name,
        candidate.ticker,
        driver.to_lowercase()
    )
}

fn best_factor(scores: &FactorScores) -> (&'static str, f64) {
    let factors = [
        ("Fundamentals", scores.fundamentals),
        ("Growth", scores.growth),
        ("Innovation", scores.innovation),
        ("Catalysts", scores.catalysts),
        ("Risk profile", scores.risk_adjusted),
        ("Valuation", scores.valuation),
        ("Megatrend fit", scores.megatrend_fit),
    ];
    let mut best = factors[0];
    for f in factors {
        if f.1 > best.1 {
            best = f;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::candidate::{CandidateAttributes, Sector};
    use crate::domain::input::AgentInput;
    use std::collections::BTreeSet;

    fn stub_candidate() -> Candidate {
        Candidate {
            ticker: "NSE:STUB".to_string(),
            name: "Stub Industries".to_string(),
            sector: Sector::Manufacturing,
            description: "stub".to_string(),
            megatrends: BTreeSet::new(),
            catalysts: vec![],
            attributes: CandidateAttributes {
                revenue_cagr_pct: 20.0,
                structural_runway_years: 8.0,
                margin_trend_bps: 100.0,
                roce_pct: 18.0,
                net_debt_to_ebitda: 0.8,
                volatility_pct: 35.0,
                rnd_intensity_pct: 4.0,
                new_platform_count: 2,
                ev_to_ebitda: 14.0,
            },
        }
    }

    fn scores(value: f64) -> FactorScores {
        FactorScores {
            fundamentals: value,
            growth: value,
            innovation: value,
            catalysts: value,
            risk_adjusted: value,
            valuation: value,
            megatrend_fit: value,
            total_score: value,
        }
    }

    #[test]
    fn macro_narrative_branches_on_rate_regime() {
        let mut input = AgentInput::default_scenario();
        input.macro_signals.interest_rate = 8.0;
        assert!(macro_narrative(&input).contains("valuation discipline"));

        input.macro_signals.interest_rate = 5.5;
        assert!(macro_narrative(&input).contains("room for duration"));
    }

    #[test]
    fn macro_narrative_reflects_policy_support() {
        let mut input = AgentInput::default_scenario();
        input.macro_signals.policy_support = PolicySupport::Weak;
        assert!(macro_narrative(&input).contains("balance-sheet resilience"));
    }

    #[test]
    fn rationale_flags_strong_and_weak_factors_in_fixed_order() {
        let mut s = scores(60.0);
        s.valuation = 30.0;
        s.growth = 85.0;
        let lines = rationale(&s);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Growth 85/100"));
        assert!(lines[1].starts_with("Valuation 30/100"));
    }

    #[test]
    fn rationale_falls_back_to_a_conviction_line() {
        let lines = rationale(&scores(60.0));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("60.0/100"));
    }

    #[test]
    fn watchlist_lines_name_the_factor_but_show_no_scores() {
        let mut s = scores(60.0);
        s.valuation = 81.0;
        let line = watchlist_narrative(&stub_candidate(), &s);
        assert!(line.contains("valuation is the factor to watch"));
        assert!(!line.contains("/100"), "watchlist line shows a score: {line}");
    }

    #[test]
    fn empty_shortlist_gets_an_explanatory_summary() {
        let input = AgentInput::default_scenario();
        let summary = strategy_summary(&input, &[]);
        assert!(summary.contains("No candidate clears the current constraints"));
    }

    #[test]
    fn empty_shortlist_risk_dashboard_is_still_complete() {
        let input = AgentInput::default_scenario();
        let dashboard = risk_dashboard(&input, &[]);
        assert!(!dashboard.systemic.is_empty());
        assert!(dashboard.company_specific.contains("No holdings"));
        assert_eq!(dashboard.mitigation_playbook.len(), 3);
    }
}
