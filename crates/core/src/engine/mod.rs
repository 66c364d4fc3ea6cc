//! The decision engine: a deterministic, side-effect-free transformation of
//! an investor blueprint into a ranked, explained shortlist. The wall-clock
//! timestamp is the only non-pure input and is injectable for tests.

pub mod narrative;
pub mod scorers;
pub mod selector;
pub mod weights;

use crate::domain::candidate::Candidate;
use crate::domain::input::AgentInput;
use crate::domain::response::{
    AgentResponse, FactorScores, PortfolioSlot, ScoredCandidate, TopPick, WatchlistEntry,
};
use crate::universe::Universe;
use chrono::{DateTime, Utc};

/// Runs the agent against the wall clock. See [`run_agent_at`].
pub fn run_agent(universe: &Universe, input: &AgentInput) -> anyhow::Result<AgentResponse> {
    run_agent_at(universe, input, Utc::now())
}

/// Full pipeline: validate, score every candidate, aggregate, rank, allocate,
/// and synthesize narratives. Pure given `generated_at`; invalid input fails
/// before any scoring.
pub fn run_agent_at(
    universe: &Universe,
    input: &AgentInput,
    generated_at: DateTime<Utc>,
) -> anyhow::Result<AgentResponse> {
    input.validate()?;

    let scored: Vec<ScoredCandidate> = universe
        .candidates()
        .iter()
        .map(|candidate| ScoredCandidate {
            candidate: candidate.clone(),
            scores: score_candidate(candidate, input),
        })
        .collect();

    let ranked = selector::rank(scored, &input.avoid_sectors);

    let picks = &ranked[..ranked.len().min(selector::TOP_PICKS)];
    let allocations = selector::allocate(&ranked);

    let portfolio_mix: Vec<PortfolioSlot> = ranked
        .iter()
        .zip(allocations)
        .map(|(slot, allocation)| PortfolioSlot {
            ticker: slot.candidate.ticker.clone(),
            name: slot.candidate.name.clone(),
            allocation,
            thesis: narrative::thesis(&slot.candidate, &slot.scores),
        })
        .collect();

    let top_picks: Vec<TopPick> = picks
        .iter()
        .map(|pick| TopPick {
            company: pick.candidate.clone(),
            scores: pick.scores,
            rationale: narrative::rationale(&pick.scores),
        })
        .collect();

    let watchlist_end = (selector::TOP_PICKS + selector::WATCHLIST_BAND).min(ranked.len());
    let watchlist: Vec<WatchlistEntry> = ranked
        .get(selector::TOP_PICKS..watchlist_end)
        .unwrap_or(&[])
        .iter()
        .map(|entry| WatchlistEntry {
            ticker: entry.candidate.ticker.clone(),
            narrative: narrative::watchlist_narrative(&entry.candidate, &entry.scores),
        })
        .collect();

    tracing::debug!(
        universe_len = universe.len(),
        ranked_len = ranked.len(),
        top_picks = top_picks.len(),
        "agent run complete"
    );

    Ok(AgentResponse {
        generated_at,
        macro_narrative: narrative::macro_narrative(input),
        strategy_summary: narrative::strategy_summary(input, picks),
        portfolio_mix,
        risk_dashboard: narrative::risk_dashboard(input, picks),
        top_picks,
        watchlist,
    })
}

/// The seven sub-scores plus the weighted total for one candidate.
pub fn score_candidate(candidate: &Candidate, input: &AgentInput) -> FactorScores {
    let mut scores = FactorScores {
        fundamentals: scorers::fundamentals(candidate),
        growth: scorers::growth(candidate, input.horizon_years),
        innovation: scorers::innovation(candidate),
        catalysts: scorers::catalysts(candidate, input.catalyst_bias),
        risk_adjusted: scorers::risk_adjusted(candidate, input.risk_tolerance),
        valuation: scorers::valuation(candidate),
        megatrend_fit: scorers::megatrend_fit(candidate, &input.focus_megatrends),
        total_score: 0.0,
    };
    let (total, _) = weights::aggregate(&scores, input);
    scores.total_score = total;
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::candidate::Sector;
    use crate::domain::input::RiskTolerance;
    use chrono::TimeZone;
    use std::collections::BTreeSet;

    fn universe() -> Universe {
        Universe::indian_listed().unwrap()
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 30, 9, 30, 0).unwrap()
    }

    #[test]
    fn identical_input_yields_byte_identical_output() {
        let universe = universe();
        let input = AgentInput::default_scenario();
        let a = run_agent_at(&universe, &input, fixed_now()).unwrap();
        let b = run_agent_at(&universe, &input, fixed_now()).unwrap();
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn default_scenario_produces_a_full_response() {
        let universe = universe();
        let input = AgentInput::default_scenario();
        let response = run_agent_at(&universe, &input, fixed_now()).unwrap();

        assert!(!response.portfolio_mix.is_empty());
        let sum: f64 = response.portfolio_mix.iter().map(|s| s.allocation).sum();
        assert!((sum - 100.0).abs() < 0.01, "allocations summed to {sum}");

        assert_eq!(response.top_picks.len(), selector::TOP_PICKS);
        for pair in response.top_picks.windows(2) {
            assert!(pair[0].scores.total_score >= pair[1].scores.total_score);
        }

        assert!(!response.watchlist.is_empty());
        for entry in &response.watchlist {
            // Watchlist entries are narrative-only; no diagnostics leak through.
            assert!(
                !entry.narrative.contains("/100"),
                "watchlist narrative shows a score: {}",
                entry.narrative
            );
        }
        assert!(!response.macro_narrative.is_empty());
        for pick in &response.top_picks {
            assert!(!pick.rationale.is_empty());
        }
    }

    #[test]
    fn all_scores_stay_in_bounds_across_profiles() {
        let universe = universe();
        for tolerance in [
            RiskTolerance::Conservative,
            RiskTolerance::Balanced,
            RiskTolerance::Aggressive,
        ] {
            let mut input = AgentInput::default_scenario();
            input.risk_tolerance = tolerance;
            let response = run_agent_at(&universe, &input, fixed_now()).unwrap();
            for pick in &response.top_picks {
                let s = &pick.scores;
                for value in [
                    s.fundamentals,
                    s.growth,
                    s.innovation,
                    s.catalysts,
                    s.risk_adjusted,
                    s.valuation,
                    s.megatrend_fit,
                    s.total_score,
                ] {
                    assert!((0.0..=100.0).contains(&value));
                }
            }
        }
    }

    #[test]
    fn avoided_sectors_appear_nowhere_in_the_response() {
        let universe = universe();
        let mut input = AgentInput::default_scenario();
        input.avoid_sectors = BTreeSet::from([Sector::Chemicals, Sector::Digital]);
        let response = run_agent_at(&universe, &input, fixed_now()).unwrap();

        let excluded: Vec<&str> = universe
            .candidates()
            .iter()
            .filter(|c| input.avoid_sectors.contains(&c.sector))
            .map(|c| c.ticker.as_str())
            .collect();
        assert!(!excluded.is_empty());

        for pick in &response.top_picks {
            assert!(!excluded.contains(&pick.company.ticker.as_str()));
        }
        for slot in &response.portfolio_mix {
            assert!(!excluded.contains(&slot.ticker.as_str()));
        }
        for entry in &response.watchlist {
            assert!(!excluded.contains(&entry.ticker.as_str()));
        }
    }

    #[test]
    fn avoiding_every_sector_yields_empty_sequences_not_an_error() {
        let universe = universe();
        let mut input = AgentInput::default_scenario();
        input.avoid_sectors = Sector::ALL.into_iter().collect();
        let response = run_agent_at(&universe, &input, fixed_now()).unwrap();

        assert!(response.top_picks.is_empty());
        assert!(response.portfolio_mix.is_empty());
        assert!(response.watchlist.is_empty());
        assert!(response
            .strategy_summary
            .contains("No candidate clears the current constraints"));
    }

    #[test]
    fn invalid_input_fails_before_scoring() {
        let universe = universe();
        let mut input = AgentInput::default_scenario();
        input.horizon_years = 1;
        assert!(run_agent_at(&universe, &input, fixed_now()).is_err());
    }

    #[test]
    fn aggressive_tolerance_never_demotes_the_most_volatile_name() {
        let universe = universe();
        let most_volatile = universe
            .candidates()
            .iter()
            .max_by(|a, b| {
                a.attributes
                    .volatility_pct
                    .partial_cmp(&b.attributes.volatility_pct)
                    .unwrap()
            })
            .unwrap()
            .ticker
            .clone();

        let rank_of = |tolerance: RiskTolerance| -> usize {
            let mut input = AgentInput::default_scenario();
            input.risk_tolerance = tolerance;
            let scored: Vec<ScoredCandidate> = universe
                .candidates()
                .iter()
                .map(|c| ScoredCandidate {
                    candidate: c.clone(),
                    scores: score_candidate(c, &input),
                })
                .collect();
            selector::rank(scored, &input.avoid_sectors)
                .iter()
                .position(|s| s.candidate.ticker == most_volatile)
                .unwrap()
        };

        assert!(rank_of(RiskTolerance::Aggressive) <= rank_of(RiskTolerance::Conservative));
    }

    #[test]
    fn deeper_megatrend_overlap_never_hurts_rank() {
        // Two otherwise-identical candidates that differ only in overlap with
        // the focus set must rank overlap-first.
        let template = universe().candidates()[0].clone();
        let mut aligned = template.clone();
        aligned.ticker = "NSE:ZALIGN".to_string();
        aligned.megatrends = AgentInput::default_scenario().focus_megatrends;
        let mut unaligned = template.clone();
        unaligned.ticker = "NSE:ZNONE".to_string();
        unaligned.megatrends = BTreeSet::new();

        let small = Universe::new(vec![aligned, unaligned]).unwrap();
        let input = AgentInput::default_scenario();
        let response = run_agent_at(&small, &input, fixed_now()).unwrap();
        assert_eq!(response.top_picks[0].company.ticker, "NSE:ZALIGN");
        assert!(
            response.top_picks[0].scores.megatrend_fit
                > response.top_picks[1].scores.megatrend_fit
        );
    }

    #[test]
    fn single_candidate_universe_takes_the_full_allocation() {
        let one = Universe::new(vec![universe().candidates()[0].clone()]).unwrap();
        let input = AgentInput::default_scenario();
        let response = run_agent_at(&one, &input, fixed_now()).unwrap();
        assert_eq!(response.portfolio_mix.len(), 1);
        assert!((response.portfolio_mix[0].allocation - 100.0).abs() < 0.01);
        assert_eq!(response.top_picks.len(), 1);
        assert!(response.watchlist.is_empty());
    }
}
