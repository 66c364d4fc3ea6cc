use crate::domain::candidate::Candidate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The seven factor sub-scores plus their weighted total, all in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorScores {
    pub fundamentals: f64,
    pub growth: f64,
    pub innovation: f64,
    pub catalysts: f64,
    pub risk_adjusted: f64,
    pub valuation: f64,
    pub megatrend_fit: f64,
    pub total_score: f64,
}

/// The factor weights actually applied after macro modifiers, summing to 1.
/// Returned alongside the total so weight derivation is testable on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightVector {
    pub fundamentals: f64,
    pub growth: f64,
    pub innovation: f64,
    pub catalysts: f64,
    pub risk_adjusted: f64,
    pub valuation: f64,
    pub megatrend_fit: f64,
}

impl WeightVector {
    pub fn sum(&self) -> f64 {
        self.fundamentals
            + self.growth
            + self.innovation
            + self.catalysts
            + self.risk_adjusted
            + self.valuation
            + self.megatrend_fit
    }
}

/// A candidate with its computed scores. Ephemeral, rebuilt on every run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    pub scores: FactorScores,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSlot {
    pub ticker: String,
    pub name: String,
    /// Percent of deployable capital; slots sum to 100.0.
    pub allocation: f64,
    pub thesis: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskDashboard {
    pub systemic: String,
    pub company_specific: String,
    pub mitigation_playbook: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPick {
    pub company: Candidate,
    pub scores: FactorScores,
    pub rationale: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistEntry {
    pub ticker: String,
    pub narrative: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentResponse {
    /// Generation time. Display-only; the rest of the response is a pure
    /// function of the input.
    #[serde(rename = "timestamp")]
    pub generated_at: DateTime<Utc>,
    pub macro_narrative: String,
    pub strategy_summary: String,
    pub portfolio_mix: Vec<PortfolioSlot>,
    pub risk_dashboard: RiskDashboard,
    pub top_picks: Vec<TopPick>,
    pub watchlist: Vec<WatchlistEntry>,
}
