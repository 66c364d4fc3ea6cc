use crate::domain::candidate::{Megatrend, Sector};
use anyhow::ensure;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const MIN_HORIZON_YEARS: u32 = 3;
pub const MAX_HORIZON_YEARS: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTolerance {
    Conservative,
    Balanced,
    Aggressive,
}

impl RiskTolerance {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTolerance::Conservative => "Conservative",
            RiskTolerance::Balanced => "Balanced",
            RiskTolerance::Aggressive => "Aggressive",
        }
    }
}

impl std::str::FromStr for RiskTolerance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            s if s.eq_ignore_ascii_case("Conservative") => Ok(RiskTolerance::Conservative),
            s if s.eq_ignore_ascii_case("Balanced") => Ok(RiskTolerance::Balanced),
            s if s.eq_ignore_ascii_case("Aggressive") => Ok(RiskTolerance::Aggressive),
            other => Err(format!("unknown risk tolerance: {other:?}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalystBias {
    Structural,
    Balanced,
    Cyclical,
}

impl CatalystBias {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalystBias::Structural => "Structural",
            CatalystBias::Balanced => "Balanced",
            CatalystBias::Cyclical => "Cyclical",
        }
    }
}

impl std::str::FromStr for CatalystBias {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            s if s.eq_ignore_ascii_case("Structural") => Ok(CatalystBias::Structural),
            s if s.eq_ignore_ascii_case("Balanced") => Ok(CatalystBias::Balanced),
            s if s.eq_ignore_ascii_case("Cyclical") => Ok(CatalystBias::Cyclical),
            other => Err(format!("unknown catalyst bias: {other:?}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicySupport {
    Weak,
    Neutral,
    Strong,
}

impl PolicySupport {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicySupport::Weak => "Weak",
            PolicySupport::Neutral => "Neutral",
            PolicySupport::Strong => "Strong",
        }
    }
}

impl std::str::FromStr for PolicySupport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            s if s.eq_ignore_ascii_case("Weak") => Ok(PolicySupport::Weak),
            s if s.eq_ignore_ascii_case("Neutral") => Ok(PolicySupport::Neutral),
            s if s.eq_ignore_ascii_case("Strong") => Ok(PolicySupport::Strong),
            other => Err(format!("unknown policy support: {other:?}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MacroSignals {
    /// Real GDP growth assumption, percent.
    pub gdp_growth: f64,
    /// CPI inflation assumption, percent.
    pub inflation: f64,
    /// Policy repo rate assumption, percent.
    pub interest_rate: f64,
    pub policy_support: PolicySupport,
}

/// The investor blueprint. One of these per engine invocation; the engine
/// validates numeric ranges up front and holds no state afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AgentInput {
    pub risk_tolerance: RiskTolerance,
    pub horizon_years: u32,
    /// INR in lakhs.
    pub deployable_capital: f64,
    #[serde(rename = "macro")]
    pub macro_signals: MacroSignals,
    pub focus_megatrends: BTreeSet<Megatrend>,
    pub avoid_sectors: BTreeSet<Sector>,
    pub catalyst_bias: CatalystBias,
}

impl AgentInput {
    /// The documented default scenario: the initial form state of the
    /// investor blueprint.
    pub fn default_scenario() -> Self {
        Self {
            risk_tolerance: RiskTolerance::Balanced,
            horizon_years: 7,
            deployable_capital: 25.0,
            macro_signals: MacroSignals {
                gdp_growth: 6.8,
                inflation: 5.1,
                interest_rate: 6.25,
                policy_support: PolicySupport::Strong,
            },
            focus_megatrends: BTreeSet::from([
                Megatrend::VehicleElectrification,
                Megatrend::SustainableChemistry,
            ]),
            avoid_sectors: BTreeSet::new(),
            catalyst_bias: CatalystBias::Balanced,
        }
    }

    /// Rejects out-of-domain numerics. Enum fields are closed sets at the
    /// type level and need no runtime check.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            (MIN_HORIZON_YEARS..=MAX_HORIZON_YEARS).contains(&self.horizon_years),
            "horizon_years must be {MIN_HORIZON_YEARS}..={MAX_HORIZON_YEARS} (got {})",
            self.horizon_years
        );
        ensure!(
            self.deployable_capital.is_finite() && self.deployable_capital > 0.0,
            "deployable_capital must be positive (got {})",
            self.deployable_capital
        );
        ensure!(
            self.macro_signals.gdp_growth.is_finite(),
            "macro.gdp_growth must be finite"
        );
        ensure!(
            self.macro_signals.inflation.is_finite(),
            "macro.inflation must be finite"
        );
        ensure!(
            self.macro_signals.interest_rate.is_finite(),
            "macro.interest_rate must be finite"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scenario_is_valid() {
        assert!(AgentInput::default_scenario().validate().is_ok());
    }

    #[test]
    fn rejects_horizon_outside_bounds() {
        let mut input = AgentInput::default_scenario();
        input.horizon_years = 2;
        assert!(input.validate().is_err());
        input.horizon_years = 13;
        assert!(input.validate().is_err());
        input.horizon_years = 3;
        assert!(input.validate().is_ok());
        input.horizon_years = 12;
        assert!(input.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_capital() {
        let mut input = AgentInput::default_scenario();
        input.deployable_capital = 0.0;
        assert!(input.validate().is_err());
        input.deployable_capital = -25.0;
        assert!(input.validate().is_err());
        input.deployable_capital = f64::NAN;
        assert!(input.validate().is_err());
    }

    #[test]
    fn rejects_non_finite_macro_signals() {
        let mut input = AgentInput::default_scenario();
        input.macro_signals.inflation = f64::INFINITY;
        assert!(input.validate().is_err());
    }

    #[test]
    fn unknown_enum_values_fail_deserialization() {
        let json = r#"{
            "riskTolerance": "Reckless",
            "horizonYears": 7,
            "deployableCapital": 25,
            "macro": {"gdpGrowth": 6.8, "inflation": 5.1, "interestRate": 6.25, "policySupport": "Strong"},
            "focusMegatrends": [],
            "avoidSectors": [],
            "catalystBias": "Balanced"
        }"#;
        assert!(serde_json::from_str::<AgentInput>(json).is_err());
    }

    #[test]
    fn wire_shape_matches_the_form_contract() {
        let input = AgentInput::default_scenario();
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["riskTolerance"], "Balanced");
        assert_eq!(value["macro"]["policySupport"], "Strong");
        assert_eq!(
            value["focusMegatrends"][0],
            "Vehicle electrification"
        );
        let back: AgentInput = serde_json::from_value(value).unwrap();
        assert_eq!(back, input);
    }
}
