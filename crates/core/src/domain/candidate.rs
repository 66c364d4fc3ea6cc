use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeSet;

/// Closed set of sectors the universe is tagged with. Unknown sector strings
/// fail deserialization rather than being coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sector {
    Technology,
    Manufacturing,
    Chemicals,
    Consumer,
    #[serde(rename = "Capital Goods")]
    CapitalGoods,
    Digital,
}

impl Sector {
    pub const ALL: [Sector; 6] = [
        Sector::Technology,
        Sector::Manufacturing,
        Sector::Chemicals,
        Sector::Consumer,
        Sector::CapitalGoods,
        Sector::Digital,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sector::Technology => "Technology",
            Sector::Manufacturing => "Manufacturing",
            Sector::Chemicals => "Chemicals",
            Sector::Consumer => "Consumer",
            Sector::CapitalGoods => "Capital Goods",
            Sector::Digital => "Digital",
        }
    }

    /// Sector-normalized EV/EBITDA benchmark against which a candidate's own
    /// multiple is judged by the valuation scorer.
    pub fn benchmark_multiple(&self) -> f64 {
        match self {
            Sector::Technology => 16.0,
            Sector::Manufacturing => 11.0,
            Sector::Chemicals => 12.0,
            Sector::Consumer => 18.0,
            Sector::CapitalGoods => 14.0,
            Sector::Digital => 20.0,
        }
    }
}

impl std::str::FromStr for Sector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sector::ALL
            .iter()
            .find(|sector| sector.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| format!("unknown sector: {s:?}"))
    }
}

/// Long-horizon structural growth themes. Labels match the investor-facing
/// form controls verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Megatrend {
    #[serde(rename = "Vehicle electrification")]
    VehicleElectrification,
    #[serde(rename = "Software-defined mobility")]
    SoftwareDefinedMobility,
    #[serde(rename = "Sustainable chemistry")]
    SustainableChemistry,
    #[serde(rename = "Digital infrastructure")]
    DigitalInfrastructure,
    #[serde(rename = "Green hydrogen")]
    GreenHydrogen,
    #[serde(rename = "Make in India")]
    MakeInIndia,
    #[serde(rename = "Creator economy")]
    CreatorEconomy,
    #[serde(rename = "Healthcare digitisation")]
    HealthcareDigitisation,
}

impl Megatrend {
    pub const ALL: [Megatrend; 8] = [
        Megatrend::VehicleElectrification,
        Megatrend::SoftwareDefinedMobility,
        Megatrend::SustainableChemistry,
        Megatrend::DigitalInfrastructure,
        Megatrend::GreenHydrogen,
        Megatrend::MakeInIndia,
        Megatrend::CreatorEconomy,
        Megatrend::HealthcareDigitisation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Megatrend::VehicleElectrification => "Vehicle electrification",
            Megatrend::SoftwareDefinedMobility => "Software-defined mobility",
            Megatrend::SustainableChemistry => "Sustainable chemistry",
            Megatrend::DigitalInfrastructure => "Digital infrastructure",
            Megatrend::GreenHydrogen => "Green hydrogen",
            Megatrend::MakeInIndia => "Make in India",
            Megatrend::CreatorEconomy => "Creator economy",
            Megatrend::HealthcareDigitisation => "Healthcare digitisation",
        }
    }
}

impl std::str::FromStr for Megatrend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Megatrend::ALL
            .iter()
            .find(|trend| trend.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| format!("unknown megatrend: {s:?}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalystKind {
    /// Multi-year re-rating driver (capacity, platform shifts, policy tailwind).
    Structural,
    /// Near-term re-rating driver (order wins, margin inflection, results).
    Cyclical,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalyst {
    pub note: String,
    pub kind: CatalystKind,
}

impl Catalyst {
    pub fn structural(note: &str) -> Self {
        Self {
            note: note.to_string(),
            kind: CatalystKind::Structural,
        }
    }

    pub fn cyclical(note: &str) -> Self {
        Self {
            note: note.to_string(),
            kind: CatalystKind::Cyclical,
        }
    }
}

/// Raw scoring inputs for one company. Fixed for the process lifetime; every
/// factor scorer reads from here and nowhere else.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateAttributes {
    /// Trailing 3y revenue CAGR, percent.
    pub revenue_cagr_pct: f64,
    /// Years of structural demand runway behind the core franchise.
    pub structural_runway_years: f64,
    /// Operating margin trend over the trailing year, basis points.
    pub margin_trend_bps: f64,
    /// Return on capital employed, percent.
    pub roce_pct: f64,
    /// Net debt / EBITDA. Negative means net cash.
    pub net_debt_to_ebitda: f64,
    /// Annualized share-price volatility, percent.
    pub volatility_pct: f64,
    /// R&D spend as a share of revenue, percent.
    pub rnd_intensity_pct: f64,
    /// Distinct new platforms/products commercialized in the last 2 years.
    pub new_platform_count: u32,
    /// EV/EBITDA on trailing earnings.
    pub ev_to_ebitda: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub ticker: String,
    pub name: String,
    pub sector: Sector,
    pub description: String,
    pub megatrends: BTreeSet<Megatrend>,
    pub catalysts: Vec<Catalyst>,
    pub attributes: CandidateAttributes,
}

impl Candidate {
    /// Plain note lines, the shape the dashboard renders under
    /// "Catalysts watched".
    pub fn catalyst_notes(&self) -> Vec<&str> {
        self.catalysts.iter().map(|c| c.note.as_str()).collect()
    }
}

// Hand-rolled so the wire shape carries both the structured `catalysts`
// (the bias scorer reads `kind`) and the flat `catalystNotes` list the
// dashboard consumes. Deserialization ignores the derived field.
impl Serialize for Candidate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Candidate", 8)?;
        state.serialize_field("ticker", &self.ticker)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("sector", &self.sector)?;
        state.serialize_field("description", &self.description)?;
        state.serialize_field("megatrends", &self.megatrends)?;
        state.serialize_field("catalysts", &self.catalysts)?;
        state.serialize_field("catalystNotes", &self.catalyst_notes())?;
        state.serialize_field("attributes", &self.attributes)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sector_labels_round_trip_through_serde() {
        for sector in Sector::ALL {
            let json = serde_json::to_string(&sector).unwrap();
            assert_eq!(json, format!("\"{}\"", sector.as_str()));
            let back: Sector = serde_json::from_str(&json).unwrap();
            assert_eq!(back, sector);
        }
    }

    #[test]
    fn megatrend_labels_round_trip_through_serde() {
        for trend in Megatrend::ALL {
            let json = serde_json::to_string(&trend).unwrap();
            assert_eq!(json, format!("\"{}\"", trend.as_str()));
            let back: Megatrend = serde_json::from_str(&json).unwrap();
            assert_eq!(back, trend);
        }
    }

    #[test]
    fn unknown_tags_are_rejected() {
        assert!(serde_json::from_str::<Sector>("\"Real Estate\"").is_err());
        assert!(serde_json::from_str::<Megatrend>("\"Space mining\"").is_err());
        assert!("Real Estate".parse::<Sector>().is_err());
        assert!("Capital Goods".parse::<Sector>().is_ok());
    }

    #[test]
    fn candidate_wire_shape_carries_flat_catalyst_notes() {
        let candidate = Candidate {
            ticker: "NSE:STUB".to_string(),
            name: "Stub Industries".to_string(),
            sector: Sector::Manufacturing,
            description: "stub".to_string(),
            megatrends: BTreeSet::new(),
            catalysts: vec![
                Catalyst::structural("capacity doubling"),
                Catalyst::cyclical("order-book inflection"),
            ],
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
        };

        let value = serde_json::to_value(&candidate).unwrap();
        assert_eq!(value["catalystNotes"][0], "capacity doubling");
        assert_eq!(value["catalystNotes"][1], "order-book inflection");
        assert_eq!(value["catalysts"][0]["kind"], "Structural");

        // Round-trip: the derived field is ignored on the way back in.
        let back: Candidate = serde_json::from_value(value).unwrap();
        assert_eq!(back.catalysts.len(), 2);
        assert_eq!(back.ticker, candidate.ticker);
    }

    #[test]
    fn every_sector_has_a_positive_benchmark() {
        for sector in Sector::ALL {
            assert!(sector.benchmark_multiple() > 0.0);
        }
    }
}
