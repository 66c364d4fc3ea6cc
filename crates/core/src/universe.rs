use crate::domain::candidate::{Candidate, CandidateAttributes, Catalyst, Megatrend, Sector};
use anyhow::ensure;
use std::collections::BTreeSet;

/// Immutable, ticker-ordered candidate table. Built once at startup and
/// shared read-only by every engine invocation; substitute universes are the
/// intended seam for boundary tests.
#[derive(Debug, Clone)]
pub struct Universe {
    candidates: Vec<Candidate>,
}

impl Universe {
    pub fn new(mut candidates: Vec<Candidate>) -> anyhow::Result<Self> {
        candidates.sort_by(|a, b| a.ticker.cmp(&b.ticker));

        let mut seen = BTreeSet::new();
        for candidate in &candidates {
            ensure!(
                !candidate.ticker.trim().is_empty(),
                "candidate ticker must be non-empty"
            );
            ensure!(
                seen.insert(candidate.ticker.clone()),
                "duplicate ticker in universe: {}",
                candidate.ticker
            );
        }

        Ok(Self { candidates })
    }

    /// Deterministic ticker-ascending listing.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// The fixed production catalog: twelve NSE-listed names spanning all six
    /// sectors and all eight megatrends.
    pub fn indian_listed() -> anyhow::Result<Self> {
        Self::new(vec![
            Candidate {
                ticker: "NSE:AMPVOLT".to_string(),
                name: "Ampvolt Energy Systems".to_string(),
                sector: Sector::Manufacturing,
                description: "Battery packs and battery-management systems for electric two- and three-wheelers."
                    .to_string(),
                megatrends: BTreeSet::from([
                    Megatrend::VehicleElectrification,
                    Megatrend::MakeInIndia,
                ]),
                catalysts: vec![
                    Catalyst::structural("PLI-backed cell-to-pack capacity tripling by FY28"),
                    Catalyst::cyclical("Two OEM platform wins ramping through the festive season"),
                ],
                attributes: CandidateAttributes {
                    revenue_cagr_pct: 34.0,
                    structural_runway_years: 10.0,
                    margin_trend_bps: 180.0,
                    roce_pct: 18.0,
                    net_debt_to_ebitda: 1.2,
                    volatility_pct: 42.0,
                    rnd_intensity_pct: 5.5,
                    new_platform_count: 3,
                    ev_to_ebitda: 19.0,
                },
            },
            Candidate {
                ticker: "NSE:CYGNET".to_string(),
                name: "Cygnet Mobility Software".to_string(),
                sector: Sector::Technology,
                description: "Software-defined vehicle middleware and over-the-air platforms licensed to global OEMs."
                    .to_string(),
                megatrends: BTreeSet::from([
                    Megatrend::SoftwareDefinedMobility,
                    Megatrend::VehicleElectrification,
                ]),
                catalysts: vec![
                    Catalyst::structural("Design wins on two global software-defined vehicle programs"),
                    Catalyst::cyclical("License-to-royalty mix shift lifting margins"),
                ],
                attributes: CandidateAttributes {
                    revenue_cagr_pct: 28.0,
                    structural_runway_years: 11.0,
                    margin_trend_bps: 220.0,
                    roce_pct: 24.0,
                    net_debt_to_ebitda: -0.5,
                    volatility_pct: 38.0,
                    rnd_intensity_pct: 7.2,
                    new_platform_count: 2,
                    ev_to_ebitda: 24.0,
                },
            },
            Candidate {
                ticker: "NSE:GREENKEM".to_string(),
                name: "Greenkem Industries".to_string(),
                sector: Sector::Chemicals,
                description: "Bio-based surfactants and green solvents replacing crude-derived chemistry."
                    .to_string(),
                megatrends: BTreeSet::from([
                    Megatrend::SustainableChemistry,
                    Megatrend::GreenHydrogen,
                ]),
                catalysts: vec![
                    Catalyst::structural("Brownfield bio-refinery doubling capacity"),
                    Catalyst::cyclical("European customer restocking cycle underway"),
                ],
                attributes: CandidateAttributes {
                    revenue_cagr_pct: 22.0,
                    structural_runway_years: 9.0,
                    margin_trend_bps: 120.0,
                    roce_pct: 19.0,
                    net_debt_to_ebitda: 0.8,
                    volatility_pct: 33.0,
                    rnd_intensity_pct: 4.0,
                    new_platform_count: 2,
                    ev_to_ebitda: 15.0,
                },
            },
            Candidate {
                ticker: "NSE:HYDRAXIS".to_string(),
                name: "Hydraxis Electrolyzers".to_string(),
                sector: Sector::CapitalGoods,
                description: "Alkaline electrolyser stacks for utility-scale green hydrogen projects."
                    .to_string(),
                megatrends: BTreeSet::from([
                    Megatrend::GreenHydrogen,
                    Megatrend::MakeInIndia,
                ]),
                catalysts: vec![
                    Catalyst::structural("SIGHT-linked hydrogen order pipeline building"),
                    Catalyst::structural("First gigafactory line commissioning in FY27"),
                ],
                attributes: CandidateAttributes {
                    revenue_cagr_pct: 45.0,
                    structural_runway_years: 12.0,
                    margin_trend_bps: -80.0,
                    roce_pct: 9.0,
                    net_debt_to_ebitda: 2.2,
                    volatility_pct: 52.0,
                    rnd_intensity_pct: 6.5,
                    new_platform_count: 1,
                    ev_to_ebitda: 30.0,
                },
            },
            Candidate {
                ticker: "NSE:MEDLOOP".to_string(),
                name: "Medloop Health Platforms".to_string(),
                sector: Sector::Digital,
                description: "Interoperable health records and claims rails for hospitals and insurers."
                    .to_string(),
                megatrends: BTreeSet::from([
                    Megatrend::HealthcareDigitisation,
                    Megatrend::DigitalInfrastructure,
                ]),
                catalysts: vec![
                    Catalyst::structural("ABDM integrations reaching payer scale"),
                    Catalyst::cyclical("Claims-automation upsell landing in top accounts"),
                ],
                attributes: CandidateAttributes {
                    revenue_cagr_pct: 30.0,
                    structural_runway_years: 9.0,
                    margin_trend_bps: 150.0,
                    roce_pct: 14.0,
                    net_debt_to_ebitda: 0.0,
                    volatility_pct: 40.0,
                    rnd_intensity_pct: 6.8,
                    new_platform_count: 2,
                    ev_to_ebitda: 26.0,
                },
            },
            Candidate {
                ticker: "NSE:MYRAFIT".to_string(),
                name: "Myrafit Consumer Labs".to_string(),
                sector: Sector::Consumer,
                description: "Science-led wellness brands sold direct-to-consumer and via quick commerce."
                    .to_string(),
                megatrends: BTreeSet::from([Megatrend::CreatorEconomy]),
                catalysts: vec![
                    Catalyst::cyclical("Festive-quarter demand with ad-cost deflation"),
                    Catalyst::structural("Quick-commerce distribution flywheel compounding"),
                ],
                attributes: CandidateAttributes {
                    revenue_cagr_pct: 26.0,
                    structural_runway_years: 6.0,
                    margin_trend_bps: 90.0,
                    roce_pct: 21.0,
                    net_debt_to_ebitda: 0.2,
                    volatility_pct: 36.0,
                    rnd_intensity_pct: 2.0,
                    new_platform_count: 1,
                    ev_to_ebitda: 22.0,
                },
            },
            Candidate {
                ticker: "NSE:NILACHEM".to_string(),
                name: "Nilachem Advanced Materials".to_string(),
                sector: Sector::Chemicals,
                description: "Fluoropolymers and electrolyte salts for EV batteries and solar modules."
                    .to_string(),
                megatrends: BTreeSet::from([
                    Megatrend::SustainableChemistry,
                    Megatrend::VehicleElectrification,
                ]),
                catalysts: vec![
                    Catalyst::structural("Electrolyte-salt import substitution ramping"),
                    Catalyst::cyclical("Agrochemical destocking tailing off"),
                ],
                attributes: CandidateAttributes {
                    revenue_cagr_pct: 24.0,
                    structural_runway_years: 10.0,
                    margin_trend_bps: 140.0,
                    roce_pct: 22.0,
                    net_debt_to_ebitda: 0.6,
                    volatility_pct: 35.0,
                    rnd_intensity_pct: 4.8,
                    new_platform_count: 2,
                    ev_to_ebitda: 16.0,
                },
            },
            Candidate {
                ticker: "NSE:PIXELAY".to_string(),
                name: "Pixelay Networks".to_string(),
                sector: Sector::Digital,
                description: "Creator monetisation and short-video commerce infrastructure."
                    .to_string(),
                megatrends: BTreeSet::from([
                    Megatrend::CreatorEconomy,
                    Megatrend::DigitalInfrastructure,
                ]),
                catalysts: vec![
                    Catalyst::cyclical("Ad-market recovery lifting take rates"),
                    Catalyst::structural("Vernacular creator payouts scaling"),
                ],
                attributes: CandidateAttributes {
                    revenue_cagr_pct: 48.0,
                    structural_runway_years: 7.0,
                    margin_trend_bps: -120.0,
                    roce_pct: 6.0,
                    net_debt_to_ebitda: 0.4,
                    volatility_pct: 58.0,
                    rnd_intensity_pct: 7.5,
                    new_platform_count: 3,
                    ev_to_ebitda: 38.0,
                },
            },
            Candidate {
                ticker: "NSE:SAVORIA".to_string(),
                name: "Savoria Foods".to_string(),
                sector: Sector::Consumer,
                description: "Premium packaged foods with regional flavour moats.".to_string(),
                megatrends: BTreeSet::from([Megatrend::MakeInIndia]),
                catalysts: vec![
                    Catalyst::cyclical("Rural demand recovery broadening"),
                    Catalyst::cyclical("Palm-oil cost easing into gross margins"),
                ],
                attributes: CandidateAttributes {
                    revenue_cagr_pct: 14.0,
                    structural_runway_years: 5.0,
                    margin_trend_bps: 60.0,
                    roce_pct: 26.0,
                    net_debt_to_ebitda: 0.1,
                    volatility_pct: 22.0,
                    rnd_intensity_pct: 0.8,
                    new_platform_count: 1,
                    ev_to_ebitda: 20.0,
                },
            },
            Candidate {
                ticker: "NSE:SURYAFAB".to_string(),
                name: "Suryafab Precision".to_string(),
                sector: Sector::Manufacturing,
                description: "Precision castings and machined assemblies for global EV and aerospace supply chains."
                    .to_string(),
                megatrends: BTreeSet::from([
                    Megatrend::MakeInIndia,
                    Megatrend::VehicleElectrification,
                ]),
                catalysts: vec![
                    Catalyst::structural("China-plus-one wallet-share gains with marquee OEMs"),
                    Catalyst::cyclical("Aerospace ramp at a top customer"),
                ],
                attributes: CandidateAttributes {
                    revenue_cagr_pct: 20.0,
                    structural_runway_years: 8.0,
                    margin_trend_bps: 110.0,
                    roce_pct: 17.0,
                    net_debt_to_ebitda: 0.9,
                    volatility_pct: 30.0,
                    rnd_intensity_pct: 1.5,
                    new_platform_count: 1,
                    ev_to_ebitda: 13.0,
                },
            },
            Candidate {
                ticker: "NSE:TURBOMEK".to_string(),
                name: "Turbomek Grid Solutions".to_string(),
                sector: Sector::CapitalGoods,
                description: "Transformers and switchgear for transmission and data-centre buildouts."
                    .to_string(),
                megatrends: BTreeSet::from([Megatrend::DigitalInfrastructure]),
                catalysts: vec![
                    Catalyst::structural("Multi-year transmission capex upcycle"),
                    Catalyst::cyclical("Export order book at a record high"),
                ],
                attributes: CandidateAttributes {
                    revenue_cagr_pct: 25.0,
                    structural_runway_years: 9.0,
                    margin_trend_bps: 200.0,
                    roce_pct: 23.0,
                    net_debt_to_ebitda: 0.3,
                    volatility_pct: 32.0,
                    rnd_intensity_pct: 1.8,
                    new_platform_count: 1,
                    ev_to_ebitda: 17.0,
                },
            },
            Candidate {
                ticker: "NSE:VERTEXA".to_string(),
                name: "Vertexa Diagnostics AI".to_string(),
                sector: Sector::Technology,
                description: "Imaging AI and remote diagnostics for hospital networks.".to_string(),
                megatrends: BTreeSet::from([Megatrend::HealthcareDigitisation]),
                catalysts: vec![
                    Catalyst::structural("Regulatory clearances opening insurer channels"),
                    Catalyst::cyclical("Hospital-chain rollouts in progress"),
                ],
                attributes: CandidateAttributes {
                    revenue_cagr_pct: 36.0,
                    structural_runway_years: 9.0,
                    margin_trend_bps: 100.0,
                    roce_pct: 12.0,
                    net_debt_to_ebitda: -0.2,
                    volatility_pct: 46.0,
                    rnd_intensity_pct: 8.0,
                    new_platform_count: 3,
                    ev_to_ebitda: 28.0,
                },
            },
        ])
    }
}
