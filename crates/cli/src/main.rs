use anyhow::Context;
use clap::Parser;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use multibagger_core::domain::candidate::{Megatrend, Sector};
use multibagger_core::domain::input::{
    AgentInput, CatalystBias, MacroSignals, PolicySupport, RiskTolerance,
};
use multibagger_core::engine::run_agent;
use multibagger_core::universe::Universe;

mod report;

#[derive(Debug, Parser)]
#[command(name = "multibagger_cli")]
struct Args {
    /// Load the full agent input from a JSON file; overrides every other flag.
    #[arg(long)]
    input: Option<PathBuf>,

    #[arg(long, default_value = "Balanced")]
    risk: RiskTolerance,

    /// Investment horizon in years (3..=12).
    #[arg(long, default_value_t = 7)]
    horizon: u32,

    /// Deployable capital, INR in lakhs.
    #[arg(long, default_value_t = 25.0)]
    capital: f64,

    /// GDP growth assumption, percent.
    #[arg(long, default_value_t = 6.8)]
    gdp_growth: f64,

    /// Inflation assumption, percent.
    #[arg(long, default_value_t = 5.1)]
    inflation: f64,

    /// Repo rate assumption, percent.
    #[arg(long, default_value_t = 6.25)]
    interest_rate: f64,

    #[arg(long, default_value = "Strong")]
    policy: PolicySupport,

    /// Megatrend to focus on; repeatable. Defaults to the flagship pair
    /// (Vehicle electrification + Sustainable chemistry) when omitted.
    #[arg(long = "focus")]
    focus: Vec<Megatrend>,

    /// Sector to exclude from the shortlist; repeatable.
    #[arg(long = "avoid")]
    avoid: Vec<Sector>,

    #[arg(long, default_value = "Balanced")]
    bias: CatalystBias,

    /// Emit the raw response as pretty-printed JSON instead of the report.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = multibagger_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();
    let input = resolve_input(&args)?;

    let universe = Universe::indian_listed()?;
    let response = match run_agent(&universe, &input) {
        Ok(response) => response,
        Err(err) => {
            sentry_anyhow::capture_anyhow(&err);
            tracing::error!(error = %err, "agent run failed");
            return Err(err);
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", report::render(&response)?);
    }

    Ok(())
}

fn resolve_input(args: &Args) -> anyhow::Result<AgentInput> {
    if let Some(path) = &args.input {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading agent input from {}", path.display()))?;
        return serde_json::from_str(&raw)
            .with_context(|| format!("parsing agent input from {}", path.display()));
    }

    let focus: BTreeSet<Megatrend> = if args.focus.is_empty() {
        AgentInput::default_scenario().focus_megatrends
    } else {
        args.focus.iter().copied().collect()
    };

    Ok(AgentInput {
        risk_tolerance: args.risk,
        horizon_years: args.horizon,
        deployable_capital: args.capital,
        macro_signals: MacroSignals {
            gdp_growth: args.gdp_growth,
            inflation: args.inflation,
            interest_rate: args.interest_rate,
            policy_support: args.policy,
        },
        focus_megatrends: focus,
        avoid_sectors: args.avoid.iter().copied().collect(),
        catalyst_bias: args.bias,
    })
}

fn init_sentry(settings: &multibagger_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
