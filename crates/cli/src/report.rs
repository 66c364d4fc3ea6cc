use multibagger_core::domain::response::AgentResponse;
use multibagger_core::time::ist;
use std::fmt::Write;

/// Plain-text rendering of one agent run, section for section what the
/// blueprint dashboard shows.
pub fn render(response: &AgentResponse) -> anyhow::Result<String> {
    let mut out = String::new();

    writeln!(
        out,
        "AGENT MULTIBAGGER — generated {}",
        ist::display_time(response.generated_at)?
    )?;
    writeln!(out)?;

    writeln!(out, "MACRO NARRATIVE")?;
    writeln!(out, "  {}", response.macro_narrative)?;
    writeln!(out, "  {}", response.strategy_summary)?;
    writeln!(out)?;

    writeln!(out, "PORTFOLIO BLUEPRINT")?;
    if response.portfolio_mix.is_empty() {
        writeln!(
            out,
            "  No qualifying ideas under the current constraints."
        )?;
    }
    for slot in &response.portfolio_mix {
        writeln!(
            out,
            "  {:>5.1}%  {}  {}",
            slot.allocation, slot.ticker, slot.name
        )?;
        writeln!(out, "          {}", slot.thesis)?;
    }
    writeln!(out)?;

    writeln!(out, "RISK DASHBOARD")?;
    writeln!(out, "  Systemic: {}", response.risk_dashboard.systemic)?;
    writeln!(
        out,
        "  Company-specific: {}",
        response.risk_dashboard.company_specific
    )?;
    for item in &response.risk_dashboard.mitigation_playbook {
        writeln!(out, "  - {item}")?;
    }
    writeln!(out)?;

    writeln!(out, "TOP IDEAS AND DIAGNOSTICS")?;
    for pick in &response.top_picks {
        let s = &pick.scores;
        writeln!(
            out,
            "  {}  {}  score {:.1}",
            pick.company.ticker, pick.company.name, s.total_score
        )?;
        writeln!(
            out,
            "      F {:.0}  G {:.0}  I {:.0}  C {:.0}  R {:.0}  V {:.0}  M {:.0}",
            s.fundamentals,
            s.growth,
            s.innovation,
            s.catalysts,
            s.risk_adjusted,
            s.valuation,
            s.megatrend_fit
        )?;
        for line in &pick.rationale {
            writeln!(out, "      * {line}")?;
        }
        for catalyst in &pick.company.catalysts {
            writeln!(out, "      watch: {}", catalyst.note)?;
        }
    }
    writeln!(out)?;

    writeln!(out, "RADAR WATCHLIST")?;
    if response.watchlist.is_empty() {
        writeln!(out, "  (empty)")?;
    }
    for entry in &response.watchlist {
        writeln!(out, "  {}", entry.narrative)?;
    }

    Ok(out)
}
