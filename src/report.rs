//! Plain-text rendering of a dashboard report for the terminal.

use std::fmt;

use serde::Serialize;

use crate::models::{DashboardReport, MarketComparison};
use crate::utils::maths_utils::round_to;
use crate::utils::time_utils::format_date;

/// Everything one CLI invocation prints.
#[derive(Serialize, Debug, Clone)]
pub struct CliReport {
    pub dashboard: DashboardReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<MarketComparison>,
}

fn opt(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.2}", round_to(v, 2)))
}

impl CliReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for CliReport {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        let d = &self.dashboard;
        let s = &d.summary;
        writeln!(out, "== {} ({} days, trend {}) ==", d.name, d.total_days, d.trend)?;
        writeln!(out, "Total return      {:>10.2}%", s.total_return)?;
        writeln!(out, "Average return    {:>10.4}%", s.average_return)?;
        writeln!(out, "Average vol       {:>10}", opt(s.average_volatility))?;
        writeln!(out, "Max drawdown      {:>10.2}%", s.max_drawdown)?;
        writeln!(
            out,
            "Sharpe / Calmar   {:>10} / {} ({})",
            opt(s.sharpe_ratio),
            opt(s.calmar_ratio),
            s.ratio_policy
        )?;

        writeln!(out, "\n-- Last {} days --", d.rows.len())?;
        writeln!(
            out,
            "Stress now {:.1} ({:?}), avg {:.1}, peak {:.1}, {} high-stress days",
            d.stress.current, d.stress.current_level, d.stress.average, d.stress.peak,
            d.stress.high_stress_days
        )?;
        writeln!(
            out,
            "Drawdown now {:.2}%, avg {:.2}%, {} significant days",
            d.drawdowns.current, d.drawdowns.average, d.drawdowns.significant_days
        )?;
        writeln!(
            out,
            "Volatility now {}, avg {}, range {}, {} high-vol days",
            opt(d.volatility.current),
            opt(d.volatility.average),
            opt(d.volatility.range),
            d.volatility.high_volatility_days
        )?;
        writeln!(
            out,
            "Positive days {:.1}%, best {}, worst {}",
            d.returns.positive_days_pct,
            opt(d.returns.best_day),
            opt(d.returns.worst_day)
        )?;
        for share in &d.regimes.shares {
            writeln!(
                out,
                "  {:<9} {:>5} days {:>6.1}%",
                share.regime.to_string(),
                share.days,
                share.share_pct
            )?;
        }

        writeln!(out, "\nReturn distribution:")?;
        for bucket in &d.histogram {
            writeln!(out, "  {:>9} {:>6}", bucket.label, bucket.count)?;
        }

        if let Some(row) = d.rows.last() {
            let date = row.date.map_or_else(|| format!("#{}", row.index), format_date);
            writeln!(
                out,
                "\nLatest {}: price {:.2}, stress {:.1}, regime {}",
                date, row.price, row.stress, row.regime
            )?;
        }

        if let Some(c) = &self.comparison {
            writeln!(out, "\n== {} vs {} ==", c.left_name, c.right_name)?;
            writeln!(
                out,
                "Price correlation {:.3} ({:?}), return correlation {}",
                c.price_correlation,
                c.price_strength,
                opt(c.return_correlation)
            )?;
            writeln!(
                out,
                "Total return {:.2}% vs {:.2}%",
                c.left.total_return, c.right.total_return
            )?;
        }
        Ok(())
    }
}
