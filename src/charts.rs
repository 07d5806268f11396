//! Declarative chart descriptions.
//!
//! A `ChartSpec` says what to draw, not how; the page's renderer turns it
//! into an actual plot. Builders are deterministic transforms and never
//! fetch data themselves.

use serde::Serialize;

use crate::aggregate::{TeamPlayerCounts, TeamPriceTotals};
use crate::table::Record;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    Bar {
        title: String,
        x: Vec<String>,
        y: Vec<f64>,
    },
    Pie {
        title: String,
        labels: Vec<String>,
        values: Vec<u64>,
    },
    Line {
        title: String,
        x: Vec<String>,
        y: Vec<f64>,
        markers: bool,
    },
}

/// Bar chart of total price per team.
pub fn team_totals_chart(totals: &TeamPriceTotals) -> ChartSpec {
    let (x, y) = totals
        .iter()
        .map(|(team, total)| (team.to_owned(), total))
        .unzip();
    ChartSpec::Bar {
        title: "Total Price per Team".to_owned(),
        x,
        y,
    }
}

/// Pie chart of how players are distributed across teams.
pub fn team_distribution_chart(counts: &TeamPlayerCounts) -> ChartSpec {
    let (labels, values) = counts
        .iter()
        .map(|(team, count)| (team.to_owned(), count as u64))
        .unzip();
    ChartSpec::Pie {
        title: "Player Distribution Across Teams".to_owned(),
        labels,
        values,
    }
}

/// Line chart of price per player for one team's rows, in table order.
pub fn team_price_line(team: &str, rows: &[&Record]) -> ChartSpec {
    let (x, y) = rows
        .iter()
        .map(|record| (record.player.clone(), record.price))
        .unzip();
    ChartSpec::Line {
        title: format!("Price per Player in {team}"),
        x,
        y,
        markers: true,
    }
}
