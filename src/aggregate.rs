//! Per-team aggregates derived from the table.
//!
//! Both aggregations are pure functions of the table, computed once at
//! startup. Ordering follows each team's first appearance in the data; no
//! numeric sort is applied.

use crate::table::Table;

/// Total price per team, in first-appearance order.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamPriceTotals(Vec<(String, f64)>);

impl TeamPriceTotals {
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(team, total)| (team.as_str(), *total))
    }

    pub fn get(&self, team: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|(t, _)| t == team)
            .map(|(_, total)| *total)
    }
}

/// Number of records per team, in first-appearance order.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamPlayerCounts(Vec<(String, usize)>);

impl TeamPlayerCounts {
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(team, count)| (team.as_str(), *count))
    }

    pub fn get(&self, team: &str) -> Option<usize> {
        self.0
            .iter()
            .find(|(t, _)| t == team)
            .map(|(_, count)| *count)
    }
}

/// Groups records by team and sums their prices.
pub fn aggregate_totals(table: &Table) -> TeamPriceTotals {
    let mut totals: Vec<(String, f64)> = Vec::new();
    for record in table.records() {
        match totals.iter_mut().find(|(team, _)| *team == record.team) {
            Some((_, total)) => *total += record.price,
            None => totals.push((record.team.clone(), record.price)),
        }
    }
    TeamPriceTotals(totals)
}

/// Groups records by team and counts them.
pub fn aggregate_counts(table: &Table) -> TeamPlayerCounts {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for record in table.records() {
        match counts.iter_mut().find(|(team, _)| *team == record.team) {
            Some((_, count)) => *count += 1,
            None => counts.push((record.team.clone(), 1)),
        }
    }
    TeamPlayerCounts(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        let data = "\
Team,Player,Price(LAKHS)
A,p1,10
A,p2,20
B,p3,5
";
        Table::from_reader(csv::Reader::from_reader(data.as_bytes())).unwrap()
    }

    #[test]
    fn totals_sum_prices_per_team() {
        let totals = aggregate_totals(&sample_table());
        assert_eq!(totals.get("A"), Some(30.0));
        assert_eq!(totals.get("B"), Some(5.0));
        assert_eq!(totals.get("C"), None);
    }

    #[test]
    fn counts_count_records_per_team() {
        let counts = aggregate_counts(&sample_table());
        assert_eq!(counts.get("A"), Some(2));
        assert_eq!(counts.get("B"), Some(1));
        assert_eq!(counts.get("C"), None);
    }

    #[test]
    // Grand totals are conserved: nothing is dropped or double-counted.
    fn aggregates_conserve_the_table() {
        let table = sample_table();
        let price_sum: f64 = aggregate_totals(&table).iter().map(|(_, v)| v).sum();
        let record_sum: f64 = table.records().iter().map(|r| r.price).sum();
        assert_eq!(price_sum, record_sum);

        let count_sum: usize = aggregate_counts(&table).iter().map(|(_, c)| c).sum();
        assert_eq!(count_sum, table.len());
    }

    #[test]
    fn aggregates_keep_first_appearance_order() {
        let data = "\
Team,Player,Price(LAKHS)
B,p1,1
A,p2,2
B,p3,3
";
        let table = Table::from_reader(csv::Reader::from_reader(data.as_bytes())).unwrap();
        let totals = aggregate_totals(&table);
        let order: Vec<&str> = totals.iter().map(|(t, _)| t).collect();
        assert_eq!(order, ["B", "A"]);
        let counts = aggregate_counts(&table);
        let order: Vec<&str> = counts.iter().map(|(t, _)| t).collect();
        assert_eq!(order, ["B", "A"]);
    }
}
