//! Dataset loading and the in-memory table.
//!
//! The table is built once at startup and shared read-only afterwards.

use std::io::Read;
use std::path::Path;

use thiserror::Error;

/// Column holding the team name.
pub const TEAM_COLUMN: &str = "Team";
/// Column holding the player name.
pub const PLAYER_COLUMN: &str = "Player";
/// Column holding the player price, in lakhs.
pub const PRICE_COLUMN: &str = "Price(LAKHS)";

#[derive(Debug, Error)]
pub enum DataLoadError {
    /// The file is missing or not parseable as delimited text.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The header row lacks a required column.
    #[error("missing required column: {0}")]
    MissingColumn(&'static str),

    /// A price cell did not parse as a number.
    #[error("row {row}: invalid price {value:?}")]
    InvalidPrice { row: usize, value: String },

    /// A team or player cell was empty.
    #[error("row {row}: empty {column} cell")]
    EmptyField { row: usize, column: &'static str },
}

/// One row of the dataset.
///
/// Every cell is kept verbatim, in column order, for display and export;
/// team, player and price are additionally extracted for filtering and
/// aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub team: String,
    pub player: String,
    pub price: f64,
    values: Vec<String>,
}

impl Record {
    /// Cell values in the table's column order.
    pub fn values(&self) -> &[String] {
        &self.values
    }
}

/// The full dataset: an ordered sequence of records plus the column list
/// captured from the header row. Immutable after load.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<String>,
    records: Vec<Record>,
}

impl Table {
    /// Loads the dataset from a delimited file at the given path.
    ///
    /// # Errors
    /// Returns a `DataLoadError` if the file is missing or malformed, a
    /// required column is absent, a price is not numeric, or a team or
    /// player cell is empty. Nothing is served from a partial load.
    pub fn load(path: &Path) -> Result<Self, DataLoadError> {
        Self::from_reader(csv::Reader::from_path(path)?)
    }

    pub(crate) fn from_reader<R: Read>(mut reader: csv::Reader<R>) -> Result<Self, DataLoadError> {
        let columns: Vec<String> = reader.headers()?.iter().map(str::to_owned).collect();
        let team_idx = column_index(&columns, TEAM_COLUMN)?;
        let player_idx = column_index(&columns, PLAYER_COLUMN)?;
        let price_idx = column_index(&columns, PRICE_COLUMN)?;

        let mut records = Vec::new();
        for (i, row) in reader.records().enumerate() {
            let row = row?;
            // 1-based, counting the header line.
            let row_number = i + 2;
            let values: Vec<String> = row.iter().map(str::to_owned).collect();

            let team = values[team_idx].clone();
            if team.trim().is_empty() {
                return Err(DataLoadError::EmptyField {
                    row: row_number,
                    column: TEAM_COLUMN,
                });
            }
            let player = values[player_idx].clone();
            if player.trim().is_empty() {
                return Err(DataLoadError::EmptyField {
                    row: row_number,
                    column: PLAYER_COLUMN,
                });
            }
            let price = values[price_idx].trim().parse::<f64>().map_err(|_| {
                DataLoadError::InvalidPrice {
                    row: row_number,
                    value: values[price_idx].clone(),
                }
            })?;

            records.push(Record {
                team,
                player,
                price,
                values,
            });
        }

        Ok(Table { columns, records })
    }

    /// The full column list, in original header order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct team names, ordered by first appearance.
    pub fn teams(&self) -> Vec<&str> {
        let mut teams: Vec<&str> = Vec::new();
        for record in &self.records {
            if !teams.contains(&record.team.as_str()) {
                teams.push(&record.team);
            }
        }
        teams
    }

    /// All records for the given team, in table order.
    pub fn rows_for_team(&self, team: &str) -> Vec<&Record> {
        self.records.iter().filter(|r| r.team == team).collect()
    }
}

fn column_index(columns: &[String], name: &'static str) -> Result<usize, DataLoadError> {
    columns
        .iter()
        .position(|c| c == name)
        .ok_or(DataLoadError::MissingColumn(name))
}
