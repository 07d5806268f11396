//! Selection handling: the team detail view and the CSV export.
//!
//! Both operations are pure functions of the table and the current
//! selection, recomputed on every request. A missing selection and a team
//! with no rows are defined cases, not errors.

use serde::Serialize;

use crate::charts::{self, ChartSpec};
use crate::table::Table;

/// Shown in the detail region while no team is selected.
pub const PROMPT_MESSAGE: &str = "Please select a team to view details and the line plot.";

/// The detail table: full column set in original order, one body row per
/// filtered record, cell values verbatim. Zero body rows when the selected
/// team has no records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// What the detail region renders for the current selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SelectionView {
    /// No team selected: a prompt, and no chart at all.
    Prompt { message: &'static str },
    /// A team is selected: the full-column table plus its price line chart.
    Detail { table: DetailTable, chart: ChartSpec },
}

/// A rendered export: suggested filename plus the file body.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvExport {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Computes the detail region for a selection change.
pub fn selection_view(table: &Table, selection: Option<&str>) -> SelectionView {
    let Some(team) = normalize(selection) else {
        return SelectionView::Prompt {
            message: PROMPT_MESSAGE,
        };
    };

    let rows = table.rows_for_team(team);
    let detail = DetailTable {
        columns: table.columns().to_vec(),
        rows: rows.iter().map(|record| record.values().to_vec()).collect(),
    };
    let chart = charts::team_price_line(team, &rows);
    SelectionView::Detail {
        table: detail,
        chart,
    }
}

/// Serializes the selected team's rows for download.
///
/// Returns `Ok(None)` when no team is selected: the download request simply
/// produces nothing. The output carries the full header row in original
/// column order and is byte-identical across calls for the same input.
pub fn export_team_csv(
    table: &Table,
    selection: Option<&str>,
) -> Result<Option<CsvExport>, csv::Error> {
    let Some(team) = normalize(selection) else {
        return Ok(None);
    };

    let mut bytes = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut bytes);
        writer.write_record(table.columns())?;
        for record in table.rows_for_team(team) {
            writer.write_record(record.values())?;
        }
        writer.flush()?;
    }

    Ok(Some(CsvExport {
        filename: format!("{team}_data.csv"),
        bytes,
    }))
}

/// An empty or whitespace-only selection counts as no selection, matching a
/// cleared dropdown.
fn normalize(selection: Option<&str>) -> Option<&str> {
    selection.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Team,Player,Price(LAKHS),Category
A,p1,10,Raider
A,p2,20,Defender
B,p3,5,Raider
";

    fn sample_table() -> Table {
        Table::from_reader(csv::Reader::from_reader(SAMPLE.as_bytes())).unwrap()
    }

    #[test]
    fn no_selection_yields_the_prompt() {
        let table = sample_table();
        for selection in [None, Some(""), Some("   ")] {
            assert_eq!(
                selection_view(&table, selection),
                SelectionView::Prompt {
                    message: PROMPT_MESSAGE,
                }
            );
        }
    }

    #[test]
    fn detail_table_has_full_header_and_one_row_per_record() {
        let table = sample_table();
        let SelectionView::Detail { table: detail, .. } = selection_view(&table, Some("A")) else {
            panic!("expected detail view");
        };
        assert_eq!(detail.columns, table.columns());
        assert_eq!(detail.rows.len(), 2);
        assert_eq!(detail.rows[0], ["A", "p1", "10", "Raider"]);
        assert_eq!(detail.rows[1], ["A", "p2", "20", "Defender"]);
    }

    #[test]
    fn detail_chart_plots_price_per_player_in_table_order() {
        let table = sample_table();
        let SelectionView::Detail { chart, .. } = selection_view(&table, Some("A")) else {
            panic!("expected detail view");
        };
        assert_eq!(
            chart,
            ChartSpec::Line {
                title: "Price per Player in A".to_owned(),
                x: vec!["p1".to_owned(), "p2".to_owned()],
                y: vec![10.0, 20.0],
                markers: true,
            }
        );
    }

    #[test]
    // A team absent from the data gets a header-only table, not an error.
    fn unknown_team_yields_header_only_table() {
        let table = sample_table();
        let SelectionView::Detail { table: detail, .. } =
            selection_view(&table, Some("Nowhere FC"))
        else {
            panic!("expected detail view");
        };
        assert_eq!(detail.columns, table.columns());
        assert!(detail.rows.is_empty());
    }

    #[test]
    fn export_without_selection_is_absent() {
        let table = sample_table();
        assert_eq!(export_team_csv(&table, None).unwrap(), None);
        assert_eq!(export_team_csv(&table, Some("")).unwrap(), None);
    }

    #[test]
    fn export_names_the_file_after_the_team() {
        let table = sample_table();
        let export = export_team_csv(&table, Some("A")).unwrap().unwrap();
        assert_eq!(export.filename, "A_data.csv");
    }

    #[test]
    // Decoding the export yields exactly the filtered rows, column for
    // column, order preserved.
    fn export_round_trips_the_filtered_rows() {
        let table = sample_table();
        let export = export_team_csv(&table, Some("A")).unwrap().unwrap();

        let mut reader = csv::Reader::from_reader(export.bytes.as_slice());
        let header: Vec<String> = reader.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(header, table.columns());

        let rows: Vec<Vec<String>> = reader
            .records()
            .map(|row| row.unwrap().iter().map(str::to_owned).collect())
            .collect();
        let expected: Vec<Vec<String>> = table
            .rows_for_team("A")
            .iter()
            .map(|record| record.values().to_vec())
            .collect();
        assert_eq!(rows, expected);
    }

    #[test]
    fn export_is_byte_reproducible() {
        let table = sample_table();
        let first = export_team_csv(&table, Some("B")).unwrap().unwrap();
        let second = export_team_csv(&table, Some("B")).unwrap().unwrap();
        assert_eq!(first.bytes, second.bytes);
    }
}
