//! # Reference table
//!
//! One row per integer oxidation number ("charge"), shared by all elements. Each element owns
//! its own columns (see [`super::column_schema`]); a cell is a number, a text or absent.
//!
//! The table is loaded once per process and never mutated afterwards. The global instance lives
//! in a `OnceLock`, so any number of readers can share it without locking.
use super::electrochem_errors::ElectrochemError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
}

impl Cell {
    pub fn type_name(&self) -> &'static str {
        match self {
            Cell::Number(_) => "number",
            Cell::Text(_) => "text",
        }
    }
}

/// one record of the dataset file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRecord {
    pub charge: i32,
    #[serde(flatten)]
    pub cells: BTreeMap<String, Option<Cell>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTable {
    columns: BTreeSet<String>,
    rows: BTreeMap<i32, BTreeMap<String, Cell>>,
}

impl ReferenceTable {
    pub fn new() -> Self {
        Self::default()
    }
    /// nulls are dropped, a repeated charge merges into the existing row
    pub fn from_records(records: Vec<ReferenceRecord>) -> Self {
        let mut table = Self::new();
        for record in records {
            let row = table.rows.entry(record.charge).or_default();
            for (column, cell) in record.cells {
                table.columns.insert(column.clone());
                if let Some(cell) = cell {
                    row.insert(column, cell);
                }
            }
        }
        table
    }
    /// sets one cell, creating the row and column if needed
    pub fn insert(&mut self, charge: i32, column: &str, cell: Cell) {
        self.columns.insert(column.to_string());
        self.rows
            .entry(charge)
            .or_default()
            .insert(column.to_string(), cell);
    }

    pub fn charges(&self) -> impl Iterator<Item = i32> + '_ {
        self.rows.keys().copied()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.contains(column)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
    /// columns whose name contains the pattern
    pub fn columns_like(&self, pattern: &str) -> Vec<&str> {
        self.columns()
            .filter(|column| column.contains(pattern))
            .collect()
    }

    pub fn row(&self, charge: i32) -> Option<&BTreeMap<String, Cell>> {
        self.rows.get(&charge)
    }

    pub fn get(&self, charge: i32, column: &str) -> Option<&Cell> {
        self.rows.get(&charge).and_then(|row| row.get(column))
    }
    /// numeric cell, `None` when absent
    pub fn number(&self, charge: i32, column: &str) -> Result<Option<f64>, ElectrochemError> {
        match self.get(charge, column) {
            None => Ok(None),
            Some(Cell::Number(value)) => Ok(Some(*value)),
            Some(other) => Err(ElectrochemError::CellType {
                column: column.to_string(),
                charge,
                expected: "number",
                found: other.type_name().to_string(),
            }),
        }
    }
    /// text cell, `None` when absent
    pub fn text(&self, charge: i32, column: &str) -> Result<Option<&str>, ElectrochemError> {
        match self.get(charge, column) {
            None => Ok(None),
            Some(Cell::Text(value)) => Ok(Some(value.as_str())),
            Some(other) => Err(ElectrochemError::CellType {
                column: column.to_string(),
                charge,
                expected: "text",
                found: other.type_name().to_string(),
            }),
        }
    }
    /// element symbols that own at least one potential column
    pub fn elements(&self) -> Vec<String> {
        let mut symbols: Vec<String> = self
            .columns()
            .filter_map(|column| {
                column
                    .strip_suffix("_acid")
                    .or_else(|| column.strip_suffix("_basic"))
            })
            .map(str::to_string)
            .collect();
        symbols.sort();
        symbols.dedup();
        symbols
    }
}

static REFERENCE_TABLE: OnceLock<ReferenceTable> = OnceLock::new();

/// installs the process-wide table; fails if one is already installed
pub fn init_reference_table(
    table: ReferenceTable,
) -> Result<&'static ReferenceTable, ElectrochemError> {
    REFERENCE_TABLE
        .set(table)
        .map_err(|_| ElectrochemError::TableAlreadyLoaded)?;
    REFERENCE_TABLE
        .get()
        .ok_or(ElectrochemError::TableAlreadyLoaded)
}

/// the installed process-wide table, if any
pub fn installed_reference_table() -> Option<&'static ReferenceTable> {
    REFERENCE_TABLE.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ReferenceTable {
        let records: Vec<ReferenceRecord> = serde_json::from_str(
            r#"[
                {"charge": 0, "Cr_acid": 0, "Cr_acid_state": "(s)", "Cl_acid": null},
                {"charge": 3, "Cr_acid": -2.22, "Cr_acid_bal": "[0, 1, 0, 1, 3]"},
                {"charge": 5, "Cr_acid": null, "Cl_acid": 2.1}
            ]"#,
        )
        .unwrap();
        ReferenceTable::from_records(records)
    }

    #[test]
    fn test_from_records() {
        let table = sample();
        assert_eq!(table.len(), 3);
        assert_eq!(table.charges().collect::<Vec<_>>(), vec![0, 3, 5]);
        assert!(table.has_column("Cl_acid"));
        assert_eq!(table.number(3, "Cr_acid").unwrap(), Some(-2.22));
        assert_eq!(table.number(0, "Cr_acid").unwrap(), Some(0.0));
        assert_eq!(table.number(5, "Cr_acid").unwrap(), None);
        assert_eq!(table.text(0, "Cr_acid_state").unwrap(), Some("(s)"));
        assert_eq!(table.elements(), vec!["Cl".to_string(), "Cr".to_string()]);
    }

    #[test]
    fn test_cell_type_mismatch() {
        let table = sample();
        let err = table.number(0, "Cr_acid_state").unwrap_err();
        assert!(matches!(
            err,
            ElectrochemError::CellType {
                expected: "number",
                ..
            }
        ));
        assert!(table.text(3, "Cr_acid").is_err());
    }

    #[test]
    fn test_columns_like_is_substring_match() {
        let table = sample();
        let cols = table.columns_like("C");
        assert!(cols.contains(&"Cl_acid"));
        assert!(cols.contains(&"Cr_acid"));
        assert_eq!(table.columns_like("Cr_acid_bal"), vec!["Cr_acid_bal"]);
    }

    #[test]
    fn test_insert() {
        let mut table = ReferenceTable::new();
        assert!(table.is_empty());
        table.insert(2, "Fe_acid", Cell::Number(-0.88));
        table.insert(2, "Fe_acid_label", Cell::Text("Fe^{2+}".to_string()));
        assert_eq!(table.number(2, "Fe_acid").unwrap(), Some(-0.88));
        assert_eq!(table.text(2, "Fe_acid_label").unwrap(), Some("Fe^{2+}"));
        assert_eq!(table.row(2).map(|row| row.len()), Some(2));
        assert_eq!(table.elements(), vec!["Fe".to_string()]);
    }
}
