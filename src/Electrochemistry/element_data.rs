use super::balance_parser::{BalanceEncoding, parse_balance};
use super::column_schema::{Branch, ColumnSchema};
use super::electrochem_errors::ElectrochemError;
use super::reference_table::{Cell, ReferenceTable, installed_reference_table};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// row of the element view: every selected cell of the reference table plus E0 for both branches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementRow {
    pub charge: i32,
    pub cells: BTreeMap<String, Cell>,
    pub acid_E0: Option<f64>,
    pub basic_E0: Option<f64>,
}

impl ElementRow {
    pub fn E0(&self, branch: Branch) -> Option<f64> {
        match branch {
            Branch::Acid => self.acid_E0,
            Branch::Basic => self.basic_E0,
        }
    }
}

/// row of an acid or basic table, i.e. a row with a balance encoding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchRow {
    pub charge: i32,
    /// standard potential column value (ΔG/F at standard conditions)
    pub potential: f64,
    /// standard potential per electron
    pub E0: f64,
    pub state: Option<String>,
    pub label: Option<String>,
    pub balance: BalanceEncoding,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchTable {
    pub branch: Branch,
    /// sorted by oxidation number
    pub rows: Vec<BranchRow>,
}

impl BranchTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, charge: i32) -> Option<&BranchRow> {
        self.rows.iter().find(|row| row.charge == charge)
    }

    pub fn charges(&self) -> Vec<i32> {
        self.rows.iter().map(|row| row.charge).collect()
    }
}

/// view of one element: the full selection and the acid and basic tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementData {
    pub elem_symbol: String,
    pub columns: ColumnSchema,
    pub full: Vec<ElementRow>,
    pub acid: BranchTable,
    pub basic: BranchTable,
}

/// potential per electron; zero for the charge-zero row and for zero potentials
pub fn potential_per_electron(potential: f64, charge: i32) -> f64 {
    if potential != 0.0 && charge != 0 {
        potential / charge as f64
    } else {
        0.0
    }
}

impl ElementData {
    /// element view built from the installed process-wide reference table
    pub fn new(elem_symbol: &str) -> Result<Self, ElectrochemError> {
        let table = installed_reference_table().ok_or(ElectrochemError::TableNotLoaded)?;
        Self::from_table(table, elem_symbol)
    }

    pub fn from_table(table: &ReferenceTable, elem_symbol: &str) -> Result<Self, ElectrochemError> {
        let columns = ColumnSchema::new(elem_symbol);
        let selected = table.columns_like(elem_symbol);

        let mut full = Vec::new();
        for charge in table.charges() {
            let cells: BTreeMap<String, Cell> = selected
                .iter()
                .filter_map(|column| {
                    table
                        .get(charge, column)
                        .map(|cell| (column.to_string(), cell.clone()))
                })
                .collect();
            // rows irrelevant to this element
            if cells.is_empty() {
                continue;
            }
            let acid_E0 = table
                .number(charge, &columns.acid)?
                .map(|potential| potential_per_electron(potential, charge));
            let basic_E0 = table
                .number(charge, &columns.basic)?
                .map(|potential| potential_per_electron(potential, charge));
            full.push(ElementRow {
                charge,
                cells,
                acid_E0,
                basic_E0,
            });
        }

        let acid = Self::branch_table(table, &columns, &full, Branch::Acid)?;
        let basic = Self::branch_table(table, &columns, &full, Branch::Basic)?;

        Ok(Self {
            elem_symbol: elem_symbol.to_string(),
            columns,
            full,
            acid,
            basic,
        })
    }

    fn branch_table(
        table: &ReferenceTable,
        columns: &ColumnSchema,
        full: &[ElementRow],
        branch: Branch,
    ) -> Result<BranchTable, ElectrochemError> {
        let elem_symbol = columns.elem_symbol.as_str();
        let mut rows = Vec::new();
        for element_row in full {
            let charge = element_row.charge;
            let Some(literal) = table.text(charge, columns.balance(branch))? else {
                continue;
            };
            let balance = parse_balance(literal).map_err(|e| {
                ElectrochemError::from_balance(elem_symbol, branch, charge, e)
            })?;
            let potential = table.number(charge, columns.potential(branch))?.ok_or_else(|| {
                ElectrochemError::MissingValue {
                    element: elem_symbol.to_string(),
                    column: columns.potential(branch).to_string(),
                    charge,
                }
            })?;
            rows.push(BranchRow {
                charge,
                potential,
                E0: potential_per_electron(potential, charge),
                state: table.text(charge, columns.state(branch))?.map(str::to_string),
                label: table.text(charge, columns.label(branch))?.map(str::to_string),
                balance,
            });
        }
        Ok(BranchTable { branch, rows })
    }

    pub fn branch(&self, branch: Branch) -> &BranchTable {
        match branch {
            Branch::Acid => &self.acid,
            Branch::Basic => &self.basic,
        }
    }
    /// state tag of the charge-zero species of the branch: taken from the branch table,
    /// or from the full selection when the branch has no charge-zero row
    pub fn reference_state(&self, branch: Branch) -> Option<&str> {
        if let Some(row) = self.branch(branch).get(0) {
            return row.state.as_deref();
        }
        self.full
            .iter()
            .find(|row| row.charge == 0)
            .and_then(|row| row.cells.get(self.columns.state(branch)))
            .and_then(|cell| match cell {
                Cell::Text(state) => Some(state.as_str()),
                Cell::Number(_) => None,
            })
    }
}
