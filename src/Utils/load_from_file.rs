use crate::Electrochemistry::column_schema::{Branch, ColumnSchema};
use crate::Electrochemistry::electrochem_errors::ElectrochemError;
use crate::Electrochemistry::reference_table::{
    ReferenceRecord, ReferenceTable, init_reference_table, installed_reference_table,
};
use crate::config_manager::with_config_manager;
use log::{error, info, warn};
use std::fs;
use std::io;
use std::path::Path;

/// dataset shipped with the crate (Cr, Bi, O)
pub const BUNDLED_DATASET: &str = include_str!("../../data/frost_data.json");

/// Reads a dataset file: a JSON array of records
/// `{"charge": 3, "Cr_acid": -2.22, "Cr_acid_bal": "[0, 1, 0, 1, 3]", ...}`
/// and checks it for half-filled branch rows.
pub fn load_reference_table(file_name: &str) -> Result<ReferenceTable, ElectrochemError> {
    let path = Path::new(file_name);
    if !path.exists() {
        return Err(ElectrochemError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("File '{}' does not exist", file_name),
        )));
    }
    let content = fs::read_to_string(path)?;
    let table = load_reference_table_from_str(&content)?;
    info!(
        "Loaded reference table from file '{}': {} oxidation numbers, elements {:?}",
        file_name,
        table.len(),
        table.elements()
    );
    Ok(table)
}

pub fn load_reference_table_from_str(content: &str) -> Result<ReferenceTable, ElectrochemError> {
    let records: Vec<ReferenceRecord> = match serde_json::from_str(content) {
        Ok(records) => records,
        Err(e) => {
            error!(
                "Error parsing reference data at line {}, column {}: {}",
                e.line(),
                e.column(),
                e
            );
            if let Some(problem_line) = content.lines().nth(e.line().saturating_sub(1)) {
                error!("Problematic line: {}", problem_line);
            }
            return Err(ElectrochemError::Json(e));
        }
    };
    let table = ReferenceTable::from_records(records);
    if table.is_empty() {
        warn!("Loaded reference data is empty");
    }
    validate_reference_table(&table);
    Ok(table)
}

/// parses the bundled dataset
pub fn bundled_reference_table() -> Result<ReferenceTable, ElectrochemError> {
    load_reference_table_from_str(BUNDLED_DATASET)
}

/// The process-wide table. On first use it is loaded from the configured dataset file,
/// or from the bundled dataset when that file does not exist, and installed.
pub fn global_reference_table() -> Result<&'static ReferenceTable, ElectrochemError> {
    if let Some(table) = installed_reference_table() {
        return Ok(table);
    }
    let dataset = with_config_manager(|manager| manager.dataset_path().to_string());
    let table = if Path::new(&dataset).exists() {
        info!("loading reference table from '{}'", dataset);
        load_reference_table(&dataset)?
    } else {
        warn!(
            "dataset '{}' not found, using the bundled reference table",
            dataset
        );
        bundled_reference_table()?
    };
    match init_reference_table(table) {
        Ok(table) => Ok(table),
        // another thread installed its table first
        Err(ElectrochemError::TableAlreadyLoaded) => {
            installed_reference_table().ok_or(ElectrochemError::TableNotLoaded)
        }
        Err(e) => Err(e),
    }
}

/// Warns about rows where only some of the columns of a branch are filled.
/// Returns the number of such rows.
pub fn validate_reference_table(table: &ReferenceTable) -> usize {
    let mut incomplete = 0;
    for element in table.elements() {
        let columns = ColumnSchema::new(&element);
        for branch in [Branch::Acid, Branch::Basic] {
            let branch_columns = [
                columns.potential(branch),
                columns.state(branch),
                columns.label(branch),
                columns.balance(branch),
            ];
            for charge in table.charges() {
                let present = branch_columns
                    .iter()
                    .filter(|column| table.get(charge, column).is_some())
                    .count();
                if present != 0 && present != branch_columns.len() {
                    warn!(
                        "{} {} branch at oxidation number {} has {} of {} columns filled",
                        element,
                        branch,
                        charge,
                        present,
                        branch_columns.len()
                    );
                    incomplete += 1;
                }
            }
        }
    }
    incomplete
}
