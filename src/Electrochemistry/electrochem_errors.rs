use super::column_schema::Branch;
use thiserror::Error;

/// errors of a single balance encoding, without the row context
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BalanceError {
    #[error("malformed balance encoding {literal:?}: {reason}")]
    Malformed { literal: String, reason: String },
    #[error("heteroatom count of the reduced species is zero (d = 0)")]
    ZeroReducedCount,
}

/// error types of the electrochemistry engine and its collaborators
#[derive(Debug, Error)]
pub enum ElectrochemError {
    #[error("cannot parse {branch} balance of {element} at oxidation number {charge}: {source}")]
    Parse {
        element: String,
        branch: Branch,
        charge: i32,
        #[source]
        source: BalanceError,
    },
    #[error("invalid {branch} half-reaction of {element} at oxidation number {charge}: {reason}")]
    Domain {
        element: String,
        branch: Branch,
        charge: i32,
        reason: String,
    },
    #[error("Solution must be acid, basic or both, got {0:?}")]
    Configuration(String),
    #[error("invalid conditions: {0}")]
    InvalidConditions(String),
    #[error("{element} has no value in column {column} at oxidation number {charge}")]
    MissingValue {
        element: String,
        column: String,
        charge: i32,
    },
    #[error("column {column} at oxidation number {charge} holds {found}, expected {expected}")]
    CellType {
        column: String,
        charge: i32,
        expected: &'static str,
        found: String,
    },
    #[error("no reference table is installed")]
    TableNotLoaded,
    #[error("reference table is already loaded")]
    TableAlreadyLoaded,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ElectrochemError {
    /// attaches element, branch and oxidation number to a balance error
    pub fn from_balance(element: &str, branch: Branch, charge: i32, err: BalanceError) -> Self {
        match err {
            BalanceError::ZeroReducedCount => ElectrochemError::Domain {
                element: element.to_string(),
                branch,
                charge,
                reason: err.to_string(),
            },
            BalanceError::Malformed { .. } => ElectrochemError::Parse {
                element: element.to_string(),
                branch,
                charge,
                source: err,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_error_context() {
        let err =
            ElectrochemError::from_balance("Cr", Branch::Acid, 6, BalanceError::ZeroReducedCount);
        match &err {
            ElectrochemError::Domain {
                element, charge, ..
            } => {
                assert_eq!(element, "Cr");
                assert_eq!(*charge, 6);
            }
            _ => panic!("Expected Domain variant"),
        }
        assert!(err.to_string().contains("oxidation number 6"));

        let malformed = BalanceError::Malformed {
            literal: "[1, 2]".to_string(),
            reason: "expected 5 numbers, found 2".to_string(),
        };
        let err = ElectrochemError::from_balance("Bi", Branch::Basic, -3, malformed);
        assert!(matches!(err, ElectrochemError::Parse { charge: -3, .. }));
        assert!(err.to_string().contains("basic balance of Bi"));
    }
}
