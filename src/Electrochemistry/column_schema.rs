//! # Column naming convention
//!
//! Every element `X` of the reference table owns up to eight stored columns
//! (`X_acid`, `X_basic`, `X_acid_state`, `X_basic_state`, `X_acid_label`, `X_basic_label`,
//! `X_acid_bal`, `X_basic_bal`) and six derived ones (`X_acid_E0`, `X_basic_E0`, `X_acid_E`,
//! `X_basic_E`, `X_acid_new`, `X_basic_new`). Names are never checked against the table here,
//! a missing column only shows up when it is read.
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// half-reaction template: acidic or basic medium
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    Acid,
    Basic,
}

impl Branch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Branch::Acid => "acid",
            Branch::Basic => "basic",
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// logical roles in the order they are listed in a schema
pub const ROLES: [&str; 14] = [
    "acid",
    "basic",
    "acid_state",
    "basic_state",
    "acid_label",
    "basic_label",
    "acid_bal",
    "basic_bal",
    "acid_E0",
    "basic_E0",
    "acid_E",
    "basic_E",
    "acid_new",
    "basic_new",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSchema {
    pub elem_symbol: String,
    pub acid: String,
    pub basic: String,
    pub acid_state: String,
    pub basic_state: String,
    pub acid_label: String,
    pub basic_label: String,
    pub acid_bal: String,
    pub basic_bal: String,
    pub acid_E0: String,
    pub basic_E0: String,
    pub acid_E: String,
    pub basic_E: String,
    pub acid_new: String,
    pub basic_new: String,
}

impl ColumnSchema {
    pub fn new(elem_symbol: &str) -> Self {
        let acid = format!("{}_acid", elem_symbol);
        let basic = format!("{}_basic", elem_symbol);
        Self {
            elem_symbol: elem_symbol.to_string(),
            acid_state: format!("{}_state", acid),
            basic_state: format!("{}_state", basic),
            acid_label: format!("{}_acid_label", elem_symbol),
            basic_label: format!("{}_basic_label", elem_symbol),
            acid_bal: format!("{}_acid_bal", elem_symbol),
            basic_bal: format!("{}_basic_bal", elem_symbol),
            acid_E0: format!("{}_E0", acid),
            basic_E0: format!("{}_E0", basic),
            acid_E: format!("{}_E", acid),
            basic_E: format!("{}_E", basic),
            acid_new: format!("{}_new", acid),
            basic_new: format!("{}_new", basic),
            acid,
            basic,
        }
    }
    /// column name for a logical role like "acid_bal"
    pub fn get(&self, role: &str) -> Option<&str> {
        let name = match role {
            "acid" => &self.acid,
            "basic" => &self.basic,
            "acid_state" => &self.acid_state,
            "basic_state" => &self.basic_state,
            "acid_label" => &self.acid_label,
            "basic_label" => &self.basic_label,
            "acid_bal" => &self.acid_bal,
            "basic_bal" => &self.basic_bal,
            "acid_E0" => &self.acid_E0,
            "basic_E0" => &self.basic_E0,
            "acid_E" => &self.acid_E,
            "basic_E" => &self.basic_E,
            "acid_new" => &self.acid_new,
            "basic_new" => &self.basic_new,
            _ => return None,
        };
        Some(name.as_str())
    }
    /// role -> column name for all 14 roles
    pub fn as_map(&self) -> HashMap<&'static str, String> {
        ROLES
            .iter()
            .filter_map(|role| self.get(role).map(|name| (*role, name.to_string())))
            .collect()
    }
    /// standard potential column of the branch
    pub fn potential(&self, branch: Branch) -> &str {
        match branch {
            Branch::Acid => &self.acid,
            Branch::Basic => &self.basic,
        }
    }
    pub fn state(&self, branch: Branch) -> &str {
        match branch {
            Branch::Acid => &self.acid_state,
            Branch::Basic => &self.basic_state,
        }
    }
    pub fn label(&self, branch: Branch) -> &str {
        match branch {
            Branch::Acid => &self.acid_label,
            Branch::Basic => &self.basic_label,
        }
    }
    pub fn balance(&self, branch: Branch) -> &str {
        match branch {
            Branch::Acid => &self.acid_bal,
            Branch::Basic => &self.basic_bal,
        }
    }
    pub fn E0(&self, branch: Branch) -> &str {
        match branch {
            Branch::Acid => &self.acid_E0,
            Branch::Basic => &self.basic_E0,
        }
    }
    pub fn E(&self, branch: Branch) -> &str {
        match branch {
            Branch::Acid => &self.acid_E,
            Branch::Basic => &self.basic_E,
        }
    }
    /// weighted potential column E*i
    pub fn weighted(&self, branch: Branch) -> &str {
        match branch {
            Branch::Acid => &self.acid_new,
            Branch::Basic => &self.basic_new,
        }
    }
}
