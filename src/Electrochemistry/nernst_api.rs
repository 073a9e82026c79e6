//! # Nernst equation for Frost diagrams
//!
//! For every oxidation state of one branch the standard potential per electron E0 is corrected
//! for non-standard conditions:
//!
//! acid:  E = E0 + RT/(nF) * ln( c^w / (c^x * [H+]^y) ),      [H+]  = 10^(-pH)
//! basic: E = E0 + RT/(nF) * ln( c^w * [OH-]^s / c^x ),      [OH-] = 10^(-(14 - pH))
//!
//! `w` is zeroed when the charge-zero species of the branch is a solid or a liquid, `x` is
//! zeroed when the species of the row itself is. The charge-zero row has E = 0 by convention.
//! The plotted value is E multiplied by the oxidation number.
//!
//! Each evaluation builds a new [`OxidationStateTable`]; the element data is never modified.
use super::coefficients::{DerivedCoefficients, HalfReaction};
use super::column_schema::Branch;
use super::constants::{
    FARADAY_CONSTANT, GAS_CONSTANT, NEUTRAL_PH, PKW, STANDARD_ACID_PH, STANDARD_BASIC_PH,
    STANDARD_CONCENTRATION, STANDARD_TEMPERATURE, is_condensed,
};
use super::electrochem_errors::ElectrochemError;
use super::element_data::{BranchRow, ElementData};
use serde::{Deserialize, Serialize};

/// pH, ion concentration (mol/L) and temperature (K)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Conditions {
    pub pH: f64,
    pub conc_ion: f64,
    pub temperature: f64,
}

impl Default for Conditions {
    fn default() -> Self {
        Self::standard_acid()
    }
}

impl Conditions {
    pub fn new(pH: f64, conc_ion: f64, temperature: f64) -> Self {
        Self {
            pH,
            conc_ion,
            temperature,
        }
    }
    /// pH 0, 1 mol/L, 298.15 K
    pub fn standard_acid() -> Self {
        Self::new(STANDARD_ACID_PH, STANDARD_CONCENTRATION, STANDARD_TEMPERATURE)
    }
    /// pH 14, 1 mol/L, 298.15 K
    pub fn standard_basic() -> Self {
        Self::new(STANDARD_BASIC_PH, STANDARD_CONCENTRATION, STANDARD_TEMPERATURE)
    }
    /// branch chosen by the pH: acid up to and including pH 7
    pub fn branch(&self) -> Branch {
        if self.pH <= NEUTRAL_PH {
            Branch::Acid
        } else {
            Branch::Basic
        }
    }
    /// true when these are the standard conditions of the branch the pH selects
    pub fn is_standard(&self) -> bool {
        let standard = match self.branch() {
            Branch::Acid => Self::standard_acid(),
            Branch::Basic => Self::standard_basic(),
        };
        *self == standard
    }

    pub fn validate(&self) -> Result<(), ElectrochemError> {
        if !self.pH.is_finite() {
            return Err(ElectrochemError::InvalidConditions(format!(
                "pH must be finite, got {}",
                self.pH
            )));
        }
        if !(self.conc_ion.is_finite() && self.conc_ion > 0.0) {
            return Err(ElectrochemError::InvalidConditions(format!(
                "ion concentration must be positive, got {}",
                self.conc_ion
            )));
        }
        if !(self.temperature.is_finite() && self.temperature > 0.0) {
            return Err(ElectrochemError::InvalidConditions(format!(
                "temperature must be positive, got {} K",
                self.temperature
            )));
        }
        Ok(())
    }
}

/// evaluated oxidation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OxidationStateRow {
    pub charge: i32,
    /// standard potential column value
    pub potential: f64,
    pub E0: f64,
    /// `None` for the charge-zero row
    pub coefficients: Option<DerivedCoefficients>,
    pub state: Option<String>,
    pub label: Option<String>,
    /// adjusted potential
    pub E: f64,
    /// E * charge
    pub weighted: f64,
}

/// columns of an evaluated table that can be plotted against the oxidation number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableColumn {
    Potential,
    E0,
    E,
    Weighted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OxidationStateTable {
    pub elem_symbol: String,
    pub branch: Branch,
    pub conditions: Conditions,
    pub rows: Vec<OxidationStateRow>,
}

impl OxidationStateTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, charge: i32) -> Option<&OxidationStateRow> {
        self.rows.iter().find(|row| row.charge == charge)
    }

    pub fn charges(&self) -> Vec<i32> {
        self.rows.iter().map(|row| row.charge).collect()
    }

    pub fn points(&self, column: TableColumn) -> Vec<(i32, f64)> {
        self.rows
            .iter()
            .map(|row| {
                let value = match column {
                    TableColumn::Potential => row.potential,
                    TableColumn::E0 => row.E0,
                    TableColumn::E => row.E,
                    TableColumn::Weighted => row.weighted,
                };
                (row.charge, value)
            })
            .collect()
    }
    /// (oxidation number, E * oxidation number)
    pub fn weighted_points(&self) -> Vec<(i32, f64)> {
        self.points(TableColumn::Weighted)
    }
    /// descriptive labels, empty text where the dataset has none
    pub fn labels(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.label.clone().unwrap_or_default())
            .collect()
    }
}

/// RT/(nF) * ln(Q)
pub fn nernst_correction(
    coefficients: &DerivedCoefficients,
    conc_ion: f64,
    medium_activity: f64,
    temperature: f64,
) -> f64 {
    let n = coefficients.electrons();
    (GAS_CONSTANT * temperature) / (n * FARADAY_CONSTANT)
        * coefficients
            .activity_quotient(conc_ion, medium_activity)
            .ln()
}

impl ElementData {
    /// potentials of the acid branch
    pub fn nernst_acid(
        &self,
        pH: f64,
        conc_ion: f64,
        temperature: f64,
    ) -> Result<OxidationStateTable, ElectrochemError> {
        self.evaluate(Branch::Acid, pH, conc_ion, temperature)
    }
    /// potentials of the basic branch
    pub fn nernst_basic(
        &self,
        pH: f64,
        conc_ion: f64,
        temperature: f64,
    ) -> Result<OxidationStateTable, ElectrochemError> {
        self.evaluate(Branch::Basic, pH, conc_ion, temperature)
    }
    /// acid branch for pH <= 7, basic branch otherwise
    pub fn nernst(
        &self,
        pH: f64,
        conc_ion: f64,
        temperature: f64,
    ) -> Result<OxidationStateTable, ElectrochemError> {
        self.nernst_at(Conditions::new(pH, conc_ion, temperature))
    }

    pub fn nernst_at(
        &self,
        conditions: Conditions,
    ) -> Result<OxidationStateTable, ElectrochemError> {
        self.evaluate_at(conditions.branch(), conditions)
    }

    pub fn evaluate(
        &self,
        branch: Branch,
        pH: f64,
        conc_ion: f64,
        temperature: f64,
    ) -> Result<OxidationStateTable, ElectrochemError> {
        self.evaluate_at(branch, Conditions::new(pH, conc_ion, temperature))
    }

    pub fn evaluate_at(
        &self,
        branch: Branch,
        conditions: Conditions,
    ) -> Result<OxidationStateTable, ElectrochemError> {
        conditions.validate()?;
        let medium_activity = match branch {
            Branch::Acid => 10f64.powf(-conditions.pH),
            Branch::Basic => 10f64.powf(-(PKW - conditions.pH)),
        };
        let reference_condensed = is_condensed(self.reference_state(branch));

        let rows = self
            .branch(branch)
            .rows
            .iter()
            .map(|row| {
                self.evaluate_row(
                    branch,
                    row,
                    &conditions,
                    medium_activity,
                    reference_condensed,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(OxidationStateTable {
            elem_symbol: self.elem_symbol.clone(),
            branch,
            conditions,
            rows,
        })
    }

    fn evaluate_row(
        &self,
        branch: Branch,
        row: &BranchRow,
        conditions: &Conditions,
        medium_activity: f64,
        reference_condensed: bool,
    ) -> Result<OxidationStateRow, ElectrochemError> {
        let domain_error = |reason: String| ElectrochemError::Domain {
            element: self.elem_symbol.clone(),
            branch,
            charge: row.charge,
            reason,
        };

        let (coefficients, E) = if row.charge == 0 {
            (None, 0.0)
        } else {
            let mut coefficients = DerivedCoefficients::solve(branch, &row.balance).map_err(|e| {
                ElectrochemError::from_balance(&self.elem_symbol, branch, row.charge, e)
            })?;
            if coefficients.electrons() == 0.0 {
                return Err(domain_error(
                    "no electrons transferred (n = 0)".to_string(),
                ));
            }
            if reference_condensed {
                coefficients.elide_reference();
            }
            if is_condensed(row.state.as_deref()) {
                coefficients.elide_species();
            }
            let correction = nernst_correction(
                &coefficients,
                conditions.conc_ion,
                medium_activity,
                conditions.temperature,
            );
            let E = row.E0 + correction;
            if !E.is_finite() {
                return Err(domain_error(format!("potential is not finite ({})", E)));
            }
            (Some(coefficients), E)
        };

        Ok(OxidationStateRow {
            charge: row.charge,
            potential: row.potential,
            E0: row.E0,
            coefficients,
            state: row.state.clone(),
            label: row.label.clone(),
            E,
            weighted: E * row.charge as f64,
        })
    }
}
