//! # Frost diagram assembly
//!
//! Collects everything needed to draw a Frost diagram of one element: the standard curves of the
//! acid (pH 0) and basic (pH 14) half-reactions, optionally a curve at user conditions, chemical
//! labels placed without overlaps, legend texts, ticks and title. Rendering itself is left to the
//! consumer; the diagram can be printed as a table or exported as JSON.
//!
//! ```rust
//! use RedoxFrost::Electrochemistry::element_data::ElementData;
//! use RedoxFrost::Utils::load_from_file::bundled_reference_table;
//! use RedoxFrost::FrostDiagram::frost_builder::FrostDiagramBuilder;
//!
//! let table = bundled_reference_table().unwrap();
//! let cr = ElementData::from_table(&table, "Cr").unwrap();
//! let diagram = FrostDiagramBuilder::new(&cr)
//!     .plot_standards(false)
//!     .conditions(3.0, 1e-3, 298.15)
//!     .build()
//!     .unwrap();
//! assert_eq!(diagram.curves.len(), 2);
//! assert_eq!(diagram.title, "Frost diagram - Cr");
//! ```
use super::annotations::{LabelLayout, PlacedLabel};
use crate::Electrochemistry::column_schema::Branch;
use crate::Electrochemistry::electrochem_errors::ElectrochemError;
use crate::Electrochemistry::element_data::ElementData;
use crate::Electrochemistry::nernst_api::{Conditions, OxidationStateTable, TableColumn};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const X_LABEL: &str = "Oxidation number";
pub const Y_LABEL: &str = "ΔG/F";

/// which standard curves to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Solution {
    Acid,
    Basic,
    Both,
}

impl FromStr for Solution {
    type Err = ElectrochemError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "acid" => Ok(Solution::Acid),
            "basic" => Ok(Solution::Basic),
            "both" => Ok(Solution::Both),
            other => Err(ElectrochemError::Configuration(other.to_string())),
        }
    }
}

impl Solution {
    pub fn branches(&self) -> Vec<Branch> {
        match self {
            Solution::Acid => vec![Branch::Acid],
            Solution::Basic => vec![Branch::Basic],
            Solution::Both => vec![Branch::Acid, Branch::Basic],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveStyle {
    pub color: String,
    pub marker: String,
    /// matplotlib notation: "-" solid, "-." dash-dot
    pub line_style: String,
    pub line_width: f64,
    pub marker_size: f64,
}

impl CurveStyle {
    fn new(color: &str, marker: &str, line_style: &str) -> Self {
        Self {
            color: color.to_string(),
            marker: marker.to_string(),
            line_style: line_style.to_string(),
            line_width: 3.0,
            marker_size: 7.0,
        }
    }

    pub fn standard(branch: Branch) -> Self {
        match branch {
            Branch::Acid => Self::new("blue", "o", "-"),
            Branch::Basic => Self::new("red", "s", "-."),
        }
    }
    /// cyan below and at pH 7, orange above
    pub fn not_standard(branch: Branch) -> Self {
        match branch {
            Branch::Acid => Self::new("cyan", "s", "-"),
            Branch::Basic => Self::new("orange", "s", "-"),
        }
    }
}

/// text color and box color of chemical labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelStyle {
    pub color: String,
    pub facecolor: String,
}

impl LabelStyle {
    pub fn for_branch(branch: Branch) -> Self {
        let (color, facecolor) = match branch {
            Branch::Acid => ("blue", "dodgerblue"),
            Branch::Basic => ("red", "darkorange"),
        };
        Self {
            color: color.to_string(),
            facecolor: facecolor.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrostCurve {
    pub legend: String,
    pub branch: Branch,
    pub conditions: Conditions,
    /// (oxidation number, ΔG/F)
    pub points: Vec<(i32, f64)>,
    pub style: CurveStyle,
    pub labels: Vec<PlacedLabel>,
    pub label_style: Option<LabelStyle>,
}

impl FrostCurve {
    pub fn is_standard(&self) -> bool {
        self.conditions.is_standard()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrostDiagram {
    pub elem_symbol: String,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_ticks: Vec<i32>,
    pub show_legend: bool,
    pub curves: Vec<FrostCurve>,
}

impl FrostDiagram {
    /// smallest and largest ΔG/F over all curves
    pub fn y_range(&self) -> Option<(f64, f64)> {
        y_range(self.curves.iter().flat_map(|curve| curve.points.iter()))
    }
}

/// concentration formatted like `5.0E-04`
pub fn format_concentration(conc_ion: f64) -> String {
    let formatted = format!("{:.1E}", conc_ion);
    match formatted.split_once('E') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}E{}{:02}", mantissa, sign, exp.abs())
            }
            Err(_) => formatted,
        },
        None => formatted,
    }
}

pub fn standard_legend(branch: Branch) -> String {
    match branch {
        Branch::Acid => "pH = 0, [ions] = 1.0 mol·L⁻¹".to_string(),
        Branch::Basic => "pH = 14, [ions] = 1.0 mol·L⁻¹".to_string(),
    }
}

pub fn not_standard_legend(conditions: &Conditions) -> String {
    format!(
        "pH = {}, [ions] = {} mol·L⁻¹",
        conditions.pH,
        format_concentration(conditions.conc_ion)
    )
}

fn y_range<'a>(points: impl Iterator<Item = &'a (i32, f64)>) -> Option<(f64, f64)> {
    points.fold(None, |acc, &(_, y)| match acc {
        None => Some((y, y)),
        Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
    })
}

/// height of the plotting area as an axis with 5% margins would show it
fn axis_span(points: &[(i32, f64)]) -> f64 {
    match y_range(points.iter()) {
        Some((lo, hi)) if hi > lo => (hi - lo) * 1.1,
        _ => 1.0,
    }
}

pub struct FrostDiagramBuilder<'a> {
    data: &'a ElementData,
    chemical_labels: bool,
    plot_standards: bool,
    conditions: Conditions,
    legend: bool,
    /// fixed label box; derived from the plotted range when None
    layout: Option<LabelLayout>,
}

impl<'a> FrostDiagramBuilder<'a> {
    /// labels on, standard curves only, standard acid conditions, legend on
    pub fn new(data: &'a ElementData) -> Self {
        Self {
            data,
            chemical_labels: true,
            plot_standards: true,
            conditions: Conditions::default(),
            legend: true,
            layout: None,
        }
    }

    pub fn chemical_labels(mut self, chemical_labels: bool) -> Self {
        self.chemical_labels = chemical_labels;
        self
    }

    pub fn plot_standards(mut self, plot_standards: bool) -> Self {
        self.plot_standards = plot_standards;
        self
    }

    pub fn conditions(mut self, pH: f64, conc_ion: f64, temperature: f64) -> Self {
        self.conditions = Conditions::new(pH, conc_ion, temperature);
        self
    }

    pub fn with_conditions(mut self, conditions: Conditions) -> Self {
        self.conditions = conditions;
        self
    }

    pub fn legend(mut self, legend: bool) -> Self {
        self.legend = legend;
        self
    }

    pub fn label_layout(mut self, layout: LabelLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    fn standard_table(&self, branch: Branch) -> Result<OxidationStateTable, ElectrochemError> {
        let conditions = match branch {
            Branch::Acid => Conditions::standard_acid(),
            Branch::Basic => Conditions::standard_basic(),
        };
        self.data.evaluate_at(branch, conditions)
    }

    /// curves of the tabulated potentials at pH 0 and/or pH 14
    pub fn standard_curves(
        &self,
        solution: Solution,
        chem_labels: bool,
    ) -> Result<Vec<FrostCurve>, ElectrochemError> {
        let tables = solution
            .branches()
            .into_iter()
            .map(|branch| self.standard_table(branch))
            .collect::<Result<Vec<_>, _>>()?;

        // labels are laid out against the range of everything drawn so far
        let all_points: Vec<(i32, f64)> = tables
            .iter()
            .flat_map(|table| table.points(TableColumn::Potential))
            .collect();
        let layout = self
            .layout
            .unwrap_or_else(|| LabelLayout::from_y_span(axis_span(&all_points)));

        let curves = tables
            .into_iter()
            .map(|table| {
                let points = table.points(TableColumn::Potential);
                let (labels, label_style) = if chem_labels {
                    (
                        layout.place(&points, &table.labels(), 0.0, -0.05),
                        Some(LabelStyle::for_branch(table.branch)),
                    )
                } else {
                    (Vec::new(), None)
                };
                FrostCurve {
                    legend: standard_legend(table.branch),
                    branch: table.branch,
                    conditions: table.conditions,
                    points,
                    style: CurveStyle::standard(table.branch),
                    labels,
                    label_style,
                }
            })
            .collect();
        Ok(curves)
    }

    /// weighted adjusted potentials of the branch selected by the pH
    pub fn not_standard_curve(
        &self,
        conditions: Conditions,
    ) -> Result<FrostCurve, ElectrochemError> {
        let table = self.data.nernst_at(conditions)?;
        Ok(FrostCurve {
            legend: not_standard_legend(&conditions),
            branch: table.branch,
            conditions,
            points: table.weighted_points(),
            style: CurveStyle::not_standard(table.branch),
            labels: Vec::new(),
            label_style: None,
        })
    }

    pub fn build(&self) -> Result<FrostDiagram, ElectrochemError> {
        let mut curves = if self.plot_standards {
            self.standard_curves(Solution::Both, self.chemical_labels)?
        } else {
            self.conditions.validate()?;
            let solution = match self.conditions.branch() {
                Branch::Acid => Solution::Acid,
                Branch::Basic => Solution::Basic,
            };
            self.standard_curves(solution, self.chemical_labels)?
        };
        if !self.plot_standards && !self.conditions.is_standard() {
            curves.push(self.not_standard_curve(self.conditions)?);
        }

        let charges = curves
            .iter()
            .flat_map(|curve| curve.points.iter().map(|(charge, _)| *charge));
        let x_ticks = match (charges.clone().min(), charges.max()) {
            (Some(lo), Some(hi)) => (lo..=hi).collect(),
            _ => Vec::new(),
        };

        Ok(FrostDiagram {
            elem_symbol: self.data.elem_symbol.clone(),
            title: format!("Frost diagram - {}", self.data.elem_symbol),
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
            x_ticks,
            show_legend: self.legend,
            curves,
        })
    }
}
