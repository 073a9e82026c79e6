use super::frost_builder::FrostDiagram;
use crate::Electrochemistry::electrochem_errors::ElectrochemError;
use crate::Electrochemistry::nernst_api::OxidationStateTable;
use log::info;
use prettytable::{Table, row};
use std::fs;

fn fmt_optional(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

impl OxidationStateTable {
    pub fn to_pretty_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(row![
            "Oxidation number",
            "Species",
            "State",
            "Potential",
            "E0, V",
            "E, V",
            "ΔG/F"
        ]);
        for r in &self.rows {
            table.add_row(row![
                r.charge,
                fmt_optional(&r.label),
                fmt_optional(&r.state),
                format!("{:.4}", r.potential),
                format!("{:.4}", r.E0),
                format!("{:.4}", r.E),
                format!("{:.4}", r.weighted)
            ]);
        }
        table
    }

    pub fn pretty_print(&self) {
        println!(
            "\n{} ({} branch) at pH = {}, [ions] = {} mol/L, T = {} K",
            self.elem_symbol,
            self.branch,
            self.conditions.pH,
            self.conditions.conc_ion,
            self.conditions.temperature
        );
        if self.is_empty() {
            println!("no tabulated oxidation states");
            return;
        }
        self.to_pretty_table().printstd();
    }
}

impl FrostDiagram {
    pub fn pretty_print(&self) {
        println!("\n=== {} ===", self.title);
        println!("x: {}, y: {}", self.x_label, self.y_label);
        println!("x ticks: {:?}", self.x_ticks);
        for curve in &self.curves {
            println!(
                "\n{} [{} {} {}]",
                curve.legend, curve.style.color, curve.style.marker, curve.style.line_style
            );
            let mut table = Table::new();
            table.add_row(row!["Oxidation number", "ΔG/F", "Label", "Label position"]);
            for (charge, y) in &curve.points {
                let placed = curve.labels.iter().find(|label| label.charge == *charge);
                let (text, position) = match placed {
                    Some(label) => (
                        label.text.clone(),
                        format!(
                            "({:.2}, {:.2}){}",
                            label.text_x,
                            label.text_y,
                            if label.arrow { " ->" } else { "" }
                        ),
                    ),
                    None => ("-".to_string(), "-".to_string()),
                };
                table.add_row(row![charge, format!("{:.4}", y), text, position]);
            }
            table.printstd();
        }
    }

    pub fn to_json(&self) -> Result<String, ElectrochemError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(content: &str) -> Result<Self, ElectrochemError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn save_json(&self, path: &str) -> Result<(), ElectrochemError> {
        fs::write(path, self.to_json()?)?;
        info!("Frost diagram of {} saved to '{}'", self.elem_symbol, path);
        Ok(())
    }
}
