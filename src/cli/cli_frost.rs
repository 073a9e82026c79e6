use super::cli_main::{get_user_input, prompt, read_f64, read_yes_no};
use crate::Electrochemistry::element_data::ElementData;
use crate::Electrochemistry::nernst_api::Conditions;
use crate::FrostDiagram::frost_builder::FrostDiagramBuilder;
use crate::Utils::load_from_file::global_reference_table;
use crate::config_manager::with_config_manager;
use log::error;

fn read_element() -> Option<ElementData> {
    match global_reference_table() {
        Ok(table) => println!("Available elements: {}", table.elements().join(", ")),
        Err(e) => {
            error!("cannot load the reference table: {}", e);
            return None;
        }
    }
    prompt("Element symbol: ");
    let symbol = get_user_input().trim().to_string();
    if symbol.is_empty() {
        println!("No element given");
        return None;
    }
    match ElementData::new(&symbol) {
        Ok(data) => {
            if data.acid.is_empty() && data.basic.is_empty() {
                println!("No oxidation states tabulated for '{}'", symbol);
            }
            Some(data)
        }
        Err(e) => {
            error!("cannot read data of {}: {}", symbol, e);
            None
        }
    }
}

fn read_conditions() -> Conditions {
    let defaults = with_config_manager(|manager| manager.default_conditions());
    Conditions::new(
        read_f64("pH", defaults.pH),
        read_f64("Ion concentration, mol/L", defaults.conc_ion),
        read_f64("Temperature, K", defaults.temperature),
    )
}

pub fn element_table_menu() {
    println!("\n=== Oxidation states table ===");
    let Some(data) = read_element() else {
        return;
    };
    let conditions = read_conditions();
    match data.nernst_at(conditions) {
        Ok(table) => table.pretty_print(),
        Err(e) => error!("evaluation failed: {}", e),
    }
}

pub fn diagram_menu() {
    println!("\n=== Frost diagram ===");
    let Some(data) = read_element() else {
        return;
    };
    let plot_standards = read_yes_no("Standard curves only", true);
    let conditions = if plot_standards {
        Conditions::default()
    } else {
        read_conditions()
    };
    let chemical_labels = read_yes_no("Chemical labels", true);
    let diagram = match FrostDiagramBuilder::new(&data)
        .plot_standards(plot_standards)
        .with_conditions(conditions)
        .chemical_labels(chemical_labels)
        .build()
    {
        Ok(diagram) => diagram,
        Err(e) => {
            error!("cannot build the diagram: {}", e);
            return;
        }
    };
    diagram.pretty_print();

    prompt("Save as JSON to (empty to skip): ");
    let path = get_user_input().trim().to_string();
    if !path.is_empty() {
        match diagram.save_json(&path) {
            Ok(()) => println!("Saved to {}", path),
            Err(e) => error!("cannot save the diagram: {}", e),
        }
    }
}
