use crate::Electrochemistry::balance_parser::parse_balance;
use crate::Electrochemistry::coefficients::{solve_acid, solve_basic};
use crate::Electrochemistry::element_data::ElementData;
use crate::FrostDiagram::frost_builder::FrostDiagramBuilder;
use crate::Utils::load_from_file::{bundled_reference_table, load_reference_table_from_str};

pub fn frost_examples(task: usize) {
    match task {
        0 => {
            // dichromate: Cr2O7^{2-} + 14H+ + 12e -> 2Cr + 7H2O
            let bal = parse_balance("[0, 2, 7, 1, -2]").unwrap();
            let acid = solve_acid(&bal).unwrap();
            println!("acid (x, y, n, w, z): {:?}", acid.as_tuple());
            assert_eq!(acid.as_tuple(), (1.0, 14.0, 12.0, 2.0, 7.0));
            // chromate: CrO4^{2-} + 8H2O + 6e -> Cr + 4H2O + 8OH-
            let bal = parse_balance("(0, 1, 4, 1, -2,)").unwrap();
            let basic = solve_basic(&bal).unwrap();
            println!("basic (x, r, n, w, z, s): {:?}", basic.as_tuple());
            // arbitrary expressions are not accepted
            assert!(parse_balance("[0, 2, 7, 1, 2-4]").is_err());
        }
        1 => {
            // potentials of chromium across the pH scale
            let table = bundled_reference_table().unwrap();
            let cr = ElementData::from_table(&table, "Cr").unwrap();
            for pH in [0.0, 3.0, 7.0, 10.0, 14.0] {
                let res = cr.nernst(pH, 1.0, 298.15).unwrap();
                res.pretty_print();
            }
        }
        2 => {
            // standard Frost diagram
            let table = bundled_reference_table().unwrap();
            let cr = ElementData::from_table(&table, "Cr").unwrap();
            let diagram = FrostDiagramBuilder::new(&cr).build().unwrap();
            diagram.pretty_print();
        }
        3 => {
            // acid curve at pH 5 and 0.5 mmol/L next to the standard one
            let table = bundled_reference_table().unwrap();
            let bi = ElementData::from_table(&table, "Bi").unwrap();
            let diagram = FrostDiagramBuilder::new(&bi)
                .plot_standards(false)
                .conditions(5.0, 5e-4, 298.15)
                .build()
                .unwrap();
            println!("{}", diagram.to_json().unwrap());
        }
        4 => {
            // own data: iron in acidic solution
            let data = r#"[
                {"charge": 0, "Fe_acid": 0, "Fe_acid_state": "(s)", "Fe_acid_label": "Fe", "Fe_acid_bal": "[0, 1, 0, 1, 0]"},
                {"charge": 2, "Fe_acid": -0.88, "Fe_acid_state": "(aq)", "Fe_acid_label": "Fe^{2+}", "Fe_acid_bal": "[0, 1, 0, 1, 2]"},
                {"charge": 3, "Fe_acid": -0.11, "Fe_acid_state": "(aq)", "Fe_acid_label": "Fe^{3+}", "Fe_acid_bal": "[0, 1, 0, 1, 3]"}
            ]"#;
            let table = load_reference_table_from_str(data).unwrap();
            let fe = ElementData::from_table(&table, "Fe").unwrap();
            fe.nernst(2.0, 0.01, 298.15).unwrap().pretty_print();
        }
        _ => {
            println!("no such example: {}", task);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_examples_run() {
        for task in 0..=5 {
            frost_examples(task);
        }
    }
}
