#[cfg(test)]
mod tests {
    use crate::Electrochemistry::column_schema::Branch;
    use crate::Electrochemistry::electrochem_errors::ElectrochemError;
    use crate::Electrochemistry::element_data::ElementData;
    use crate::Electrochemistry::nernst_api::{Conditions, TableColumn};
    use crate::FrostDiagram::annotations::LabelLayout;
    use crate::FrostDiagram::frost_builder::*;
    use crate::Utils::load_from_file::bundled_reference_table;
    use approx::assert_relative_eq;
    use std::str::FromStr;
    use tempfile::NamedTempFile;

    fn element(symbol: &str) -> ElementData {
        let table = bundled_reference_table().unwrap();
        ElementData::from_table(&table, symbol).unwrap()
    }

    #[test]
    fn test_solution_from_str() {
        assert_eq!(Solution::from_str("acid").unwrap(), Solution::Acid);
        assert_eq!(Solution::from_str("basic").unwrap(), Solution::Basic);
        assert_eq!(Solution::from_str("both").unwrap(), Solution::Both);
        let err = Solution::from_str("neutral").unwrap_err();
        assert!(matches!(err, ElectrochemError::Configuration(ref s) if s == "neutral"));
        assert!(Solution::from_str("Acid").is_err());
    }

    #[test]
    fn test_concentration_format() {
        assert_eq!(format_concentration(5e-4), "5.0E-04");
        assert_eq!(format_concentration(1.0), "1.0E+00");
        assert_eq!(format_concentration(1e-10), "1.0E-10");
        assert_eq!(format_concentration(0.25), "2.5E-01");
        assert_eq!(
            not_standard_legend(&Conditions::new(3.0, 1e-3, 298.15)),
            "pH = 3, [ions] = 1.0E-03 mol·L⁻¹"
        );
        assert_eq!(standard_legend(Branch::Acid), "pH = 0, [ions] = 1.0 mol·L⁻¹");
        assert_eq!(standard_legend(Branch::Basic), "pH = 14, [ions] = 1.0 mol·L⁻¹");
    }

    #[test]
    fn test_both_standard_curves() {
        let cr = element("Cr");
        let diagram = FrostDiagramBuilder::new(&cr).build().unwrap();
        assert_eq!(diagram.title, "Frost diagram - Cr");
        assert_eq!(diagram.x_label, "Oxidation number");
        assert_eq!(diagram.y_label, "ΔG/F");
        assert_eq!(diagram.x_ticks, vec![0, 1, 2, 3, 4, 5, 6]);
        assert!(diagram.show_legend);
        assert_eq!(diagram.curves.len(), 2);

        let acid = &diagram.curves[0];
        assert_eq!(acid.branch, Branch::Acid);
        assert_eq!(acid.style, CurveStyle::standard(Branch::Acid));
        assert_eq!(acid.style.color, "blue");
        assert_eq!(acid.style.marker, "o");
        assert_eq!(acid.points, vec![(0, 0.0), (2, -1.82), (3, -2.22), (6, 1.77)]);
        assert_eq!(acid.labels.len(), 4);
        assert_eq!(acid.labels[3].text, "Cr_2O_7^{2-}");
        assert_eq!(acid.label_style, Some(LabelStyle::for_branch(Branch::Acid)));
        assert!(acid.is_standard());

        let basic = &diagram.curves[1];
        assert_eq!(basic.branch, Branch::Basic);
        assert_eq!(basic.style.color, "red");
        assert_eq!(basic.style.line_style, "-.");
        assert_eq!(basic.conditions, Conditions::standard_basic());
        assert_eq!(basic.points[3], (6, -4.83));
        assert_eq!(basic.label_style.as_ref().unwrap().facecolor, "darkorange");

        let (lo, hi) = diagram.y_range().unwrap();
        assert_eq!((lo, hi), (-4.83, 1.77));
    }

    #[test]
    fn test_standard_conditions_add_no_extra_curve() {
        let cr = element("Cr");
        let acid = FrostDiagramBuilder::new(&cr)
            .plot_standards(false)
            .build()
            .unwrap();
        assert_eq!(acid.curves.len(), 1);
        assert_eq!(acid.curves[0].branch, Branch::Acid);

        let basic = FrostDiagramBuilder::new(&cr)
            .plot_standards(false)
            .with_conditions(Conditions::standard_basic())
            .build()
            .unwrap();
        assert_eq!(basic.curves.len(), 1);
        assert_eq!(basic.curves[0].branch, Branch::Basic);
    }

    #[test]
    fn test_not_standard_acid_curve() {
        let cr = element("Cr");
        let diagram = FrostDiagramBuilder::new(&cr)
            .plot_standards(false)
            .conditions(3.0, 1e-3, 298.15)
            .build()
            .unwrap();
        assert_eq!(diagram.curves.len(), 2);
        let curve = &diagram.curves[1];
        assert_eq!(curve.style.color, "cyan");
        assert_eq!(curve.style.marker, "s");
        assert!(curve.labels.is_empty());
        assert!(curve.label_style.is_none());
        assert!(!curve.is_standard());
        assert_eq!(curve.legend, "pH = 3, [ions] = 1.0E-03 mol·L⁻¹");

        let expected = cr.nernst(3.0, 1e-3, 298.15).unwrap();
        let expected_points = expected.weighted_points();
        for ((charge, y), (e_charge, e_y)) in curve.points.iter().zip(expected_points) {
            assert_eq!(*charge, e_charge);
            assert_relative_eq!(*y, e_y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_not_standard_basic_curve() {
        let cr = element("Cr");
        let diagram = FrostDiagramBuilder::new(&cr)
            .plot_standards(false)
            .conditions(12.0, 1.0, 298.15)
            .build()
            .unwrap();
        assert_eq!(diagram.curves.len(), 2);
        assert_eq!(diagram.curves[0].branch, Branch::Basic);
        assert_eq!(diagram.curves[1].branch, Branch::Basic);
        assert_eq!(diagram.curves[1].style.color, "orange");
        // the chromate line depends on pH: pH 12 differs from pH 14
        let standard = diagram.curves[0].points[3].1;
        let shifted = diagram.curves[1].points[3].1;
        assert!((standard - shifted).abs() > 1e-3);
    }

    #[test]
    fn test_plot_standards_ignores_conditions() {
        let cr = element("Cr");
        let diagram = FrostDiagramBuilder::new(&cr)
            .conditions(3.0, 1e-3, 310.0)
            .build()
            .unwrap();
        assert_eq!(diagram.curves.len(), 2);
        assert!(diagram.curves.iter().all(|curve| curve.is_standard()));
    }

    #[test]
    fn test_labels_and_legend_switches() {
        let bi = element("Bi");
        let diagram = FrostDiagramBuilder::new(&bi)
            .chemical_labels(false)
            .legend(false)
            .build()
            .unwrap();
        assert!(!diagram.show_legend);
        assert_eq!(diagram.x_ticks, vec![-3, -2, -1, 0, 1, 2, 3]);
        for curve in &diagram.curves {
            assert!(curve.labels.is_empty());
            assert!(curve.label_style.is_none());
        }
    }

    #[test]
    fn test_fixed_label_layout() {
        let cr = element("Cr");
        let builder = FrostDiagramBuilder::new(&cr).label_layout(LabelLayout::new(0.1, 0.1));
        let curves = builder.standard_curves(Solution::Acid, true).unwrap();
        assert_eq!(curves.len(), 1);
        // labels far apart stay at their points, shifted by the text offset
        for label in &curves[0].labels {
            assert!(!label.arrow);
            assert_relative_eq!(label.text_x, label.charge as f64 + 0.1, epsilon = 1e-12);
            assert_relative_eq!(label.text_y, label.y - 0.05, epsilon = 1e-12);
        }
        let standard = cr
            .nernst_at(Conditions::standard_acid())
            .unwrap()
            .points(TableColumn::Potential);
        assert_eq!(curves[0].points, standard);
    }

    #[test]
    fn test_invalid_conditions() {
        let cr = element("Cr");
        let res = FrostDiagramBuilder::new(&cr)
            .plot_standards(false)
            .conditions(5.0, 0.0, 298.15)
            .build();
        assert!(matches!(res, Err(ElectrochemError::InvalidConditions(_))));
    }

    #[test]
    fn test_element_without_data() {
        let table = bundled_reference_table().unwrap();
        let none = ElementData::from_table(&table, "Xx").unwrap();
        let diagram = FrostDiagramBuilder::new(&none).build().unwrap();
        assert!(diagram.x_ticks.is_empty());
        assert!(diagram.curves.iter().all(|curve| curve.points.is_empty()));
        assert!(diagram.y_range().is_none());
    }

    #[test]
    fn test_json_export() {
        let cr = element("Cr");
        let diagram = FrostDiagramBuilder::new(&cr)
            .plot_standards(false)
            .conditions(5.0, 5e-4, 298.15)
            .build()
            .unwrap();
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        diagram.save_json(path).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("Frost diagram - Cr"));
        assert!(content.contains("5.0E-04"));
        let restored = FrostDiagram::from_json(&content).unwrap();
        assert_eq!(restored.title, diagram.title);
        assert_eq!(restored.curves.len(), diagram.curves.len());
        for (a, b) in restored.curves[1].points.iter().zip(&diagram.curves[1].points) {
            assert_eq!(a.0, b.0);
            assert_relative_eq!(a.1, b.1, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_pretty_tables() {
        let cr = element("Cr");
        let table = cr.nernst(3.0, 1e-3, 298.15).unwrap();
        let pretty = table.to_pretty_table();
        assert_eq!(pretty.len(), table.len() + 1);
        table.pretty_print();
        FrostDiagramBuilder::new(&cr)
            .build()
            .unwrap()
            .pretty_print();
    }
}
