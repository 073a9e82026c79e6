/// plot-ready data of a Frost diagram: curves, styles, legend, ticks and title
/// # Examples
/// ```
/// use RedoxFrost::Electrochemistry::element_data::ElementData;
/// use RedoxFrost::Utils::load_from_file::bundled_reference_table;
/// use RedoxFrost::FrostDiagram::frost_builder::FrostDiagramBuilder;
/// let table = bundled_reference_table().unwrap();
/// let bi = ElementData::from_table(&table, "Bi").unwrap();
/// let diagram = FrostDiagramBuilder::new(&bi).build().unwrap();
/// diagram.pretty_print();
/// ```
pub mod frost_builder;
/// non-overlapping placement of chemical labels
pub mod annotations;
/// console tables and JSON export
pub mod frost_output;

mod frost_tests;
