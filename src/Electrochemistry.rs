/// naming convention of the reference table columns for a given element
pub mod column_schema;
/// parser of the compact balance encoding `[a, b, c, d, m]` of a half-reaction
pub mod balance_parser;
/// stoichiometric coefficients of acidic and basic half-reactions
/// Acid equation:
/// x[Ha Xb Oc]^m + yH+ + ne -> wXd + zH2O
/// [a, b, c, d, m] -> (x, y, n, w, z)
///
/// Basic equation:
/// x[Ha Xb Oc]^m + rH2O + ne -> wXd + zH2O + sOH-
/// [a, b, c, d, m] -> (x, r, n, w, z, s)
pub mod coefficients;
/// physical constants and fixed policy values
pub mod constants;
/// error types of the electrochemistry engine
pub mod electrochem_errors;
/// data of one element: standard potentials per electron, acid and basic branch tables
/// # Examples
/// ```
/// use RedoxFrost::Electrochemistry::element_data::ElementData;
/// use RedoxFrost::Utils::load_from_file::bundled_reference_table;
/// let table = bundled_reference_table().unwrap();
/// let cr = ElementData::from_table(&table, "Cr").unwrap();
/// assert!(!cr.acid.is_empty());
/// assert!(!cr.basic.is_empty());
/// ```
pub mod element_data;
/// Nernst equation: potentials at arbitrary pH, ion concentration and temperature
/// # Examples
/// ```
/// use RedoxFrost::Electrochemistry::element_data::ElementData;
/// use RedoxFrost::Utils::load_from_file::bundled_reference_table;
/// use RedoxFrost::Electrochemistry::column_schema::Branch;
/// let table = bundled_reference_table().unwrap();
/// let cr = ElementData::from_table(&table, "Cr").unwrap();
/// let res = cr.nernst(3.0, 1e-3, 310.0).unwrap();
/// assert_eq!(res.branch, Branch::Acid);
/// for (charge, value) in res.weighted_points() {
///     println!("{} {}", charge, value);
/// }
/// ```
pub mod nernst_api;
/// the process-wide reference table of standard potentials
pub mod reference_table;
