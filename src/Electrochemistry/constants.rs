/// J/(mol*K)
pub const GAS_CONSTANT: f64 = 8.3144598;
/// C/mol
pub const FARADAY_CONSTANT: f64 = 96485.33289;
/// K
pub const STANDARD_TEMPERATURE: f64 = 298.15;
/// mol/L
pub const STANDARD_CONCENTRATION: f64 = 1.0;
/// pH of the standard acid curve
pub const STANDARD_ACID_PH: f64 = 0.0;
/// pH of the standard basic curve
pub const STANDARD_BASIC_PH: f64 = 14.0;
/// pKw of water, used for hydroxide activity
pub const PKW: f64 = 14.0;
/// the acid branch is used up to and including this pH
pub const NEUTRAL_PH: f64 = 7.0;

/// state tags of condensed phases, their activity is unity
pub const SOLID_TAG: &str = "(s)";
pub const LIQUID_TAG: &str = "(l)";

/// true for solids and liquids
pub fn is_condensed(state: Option<&str>) -> bool {
    matches!(state, Some(SOLID_TAG) | Some(LIQUID_TAG))
}
