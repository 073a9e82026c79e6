use super::balance_parser::BalanceEncoding;
use super::column_schema::Branch;
use super::electrochem_errors::BalanceError;
use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

/// coefficients of x[Ha Xb Oc]^m + yH+ + ne -> wXd + zH2O
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AcidCoefficients {
    pub x: f64,
    pub y: f64,
    pub n: f64,
    pub w: f64,
    pub z: f64,
}

/// coefficients of x[Ha Xb Oc]^m + rH2O + ne -> wXd + zH2O + sOH-
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasicCoefficients {
    pub x: f64,
    pub r: f64,
    pub n: f64,
    pub w: f64,
    pub z: f64,
    pub s: f64,
}

impl AcidCoefficients {
    pub fn as_tuple(&self) -> (f64, f64, f64, f64, f64) {
        (self.x, self.y, self.n, self.w, self.z)
    }
}

impl BasicCoefficients {
    pub fn as_tuple(&self) -> (f64, f64, f64, f64, f64, f64) {
        (self.x, self.r, self.n, self.w, self.z, self.s)
    }
}

/// acid half-reaction from its balance encoding
pub fn solve_acid(bal: &BalanceEncoding) -> Result<AcidCoefficients, BalanceError> {
    let BalanceEncoding { a, b, c, d, m } = *bal;
    if d == 0.0 {
        return Err(BalanceError::ZeroReducedCount);
    }
    let x = 1.0;
    let z = c;
    let w = b / d;
    let y = 2.0 * z - a;
    let n = m + y;
    Ok(AcidCoefficients { x, y, n, w, z })
}

/// basic half-reaction from its balance encoding
pub fn solve_basic(bal: &BalanceEncoding) -> Result<BasicCoefficients, BalanceError> {
    let BalanceEncoding { a, b, c, d, m } = *bal;
    if d == 0.0 {
        return Err(BalanceError::ZeroReducedCount);
    }
    let x = 1.0;
    let w = b / d;
    let z = c;
    let r = 2.0 * z - a;
    let s = r;
    let n = m + s;
    Ok(BasicCoefficients { x, r, n, w, z, s })
}

/// the part of a half-reaction the Nernst equation needs
#[enum_dispatch]
pub trait HalfReaction {
    /// electrons transferred
    fn electrons(&self) -> f64;
    /// the reduced (reference) species has unit activity
    fn elide_reference(&mut self);
    /// the oxidized species has unit activity
    fn elide_species(&mut self);
    /// argument of the logarithm in the Nernst equation; `medium` is the hydronium
    /// activity for the acid template and the hydroxide activity for the basic one
    fn activity_quotient(&self, conc_ion: f64, medium: f64) -> f64;
}

impl HalfReaction for AcidCoefficients {
    fn electrons(&self) -> f64 {
        self.n
    }
    fn elide_reference(&mut self) {
        self.w = 0.0;
    }
    fn elide_species(&mut self) {
        self.x = 0.0;
    }
    fn activity_quotient(&self, conc_ion: f64, hydronium: f64) -> f64 {
        conc_ion.powf(self.w) / (conc_ion.powf(self.x) * hydronium.powf(self.y))
    }
}

impl HalfReaction for BasicCoefficients {
    fn electrons(&self) -> f64 {
        self.n
    }
    fn elide_reference(&mut self) {
        self.w = 0.0;
    }
    fn elide_species(&mut self) {
        self.x = 0.0;
    }
    fn activity_quotient(&self, conc_ion: f64, hydroxide: f64) -> f64 {
        (conc_ion.powf(self.w) * hydroxide.powf(self.s)) / conc_ion.powf(self.x)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[enum_dispatch(HalfReaction)]
pub enum DerivedCoefficients {
    Acid(AcidCoefficients),
    Basic(BasicCoefficients),
}

impl DerivedCoefficients {
    /// solves the template of the given branch
    pub fn solve(branch: Branch, bal: &BalanceEncoding) -> Result<Self, BalanceError> {
        match branch {
            Branch::Acid => solve_acid(bal).map(DerivedCoefficients::Acid),
            Branch::Basic => solve_basic(bal).map(DerivedCoefficients::Basic),
        }
    }

    pub fn branch(&self) -> Branch {
        match self {
            DerivedCoefficients::Acid(_) => Branch::Acid,
            DerivedCoefficients::Basic(_) => Branch::Basic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bal(a: f64, b: f64, c: f64, d: f64, m: f64) -> BalanceEncoding {
        BalanceEncoding::new(a, b, c, d, m)
    }

    #[test]
    fn test_dichromate_to_chromium_acid() {
        // Cr2O7^{2-} -> Cr
        let res = solve_acid(&bal(0.0, 2.0, 7.0, 1.0, -2.0)).unwrap();
        assert_eq!(res.as_tuple(), (1.0, 14.0, 12.0, 2.0, 7.0));
    }

    #[test]
    fn test_chromate_to_chromium_basic() {
        // CrO4^{2-} -> Cr
        let res = solve_basic(&bal(0.0, 1.0, 4.0, 1.0, -2.0)).unwrap();
        assert_eq!(res.as_tuple(), (1.0, 8.0, 6.0, 1.0, 4.0, 8.0));
    }

    #[test]
    fn test_bih3_to_bi() {
        let res = solve_acid(&bal(3.0, 1.0, 0.0, 1.0, 0.0)).unwrap();
        assert_eq!(res.as_tuple(), (1.0, -3.0, -3.0, 1.0, 0.0));
        let res = solve_basic(&bal(3.0, 1.0, 0.0, 1.0, 0.0)).unwrap();
        assert_eq!(res.as_tuple(), (1.0, -3.0, -3.0, 1.0, 0.0, -3.0));
    }

    #[test]
    fn test_water_to_oxygen() {
        // H2O -> O2
        let res = solve_acid(&bal(2.0, 1.0, 0.0, 2.0, 0.0)).unwrap();
        assert_eq!(res.as_tuple(), (1.0, -2.0, -2.0, 0.5, 0.0));
        // OH- -> O2
        let res = solve_basic(&bal(1.0, 1.0, 0.0, 2.0, -1.0)).unwrap();
        assert_eq!(res.as_tuple(), (1.0, -1.0, -2.0, 0.5, 0.0, -1.0));
    }

    #[test]
    fn test_electron_balance() {
        let encodings = [
            bal(0.0, 2.0, 7.0, 1.0, -2.0),
            bal(0.0, 1.0, 4.0, 1.0, -2.0),
            bal(3.0, 1.0, 0.0, 1.0, 0.0),
            bal(1.0, 1.0, 0.0, 2.0, -1.0),
            bal(4.0, 1.0, 4.0, 1.0, 0.0),
            bal(0.0, 2.0, 3.0, 2.0, 0.0),
            bal(0.5, 1.5, 2.5, 3.0, 1.0),
        ];
        for e in encodings {
            let acid = solve_acid(&e).unwrap();
            assert_eq!(acid.x, 1.0);
            assert_eq!(acid.n, e.m + 2.0 * e.c - e.a);
            let basic = solve_basic(&e).unwrap();
            assert_eq!(basic.x, 1.0);
            assert_eq!(basic.s, basic.r);
            assert_eq!(basic.n, acid.n);
        }
    }

    #[test]
    fn test_zero_reduced_count() {
        let e = bal(0.0, 1.0, 0.0, 0.0, 2.0);
        assert_eq!(solve_acid(&e), Err(BalanceError::ZeroReducedCount));
        assert_eq!(solve_basic(&e), Err(BalanceError::ZeroReducedCount));
        assert!(DerivedCoefficients::solve(Branch::Basic, &e).is_err());
    }

    #[test]
    fn test_elisions_and_quotient() {
        let mut coeffs =
            DerivedCoefficients::solve(Branch::Acid, &bal(0.0, 2.0, 7.0, 1.0, -2.0)).unwrap();
        assert_eq!(coeffs.branch(), Branch::Acid);
        assert_eq!(coeffs.electrons(), 12.0);
        // c^2 / (c * 1^14) at c = 0.5
        assert_eq!(coeffs.activity_quotient(0.5, 1.0), 0.5);
        coeffs.elide_reference();
        coeffs.elide_species();
        // only the hydronium term remains
        assert_eq!(coeffs.activity_quotient(0.5, 0.1), 1.0 / 0.1f64.powf(14.0));

        let mut coeffs =
            DerivedCoefficients::solve(Branch::Basic, &bal(0.0, 1.0, 4.0, 1.0, -2.0)).unwrap();
        assert_eq!(coeffs.branch(), Branch::Basic);
        coeffs.elide_species();
        // c^1 * g^8 / c^0
        assert_eq!(coeffs.activity_quotient(2.0, 1.0), 2.0);
    }
}
