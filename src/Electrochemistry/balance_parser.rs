//! # Balance encoding
//!
//! The reference table stores the atom and charge content of each half-reaction as a textual
//! literal of five numbers, e.g. `[0, 2, 7, 1, -2]` for Cr2O7^{2-} -> Cr:
//! - `a` hydrogen atoms of the oxidized species
//! - `b` heteroatoms of the oxidized species
//! - `c` oxygen atoms of the oxidized species
//! - `d` heteroatoms of the reduced species
//! - `m` net charge of the oxidized species
//!
//! Accepted grammar: `[` or `(`, exactly five signed decimal numbers separated by commas,
//! an optional trailing comma, and the matching closing bracket. Nothing else is evaluated.
use super::electrochem_errors::BalanceError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::LazyLock;

static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$").expect("number pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceEncoding {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub m: f64,
}

impl BalanceEncoding {
    pub fn new(a: f64, b: f64, c: f64, d: f64, m: f64) -> Self {
        Self { a, b, c, d, m }
    }

    pub fn as_array(&self) -> [f64; 5] {
        [self.a, self.b, self.c, self.d, self.m]
    }
}

impl TryFrom<&[f64]> for BalanceEncoding {
    type Error = BalanceError;
    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        match values {
            [a, b, c, d, m] => Ok(Self::new(*a, *b, *c, *d, *m)),
            _ => Err(BalanceError::Malformed {
                literal: format!("{:?}", values),
                reason: format!("expected 5 numbers, found {}", values.len()),
            }),
        }
    }
}

impl FromStr for BalanceEncoding {
    type Err = BalanceError;
    fn from_str(literal: &str) -> Result<Self, Self::Err> {
        parse_balance(literal)
    }
}

/// parses a literal like `[0, 2, 7, 1, -2]`
pub fn parse_balance(literal: &str) -> Result<BalanceEncoding, BalanceError> {
    let malformed = |reason: String| BalanceError::Malformed {
        literal: literal.to_string(),
        reason,
    };

    let trimmed = literal.trim();
    let inner = match (trimmed.chars().next(), trimmed.chars().last()) {
        (Some('['), Some(']')) | (Some('('), Some(')')) if trimmed.len() >= 2 => {
            &trimmed[1..trimmed.len() - 1]
        }
        _ => {
            return Err(malformed(
                "expected a bracketed sequence like [a, b, c, d, m]".to_string(),
            ));
        }
    };

    let mut items: Vec<&str> = inner.split(',').map(str::trim).collect();
    // one trailing comma is allowed
    if items.len() > 1 && items.last() == Some(&"") {
        items.pop();
    }

    let mut values = Vec::with_capacity(5);
    for item in items {
        if !NUMBER.is_match(item) {
            return Err(malformed(format!("{:?} is not a number", item)));
        }
        let value: f64 = item
            .parse()
            .map_err(|e| malformed(format!("{:?}: {}", item, e)))?;
        if !value.is_finite() {
            return Err(malformed(format!("{:?} is out of range", item)));
        }
        values.push(value);
    }

    BalanceEncoding::try_from(values.as_slice()).map_err(|_| {
        malformed(format!("expected 5 numbers, found {}", values.len()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_balance() {
        let bal = parse_balance("[0, 2, 7, 1, -2]").unwrap();
        assert_eq!(bal, BalanceEncoding::new(0.0, 2.0, 7.0, 1.0, -2.0));

        let bal: BalanceEncoding = " ( 3,1 ,0, 1,0 ) ".parse().unwrap();
        assert_eq!(bal.as_array(), [3.0, 1.0, 0.0, 1.0, 0.0]);

        let bal = parse_balance("[1.5, +2, .5, 2e0, -1,]").unwrap();
        assert_eq!(bal.as_array(), [1.5, 2.0, 0.5, 2.0, -1.0]);
    }

    #[test]
    fn test_parse_balance_rejects_malformed() {
        let bad = [
            "",
            "[]",
            "[0, 2, 7, 1]",
            "[0, 2, 7, 1, -2, 5]",
            "0, 2, 7, 1, -2",
            "[0, 2, 7, 1, -2)",
            "[0, two, 7, 1, -2]",
            "[0, 2, 7, 1, 1/2]",
            "[0, 2, 7, 1, __import__('os')]",
            "[0, 2, 7, 1, nan]",
            "[0, 2,, 7, 1]",
            "[0, 2, 7, 1, -2,,]",
            "[1e400, 1, 0, 1, 0]",
            "[0, 1, 0, 1, -1e309]",
        ];
        for literal in bad {
            let res = parse_balance(literal);
            assert!(
                matches!(res, Err(BalanceError::Malformed { .. })),
                "literal {:?} should be rejected",
                literal
            );
        }
    }

    #[test]
    fn test_arity_message() {
        let err = parse_balance("[1, 2, 3]").unwrap_err();
        assert!(err.to_string().contains("expected 5 numbers, found 3"));
    }
}
