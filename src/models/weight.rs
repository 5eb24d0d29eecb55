use serde::Serialize;

use crate::error::{HorseDietError, Result};

/// Body weight in lbs. Always finite and greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct BodyWeight(f64);

impl BodyWeight {
    pub fn new(lbs: f64) -> Result<Self> {
        if !lbs.is_finite() || lbs <= 0.0 {
            return Err(HorseDietError::InvalidWeight(format!(
                "{} (must be a number greater than 0)",
                lbs
            )));
        }
        Ok(Self(lbs))
    }

    #[inline]
    pub fn lbs(self) -> f64 {
        self.0
    }
}

impl std::str::FromStr for BodyWeight {
    type Err = HorseDietError;

    fn from_str(s: &str) -> Result<Self> {
        let lbs: f64 = s
            .trim()
            .parse()
            .map_err(|_| HorseDietError::InvalidWeight(format!("'{}' is not a number", s)))?;
        Self::new(lbs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_positive() {
        let w = BodyWeight::new(1000.0).unwrap();
        assert_eq!(w.lbs(), 1000.0);
    }

    #[test]
    fn test_rejects_non_positive_and_non_finite() {
        assert!(BodyWeight::new(0.0).is_err());
        assert!(BodyWeight::new(-5.0).is_err());
        assert!(BodyWeight::new(f64::NAN).is_err());
        assert!(BodyWeight::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_parse() {
        let w: BodyWeight = " 1100.5 ".parse().unwrap();
        assert_eq!(w.lbs(), 1100.5);

        let err = "heavy".parse::<BodyWeight>().unwrap_err();
        assert!(matches!(err, HorseDietError::InvalidWeight(_)));
    }
}
