use std::fmt::{self, Display};

/// Shown for a rate with no denominator, like a batting average with no at bats.
pub const PLACEHOLDER: &str = "--";

#[derive(Debug, Clone, Copy)]
pub struct Pct<const PRECISION: u8>(pub f64);

impl<const PRECISION: u8> Pct<PRECISION> {
    pub fn new<T>(numerator: T, denominator: T) -> Pct<PRECISION>
    where
        f64: From<T>,
    {
        Pct(f64::from(numerator) / f64::from(denominator))
    }
}

impl<const PRECISION: u8> Display for Pct<PRECISION> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_infinite() {
            write!(f, "inf")
        } else if self.0.is_nan() {
            f.write_str(PLACEHOLDER)
        } else {
            let mult_f = 10.0_f64.powi(PRECISION.into());
            let mult_i = 10_u64.pow(PRECISION.into());
            let frac = (self.0 * mult_f).round() as u64;
            if PRECISION < 3 || frac >= mult_i {
                write!(f, "{}", frac / mult_i)?;
            }
            write!(f, ".{:0>width$}", frac % mult_i, width = PRECISION.into())
        }
    }
}

#[cfg(test)]
#[test]
fn test() {
    let avg: Pct<3> = Pct::new(3, 10);
    assert_eq!(avg.to_string(), ".300");
    float_cmp::assert_approx_eq!(f64, avg.0, 0.3);
    assert_eq!(Pct::<3>::new(1, 3).to_string(), ".333");
    assert_eq!(Pct::<3>::new(2, 3).to_string(), ".667");
    assert_eq!(Pct::<3>::new(4, 4).to_string(), "1.000");
    assert_eq!(Pct::<3>::new(0, 4).to_string(), ".000");
    assert_eq!(Pct::<3>::new(0, 0).to_string(), "--");
}
