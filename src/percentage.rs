use std::fmt::{self, Display};

/// A rate printed the way box scores print them: `.291`, `1.044`, `128`.
///
/// The leading zero is dropped at three or more digits of precision unless the alternate flag
/// (`{:#}`) is set.
#[derive(Debug, Clone, Copy)]
pub struct Pct<const PRECISION: u8>(pub f64);

/// A value already multiplied by 100, printed with one decimal and a percent sign.
#[derive(Debug, Clone, Copy)]
pub struct Percent(pub f64);

impl<const PRECISION: u8> Display for Pct<PRECISION> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_infinite() {
            f.write_str(if self.0 < 0.0 { "-inf" } else { "inf" })
        } else if self.0.is_nan() {
            write!(f, "NaN")
        } else {
            let mult_f = 10.0_f64.powi(PRECISION.into());
            let mult_i = 10_u64.pow(PRECISION.into());
            let scaled = (self.0 * mult_f).round();
            let frac = scaled.abs() as u64;
            if scaled < 0.0 {
                f.write_str("-")?;
            }
            if f.alternate() || PRECISION < 3 || frac >= mult_i {
                write!(f, "{}", frac / mult_i)?;
            }
            if PRECISION > 0 {
                write!(f, ".{:0>width$}", frac % mult_i, width = PRECISION.into())?;
            }
            Ok(())
        }
    }
}

impl Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", Pct::<1>(self.0))
    }
}
