use super::RingElement;
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use std::fmt;

impl fmt::Display for RingElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Alternate (`{:#}`) triggers full expansion
        if f.alternate() {
            return self.fmt_full(f);
        }
        // Default: truncated with precision or 3
        let num = f.precision().unwrap_or(3);
        self.fmt_truncated(f, num)
    }
}

impl RingElement {
    /// Truncated display: first `num` and last `num` coefficients
    fn fmt_truncated(&self, f: &mut fmt::Formatter<'_>, num: usize) -> fmt::Result {
        let coeffs = self.coefficients();
        let len = coeffs.len();
        write!(f, "Poly<{}>[", len)?;

        if len <= num * 2 {
            for (i, c) in coeffs.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", c)?;
            }
        } else {
            for (i, c) in coeffs[..num].iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", c)?;
            }
            write!(f, ", …")?;
            for c in &coeffs[len - num..] {
                write!(f, ", {}", c)?;
            }
        }
        write!(f, "]")
    }

    /// Full display in standard form, lowest degree first
    fn fmt_full(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut first = true;
        for (i, c) in self.coefficients().iter().enumerate() {
            if c.is_zero() {
                continue;
            }
            if first {
                if c.is_negative() {
                    write!(f, "-")?;
                }
            } else if c.is_negative() {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            first = false;
            write_term(f, &c.abs(), i)?;
        }
        Ok(())
    }
}

fn write_term(f: &mut fmt::Formatter<'_>, magnitude: &BigInt, power: usize) -> fmt::Result {
    match (power, magnitude.is_one()) {
        (0, _) => write!(f, "{}", magnitude),
        (1, true) => write!(f, "x"),
        (1, false) => write!(f, "{}*x", magnitude),
        (_, true) => write!(f, "x^{}", power),
        (_, false) => write!(f, "{}*x^{}", magnitude, power),
    }
}
