use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

use super::error::InvalidOperand;
use super::expr::OperandKind;

/// A number decomposed into the CLDR plural operands.
///
/// Built from a [`Decimal`] (whose scale counts as visible fraction digits),
/// from integers, from `f64`, or from decimal text. Text is the only way to
/// express trailing zeros: `"1.0"` has `v = 1` while `1.0_f64` has `v = 0`.
///
/// ```
/// use plurule::Operands;
///
/// let ops: Operands = "1.20".parse().unwrap();
/// assert_eq!(ops.v(), 2);
/// assert_eq!(ops.w(), 1);
/// assert_eq!(ops.f().to_string(), "20");
/// assert_eq!(ops.t().to_string(), "2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operands {
    n: Decimal,
    i: Decimal,
    v: u32,
    w: u32,
    f: Decimal,
    t: Decimal,
}

impl Operands {
    /// Look up one operand by kind.
    #[must_use]
    pub fn get(&self, kind: OperandKind) -> Decimal {
        match kind {
            OperandKind::N => self.n,
            OperandKind::I => self.i,
            OperandKind::V => Decimal::from(self.v),
            OperandKind::W => Decimal::from(self.w),
            OperandKind::F => self.f,
            OperandKind::T => self.t,
        }
    }

    #[must_use]
    pub fn n(&self) -> Decimal {
        self.n
    }

    #[must_use]
    pub fn i(&self) -> Decimal {
        self.i
    }

    #[must_use]
    pub fn v(&self) -> u32 {
        self.v
    }

    #[must_use]
    pub fn w(&self) -> u32 {
        self.w
    }

    #[must_use]
    pub fn f(&self) -> Decimal {
        self.f
    }

    #[must_use]
    pub fn t(&self) -> Decimal {
        self.t
    }

    fn integral(n: Decimal) -> Self {
        Self {
            n,
            i: n,
            v: 0,
            w: 0,
            f: Decimal::ZERO,
            t: Decimal::ZERO,
        }
    }
}

impl From<Decimal> for Operands {
    fn from(value: Decimal) -> Self {
        let n = value.abs();
        let v = n.scale();
        let scale = 10_i128.pow(v);
        let fraction = n.mantissa() % scale;

        let (mut t, mut w) = (fraction, v);
        while w > 0 && t % 10 == 0 {
            t /= 10;
            w -= 1;
        }

        // Fraction digits are a remainder of the 96-bit mantissa, so they fit.
        Self {
            n,
            i: n.trunc(),
            v,
            w,
            f: Decimal::from_i128_with_scale(fraction, 0),
            t: Decimal::from_i128_with_scale(t, 0),
        }
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operands {
                fn from(value: $ty) -> Self {
                    Operands::integral(Decimal::from(value).abs())
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl TryFrom<f64> for Operands {
    type Error = InvalidOperand;

    /// Uses the shortest decimal text that round-trips the float, so `0.1`
    /// yields `v = 1` rather than the binary expansion.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(InvalidOperand::NonFinite(value));
        }
        Ok(Operands::from(exact_decimal(&value.to_string())?))
    }
}

impl TryFrom<f32> for Operands {
    type Error = InvalidOperand;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(InvalidOperand::NonFinite(f64::from(value)));
        }
        Ok(Operands::from(exact_decimal(&value.to_string())?))
    }
}

impl FromStr for Operands {
    type Err = InvalidOperand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let unsigned = text.strip_prefix('-').unwrap_or(text);
        let well_formed = match unsigned.split_once('.') {
            Some((int, frac)) => is_digits(int) && is_digits(frac),
            None => is_digits(unsigned),
        };
        if !well_formed {
            return Err(InvalidOperand::Malformed(s.to_owned()));
        }
        Ok(Operands::from(exact_decimal(text)?))
    }
}

impl TryFrom<&str> for Operands {
    type Error = InvalidOperand;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<&String> for Operands {
    type Error = InvalidOperand;

    fn try_from(value: &String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<&Operands> for Operands {
    fn from(value: &Operands) -> Self {
        value.clone()
    }
}

/// Most fraction digits a [`Decimal`] can carry.
const MAX_FRACTION_DIGITS: usize = 28;

/// Parse decimal text without rounding; `Decimal::from_str` would round
/// surplus fraction digits away.
fn exact_decimal(text: &str) -> Result<Decimal, InvalidOperand> {
    let digits = text.split_once('.').map_or(0, |(_, fraction)| fraction.len());
    let out_of_range = || InvalidOperand::OutOfRange(text.to_owned());
    if digits > MAX_FRACTION_DIGITS {
        return Err(out_of_range());
    }
    let decimal = Decimal::from_str(text).map_err(|_| out_of_range())?;
    if decimal.scale() as usize != digits {
        return Err(out_of_range());
    }
    Ok(decimal)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for Operands {
    /// Renders `n` with its visible fraction digits, e.g. `1.20`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.n)
    }
}
