use bigdecimal::{BigDecimal, ParseBigDecimalError, ToPrimitive};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

const SCALE: i64 = 10_000;

#[derive(Debug, Clone, Copy, Default)]
/// A monetary value stored as a signed count of 1/10,000ths of a currency unit.
///
/// # Why Use Money? It is a Value Object.
/// Wrapping an `i64` gives type safety and keeps amounts from being confused
/// with other numeric values. Storing money as an integer in the smallest
/// unit avoids the floating-point drift that repeated additions of binary
/// floats would accumulate. Amounts are signed: credits are positive,
/// debits negative, so a transaction log can store exact deltas.
///
/// # Examples
/// ```
/// use bank_ledger::common::money::Money;
///
/// let amount: Money = "1.2500".parse().unwrap();
/// assert_eq!(amount.minor_units(), 12500);
/// assert_eq!(amount.to_string(), "1.2500");
/// assert_eq!((-amount).minor_units(), -12500);
/// ```
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Build from a raw count of 1/10,000ths of a unit.
    pub const fn from_minor_units(value: i64) -> Self {
        Money(value)
    }

    /// Build from a whole number of currency units.
    pub const fn from_units(value: i64) -> Self {
        Money(value * SCALE)
    }

    pub fn minor_units(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn to_string_4dp(&self) -> String {
        let bd = BigDecimal::from(self.0) / BigDecimal::from(SCALE);
        format!("{:.4}", bd)
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;

        // Scale to 4 decimal places
        let scaled = (bd * BigDecimal::from(SCALE)).round(0);
        let value: i64 = scaled
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))?;

        Ok(Money(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_4dp())
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.0.cmp(&other.0))
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Neg for Money {
    type Output = Money;
    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        *self = *self - rhs;
    }
}
