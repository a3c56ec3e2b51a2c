use bigdecimal::{BigDecimal, ParseBigDecimalError, ToPrimitive};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Mul};
const PENCE_PER_POUND: i64 = 100;

#[derive(Debug, Clone, Copy, Default)]
/// A price held as a whole number of pence.
///
/// Both catalogs store prices as integers (the primary one split into pounds and
/// pence columns, the partner one as a single pence column), so `Money` never
/// touches floating point. Decimal text is only produced or parsed at the edges.
/// [`Money::from_parts`] and `*` saturate at the `i64` bounds; the `checked_`
/// forms report overflow instead.
///
/// # Examples
/// ```
/// use stock_control::common::money::Money;
///
/// let price = Money::from_parts(88, 50);
/// assert_eq!(price.as_pence(), 8850);
/// assert_eq!(price.pounds(), 88);
/// assert_eq!(price.pence(), 50);
/// assert_eq!(price.to_string_2dp(), "88.50");
/// ```
pub struct Money(i64);

impl Money {
    pub fn new(pence: i64) -> Self {
        Self(pence)
    }

    pub fn from_parts(pounds: i64, pence: i64) -> Self {
        Money(pounds.saturating_mul(PENCE_PER_POUND).saturating_add(pence))
    }

    pub fn checked_from_parts(pounds: i64, pence: i64) -> Option<Self> {
        pounds
            .checked_mul(PENCE_PER_POUND)?
            .checked_add(pence)
            .map(Money)
    }

    pub fn checked_mul(self, quantity: i64) -> Option<Self> {
        self.0.checked_mul(quantity).map(Money)
    }

    pub fn zero() -> Self {
        Money(0)
    }

    pub fn as_pence(&self) -> i64 {
        self.0
    }

    /// Whole pounds, truncated toward zero.
    pub fn pounds(&self) -> i64 {
        self.0 / PENCE_PER_POUND
    }

    /// Pence left over after [`Money::pounds`].
    pub fn pence(&self) -> i64 {
        self.0 % PENCE_PER_POUND
    }

    pub fn to_string_2dp(&self) -> String {
        let bd = BigDecimal::from(self.0) / BigDecimal::from(PENCE_PER_POUND);
        format!("{:.2}", bd)
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim().trim_start_matches('£');
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty price".into()));
        }

        let bd: BigDecimal = t.parse()?;

        let scaled = (bd * BigDecimal::from(PENCE_PER_POUND)).round(0);
        let value: i64 = scaled
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("price overflow".into()))?;

        Ok(Money(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_2dp())
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

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Scales a unit price by a quantity.
impl Mul<i64> for Money {
    type Output = Money;
    fn mul(self, quantity: i64) -> Money {
        Money(self.0.saturating_mul(quantity))
    }
}
