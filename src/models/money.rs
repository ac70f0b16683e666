//! Amount type for rupee values
//!
//! Internally stores amounts as integer paise (i64) so aggregation never
//! loses precision. External statement sources hand us decimal rupees; the
//! `rupees` serde adapter converts at that boundary. Terminal output uses
//! Indian digit grouping (₹12,34,567.89).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount in paise (hundredths of a rupee)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    /// Create an amount from paise
    pub const fn from_paise(paise: i64) -> Self {
        Self(paise)
    }

    /// Create an amount from whole rupees
    pub const fn from_rupees(rupees: i64) -> Self {
        Self(rupees * 100)
    }

    /// Create an amount from a decimal rupee value, rounding to the paisa
    ///
    /// Statement sources report amounts as decimal numbers; everything past
    /// the paisa is rounding noise.
    pub fn from_decimal(rupees: f64) -> Self {
        Self((rupees * 100.0).round() as i64)
    }

    /// The zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Amount in paise
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Whole-rupee portion, truncated toward zero
    pub const fn rupee_part(&self) -> i64 {
        self.0 / 100
    }

    /// Paise portion (0-99)
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Amount as a decimal rupee value (for percentage math and CSV cells)
    pub fn to_rupees(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse an amount from user input
    ///
    /// Accepts "250", "250.75", "₹250.75", "-250", and grouped forms like
    /// "1,23,456.78". An integer is read as whole rupees. Paise beyond two
    /// digits are truncated.
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let s = s.trim();

        let (negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let s = s.strip_prefix('₹').unwrap_or(s).replace(',', "");

        if s.is_empty() {
            return Err(AmountParseError::InvalidFormat(s));
        }

        let paise = match s.split_once('.') {
            Some((rupees_str, paise_str)) => {
                let rupees: i64 = rupees_str
                    .parse()
                    .map_err(|_| AmountParseError::InvalidFormat(s.clone()))?;
                let paise: i64 = match paise_str.len() {
                    0 => 0,
                    1 => {
                        paise_str
                            .parse::<i64>()
                            .map_err(|_| AmountParseError::InvalidFormat(s.clone()))?
                            * 10
                    }
                    _ => paise_str
                        .get(..2)
                        .ok_or_else(|| AmountParseError::InvalidFormat(s.clone()))?
                        .parse()
                        .map_err(|_| AmountParseError::InvalidFormat(s.clone()))?,
                };
                rupees * 100 + paise
            }
            None => {
                s.parse::<i64>()
                    .map_err(|_| AmountParseError::InvalidFormat(s.clone()))?
                    * 100
            }
        };

        Ok(Self(if negative { -paise } else { paise }))
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

/// Group an unsigned rupee value the Indian way: last three digits, then
/// pairs ("1234567" -> "12,34,567").
fn group_indian(rupees: u64) -> String {
    let digits = rupees.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rupees = group_indian(self.rupee_part().unsigned_abs());
        if self.is_negative() {
            write!(f, "-₹{}.{:02}", rupees, self.paise_part())
        } else {
            write!(f, "₹{}.{:02}", rupees, self.paise_part())
        }
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

/// Serde adapter for fields carried as decimal rupees on the wire
pub mod rupees {
    use super::Amount;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(amount: &Amount, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(amount.to_rupees())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Amount, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Ok(Amount::from_decimal(value))
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    InvalidFormat(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}
