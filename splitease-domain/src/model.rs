use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use rust_decimal::{Decimal, RoundingStrategy};
use smol_str::SmolStr;

/// Stable roster identifier.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticipantId(SmolStr);

impl ParticipantId {
    pub fn new(id: impl Into<SmolStr>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpenseId(pub u64);

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: SmolStr,
    pub email: Option<SmolStr>,
}

impl Participant {
    pub fn new(id: impl Into<SmolStr>, name: impl Into<SmolStr>) -> Self {
        Self {
            id: ParticipantId::new(id),
            name: name.into(),
            email: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<SmolStr>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// Decimal amount of money. Positive balances are owed to the holder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);
    /// One cent, the smallest amount the ledger distinguishes from zero.
    pub const CENT: Self = Self(Decimal::from_parts(1, 0, 0, false, 2));
    /// Largest amount a single ledger expense may carry.
    pub const MAX_EXPENSE: Self = Self(Decimal::from_parts(1_000_000_000, 0, 0, false, 0));

    pub fn new(num: i64, scale: u32) -> Self {
        Self(Decimal::new(num, scale))
    }

    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Truncates toward zero to two decimal places.
    pub fn truncate_cents(self) -> Self {
        Self(self.0.round_dp_with_strategy(2, RoundingStrategy::ToZero))
    }

    /// Whether `|self - other|` is within `tolerance`. Differences too large
    /// to represent are never within it.
    pub fn approx_eq(self, other: Self, tolerance: Self) -> bool {
        self.checked_sub(other)
            .is_some_and(|difference| difference.abs() <= tolerance)
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    pub fn checked_div(self, divisor: i64) -> Option<Self> {
        self.0.checked_div(Decimal::from(divisor)).map(Self)
    }

    pub fn checked_mul(self, factor: i64) -> Option<Self> {
        self.0.checked_mul(Decimal::from(factor)).map(Self)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s).map(Self)
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Transportation,
    Entertainment,
    Shopping,
    Utilities,
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Transportation,
        Category::Entertainment,
        Category::Shopping,
        Category::Utilities,
        Category::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Transportation => "transportation",
            Category::Entertainment => "entertainment",
            Category::Shopping => "shopping",
            Category::Utilities => "utilities",
            Category::Other => "other",
        }
    }

    /// Unrecognized names fall back to [`Category::Other`].
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(name))
            .unwrap_or_default()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-participant shares of one expense, in insertion order.
pub type Splits = IndexMap<ParticipantId, Money>;

#[derive(Clone, Debug, PartialEq)]
pub struct Expense {
    pub id: ExpenseId,
    pub description: SmolStr,
    pub amount: Money,
    pub paid_by: ParticipantId,
    pub splits: Splits,
    pub category: Category,
    pub date: DateTime<Utc>,
}

impl Expense {
    /// Sum of all shares, saturating at the representable bounds.
    pub fn split_total(&self) -> Money {
        self.splits
            .values()
            .fold(Money::ZERO, |total, share| total.saturating_add(*share))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Balance {
    pub participant_id: ParticipantId,
    pub value: Money,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub from: ParticipantId,
    pub to: ParticipantId,
    pub amount: Money,
}
