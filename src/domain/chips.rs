use core::iter::Sum;
use core::ops::{Add, AddAssign};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Верхний предел для вкладов, банка и накопленной статистики:
/// всё должно помещаться в i64, потому что выигрыши и итоги знаковые.
pub const MAX_AMOUNT: Chips = Chips(i64::MAX as u64);

/// Количество денег в целых единицах (без копеек).
/// Обёртка над u64, чтобы не путать с индексами и счётчиками.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Chips(pub u64);

impl Chips {
    pub const ZERO: Chips = Chips(0);

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Значение как знаковое число (для выигрышей/итогов лидерборда).
    pub fn as_signed(self) -> i64 {
        i64::try_from(self.0).unwrap_or(i64::MAX)
    }

    /// Прибавить знаковую дельту. `None`, если результат ушёл бы в минус.
    pub fn checked_add_signed(self, delta: i64) -> Option<Chips> {
        self.0.checked_add_signed(delta).map(Chips)
    }
}

impl fmt::Display for Chips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Chips {
    type Output = Chips;

    fn add(self, rhs: Chips) -> Self::Output {
        Chips(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Chips {
    fn add_assign(&mut self, rhs: Chips) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sum for Chips {
    fn sum<I: Iterator<Item = Chips>>(iter: I) -> Self {
        iter.fold(Chips::ZERO, |acc, c| acc + c)
    }
}

impl<'a> Sum<&'a Chips> for Chips {
    fn sum<I: Iterator<Item = &'a Chips>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
