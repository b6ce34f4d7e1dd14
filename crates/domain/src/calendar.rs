// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The working-day calendar: fixed civil holidays plus the moving
//! Orthodox Easter block.

use crate::error::DomainError;
use crate::types::MonthKey;
use std::collections::BTreeSet;
use time::{Date, Duration, Month};

/// Fixed civil holidays as `(month, day)` pairs.
pub const FIXED_HOLIDAYS: [(u8, u8); 10] = [
    (1, 1),
    (3, 3),
    (5, 1),
    (5, 6),
    (5, 24),
    (9, 6),
    (9, 22),
    (12, 24),
    (12, 25),
    (12, 26),
];

/// Computes Orthodox Easter Sunday for a year (Gregorian calendar).
///
/// Meeus' Julian computus, shifted by the 13-day Julian/Gregorian offset.
///
/// # Errors
///
/// Returns an error if the computed date cannot be represented.
pub fn orthodox_easter(year: u16) -> Result<Date, DomainError> {
    let y = i32::from(year);
    let a = y % 4;
    let b = y % 7;
    let c = y % 19;
    let d = (19 * c + 15) % 30;
    let e = ((2 * a + 4 * b - d + 34) % 7 + 7) % 7;
    let month = (d + e + 114) / 31;
    let day = (d + e + 114) % 31 + 1;

    let month = match month {
        3 => Month::March,
        _ => Month::April,
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let julian = Date::from_calendar_date(y, month, day as u8).map_err(|_| {
        DomainError::DateOutOfRange {
            operation: format!("computing Easter for {year}"),
        }
    })?;

    julian
        .checked_add(Duration::days(13))
        .ok_or_else(|| DomainError::DateOutOfRange {
            operation: format!("computing Easter for {year}"),
        })
}

/// Returns the four-day Easter holiday block: Good Friday through
/// Bright Monday.
///
/// # Errors
///
/// Returns an error if the dates cannot be represented.
pub fn easter_holiday_block(year: u16) -> Result<Vec<Date>, DomainError> {
    let easter = orthodox_easter(year)?;
    [-2_i64, -1, 0, 1]
        .iter()
        .map(|offset| {
            easter
                .checked_add(Duration::days(*offset))
                .ok_or_else(|| DomainError::DateOutOfRange {
                    operation: format!("computing the Easter block for {year}"),
                })
        })
        .collect()
}

/// Returns the non-working day numbers of a month: fixed civil holidays plus
/// any part of the Easter block falling inside it.
///
/// # Errors
///
/// Returns an error if the Easter computation fails.
pub fn holidays_for_month(key: MonthKey) -> Result<BTreeSet<u8>, DomainError> {
    let mut days: BTreeSet<u8> = FIXED_HOLIDAYS
        .iter()
        .filter(|(month, _)| *month == key.month())
        .map(|(_, day)| *day)
        .collect();

    for date in easter_holiday_block(key.year())? {
        if u8::from(date.month()) == key.month() {
            days.insert(date.day());
        }
    }

    Ok(days)
}

/// Resolved calendar facts for one month: weekday layout and holidays.
///
/// Constructed by the caller and passed into the engine explicitly; the
/// engine never consults a global calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthCalendar {
    key: MonthKey,
    days_in_month: u8,
    /// Weekday index of day 1, with 0 = Monday.
    first_weekday: u8,
    holidays: BTreeSet<u8>,
}

impl MonthCalendar {
    /// Creates a calendar for a month with an explicit holiday set.
    ///
    /// # Errors
    ///
    /// Returns an error if the month cannot be resolved to calendar dates.
    pub fn new(key: MonthKey, holidays: BTreeSet<u8>) -> Result<Self, DomainError> {
        let first_weekday = key.weekday(1)?.number_days_from_monday();
        Ok(Self {
            key,
            days_in_month: key.days_in_month(),
            first_weekday,
            holidays,
        })
    }

    /// Creates a calendar using the built-in holiday table.
    ///
    /// # Errors
    ///
    /// Returns an error if the month cannot be resolved to calendar dates.
    pub fn for_month(key: MonthKey) -> Result<Self, DomainError> {
        let holidays = holidays_for_month(key)?;
        Self::new(key, holidays)
    }

    /// Returns the month this calendar describes.
    #[must_use]
    pub const fn key(&self) -> MonthKey {
        self.key
    }

    /// Returns the number of days in the month.
    #[must_use]
    pub const fn days_in_month(&self) -> u8 {
        self.days_in_month
    }

    /// Returns the holiday day numbers.
    #[must_use]
    pub const fn holidays(&self) -> &BTreeSet<u8> {
        &self.holidays
    }

    /// Returns the weekday index of a day, with 0 = Monday.
    #[must_use]
    pub const fn weekday_index(&self, day: u8) -> u8 {
        (self.first_weekday + day - 1) % 7
    }

    /// Returns whether the day falls on Monday through Friday.
    #[must_use]
    pub const fn is_weekday(&self, day: u8) -> bool {
        self.weekday_index(day) < 5
    }

    /// Returns whether the day is a business day: a weekday that is not a
    /// holiday.
    #[must_use]
    pub fn is_business_day(&self, day: u8) -> bool {
        self.is_weekday(day) && !self.holidays.contains(&day)
    }

    /// Counts the business days in the month.
    #[must_use]
    pub fn count_business_days(&self) -> u32 {
        let count = (1..=self.days_in_month)
            .filter(|day| self.is_business_day(*day))
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }
}
