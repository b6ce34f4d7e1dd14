// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single cell value in a month grid.
///
/// The latin single-letter codes (`D`/`V`/`N`/`A`) are the canonical internal
/// representation; any localized label shown to end users is a presentation
/// concern outside this crate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum ShiftCode {
    /// Day shift, part of the rotation.
    #[serde(rename = "D")]
    Day,
    /// Evening shift, part of the rotation.
    #[serde(rename = "V")]
    Evening,
    /// Night shift, part of the rotation.
    #[serde(rename = "N")]
    Night,
    /// Fixed administrator shift. Worked on business weekdays only and never
    /// competes for rotational slots.
    #[serde(rename = "A")]
    Admin,
    /// No shift (the empty cell).
    #[default]
    #[serde(rename = "REST")]
    Rest,
    /// Vacation leave. Rest-like for rotation, distinct for display.
    #[serde(rename = "VAC")]
    Vacation,
    /// Sick leave. Rest-like for rotation, distinct for display.
    #[serde(rename = "SICK")]
    Sick,
}

impl ShiftCode {
    /// The three rotational shifts, in the order slots are filled
    /// (scarcest first).
    pub const ROTATIONAL: [Self; 3] = [Self::Night, Self::Evening, Self::Day];

    /// Returns the canonical string code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "D",
            Self::Evening => "V",
            Self::Night => "N",
            Self::Admin => "A",
            Self::Rest => "REST",
            Self::Vacation => "VAC",
            Self::Sick => "SICK",
        }
    }

    /// True for shifts that put the employee at work (Day/Evening/Night/Admin).
    #[must_use]
    pub const fn is_working(self) -> bool {
        matches!(self, Self::Day | Self::Evening | Self::Night | Self::Admin)
    }

    /// True only for the three rotating shifts. Excludes `Admin`.
    #[must_use]
    pub const fn is_rotational(self) -> bool {
        matches!(self, Self::Day | Self::Evening | Self::Night)
    }

    /// True for rest days and leave markers.
    #[must_use]
    pub const fn is_rest_like(self) -> bool {
        matches!(self, Self::Rest | Self::Vacation | Self::Sick)
    }

    /// True when the shift provides day-class coverage (`Day` or `Admin`).
    #[must_use]
    pub const fn is_day_class(self) -> bool {
        matches!(self, Self::Day | Self::Admin)
    }
}

impl FromStr for ShiftCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "D" => Ok(Self::Day),
            "V" => Ok(Self::Evening),
            "N" => Ok(Self::Night),
            "A" => Ok(Self::Admin),
            // The empty cell and a dash are accepted as rest at the boundary.
            "REST" | "" | "-" => Ok(Self::Rest),
            "VAC" => Ok(Self::Vacation),
            "SICK" => Ok(Self::Sick),
            _ => Err(DomainError::InvalidShiftCode(s.to_string())),
        }
    }
}

impl std::fmt::Display for ShiftCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
