//! Eco-score grade model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sustainability grade of a product, `A` (best) through `E` (worst).
///
/// The declaration order is the ranking: comparisons go by position in the
/// fixed sequence `[A, B, C, D, E, Unknown]`, so `Unknown` ranks strictly
/// worse than `E` even though the raw letters would not sort that way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EcoGrade {
    A,
    B,
    C,
    D,
    E,
    Unknown,
}

impl EcoGrade {
    /// Decode a grade from a raw catalog field.
    ///
    /// Matching is case-insensitive; anything outside `A`-`E`, including an
    /// absent field, yields `Unknown`. Absence of a valid grade is a value of
    /// its own, not an error.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::to_uppercase).as_deref() {
            Some("A") => EcoGrade::A,
            Some("B") => EcoGrade::B,
            Some("C") => EcoGrade::C,
            Some("D") => EcoGrade::D,
            Some("E") => EcoGrade::E,
            _ => EcoGrade::Unknown,
        }
    }

    /// Letter shown to the user; `Unknown` renders as `?`.
    pub fn letter(&self) -> &'static str {
        match self {
            EcoGrade::A => "A",
            EcoGrade::B => "B",
            EcoGrade::C => "C",
            EcoGrade::D => "D",
            EcoGrade::E => "E",
            EcoGrade::Unknown => "?",
        }
    }
}

impl fmt::Display for EcoGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}
