// ABOUTME: Menstrual cycle phase categorical feature and its integer encoding
// ABOUTME: Unknown phase labels encode to the Menstrual code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four menstrual cycle stages used as a categorical feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CyclePhase {
    /// Code 0
    Menstrual,
    /// Code 1
    Follicular,
    /// Code 2
    Ovulatory,
    /// Code 3
    Luteal,
}

/// Estimated hormone levels for a phase, used to pre-fill client input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HormoneEstimate {
    /// Estimated estrogen level
    pub estrogen: u32,
    /// Estimated progesterone level
    pub progesterone: u32,
}

impl CyclePhase {
    /// All phases in code order
    pub const ALL: [Self; 4] = [
        Self::Menstrual,
        Self::Follicular,
        Self::Ovulatory,
        Self::Luteal,
    ];

    /// Integer code fed to the model
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Menstrual => 0,
            Self::Follicular => 1,
            Self::Ovulatory => 2,
            Self::Luteal => 3,
        }
    }

    /// Wire label, matched exactly (case-sensitive)
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Menstrual => "Menstrual",
            Self::Follicular => "Follicular",
            Self::Ovulatory => "Ovulatory",
            Self::Luteal => "Luteal",
        }
    }

    /// Look up a phase by its exact wire label
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|phase| phase.label() == label)
    }

    /// Feature code for an arbitrary label; anything unrecognized encodes as 0
    #[must_use]
    pub fn code_for_label(label: &str) -> u8 {
        Self::from_label(label).map_or(Self::Menstrual.code(), Self::code)
    }

    /// Typical hormone levels during this phase
    #[must_use]
    pub const fn default_hormones(self) -> HormoneEstimate {
        let (estrogen, progesterone) = match self {
            Self::Menstrual => (20, 10),
            Self::Follicular => (70, 15),
            Self::Ovulatory => (90, 20),
            Self::Luteal => (60, 80),
        };
        HormoneEstimate {
            estrogen,
            progesterone,
        }
    }
}

impl fmt::Display for CyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_phases_map_to_fixed_codes() {
        assert_eq!(CyclePhase::code_for_label("Menstrual"), 0);
        assert_eq!(CyclePhase::code_for_label("Follicular"), 1);
        assert_eq!(CyclePhase::code_for_label("Ovulatory"), 2);
        assert_eq!(CyclePhase::code_for_label("Luteal"), 3);
    }

    #[test]
    fn test_unknown_phases_default_to_zero() {
        for label in ["", "luteal", "LUTEAL", "Perimenopause", " Luteal"] {
            assert_eq!(CyclePhase::code_for_label(label), 0, "label {label:?}");
        }
    }

    #[test]
    fn test_label_round_trips_through_lookup() {
        for phase in CyclePhase::ALL {
            assert_eq!(CyclePhase::from_label(phase.label()), Some(phase));
            assert_eq!(phase.to_string(), phase.label());
        }
    }

    #[test]
    fn test_default_hormones() {
        let luteal = CyclePhase::Luteal.default_hormones();
        assert_eq!((luteal.estrogen, luteal.progesterone), (60, 80));
        let ovulatory = CyclePhase::Ovulatory.default_hormones();
        assert_eq!((ovulatory.estrogen, ovulatory.progesterone), (90, 20));
    }
}
