// ABOUTME: Muscle group enumeration and exercise-to-muscle mapping types
// ABOUTME: Defines the closed muscle set, its training split, and primary/secondary mappings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

/// Muscle groups tracked for weekly volume
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Muscle {
    /// Pectorals
    Chest,
    /// Lats and upper back
    Back,
    /// Anterior deltoid
    DeltsFront,
    /// Lateral deltoid
    DeltsSide,
    /// Posterior deltoid
    DeltsRear,
    /// Biceps brachii
    Biceps,
    /// Triceps brachii
    Triceps,
    /// Quadriceps
    Quads,
    /// Hamstrings
    Hamstrings,
    /// Gluteal muscles
    Glutes,
    /// Gastrocnemius and soleus
    Calves,
}

impl Muscle {
    /// Every muscle, in declaration order
    pub const ALL: [Self; 11] = [
        Self::Chest,
        Self::Back,
        Self::DeltsFront,
        Self::DeltsSide,
        Self::DeltsRear,
        Self::Biceps,
        Self::Triceps,
        Self::Quads,
        Self::Hamstrings,
        Self::Glutes,
        Self::Calves,
    ];

    /// Wire name of the muscle (`delts_side`, `quads`, ...)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chest => "chest",
            Self::Back => "back",
            Self::DeltsFront => "delts_front",
            Self::DeltsSide => "delts_side",
            Self::DeltsRear => "delts_rear",
            Self::Biceps => "biceps",
            Self::Triceps => "triceps",
            Self::Quads => "quads",
            Self::Hamstrings => "hamstrings",
            Self::Glutes => "glutes",
            Self::Calves => "calves",
        }
    }

    /// The split a muscle is normally trained on
    #[must_use]
    pub const fn split(self) -> MuscleSplit {
        match self {
            Self::Quads | Self::Hamstrings | Self::Glutes | Self::Calves => MuscleSplit::Legs,
            Self::Back | Self::Biceps | Self::DeltsRear => MuscleSplit::Pull,
            Self::Chest | Self::DeltsFront | Self::DeltsSide | Self::Triceps => MuscleSplit::Push,
        }
    }
}

impl fmt::Display for Muscle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anatomical split used to decide which workouts may absorb volume changes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MuscleSplit {
    /// Pressing muscles (chest, front/side delts, triceps)
    Push,
    /// Pulling muscles (back, biceps, rear delts)
    Pull,
    /// Lower body
    Legs,
}

impl MuscleSplit {
    /// Normalized focus-label fragments that count as training this split
    #[must_use]
    pub const fn focus_keywords(self) -> &'static [&'static str] {
        match self {
            Self::Push => &["push", "upper", "full"],
            Self::Pull => &["pull", "upper", "full"],
            Self::Legs => &["leg", "lower", "full"],
        }
    }
}

/// Muscles trained by an exercise
///
/// Unrecognized exercises map to an empty mapping and contribute nothing to
/// weekly volume.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MuscleMapping {
    /// Muscles doing most of the work; each set counts fully
    pub primary: Vec<Muscle>,
    /// Assisting muscles; each set counts at half weight
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secondary: Vec<Muscle>,
}

impl MuscleMapping {
    /// Build a mapping from static muscle lists
    #[must_use]
    pub fn new(primary: &[Muscle], secondary: &[Muscle]) -> Self {
        Self {
            primary: primary.to_vec(),
            secondary: secondary.to_vec(),
        }
    }

    /// Whether the exercise was recognized at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }

    /// Whether `muscle` is the one and only primary mover
    #[must_use]
    pub fn isolates(&self, muscle: Muscle) -> bool {
        self.primary == [muscle]
    }

    /// Volume contribution of one set to `muscle`, in half-set units
    #[must_use]
    pub fn half_set_weight(&self, muscle: Muscle) -> u32 {
        if self.primary.contains(&muscle) {
            2
        } else if self.secondary.contains(&muscle) {
            1
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_assignment() {
        assert_eq!(Muscle::Calves.split(), MuscleSplit::Legs);
        assert_eq!(Muscle::DeltsRear.split(), MuscleSplit::Pull);
        assert_eq!(Muscle::DeltsSide.split(), MuscleSplit::Push);
    }

    #[test]
    fn test_half_set_weight() {
        let mapping = MuscleMapping::new(&[Muscle::Quads], &[Muscle::Glutes]);
        assert_eq!(mapping.half_set_weight(Muscle::Quads), 2);
        assert_eq!(mapping.half_set_weight(Muscle::Glutes), 1);
        assert_eq!(mapping.half_set_weight(Muscle::Chest), 0);
    }

    #[test]
    fn test_isolation_needs_a_single_primary() {
        let curl = MuscleMapping::new(&[Muscle::Biceps], &[]);
        let lunge = MuscleMapping::new(&[Muscle::Quads, Muscle::Glutes], &[Muscle::Hamstrings]);
        assert!(curl.isolates(Muscle::Biceps));
        assert!(!lunge.isolates(Muscle::Quads));
        assert!(!MuscleMapping::default().isolates(Muscle::Chest));
    }

    #[test]
    fn test_wire_name_matches_serde() {
        for muscle in Muscle::ALL {
            let json = serde_json::to_string(&muscle).unwrap();
            assert_eq!(json, format!("\"{muscle}\""));
        }
    }
}
