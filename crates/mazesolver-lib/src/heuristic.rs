use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::grid::Cell;

/// Distance estimators available to weighted A*.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    /// Sum of the row and column offsets (L1).
    #[default]
    Manhattan,
    /// Straight-line distance (L2).
    Euclidean,
    /// Largest of the row and column offsets (L∞).
    Chebyshev,
    /// Always zero; turns A* into uniform-cost search.
    Zero,
}

impl Heuristic {
    pub const ALL: [Heuristic; 4] = [
        Heuristic::Manhattan,
        Heuristic::Euclidean,
        Heuristic::Chebyshev,
        Heuristic::Zero,
    ];

    /// Estimated remaining cost from `cell` to `goal`. Never negative.
    pub fn estimate(self, cell: Cell, goal: Cell) -> f64 {
        let dr = cell.row.abs_diff(goal.row) as f64;
        let dc = cell.col.abs_diff(goal.col) as f64;
        match self {
            Heuristic::Manhattan => dr + dc,
            Heuristic::Euclidean => dr.hypot(dc),
            Heuristic::Chebyshev => dr.max(dc),
            Heuristic::Zero => 0.0,
        }
    }

    /// Whether the estimate never exceeds the true cost under 4-directional
    /// unit-cost movement.
    pub fn admissible(self) -> bool {
        // Manhattan is exact on an empty grid; the other three are bounded by it.
        true
    }

    pub fn name(self) -> &'static str {
        match self {
            Heuristic::Manhattan => "manhattan",
            Heuristic::Euclidean => "euclidean",
            Heuristic::Chebyshev => "chebyshev",
            Heuristic::Zero => "zero",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        Heuristic::ALL
            .into_iter()
            .find(|heuristic| heuristic.name().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| Error::UnknownHeuristic {
                name: value.to_string(),
            })
    }
}

/// Factor applied to the heuristic term of the A* evaluation score.
///
/// Always positive and finite. `1.0` is standard A*; larger values favour
/// fewer expansions over path optimality.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Weight(f64);

impl Weight {
    pub const ONE: Weight = Weight(1.0);

    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(Error::InvalidWeight { value })
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Weight::ONE
    }
}

impl TryFrom<f64> for Weight {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Weight::new(value)
    }
}

impl From<Weight> for f64 {
    fn from(weight: Weight) -> Self {
        weight.0
    }
}

impl FromStr for Weight {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        let parsed = trimmed
            .parse::<f64>()
            .map_err(|_| Error::UnparsableWeight {
                input: trimmed.to_string(),
            })?;
        Weight::new(parsed)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
