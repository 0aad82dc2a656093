//! How a row is extended beyond its edges.

use crate::{
    cells::{Row, State, ALIVE, DEAD},
    error::{ConfigError, Error},
};
use educe::Educe;
use std::{
    fmt::{self, Display, Formatter},
    iter,
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The boundary condition of the automaton.
///
/// A cell on the edge of a row has only one neighbor inside the row.
/// Before each step, the row is padded by one cell on each side,
/// and the value of the padding is chosen by this policy.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExtensionPolicy {
    /// Pads with dead cells.
    ///
    /// ```plaintext
    /// .|o.oo|.
    /// ```
    Zero,

    /// Pads with living cells.
    ///
    /// ```plaintext
    /// o|..o.|o
    /// ```
    One,

    /// Repeats the edge cells.
    ///
    /// ```plaintext
    /// o|o..o.|.
    /// ```
    #[educe(Default)]
    Extend,

    /// Wraps around, so that the row becomes a ring.
    ///
    /// ```plaintext
    /// .|o..o.|o
    /// ```
    Periodic,
}

impl ExtensionPolicy {
    /// The states of the padding cells, left one first.
    ///
    /// Returns an error if the row is empty, whatever the policy is:
    /// an empty row has no edges.
    pub fn padding(self, row: &[State]) -> Result<(State, State), Error> {
        let (first, last) = match (row.first(), row.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => return Err(ConfigError::EmptyRow.into()),
        };
        let padding = match self {
            ExtensionPolicy::Zero => (DEAD, DEAD),
            ExtensionPolicy::One => (ALIVE, ALIVE),
            ExtensionPolicy::Extend => (first, last),
            ExtensionPolicy::Periodic => (last, first),
        };
        Ok(padding)
    }

    /// Pads the row by one cell on each side.
    ///
    /// The result has width `row.width() + 2`,
    /// and its interior is a copy of `row`.
    pub fn extend(self, row: &Row) -> Result<Row, Error> {
        let (left, right) = self.padding(row)?;
        Ok(iter::once(left)
            .chain(row.iter().copied())
            .chain(iter::once(right))
            .collect())
    }
}

impl FromStr for ExtensionPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Zero" => Ok(ExtensionPolicy::Zero),
            "One" => Ok(ExtensionPolicy::One),
            "Extend" => Ok(ExtensionPolicy::Extend),
            "Periodic" => Ok(ExtensionPolicy::Periodic),
            _ => Err(Error::ParseExtensionError(s.to_string())),
        }
    }
}

impl Display for ExtensionPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            ExtensionPolicy::Zero => "Zero",
            ExtensionPolicy::One => "One",
            ExtensionPolicy::Extend => "Extend",
            ExtensionPolicy::Periodic => "Periodic",
        };
        write!(f, "{}", s)
    }
}
