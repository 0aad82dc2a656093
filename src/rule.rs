//! Elementary cellular automaton rules.
//!
//! For the numbering of the 256 rules, please see
//! [this article on LifeWiki](https://conwaylife.com/wiki/Elementary_cellular_automaton).

use crate::{
    cells::{State, ALIVE, DEAD},
    error::Error,
};
use std::{
    fmt::{self, Display, Formatter},
    ops::Index,
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The transition table of an elementary rule.
///
/// `table[i]` is the new state of a cell whose neighborhood reads `i`
/// as a 3-bit number: the left neighbor is bit 2, the cell itself bit 1,
/// the right neighbor bit 0. In other words, `table[i]` is the `i`-th
/// least significant bit of the rule number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u8", into = "u8"))]
pub struct RuleSpec {
    number: u8,
    table: [State; 8],
}

impl RuleSpec {
    /// Derives the table from a rule number.
    ///
    /// Only the low 8 bits of `rule_number` are read,
    /// so `286` is the same rule as `30`, and `-1` the same as `255`.
    pub fn new(rule_number: i64) -> Self {
        let number = rule_number as u8;
        let mut table = [DEAD; 8];
        for (i, state) in table.iter_mut().enumerate() {
            *state = State::from((number >> i) & 1 == 1);
        }
        RuleSpec { number, table }
    }

    /// The 8-bit rule number.
    pub fn number(&self) -> u8 {
        self.number
    }

    /// All eight entries, indexed by neighborhood.
    pub fn table(&self) -> &[State; 8] {
        &self.table
    }

    /// The new state of a cell with the given neighborhood.
    #[inline]
    pub fn apply(&self, left: State, center: State, right: State) -> State {
        self.table[left.bit() << 2 | center.bit() << 1 | right.bit()]
    }

    /// Whether a dead neighborhood gives birth to a living cell.
    ///
    /// Such rules blink on an infinite dead background.
    pub fn has_b0(&self) -> bool {
        self.table[0] == ALIVE
    }
}

impl Index<usize> for RuleSpec {
    type Output = State;

    fn index(&self, neighborhood: usize) -> &Self::Output {
        &self.table[neighborhood]
    }
}

impl From<u8> for RuleSpec {
    fn from(number: u8) -> Self {
        RuleSpec::new(number as i64)
    }
}

impl From<RuleSpec> for u8 {
    fn from(rule: RuleSpec) -> Self {
        rule.number
    }
}

/// Parses a rule string in Wolfram notation, e.g. `W30`.
///
/// The prefix `W` is optional. Numbers beyond 255 are rejected here,
/// because a rule string names exactly one rule.
impl FromStr for RuleSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('W')
            .or_else(|| s.strip_prefix('w'))
            .unwrap_or(s);
        digits
            .parse::<u8>()
            .map(RuleSpec::from)
            .map_err(|_| Error::ParseRuleError(s.to_string()))
    }
}

impl Display for RuleSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "W{}", self.number)
    }
}
