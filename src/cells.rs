//! Cells and rows of the cellular automaton.

use crate::error::Error;
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use std::{
    convert::TryFrom,
    fmt::{self, Display, Formatter, Write},
    iter::FromIterator,
    ops::{Deref, Not},
    slice,
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible states of a cell.
///
/// Only [`DEAD`] and [`ALIVE`] exist. Converting any other value
/// into a `State` fails with [`Error::InvalidState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct State(u8);

/// The Dead state.
pub const DEAD: State = State(0);
/// The Alive state.
pub const ALIVE: State = State(1);

impl State {
    /// Whether the cell is alive.
    #[inline]
    pub fn is_alive(self) -> bool {
        self == ALIVE
    }

    /// The state as a bit, `0` or `1`.
    #[inline]
    pub fn bit(self) -> usize {
        self.0 as usize
    }

    /// The symbol of the state in plaintext: `.` for [`DEAD`], `o` for [`ALIVE`].
    #[inline]
    pub fn symbol(self) -> char {
        if self.is_alive() {
            'o'
        } else {
            '.'
        }
    }

    /// Reads a state from a plaintext symbol.
    ///
    /// Besides `.` and `o`, the digits `0` and `1` are also accepted.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '.' | '0' => Some(DEAD),
            'o' | '1' => Some(ALIVE),
            _ => None,
        }
    }
}

/// Flips the state.
impl Not for State {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            ALIVE => DEAD,
            _ => ALIVE,
        }
    }
}

impl From<bool> for State {
    #[inline]
    fn from(alive: bool) -> Self {
        State(alive as u8)
    }
}

impl From<State> for u8 {
    #[inline]
    fn from(state: State) -> Self {
        state.0
    }
}

impl TryFrom<u8> for State {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DEAD),
            1 => Ok(ALIVE),
            _ => Err(Error::InvalidState(value as usize)),
        }
    }
}

/// Randomly chooses between [`ALIVE`] and [`DEAD`].
///
/// The probability of either state is `1/2`.
impl Distribution<State> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> State {
        State::from(rng.gen::<bool>())
    }
}

/// A row of cells, i.e., one generation of the automaton.
///
/// Displayed in [Plaintext](https://conwaylife.com/wiki/Plaintext) style:
/// dead cells are `.`, living cells are `o`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Row(Vec<State>);

impl Row {
    /// Creates a row from its cells.
    pub fn new(cells: Vec<State>) -> Self {
        Row(cells)
    }

    /// A row of `width` dead cells.
    pub fn dead(width: usize) -> Self {
        Row(vec![DEAD; width])
    }

    /// Number of cells in the row.
    #[inline]
    pub fn width(&self) -> usize {
        self.0.len()
    }

    /// Number of living cells in the row.
    pub fn population(&self) -> usize {
        self.0.iter().filter(|s| s.is_alive()).count()
    }

    /// The cells as a slice.
    pub fn cells(&self) -> &[State] {
        &self.0
    }

    /// The cells as bits, `0` or `1`.
    pub fn bits(&self) -> Vec<u8> {
        self.0.iter().map(|&s| s.into()).collect()
    }

    pub fn into_vec(self) -> Vec<State> {
        self.0
    }
}

impl Deref for Row {
    type Target = [State];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<State>> for Row {
    fn from(cells: Vec<State>) -> Self {
        Row(cells)
    }
}

impl FromIterator<State> for Row {
    fn from_iter<I: IntoIterator<Item = State>>(iter: I) -> Self {
        Row(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a State;
    type IntoIter = slice::Iter<'a, State>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl TryFrom<&[u8]> for Row {
    type Error = Error;

    fn try_from(bits: &[u8]) -> Result<Self, Self::Error> {
        bits.iter().map(|&b| State::try_from(b)).collect()
    }
}

impl TryFrom<Vec<u8>> for Row {
    type Error = Error;

    fn try_from(bits: Vec<u8>) -> Result<Self, Self::Error> {
        Row::try_from(bits.as_slice())
    }
}

impl FromStr for Row {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(i, c)| State::from_symbol(c).ok_or(Error::InvalidCell(i, c)))
            .collect()
    }
}

impl Display for Row {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for state in &self.0 {
            f.write_char(state.symbol())?;
        }
        Ok(())
    }
}

/// Displays rows in [Plaintext](https://conwaylife.com/wiki/Plaintext) format,
/// one row per line, each line ended with `\n`.
pub(crate) fn plaintext(rows: &[Row]) -> String {
    let mut str = String::new();
    for row in rows {
        for state in row {
            str.push(state.symbol());
        }
        str.push('\n');
    }
    str
}
