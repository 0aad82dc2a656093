//! Snapshots of the automaton.
//!
//! A [`Snapshot`] owns a full copy of the configuration and the history,
//! so nothing done to the automaton afterwards can change it.

use crate::{
    automaton::Automaton,
    cells::{self, Row},
    config::Config,
    error::{ConfigError, Error},
};
use log::debug;
use std::{
    fmt::{self, Display, Formatter, Write},
    slice,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A copy of the configuration and the history of an automaton.
///
/// It can be serialized, and restored later by [`Automaton::restore`]
/// or [`Snapshot::automaton`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot {
    /// Configuration, with the width resolved.
    config: Config,

    /// All generations at the time of capture.
    ///
    /// The first one is the initial row.
    history: Vec<Row>,
}

impl Snapshot {
    pub(crate) fn new(config: Config, history: Vec<Row>) -> Self {
        Snapshot { config, history }
    }

    /// Configuration at the time of capture.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// All captured generations.
    pub fn history(&self) -> &[Row] {
        &self.history
    }

    /// Number of captured generations, including the initial row.
    pub fn generations(&self) -> usize {
        self.history.len()
    }

    /// Displays the captured history in Plaintext format.
    pub fn plaintext(&self) -> String {
        cells::plaintext(&self.history)
    }

    /// Checks that the history is not empty and every row fits the width.
    ///
    /// A snapshot taken by [`SnapshotStore::capture`] always passes;
    /// a deserialized one might not.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        let width = self.config.checked_width()?;
        if self.history.is_empty() {
            return Err(ConfigError::EmptyHistory.into());
        }
        if let Some(row) = self.history.iter().find(|row| row.width() != width) {
            return Err(ConfigError::WidthMismatch {
                expected: width,
                found: row.width(),
            }
            .into());
        }
        Ok(())
    }

    /// Restores a new automaton from the snapshot.
    ///
    /// The new automaton has an empty snapshot store.
    pub fn automaton(&self) -> Result<Automaton, Error> {
        self.validate()?;
        let initial_row = self.history[0].clone();
        let mut automaton = Automaton::new(self.config.clone(), initial_row)?;
        automaton.restore(self)?;
        Ok(automaton)
    }
}

impl Display for Snapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}, generations = {}", self.config, self.generations())
    }
}

/// An ordered list of snapshots.
///
/// Snapshots are identified by their position in the list.
/// The store is unbounded unless a limit is set,
/// in which case the oldest snapshots are dropped first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SnapshotStore {
    /// All snapshots, oldest first.
    snapshots: Vec<Snapshot>,

    /// Maximum number of snapshots to keep.
    ///
    /// `None` means that there is no limit.
    limit: Option<usize>,
}

impl SnapshotStore {
    /// Creates an empty, unbounded store.
    pub fn new() -> Self {
        SnapshotStore::default()
    }

    /// Creates an empty store that keeps at most `max` snapshots.
    pub fn with_limit(max: usize) -> Self {
        SnapshotStore {
            snapshots: Vec::new(),
            limit: Some(max),
        }
    }

    /// Maximum number of snapshots to keep.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Sets the maximum number of snapshots to keep.
    ///
    /// Snapshots beyond the new limit are dropped at once, oldest first.
    pub fn set_limit<T: Into<Option<usize>>>(&mut self, limit: T) {
        self.limit = limit.into();
        self.evict();
    }

    /// Captures the current configuration and history of an automaton.
    pub fn capture(&mut self, automaton: &Automaton) {
        self.push(automaton.snapshot());
    }

    /// Appends a snapshot.
    pub fn push(&mut self, snapshot: Snapshot) {
        debug!("Captured snapshot #{}: {}", self.snapshots.len(), snapshot);
        self.snapshots.push(snapshot);
        self.evict();
    }

    fn evict(&mut self) {
        if let Some(max) = self.limit {
            if self.snapshots.len() > max {
                let count = self.snapshots.len() - max;
                self.snapshots.drain(..count);
                debug!("Evicted {} oldest snapshots", count);
            }
        }
    }

    /// Gets the snapshot at `index`.
    ///
    /// Returns [`Error::IndexOutOfRange`] unless `index < self.len()`.
    pub fn get(&self, index: usize) -> Result<&Snapshot, Error> {
        self.snapshots.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.snapshots.len(),
        })
    }

    /// Number of stored snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Removes all snapshots.
    ///
    /// Snapshots cloned out of the store are not affected.
    pub fn clear(&mut self) {
        debug!("Cleared {} snapshots", self.snapshots.len());
        self.snapshots.clear();
    }

    pub fn iter(&self) -> slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    /// Describes the first `limit` snapshots, one per line, numbered from 1.
    pub fn summary(&self, limit: usize) -> String {
        let mut str = String::new();
        for (i, snapshot) in self.snapshots.iter().take(limit).enumerate() {
            writeln!(str, "#{}: {}", i + 1, snapshot).unwrap();
        }
        str
    }
}

impl<'a> IntoIterator for &'a SnapshotStore {
    type Item = &'a Snapshot;
    type IntoIter = slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}
