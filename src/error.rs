//! All kinds of errors in this crate.

use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Invalid configuration: {0}
    InvalidConfiguration(#[from] ConfigError),
    /// Snapshot index {index} is out of range, the store holds {len} snapshots.
    IndexOutOfRange { index: usize, len: usize },
    /// {0} is not a valid cell state, only 0 and 1 are allowed.
    InvalidState(usize),
    /// Invalid cell {1:?} at position {0}.
    InvalidCell(usize, char),
    /// Invalid rule string: {0:?}.
    ParseRuleError(String),
    /// Invalid extension policy: {0:?}.
    ParseExtensionError(String),
}

/// Reasons for rejecting a configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// width should be positive.
    NonPositiveWidth,
    /// no width and no initial row are given.
    UnknownWidth,
    /// length should not be negative.
    NegativeLength,
    /// cannot extend an empty row.
    EmptyRow,
    /// the row has width {found}, but width {expected} is required.
    WidthMismatch { expected: usize, found: usize },
    /// the history is empty.
    EmptyHistory,
}
