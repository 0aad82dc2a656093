//! Automaton configuration.

use crate::{
    automaton::Automaton,
    cells::Row,
    error::{ConfigError, Error},
    extension::ExtensionPolicy,
    rule::RuleSpec,
    source::{RandomRow, RowSource},
};
use educe::Educe;
use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Automaton configuration.
///
/// The automaton will be generated from this configuration.
#[derive(Clone, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Width.
    ///
    /// `None` means that the width is taken from the initial row.
    /// When an initial row is given, its width always wins.
    #[educe(Default(expression = "Some(30)"))]
    pub width: Option<isize>,

    /// Number of generations added by [`Automaton::simulate`].
    #[educe(Default = 50)]
    pub length: isize,

    /// The rule number.
    ///
    /// Only the low 8 bits are significant.
    #[educe(Default = 30)]
    pub rule_number: i64,

    /// How rows are extended beyond their edges.
    pub extension: ExtensionPolicy,
}

impl Config {
    /// Sets up a new configuration with given width, length and rule.
    pub fn new(width: isize, length: isize, rule_number: i64) -> Self {
        Config {
            width: Some(width),
            length,
            rule_number,
            ..Config::default()
        }
    }

    /// Sets the width.
    pub fn set_width<T: Into<Option<isize>>>(mut self, width: T) -> Self {
        self.width = width.into();
        self
    }

    /// Sets the length.
    pub fn set_length(mut self, length: isize) -> Self {
        self.length = length;
        self
    }

    /// Sets the rule number.
    pub fn set_rule_number(mut self, rule_number: i64) -> Self {
        self.rule_number = rule_number;
        self
    }

    /// Sets the extension policy.
    pub fn set_extension(mut self, extension: ExtensionPolicy) -> Self {
        self.extension = extension;
        self
    }

    /// The transition table of the rule.
    pub fn rule(&self) -> RuleSpec {
        RuleSpec::new(self.rule_number)
    }

    /// Checks the width and the length, and returns the width.
    pub(crate) fn checked_width(&self) -> Result<usize, Error> {
        let width = self.width.ok_or(ConfigError::UnknownWidth)?;
        if width <= 0 {
            return Err(ConfigError::NonPositiveWidth.into());
        }
        if self.length < 0 {
            return Err(ConfigError::NegativeLength.into());
        }
        Ok(width as usize)
    }

    /// Creates a new automaton starting from the given row.
    ///
    /// The width of the configuration is replaced by the width of the row.
    pub fn automaton_from_row(&self, initial_row: Row) -> Result<Automaton, Error> {
        let config = self.clone().set_width(initial_row.width() as isize);
        Automaton::new(config, initial_row)
    }

    /// Creates a new automaton whose initial row is supplied by `source`.
    ///
    /// The configuration must have a positive width.
    pub fn automaton_with<S: RowSource + ?Sized>(
        &self,
        source: &mut S,
    ) -> Result<Automaton, Error> {
        let width = self.checked_width()?;
        let initial_row = source.row(width);
        Automaton::new(self.clone(), initial_row)
    }

    /// Creates a new automaton from an optional initial row.
    ///
    /// If `initial_row` is `None`, `source` supplies one.
    pub fn automaton_from<S: RowSource + ?Sized>(
        &self,
        initial_row: Option<Row>,
        source: &mut S,
    ) -> Result<Automaton, Error> {
        match initial_row {
            Some(row) => self.automaton_from_row(row),
            None => self.automaton_with(source),
        }
    }

    /// Creates a new automaton with a random initial row.
    pub fn automaton(&self) -> Result<Automaton, Error> {
        self.automaton_with(&mut RandomRow::default())
    }
}

impl Display for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.width {
            Some(width) => write!(f, "width = {}", width)?,
            None => write!(f, "width = ?")?,
        }
        write!(
            f,
            ", length = {}, rule = {}, extension = {}",
            self.length,
            self.rule(),
            self.extension
        )
    }
}
