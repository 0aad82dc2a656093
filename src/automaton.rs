//! The automaton.

use crate::{
    cells::{self, Row},
    config::Config,
    error::{ConfigError, Error},
    extension::ExtensionPolicy,
    rule::RuleSpec,
    snapshot::{Snapshot, SnapshotStore},
};
use log::{debug, trace};
use std::{
    convert::TryFrom,
    fmt::{self, Display, Formatter},
};

/// An elementary cellular automaton together with its whole history.
///
/// Generation `0` is the initial row; every later generation is computed
/// from the one just before it. Changing the rule or the extension policy
/// only affects generations computed afterwards.
#[derive(Clone, Debug)]
pub struct Automaton {
    /// Configuration, with the width resolved.
    config: Config,

    /// The transition table of the current rule.
    ///
    /// Always derived from `config.rule_number`.
    rule: RuleSpec,

    /// All generations so far.
    ///
    /// Never empty. Rows are only appended, except on reset or restore.
    history: Vec<Row>,

    /// Snapshots captured from this automaton.
    snapshots: SnapshotStore,
}

impl Automaton {
    /// Creates a new automaton from the configuration and the initial row.
    ///
    /// The width of the configuration must match the width of the row.
    /// [`Config::automaton_from_row`] takes care of that.
    pub fn new(config: Config, initial_row: Row) -> Result<Self, Error> {
        if initial_row.is_empty() {
            return Err(ConfigError::EmptyRow.into());
        }
        let width = config.checked_width()?;
        if initial_row.width() != width {
            return Err(ConfigError::WidthMismatch {
                expected: width,
                found: initial_row.width(),
            }
            .into());
        }
        debug!("New automaton: {}", config);
        Ok(Automaton {
            rule: config.rule(),
            config,
            history: vec![initial_row],
            snapshots: SnapshotStore::new(),
        })
    }

    /// Automaton configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of cells in each row.
    pub fn width(&self) -> usize {
        self.history[0].width()
    }

    /// The transition table of the current rule.
    pub fn rule(&self) -> RuleSpec {
        self.rule
    }

    /// The current extension policy.
    pub fn extension(&self) -> ExtensionPolicy {
        self.config.extension
    }

    /// All generations so far, the initial row first.
    pub fn history(&self) -> &[Row] {
        &self.history
    }

    pub fn initial_row(&self) -> &Row {
        &self.history[0]
    }

    /// The latest generation.
    pub fn last_row(&self) -> &Row {
        &self.history[self.history.len() - 1]
    }

    /// Gets generation `t`. Returns `None` if it is not computed yet.
    pub fn generation(&self, t: usize) -> Option<&Row> {
        self.history.get(t)
    }

    /// Number of generations so far, including the initial row.
    pub fn generations(&self) -> usize {
        self.history.len()
    }

    /// Whether any generation beyond the initial row has been computed.
    pub fn has_simulated(&self) -> bool {
        self.history.len() > 1
    }

    /// Sets the rule.
    ///
    /// Generations already computed are kept as they are.
    pub fn set_rule(&mut self, rule_number: i64) {
        self.config.rule_number = rule_number;
        self.rule = RuleSpec::new(rule_number);
        debug!("Rule set to {}", self.rule);
    }

    /// Sets the extension policy.
    ///
    /// Generations already computed are kept as they are.
    pub fn set_extension(&mut self, extension: ExtensionPolicy) {
        self.config.extension = extension;
        debug!("Extension policy set to {}", extension);
    }

    /// Sets the number of generations added by [`simulate`](Self::simulate).
    pub fn set_length(&mut self, length: isize) -> Result<(), Error> {
        if length < 0 {
            return Err(ConfigError::NegativeLength.into());
        }
        self.config.length = length;
        Ok(())
    }

    /// Computes the next generation, appends it to the history,
    /// and returns it.
    pub fn step(&mut self) -> Result<Row, Error> {
        let extended = self.config.extension.extend(self.last_row())?;
        let rule = self.rule;
        let row: Row = extended
            .windows(3)
            .map(|nbhd| rule.apply(nbhd[0], nbhd[1], nbhd[2]))
            .collect();
        trace!("Generation {}: {}", self.history.len(), row);
        self.history.push(row.clone());
        Ok(row)
    }

    /// Computes as many generations as the configured length.
    pub fn simulate(&mut self) -> Result<(), Error> {
        let steps =
            usize::try_from(self.config.length).map_err(|_| ConfigError::NegativeLength)?;
        self.simulate_for(steps)
    }

    /// Computes `steps` more generations.
    pub fn simulate_for(&mut self, steps: usize) -> Result<(), Error> {
        for _ in 0..steps {
            self.step()?;
        }
        debug!(
            "Simulated {} steps with rule {}, {} generations in total",
            steps,
            self.rule,
            self.history.len()
        );
        Ok(())
    }

    /// Goes back to the initial row.
    ///
    /// The configuration is kept. If `clear_snapshots` is true,
    /// all captured snapshots are removed as well.
    pub fn reset(&mut self, clear_snapshots: bool) {
        self.history.truncate(1);
        debug!("Reset to the initial row");
        if clear_snapshots {
            self.snapshots.clear();
        }
    }

    /// Copies the configuration and the history into a [`Snapshot`],
    /// without storing it.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.config.clone(), self.history.clone())
    }

    /// Captures the configuration and the history into the snapshot store.
    pub fn capture(&mut self) {
        let snapshot = self.snapshot();
        self.snapshots.push(snapshot);
    }

    /// Snapshots captured from this automaton.
    pub fn snapshots(&self) -> &SnapshotStore {
        &self.snapshots
    }

    pub fn snapshots_mut(&mut self) -> &mut SnapshotStore {
        &mut self.snapshots
    }

    /// Replaces the configuration and the history by copies of those
    /// in the snapshot.
    ///
    /// Returns an error, and changes nothing,
    /// if the snapshot is inconsistent.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), Error> {
        snapshot.validate()?;
        self.config = snapshot.config().clone();
        self.rule = self.config.rule();
        self.history = snapshot.history().to_vec();
        debug!("Restored from snapshot: {}", snapshot);
        Ok(())
    }

    /// Restores from the snapshot at `index` in the snapshot store.
    pub fn restore_from(&mut self, index: usize) -> Result<(), Error> {
        let snapshot = self.snapshots.get(index)?.clone();
        self.restore(&snapshot)
    }

    /// Displays the whole history in
    /// [Plaintext](https://conwaylife.com/wiki/Plaintext) format.
    ///
    /// * **Dead** cells are represented by `.`;
    /// * **Living** cells are represented by `o`;
    /// * Each generation is on its own line, ended with `\n`.
    pub fn plaintext(&self) -> String {
        cells::plaintext(&self.history)
    }
}

impl Display for Automaton {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.plaintext())
    }
}
