//! __elementary-ca__ simulates
//! [elementary cellular automata](https://conwaylife.com/wiki/Elementary_cellular_automaton),
//! and keeps every generation it computes.
//!
//! # Example
//!
//! ```rust
//! use elementary_ca::{Config, ExtensionPolicy, Row};
//!
//! let config = Config::new(5, 1, 30).set_extension(ExtensionPolicy::Zero);
//! let initial_row: Row = "..o..".parse().unwrap();
//! let mut automaton = config.automaton_from_row(initial_row).unwrap();
//! automaton.simulate().unwrap();
//!
//! assert_eq!(automaton.plaintext(), "..o..\n.ooo.\n");
//! ```

mod automaton;
mod cells;
mod config;
mod error;
mod extension;
mod rule;
mod snapshot;
mod source;

pub use automaton::Automaton;
pub use cells::{Row, State, ALIVE, DEAD};
pub use config::Config;
pub use error::{ConfigError, Error};
pub use extension::ExtensionPolicy;
pub use rule::RuleSpec;
pub use snapshot::{Snapshot, SnapshotStore};
pub use source::{RandomRow, RowSource};
