use elementary_ca::{
    Automaton, Config, ConfigError, Error as CaError, ExtensionPolicy, RandomRow, Row, RowSource,
    ALIVE,
};
use std::error::Error;

#[test]
fn rule_30_one_step() -> Result<(), Box<dyn Error>> {
    let config = Config::new(5, 1, 30).set_extension(ExtensionPolicy::Zero);
    let mut automaton = config.automaton_from_row("..o..".parse()?)?;
    let row = automaton.step()?;
    assert_eq!(row.bits(), vec![0, 1, 1, 1, 0]);
    assert_eq!(automaton.last_row(), &row);
    assert_eq!(automaton.generations(), 2);
    assert!(automaton.has_simulated());
    Ok(())
}

#[test]
fn rule_90_plaintext() -> Result<(), Box<dyn Error>> {
    let config = Config::new(7, 3, 90).set_extension(ExtensionPolicy::Zero);
    let mut automaton = config.automaton_from_row("...o...".parse()?)?;
    automaton.simulate()?;
    assert_eq!(
        automaton.plaintext(),
        String::from(
            "...o...\n\
             ..o.o..\n\
             .o...o.\n\
             o.o.o.o\n"
        )
    );
    assert_eq!(automaton.to_string(), automaton.plaintext());
    Ok(())
}

#[test]
fn extension_policies() -> Result<(), Box<dyn Error>> {
    let expected = [
        (ExtensionPolicy::Zero, ".o..."),
        (ExtensionPolicy::One, "oo..o"),
        (ExtensionPolicy::Extend, "oo..."),
        (ExtensionPolicy::Periodic, ".o..o"),
    ];
    for &(extension, row) in expected.iter() {
        let config = Config::new(5, 1, 90).set_extension(extension);
        let mut automaton = config.automaton_from_row("o....".parse()?)?;
        assert_eq!(automaton.step()?.to_string(), row, "{}", extension);
    }
    Ok(())
}

#[test]
fn default_config() -> Result<(), Box<dyn Error>> {
    let config = Config::default();
    assert_eq!(config.width, Some(30));
    assert_eq!(config.length, 50);
    assert_eq!(config.rule_number, 30);
    assert_eq!(config.extension, ExtensionPolicy::Extend);

    let mut automaton = config.automaton()?;
    assert_eq!(automaton.width(), 30);
    automaton.simulate()?;
    assert_eq!(automaton.generations(), 51);
    assert!(automaton.history().iter().all(|row| row.width() == 30));
    Ok(())
}

#[test]
fn initial_row_overrides_width() -> Result<(), Box<dyn Error>> {
    let config = Config::new(10, 0, 30);
    let automaton = config.automaton_from_row("..o..".parse()?)?;
    assert_eq!(automaton.width(), 5);
    assert_eq!(automaton.config().width, Some(5));

    let config = Config::default().set_width(None);
    let automaton = config.automaton_from(Some("o.o".parse()?), &mut RandomRow::default())?;
    assert_eq!(automaton.width(), 3);
    Ok(())
}

#[test]
fn injected_row_source() -> Result<(), Box<dyn Error>> {
    let config = Config::new(4, 2, 110);
    let mut source = |width: usize| Row::dead(width);
    let automaton = config.automaton_from(None, &mut source)?;
    assert_eq!(automaton.initial_row().to_string(), "....");

    let mut a = RandomRow::seeded(2021);
    let mut b = RandomRow::seeded(2021);
    assert_eq!(a.row(64), b.row(64));
    assert_eq!(a.row(17).width(), 17);
    Ok(())
}

#[test]
fn invalid_configurations() {
    let invalid = |result: Result<Automaton, CaError>, err: ConfigError| {
        assert_eq!(result.err(), Some(CaError::InvalidConfiguration(err)));
    };
    invalid(Config::new(0, 5, 30).automaton(), ConfigError::NonPositiveWidth);
    invalid(Config::new(-3, 5, 30).automaton(), ConfigError::NonPositiveWidth);
    invalid(
        Config::default().set_width(None).automaton(),
        ConfigError::UnknownWidth,
    );
    invalid(Config::new(5, -1, 30).automaton(), ConfigError::NegativeLength);
    invalid(
        Config::new(5, 0, 30).automaton_from_row(Row::default()),
        ConfigError::EmptyRow,
    );
    invalid(
        Automaton::new(Config::new(4, 0, 30), Row::dead(5)),
        ConfigError::WidthMismatch {
            expected: 4,
            found: 5,
        },
    );
    invalid(
        Config::new(4, 0, 30).automaton_with(&mut |_: usize| Row::dead(2)),
        ConfigError::WidthMismatch {
            expected: 4,
            found: 2,
        },
    );
}

#[test]
fn set_rule_is_not_retroactive() -> Result<(), Box<dyn Error>> {
    let config = Config::new(9, 3, 30).set_extension(ExtensionPolicy::Zero);
    let mut automaton = config.automaton_from_row("....o....".parse()?)?;
    automaton.simulate()?;
    let before = automaton.history().to_vec();

    automaton.set_rule(0);
    automaton.set_extension(ExtensionPolicy::One);
    assert_eq!(automaton.history(), before.as_slice());
    assert_eq!(automaton.rule().number(), 0);
    assert_eq!(automaton.config().rule_number, 0);

    automaton.step()?;
    assert_eq!(automaton.last_row(), &Row::dead(9));
    assert_eq!(&automaton.history()[..4], before.as_slice());
    Ok(())
}

#[test]
fn reset() -> Result<(), Box<dyn Error>> {
    let config = Config::new(6, 4, 110);
    let initial: Row = ".o.oo.".parse()?;
    let mut automaton = config.automaton_from_row(initial.clone())?;
    automaton.simulate()?;
    automaton.set_rule(45);
    automaton.capture();

    automaton.reset(false);
    assert_eq!(automaton.history(), &[initial.clone()]);
    assert!(!automaton.has_simulated());
    assert_eq!(automaton.rule().number(), 45);
    assert_eq!(automaton.snapshots().len(), 1);

    automaton.simulate_for(2)?;
    automaton.reset(true);
    assert_eq!(automaton.history(), &[initial]);
    assert!(automaton.snapshots().is_empty());
    Ok(())
}

#[test]
fn set_length() -> Result<(), Box<dyn Error>> {
    let mut automaton = Config::new(3, 1, 150).automaton_from_row(".o.".parse()?)?;
    assert_eq!(
        automaton.set_length(-1),
        Err(CaError::InvalidConfiguration(ConfigError::NegativeLength))
    );
    automaton.set_length(5)?;
    automaton.simulate()?;
    assert_eq!(automaton.generations(), 6);
    Ok(())
}

#[test]
fn capture_and_restore() -> Result<(), Box<dyn Error>> {
    let config = Config::new(8, 3, 30).set_extension(ExtensionPolicy::Periodic);
    let mut automaton = config.automaton_from_row("...o....".parse()?)?;
    automaton.simulate()?;
    automaton.capture();
    let captured_config = automaton.config().clone();
    let captured_history = automaton.history().to_vec();

    automaton.set_rule(255);
    automaton.set_extension(ExtensionPolicy::Zero);
    automaton.simulate_for(5)?;
    assert_eq!(automaton.last_row().population(), 8);

    automaton.restore_from(0)?;
    assert_eq!(automaton.config(), &captured_config);
    assert_eq!(automaton.history(), captured_history.as_slice());
    assert_eq!(automaton.rule().number(), 30);
    assert!(automaton.has_simulated());

    // The stored snapshot is not touched by stepping the restored automaton.
    automaton.step()?;
    assert_eq!(automaton.snapshots().get(0)?.history(), captured_history.as_slice());
    Ok(())
}

#[test]
fn restore_single_generation() -> Result<(), Box<dyn Error>> {
    let mut automaton = Config::new(4, 2, 90).automaton_from_row("o..o".parse()?)?;
    automaton.capture();
    automaton.simulate()?;
    assert!(automaton.has_simulated());
    automaton.restore_from(0)?;
    assert!(!automaton.has_simulated());
    assert_eq!(automaton.generations(), 1);
    Ok(())
}

#[test]
fn snapshot_index() -> Result<(), Box<dyn Error>> {
    let mut automaton = Config::new(4, 1, 90).automaton_from_row("o..o".parse()?)?;
    assert_eq!(
        automaton.snapshots().get(0).err(),
        Some(CaError::IndexOutOfRange { index: 0, len: 0 })
    );

    automaton.capture();
    automaton.simulate()?;
    automaton.capture();
    assert_eq!(automaton.snapshots().get(0)?.generations(), 1);
    assert_eq!(automaton.snapshots().get(1)?.generations(), 2);
    assert_eq!(
        automaton.snapshots().get(2).err(),
        Some(CaError::IndexOutOfRange { index: 2, len: 2 })
    );
    assert_eq!(
        automaton.restore_from(7),
        Err(CaError::IndexOutOfRange { index: 7, len: 2 })
    );
    Ok(())
}

#[test]
fn cleared_store_keeps_copies() -> Result<(), Box<dyn Error>> {
    let mut automaton = Config::new(5, 2, 30).automaton_from_row("..o..".parse()?)?;
    automaton.simulate()?;
    automaton.capture();
    let copy = automaton.snapshots().get(0)?.clone();

    automaton.snapshots_mut().clear();
    assert!(automaton.snapshots().is_empty());
    assert_eq!(copy.generations(), 3);

    automaton.reset(false);
    automaton.restore(&copy)?;
    assert_eq!(automaton.generations(), 3);
    Ok(())
}

#[test]
fn snapshot_automaton() -> Result<(), Box<dyn Error>> {
    let config = Config::new(11, 5, 90).set_extension(ExtensionPolicy::Zero);
    let mut automaton = config.automaton_from_row(".....o.....".parse()?)?;
    automaton.simulate()?;
    let snapshot = automaton.snapshot();
    assert!(automaton.snapshots().is_empty());

    let mut copy = snapshot.automaton()?;
    assert_eq!(copy.plaintext(), automaton.plaintext());
    assert_eq!(copy.plaintext(), snapshot.plaintext());
    copy.step()?;
    automaton.step()?;
    assert_eq!(copy.history(), automaton.history());
    assert_eq!(
        snapshot.to_string(),
        "width = 11, length = 5, rule = W90, extension = Zero, generations = 6"
    );
    Ok(())
}

#[test]
fn standalone_store() -> Result<(), Box<dyn Error>> {
    use elementary_ca::SnapshotStore;

    let mut automaton = Config::new(3, 1, 255).automaton_from_row("...".parse()?)?;
    let mut store = SnapshotStore::with_limit(2);
    for _ in 0..3 {
        store.capture(&automaton);
        automaton.step()?;
    }
    assert_eq!(store.len(), 2);
    assert_eq!(store.get(0)?.generations(), 2);
    assert!(store.get(1)?.history()[2].iter().all(|&s| s == ALIVE));
    assert_eq!(store.iter().count(), 2);
    Ok(())
}

#[test]
#[cfg(feature = "serde")]
fn ser() -> Result<(), Box<dyn Error>> {
    let config = Config::new(6, 3, 110).set_extension(ExtensionPolicy::Periodic);
    let mut automaton = config.automaton_from_row("..oo.o".parse()?)?;
    automaton.simulate()?;
    automaton.capture();

    let json = serde_json::to_string(automaton.snapshots().get(0)?)?;
    let snapshot: elementary_ca::Snapshot = serde_json::from_str(&json)?;
    assert_eq!(&snapshot, automaton.snapshots().get(0)?);

    let mut new_automaton = snapshot.automaton()?;
    assert_eq!(new_automaton.history(), automaton.history());
    new_automaton.simulate()?;
    automaton.simulate()?;
    assert_eq!(new_automaton.plaintext(), automaton.plaintext());
    Ok(())
}

#[test]
#[cfg(feature = "serde")]
fn deser_config() -> Result<(), Box<dyn Error>> {
    let config: Config = serde_json::from_str(
        r#"{"width": null, "length": 3, "rule_number": 110, "extension": "Periodic"}"#,
    )?;
    assert_eq!(
        config,
        Config::default()
            .set_width(None)
            .set_length(3)
            .set_rule_number(110)
            .set_extension(ExtensionPolicy::Periodic)
    );
    assert_eq!(serde_json::from_str::<Row>("[0, 1, 1]")?, ".oo".parse::<Row>()?);
    assert!(serde_json::from_str::<Row>("[0, 1, 2]").is_err());
    Ok(())
}

#[test]
#[cfg(feature = "serde")]
fn restore_rejects_inconsistent_snapshot() -> Result<(), Box<dyn Error>> {
    let mut automaton = Config::new(3, 2, 30).automaton_from_row(".o.".parse()?)?;
    automaton.simulate()?;
    let before = automaton.history().to_vec();

    let snapshot: elementary_ca::Snapshot = serde_json::from_str(
        r#"{
            "config": {"width": 3, "length": 0, "rule_number": 90, "extension": "Zero"},
            "history": [[0, 1, 0], [1, 0]]
        }"#,
    )?;
    assert_eq!(
        automaton.restore(&snapshot),
        Err(CaError::InvalidConfiguration(ConfigError::WidthMismatch {
            expected: 3,
            found: 2
        }))
    );
    assert_eq!(automaton.history(), before.as_slice());
    assert_eq!(automaton.rule().number(), 30);
    Ok(())
}
