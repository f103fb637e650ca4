use flashdeck_core::{Card, CardStore, CoreError};
use std::fs;
use tempfile::TempDir;

fn sample_store() -> CardStore {
    let mut s = CardStore::new();
    s.add("ohm", "resistance unit").unwrap();
    s.add("farad", "capacitance unit").unwrap();
    s.add("henry", "inductance unit").unwrap();
    s.answer("farad", "wrong").unwrap();
    s.answer("farad", "wrong again").unwrap();
    s
}

#[test]
fn export_then_import_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("deck.txt");

    let original = sample_store();
    assert_eq!(original.export_file(&path).unwrap(), 3);

    let mut restored = CardStore::new();
    assert_eq!(restored.import_file(&path).unwrap(), 3);
    assert_eq!(restored.cards(), original.cards());
}

#[test]
fn import_missing_file_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    let mut s = sample_store();
    let err = s.import_file(&dir.path().join("nope.txt")).unwrap_err();
    assert!(matches!(err, CoreError::FileNotFound(_)));
    assert_eq!(s.len(), 3);
}

#[test]
fn import_upserts_over_existing_cards() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("deck.txt");
    fs::write(&path, "farad\nunit of capacitance\n9\nvolt\npotential unit\n0\n").unwrap();

    let mut s = sample_store();
    assert_eq!(s.import_file(&path).unwrap(), 2);
    assert_eq!(s.len(), 4);
    // overwritten in place, position preserved
    assert_eq!(s.cards()[1].term, "farad");
    assert_eq!(s.cards()[1].definition, "unit of capacitance");
    assert_eq!(s.cards()[1].mistakes, 9);
    assert_eq!(s.cards()[3].term, "volt");
}

#[test]
fn malformed_import_leaves_store_unchanged() {
    let dir = TempDir::new().unwrap();

    let truncated = dir.path().join("truncated.txt");
    fs::write(&truncated, "volt\npotential unit\n").unwrap();
    let bad_count = dir.path().join("bad_count.txt");
    fs::write(&bad_count, "volt\npotential unit\nmany\n").unwrap();

    let mut s = sample_store();
    let before: Vec<Card> = s.cards().to_vec();

    assert!(matches!(
        s.import_file(&truncated).unwrap_err(),
        CoreError::TruncatedEntry(1)
    ));
    assert!(matches!(
        s.import_file(&bad_count).unwrap_err(),
        CoreError::InvalidMistakeCount(3)
    ));
    assert_eq!(s.cards(), before.as_slice());
}

#[test]
fn export_overwrites_previous_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("deck.txt");
    fs::write(&path, "stale\ncontents\n0\nstale2\ncontents2\n0\n").unwrap();

    let mut s = CardStore::new();
    s.add("ohm", "resistance unit").unwrap();
    assert_eq!(s.export_file(&path).unwrap(), 1);
    assert_eq!(fs::read_to_string(&path).unwrap(), "ohm\nresistance unit\n0\n");
}
