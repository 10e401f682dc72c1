//! Integration tests for record identity and locking

use gametable_foundation::ErrorKind;
use gametable_storage::{DataRecord, LevelCollection};

use crate::Tower;

#[test]
fn identity_is_derived_from_base_id() {
    let tower = Tower::at(1_000_007, "Tesla", 2);
    assert_eq!(tower.id(), 1_000_007);
    assert_eq!(tower.index(), 7);
    assert_eq!(tower.text_key(), "Tesla");
    assert_eq!(tower.level(), 2);
    assert_eq!(Tower::kind_range().max(), 1_999_999);
}

#[test]
fn id_outside_kind_range_is_rejected() {
    let mut tower = Tower::default();
    for id in [999_999, 2_000_000] {
        let err = tower.set_id(id).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::OutOfRange { .. }));
    }
}

#[test]
fn placed_record_cannot_be_rehomed_or_edited() {
    let mut first = LevelCollection::new(1_000_000, "Cannon").unwrap();
    first.insert(Tower::at(1_000_000, "Cannon", 0)).unwrap();

    let mut placed = first.get(0).unwrap().clone();
    assert!(placed.is_locked());
    assert!(matches!(placed.set_id(1_000_001).unwrap_err().kind, ErrorKind::AlreadyLocked(_)));
    assert!(matches!(placed.set_text_key("Mortar").unwrap_err().kind, ErrorKind::AlreadyLocked(_)));
    assert!(matches!(placed.set_level(3).unwrap_err().kind, ErrorKind::AlreadyLocked(_)));

    let mut second = LevelCollection::new(1_000_000, "Cannon").unwrap();
    let err = second.insert(placed).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::AlreadyLocked(_)));
}

#[test]
fn removed_record_can_be_rehomed() {
    let mut first = LevelCollection::new(1_000_000, "Cannon").unwrap();
    first.insert(Tower::at(1_000_000, "Cannon", 0)).unwrap();
    let mut freed = first.remove(0).unwrap().unwrap();
    assert!(!freed.is_locked());

    freed.set_level(4).unwrap();
    let mut second = LevelCollection::new(1_000_000, "Cannon").unwrap();
    second.insert(freed).unwrap();
    assert!(second.contains(4));
}
