//! Integration tests for EntityCollection

use gametable_foundation::ErrorKind;
use gametable_storage::{EntityCollection, LevelCollection};

use crate::Tower;

fn entity(id: i32, key: &str, levels: usize) -> LevelCollection<Tower> {
    let mut collection = LevelCollection::new(id, key).unwrap();
    for level in 0..levels {
        collection.insert(Tower::at(id, key, level)).unwrap();
    }
    collection
}

fn towers() -> EntityCollection<Tower> {
    let mut entities = EntityCollection::new();
    entities.insert(entity(1_000_000, "Cannon", 3)).unwrap();
    entities.insert(entity(1_000_001, "Archer Tower", 2)).unwrap();
    entities
}

#[test]
fn lookup_by_id_and_key_agree() {
    let entities = towers();
    let by_id = entities.get(1_000_000).unwrap().unwrap();
    let by_key = entities.get_by_key("Cannon").unwrap();
    assert!(std::ptr::eq(by_id, by_key));
    assert!(entities.contains(1_000_001).unwrap());
    assert!(entities.contains_key("Archer Tower"));
    assert!(!entities.contains_key("Mortar"));
}

#[test]
fn ids_outside_range_are_out_of_range() {
    let entities = towers();
    assert!(entities.get(1_000_000).is_ok());
    assert!(entities.get(1_000_500).unwrap().is_none());
    for id in [999_999, 2_000_000] {
        assert!(matches!(entities.get(id).unwrap_err().kind, ErrorKind::OutOfRange { .. }));
        assert!(entities.contains(id).is_err());
    }
}

#[test]
fn duplicate_id_is_rejected_but_set_replaces() {
    let mut entities = towers();
    let err = entities.insert(entity(1_000_000, "Mortar", 1)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateIdentity(_)));

    let old = entities.set(entity(1_000_000, "Mortar", 1)).unwrap().unwrap();
    assert_eq!(old.text_key(), "Cannon");
    assert_eq!(entities.get_by_key("Mortar").unwrap().len(), 1);
    assert_eq!(entities.len(), 2);
}

#[test]
fn counts() {
    let entities = towers();
    assert_eq!(entities.len(), 2);
    assert_eq!(entities.record_count(), 5);
    assert_eq!(entities.ids().collect::<Vec<_>>(), vec![1_000_000, 1_000_001]);
    assert_eq!(entities.iter().count(), 2);
}

#[test]
fn remove_by_id_and_key() {
    let mut entities = towers();
    assert_eq!(entities.remove(1_000_000).unwrap().unwrap().text_key(), "Cannon");
    assert!(entities.remove_by_key("Cannon").unwrap().is_none());
    assert!(entities.remove_by_key("Archer Tower").unwrap().is_some());
    assert!(entities.is_empty());
}

#[test]
fn sealing_propagates_to_levels() {
    let mut entities = towers();
    entities.seal();
    assert!(entities.is_sealed());
    assert!(entities.get(1_000_000).unwrap().unwrap().is_sealed());
    assert!(matches!(
        entities.insert(entity(1_000_002, "Mortar", 1)).unwrap_err().kind,
        ErrorKind::AlreadyLocked(_)
    ));
    assert!(entities.clear().is_err());
}
