//! Integration tests for DataStore

use std::collections::BTreeMap;

use gametable_assets::{BuildingData, DataModel, DataStore, ObstacleData, TrapData};
use gametable_codec::{Deserializer, LoadConfig};
use gametable_foundation::ErrorKind;
use gametable_storage::DataRecord;
use gametable_table::Table;

use crate::game_tables;

#[test]
fn search_before_load_is_not_loaded() {
    let store = DataStore::new();
    let err = store.get_by_key::<ObstacleData>("Tree").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NotLoaded(_)));
    assert!(err.is_recoverable());
}

#[test]
fn key_and_base_id_return_same_entity() {
    let store = DataStore::new().load_from::<BuildingData, _>(&game_tables()).unwrap();
    let by_key = store.get_by_key::<BuildingData>("Cannon").unwrap();
    let by_id = store.get::<BuildingData>(BuildingData::BASE_ID).unwrap();
    assert!(std::ptr::eq(by_key, by_id));
}

#[test]
fn out_of_range_ids_fail() {
    let store = DataStore::new().load_from::<BuildingData, _>(&game_tables()).unwrap();
    for id in [999_999, 2_000_000] {
        let err = store.get::<BuildingData>(id).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::OutOfRange { .. }));
    }
}

#[test]
fn header_only_table_loads_as_empty_kind() {
    let table = Table::header_only("obstacles", &["Name", "ClearTimeSeconds"], &["string", "int"]).unwrap();
    let store = DataStore::new().load::<ObstacleData>(&table).unwrap();
    assert!(store.is_loaded::<ObstacleData>());
    assert_eq!(store.collection::<ObstacleData>().unwrap().len(), 0);
    assert!(matches!(
        store.get_by_key::<ObstacleData>("Tree").unwrap_err().kind,
        ErrorKind::NotFound(_)
    ));
}

#[test]
fn kinds_load_independently() {
    let tables = game_tables();
    let buildings = DataStore::new().load_from::<BuildingData, _>(&tables).unwrap();
    let both = buildings.load_from::<TrapData, _>(&tables).unwrap();

    assert_eq!(buildings.loaded_kinds(), vec!["BuildingData"]);
    assert_eq!(both.loaded_kinds(), vec!["BuildingData", "TrapData"]);

    let without = both.unload::<BuildingData>();
    assert!(!without.is_loaded::<BuildingData>());
    assert!(without.is_loaded::<TrapData>());
    assert!(both.is_loaded::<BuildingData>());
}

#[test]
fn provider_without_table_is_invalid_argument() {
    let tables: BTreeMap<String, Table> = BTreeMap::new();
    let err = DataStore::new().load_from::<ObstacleData, _>(&tables).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidArgument(ref m) if m.contains(ObstacleData::TABLE)));
}

#[test]
fn explicit_deserializer_config_applies() {
    let table = Table::from_raw(
        "traps",
        &["Name", "Damage"],
        &["string", "int"],
        &[vec!["", "5"], vec!["Bomb", "24"]],
    )
    .unwrap();
    let strict = Deserializer::new(LoadConfig::strict());
    assert!(DataStore::new().load_with::<TrapData>(&table, &strict).is_err());
    let store = DataStore::new().load::<TrapData>(&table).unwrap();
    assert_eq!(store.get_level::<TrapData>(12_000_000, 0).unwrap().damage, 24);
}

#[test]
fn with_collection_installs_prebuilt_data() {
    let tables = game_tables();
    let traps = gametable_codec::deserialize::<TrapData>(&tables[TrapData::TABLE]).unwrap();
    let store = DataStore::new().with_collection(traps);
    assert_eq!(store.get_by_key::<TrapData>("Bomb").unwrap().len(), 2);
}
