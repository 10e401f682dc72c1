//! Integration tests for Layer 4: Assets
//!
//! Tests the data models, the snapshot store, and the shared store.

use std::collections::HashMap;

use gametable_assets::DataModel;
use gametable_table::Table;

mod store;

/// A small game data set, keyed by table path.
pub fn game_tables() -> HashMap<String, Table> {
    let mut tables = HashMap::new();
    tables.insert(
        gametable_assets::BuildingData::TABLE.to_string(),
        Table::from_raw(
            "buildings",
            &["Name", "BuildingClass", "BuildCost", "Hitpoints", "Damage", "GroundTargets", "ProducesResource"],
            &["string", "string", "int", "int", "int", "boolean", "string"],
            &[
                vec!["Cannon", "Defense", "250", "420", "9", "true", ""],
                vec!["", "", "1000", "470", "11", "", ""],
                vec!["", "", "4000", "520", "15", "", ""],
                vec!["Gold Mine", "Resource", "150", "400", "", "", "Gold"],
                vec!["", "", "300", "", "", "", ""],
            ],
        )
        .unwrap(),
    );
    tables.insert(
        gametable_assets::ResourceData::TABLE.to_string(),
        Table::from_raw(
            "resources",
            &["Name", "HudInstanceName", "TextRed", "TextGreen", "TextBlue", "PremiumCurrency"],
            &["string", "string", "int", "int", "int", "boolean"],
            &[
                vec!["Gold", "gold_bar", "255", "230", "0", "false"],
                vec!["Elixir", "elixir_bar", "240", "0", "240", "false"],
                vec!["Diamonds", "diamond_bar", "", "255", "", "true"],
            ],
        )
        .unwrap(),
    );
    tables.insert(
        gametable_assets::TrapData::TABLE.to_string(),
        Table::from_raw(
            "traps",
            &["Name", "Damage", "BuildTimeD", "BuildTimeH", "BuildTimeM"],
            &["string", "int", "int", "int", "int"],
            &[vec!["Bomb", "24", "0", "0", "0"], vec!["", "29", "", "1", ""]],
        )
        .unwrap(),
    );
    tables
}
