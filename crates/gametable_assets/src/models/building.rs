use std::time::Duration;

use super::{seconds_value, span};

data_model! {
    /// A building kind, one record per upgrade level.
    pub struct BuildingData {
        base: 1_000_000,
        table: "logic/buildings.csv",
        fields: {
            /// Entity key.
            name: String = "Name",
            /// Text ID of the tutorial instructor line.
            instructor_tid: String = "InstructorTid" as "TID_Instructor",
            /// Text ID of the info popup.
            info_tid: String = "InfoTID",
            /// Building class (`Defense`, `Resource`, `Army`, ...).
            building_class: String = "BuildingClass",
            /// Build time days component.
            build_time_d: i32 = "BuildTimeD",
            /// Build time hours component.
            build_time_h: i32 = "BuildTimeH",
            /// Build time minutes component.
            build_time_m: i32 = "BuildTimeM",
            /// Build time seconds component.
            build_time_s: i32 = "BuildTimeS",
            /// Resource paid to build or upgrade.
            build_resource: String = "BuildResource",
            /// Cost of this level.
            build_cost: i32 = "BuildCost",
            /// Town hall level required.
            town_hall_level: i32 = "TownHallLevel",
            /// Footprint width in tiles.
            width: i32 = "Width",
            /// Footprint height in tiles.
            height: i32 = "Height",
            /// Gold storage capacity.
            max_stored_gold: i32 = "MaxStoredGold",
            /// Elixir storage capacity.
            max_stored_elixir: i32 = "MaxStoredElixir",
            /// Whether it shelters clan castle troops.
            bunker: bool = "Bunker",
            /// Army housing provided.
            housing_space: i32 = "HousingSpace",
            /// Resource produced by collectors.
            produces_resource: String = "ProducesResource",
            /// Production rate.
            resource_per_hour: i32 = "ResourcePerHour",
            /// Collector capacity.
            resource_max: i32 = "ResourceMax",
            /// Whether the laboratory upgrades units.
            upgrades_units: bool = "UpgradesUnits",
            /// Hitpoints.
            hitpoints: i32 = "Hitpoints",
            /// Attack range in tiles times 100.
            attack_range: i32 = "AttackRange",
            /// Milliseconds between attacks.
            attack_speed: i32 = "AttackSpeed",
            /// Damage per attack.
            damage: i32 = "Damage",
            /// Whether it hits air units.
            air_targets: bool = "AirTargets",
            /// Whether it hits ground units.
            ground_targets: bool = "GroundTargets",
        },
        ignored: {
            "BuildTime": Int => |b| seconds_value(b.build_time()),
        },
    }
}

impl BuildingData {
    /// Total construction time of this level.
    #[must_use]
    pub fn build_time(&self) -> Duration {
        span(self.build_time_d, self.build_time_h, self.build_time_m, self.build_time_s)
    }

    /// Returns true if this building produces a resource.
    #[must_use]
    pub fn is_collector(&self) -> bool {
        !self.produces_resource.is_empty()
    }

    /// Returns true if this building attacks.
    #[must_use]
    pub fn is_defense(&self) -> bool {
        self.damage > 0 && (self.air_targets || self.ground_targets)
    }
}
