use std::time::Duration;

use super::{seconds_value, span};

data_model! {
    /// A trap kind, one record per upgrade level.
    pub struct TrapData {
        base: 12_000_000,
        table: "logic/traps.csv",
        fields: {
            /// Entity key.
            name: String = "Name",
            /// Info popup text ID.
            info_tid: String = "InfoTID",
            /// Damage dealt when triggered.
            damage: i32 = "Damage",
            /// Splash radius.
            damage_radius: i32 = "DamageRadius",
            /// Trigger radius.
            trigger_radius: i32 = "TriggerRadius",
            /// Footprint width in tiles.
            width: i32 = "Width",
            /// Footprint height in tiles.
            height: i32 = "Height",
            /// Whether units can walk through.
            passable: bool = "Passable",
            /// Resource paid to build or upgrade.
            build_resource: String = "BuildResource",
            /// Build time days component.
            build_time_d: i32 = "BuildTimeD",
            /// Build time hours component.
            build_time_h: i32 = "BuildTimeH",
            /// Build time minutes component.
            build_time_m: i32 = "BuildTimeM",
            /// Cost of this level.
            build_cost: i32 = "BuildCost",
            /// Cost to rearm after triggering.
            rearm_cost: i32 = "RearmCost",
            /// Town hall level required.
            town_hall_level: i32 = "TownHallLevel",
            /// Whether it throws victims away.
            eject_victims: bool = "EjectVictims",
            /// Minimum housing space that triggers it.
            min_trigger_housing_limit: i32 = "MinTriggerHousingLimit",
            /// Triggered by air units.
            air_trigger: bool = "AirTrigger",
            /// Triggered by ground units.
            ground_trigger: bool = "GroundTrigger",
            /// Triggered by healers.
            healer_trigger: bool = "HealerTrigger",
            /// Spell cast when triggered.
            spell: String = "Spell",
        },
        ignored: {
            "BuildTime": Int => |t| seconds_value(t.build_time()),
        },
    }
}

impl TrapData {
    /// Total construction time of this level.
    #[must_use]
    pub fn build_time(&self) -> Duration {
        span(self.build_time_d, self.build_time_h, self.build_time_m, 0)
    }
}
