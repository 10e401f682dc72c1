use std::time::Duration;

use super::{seconds_value, span};

data_model! {
    /// A troop kind, one record per laboratory level.
    pub struct CharacterData {
        base: 4_000_000,
        table: "logic/characters.csv",
        fields: {
            /// Entity key.
            name: String = "Name",
            /// Display name text ID.
            tid: String = "TID",
            /// Info popup text ID.
            info_tid: String = "InfoTID",
            /// Army camp space taken.
            housing_space: i32 = "HousingSpace",
            /// Barracks level that unlocks the troop.
            barrack_level: i32 = "BarrackLevel",
            /// Laboratory level required for this upgrade.
            laboratory_level: i32 = "LaboratoryLevel",
            /// Movement speed.
            speed: i32 = "Speed",
            /// Hitpoints.
            hitpoints: i32 = "Hitpoints",
            /// Training time in seconds.
            training_time: i32 = "TrainingTime",
            /// Resource paid to train.
            training_resource: String = "TrainingResource",
            /// Cost to train one unit.
            training_cost: i32 = "TrainingCost",
            /// Upgrade time in hours.
            upgrade_time_h: i32 = "UpgradeTimeH",
            /// Resource paid to upgrade.
            upgrade_resource: String = "UpgradeResource",
            /// Upgrade cost.
            upgrade_cost: i32 = "UpgradeCost",
            /// Cost to donate one unit.
            donate_cost: i32 = "DonateCost",
            /// Attack range.
            attack_range: i32 = "AttackRange",
            /// Milliseconds between attacks.
            attack_speed: i32 = "AttackSpeed",
            /// Damage per second.
            dps: i32 = "DPS",
            /// Splash radius.
            damage_radius: i32 = "DamageRadius",
            /// Whether the troop flies.
            is_flying: bool = "IsFlying",
            /// Whether it hits air units.
            air_targets: bool = "AirTargets",
            /// Whether it hits ground units.
            ground_targets: bool = "GroundTargets",
        },
        ignored: {
            "TrainingDuration": Int => |c| seconds_value(c.training_duration()),
            "UpgradeDuration": Int => |c| seconds_value(c.upgrade_duration()),
        },
    }
}

impl CharacterData {
    /// Time to train one unit.
    #[must_use]
    pub fn training_duration(&self) -> Duration {
        span(0, 0, 0, self.training_time)
    }

    /// Time to research this level.
    #[must_use]
    pub fn upgrade_duration(&self) -> Duration {
        span(0, self.upgrade_time_h, 0, 0)
    }
}
