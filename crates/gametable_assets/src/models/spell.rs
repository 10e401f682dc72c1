use std::time::Duration;

use super::{seconds_value, span};

data_model! {
    /// A spell kind, one record per laboratory level.
    pub struct SpellData {
        base: 26_000_000,
        table: "logic/spells.csv",
        fields: {
            /// Entity key.
            name: String = "Name",
            /// Display name text ID.
            tid: String = "TID",
            /// Info popup text ID.
            info_tid: String = "InfoTID",
            /// Whether the spell factory stopped brewing it.
            disable_production: bool = "DisableProduction",
            /// Spell factory level that unlocks it.
            spell_forge_level: i32 = "SpellForgeLevel",
            /// Laboratory level required for this upgrade.
            laboratory_level: i32 = "LaboratoryLevel",
            /// Resource paid to brew.
            training_resource: String = "TrainingResource",
            /// Cost to brew one spell.
            training_cost: i32 = "TrainingCost",
            /// Spell housing taken.
            housing_space: i32 = "HousingSpace",
            /// Brew time in seconds.
            training_time: i32 = "TrainingTime",
            /// Upgrade time in hours.
            upgrade_time_h: i32 = "UpgradeTimeH",
            /// Resource paid to upgrade.
            upgrade_resource: String = "UpgradeResource",
            /// Upgrade cost.
            upgrade_cost: i32 = "UpgradeCost",
            /// Damage dealt.
            damage: i32 = "Damage",
            /// Effect radius.
            radius: i32 = "Radius",
            /// Speed boost applied to troops.
            speed_boost: i32 = "SpeedBoost",
            /// Damage boost applied to troops, in percent.
            damage_boost_percent: i32 = "DamageBoostPercent",
        },
        ignored: {
            "TrainingDuration": Int => |s| seconds_value(s.training_duration()),
        },
    }
}

impl SpellData {
    /// Time to brew one spell.
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
