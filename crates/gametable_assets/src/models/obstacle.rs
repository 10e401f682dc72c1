use std::time::Duration;

use super::{seconds_value, span};

data_model! {
    /// An obstacle kind: trees, rocks, gem boxes, tombstones.
    pub struct ObstacleData {
        base: 8_000_000,
        table: "logic/obstacles.csv",
        fields: {
            /// Entity key.
            name: String = "Name",
            /// Info popup text ID.
            info_tid: String = "InfoTID",
            /// Movie clip file.
            swf: String = "SWF",
            /// Export name of the sprite.
            export_name: String = "ExportName",
            /// Clear time in seconds.
            clear_time_seconds: i32 = "ClearTimeSeconds",
            /// Footprint width in tiles.
            width: i32 = "Width",
            /// Footprint height in tiles.
            height: i32 = "Height",
            /// Whether units can walk through.
            passable: bool = "Passable",
            /// Resource paid to clear.
            clear_resource: String = "ClearResource",
            /// Clear cost.
            clear_cost: i32 = "ClearCost",
            /// Resource dropped when cleared.
            loot_resource: String = "LootResource",
            /// Amount dropped when cleared.
            loot_count: i32 = "LootCount",
            /// Relative respawn probability.
            respawn_weight: i32 = "RespawnWeight",
            /// Whether this is a tombstone.
            is_tombstone: bool = "IsTombstone",
            /// Tombstone group.
            tomb_group: i32 = "TombGroup",
            /// Hours between seasonal appearances.
            appearance_period_hours: i32 = "AppearancePeriodHours",
            /// Minimum hours before respawning.
            min_respawn_time_hours: i32 = "MinRespawnTimeHours",
            /// Obstacle spawned in its place.
            spawn_obstacle: String = "SpawnObstacle",
        },
        ignored: {
            "ClearTime": Int => |o| seconds_value(o.clear_time()),
        },
    }
}

impl ObstacleData {
    /// Time the builder needs to clear it.
    #[must_use]
    pub fn clear_time(&self) -> Duration {
        span(0, 0, 0, self.clear_time_seconds)
    }
}
