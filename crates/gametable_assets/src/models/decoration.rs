data_model! {
    /// A decoration kind.
    pub struct DecorationData {
        base: 18_000_000,
        table: "logic/decos.csv",
        fields: {
            /// Entity key.
            name: String = "Name",
            /// Info popup text ID.
            info_tid: String = "InfoTID",
            /// Movie clip file.
            swf: String = "SWF",
            /// Export name of the sprite.
            export_name: String = "ExportName",
            /// Resource paid to buy it.
            build_resource: String = "BuildResource",
            /// Purchase cost.
            build_cost: i32 = "BuildCost",
            /// Experience level required.
            required_exp_level: i32 = "RequiredExpLevel",
            /// Maximum number placed.
            max_count: i32 = "MaxCount",
            /// Footprint width in tiles.
            width: i32 = "Width",
            /// Footprint height in tiles.
            height: i32 = "Height",
            /// Shop icon.
            icon: String = "Icon",
        },
    }
}
