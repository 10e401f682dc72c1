data_model! {
    /// A resource kind such as gold or elixir.
    pub struct ResourceData {
        base: 3_000_000,
        table: "logic/resources.csv",
        fields: {
            /// Entity key.
            name: String = "Name",
            /// Movie clip file.
            swf: String = "SWF",
            /// Effect played when collected.
            collect_effect: String = "CollectEffect",
            /// Export name of the HUD icon.
            resource_icon_export_name: String = "ResourceIconExportName",
            /// Effect played when stolen in battle.
            steal_effect: String = "StealEffect",
            /// Whether this is the premium currency.
            premium_currency: bool = "PremiumCurrency",
            /// HUD instance name.
            hud_instance_name: String = "HUDInstanceName" as "HudInstanceName",
            /// Text ID shown when storage is full.
            cap_full_tid: String = "CapFullTID",
            /// Counter text color, red channel.
            text_red: i32 = "TextRed",
            /// Counter text color, green channel.
            text_green: i32 = "TextGreen",
            /// Counter text color, blue channel.
            text_blue: i32 = "TextBlue",
            /// Resource used for the war-base counterpart.
            war_ref_resource: String = "WarRefResource",
        },
    }
}

impl ResourceData {
    /// Counter text color as `(red, green, blue)`.
    #[must_use]
    pub fn text_color(&self) -> (i32, i32, i32) {
        (self.text_red, self.text_green, self.text_blue)
    }
}
