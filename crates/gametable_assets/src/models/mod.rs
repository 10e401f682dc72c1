//! Data models, one per data kind.
//!
//! Each model is a plain struct with one public field per column it reads,
//! plus the embedded [`RecordMeta`](gametable_storage::RecordMeta) identity.
//! The `data_model!` macro derives the record identity, the field map, and
//! the [`DataModel`] table path from a single field list.

use std::time::Duration;

use gametable_codec::Mapped;
use gametable_foundation::Value;
use gametable_storage::DataRecord;

/// A record kind that can be loaded into a [`DataStore`](crate::DataStore).
pub trait DataModel: DataRecord + Mapped + Default + Clone + Send + Sync {
    /// Path of the table this kind loads from.
    const TABLE: &'static str;
}

/// Declares a data model struct and its record, mapping, and table impls.
///
/// Each field line reads `ident: Type = "Column"`, optionally followed by
/// `as "Alias"` when the column in the file is named differently. The
/// optional `ignored` block lists computed fields that appear in the field
/// map for inspection but are never populated from a table.
macro_rules! data_model {
    (
        $(#[$attr:meta])*
        pub struct $model:ident {
            base: $base:expr,
            table: $table:expr,
            fields: {
                $(
                    $(#[$fattr:meta])*
                    $field:ident : $fty:ty = $column:literal $(as $alias:literal)?
                ),* $(,)?
            } $(,)?
            $(
                ignored: {
                    $( $iname:literal : $ity:ident => $igetter:expr ),* $(,)?
                } $(,)?
            )?
        }
    ) => {
        $(#[$attr])*
        #[derive(Clone, Debug, Default, PartialEq, Eq)]
        pub struct $model {
            meta: ::gametable_storage::RecordMeta,
            $(
                $(#[$fattr])*
                pub $field: $fty,
            )*
        }

        impl $model {
            /// Creates a record with every field at its zero value.
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }
        }

        impl ::gametable_storage::DataRecord for $model {
            const BASE_ID: i32 = $base;
            const KIND: &'static str = stringify!($model);

            fn meta(&self) -> &::gametable_storage::RecordMeta {
                &self.meta
            }

            fn meta_mut(&mut self) -> &mut ::gametable_storage::RecordMeta {
                &mut self.meta
            }
        }

        impl ::gametable_codec::Mapped for $model {
            fn field_map() -> ::gametable_codec::FieldMap<Self> {
                ::gametable_codec::FieldMap::<Self>::new()
                    $(
                        .maybe_aliased(
                            $column,
                            None $(.or(Some($alias)))?,
                            <$fty as ::gametable_codec::FieldValue>::CELL_TYPE,
                            |r| ::gametable_codec::FieldValue::to_value(&r.$field),
                            |r, v| r.$field = <$fty as ::gametable_codec::FieldValue>::from_value(v),
                        )
                    )*
                    $($(
                        .ignored($iname, ::gametable_foundation::CellType::$ity, $igetter)
                    )*)?
            }
        }

        impl $crate::models::DataModel for $model {
            const TABLE: &'static str = $table;
        }
    };
}

mod building;
mod character;
mod decoration;
mod obstacle;
mod resource;
mod spell;
mod trap;

pub use building::BuildingData;
pub use character::CharacterData;
pub use decoration::DecorationData;
pub use obstacle::ObstacleData;
pub use resource::ResourceData;
pub use spell::SpellData;
pub use trap::TrapData;

/// Builds a duration from split day/hour/minute/second columns.
///
/// Negative totals clamp to zero.
pub(crate) fn span(days: i32, hours: i32, minutes: i32, seconds: i32) -> Duration {
    let total = i64::from(days) * 86_400 + i64::from(hours) * 3_600 + i64::from(minutes) * 60 + i64::from(seconds);
    Duration::from_secs(u64::try_from(total).unwrap_or(0))
}

/// Whole seconds of `duration` as an int cell, saturating.
pub(crate) fn seconds_value(duration: Duration) -> Value {
    Value::Int(i32::try_from(duration.as_secs()).unwrap_or(i32::MAX))
}
