//! Field descriptors and the per-type field map cache.
//!
//! A [`FieldMap`] lists, in declaration order, every field of a record type
//! that a table can populate: its logical name, an optional column alias,
//! its [`CellType`], and plain function pointers to read and write it.
//! Maps are built once per type through [`Mapped::field_map`] and shared via
//! [`FieldMapper::shared`].

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;

use gametable_foundation::{CellType, Value};
use gametable_table::Table;

/// Reads a field as a [`Value`] of the field's type.
pub type Getter<T> = fn(&T) -> Value;

/// Writes a field from a [`Value`] already coerced to the field's type.
pub type Setter<T> = fn(&mut T, Value);

/// How one record field maps to a table column.
pub struct FieldDescriptor<T> {
    name: &'static str,
    alias: Option<&'static str>,
    ty: CellType,
    ignored: bool,
    getter: Getter<T>,
    setter: Setter<T>,
}

impl<T> FieldDescriptor<T> {
    /// Returns the logical field name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the column alias, if the column is named differently.
    #[must_use]
    pub const fn alias(&self) -> Option<&'static str> {
        self.alias
    }

    /// Returns the column name this field reads from.
    #[must_use]
    pub fn column_name(&self) -> &'static str {
        self.alias.unwrap_or(self.name)
    }

    /// Returns the field type.
    #[must_use]
    pub const fn ty(&self) -> CellType {
        self.ty
    }

    /// Returns true if projection skips this field.
    #[must_use]
    pub const fn is_ignored(&self) -> bool {
        self.ignored
    }

    /// Reads the field from `record`.
    #[must_use]
    pub fn read(&self, record: &T) -> Value {
        (self.getter)(record)
    }

    /// Writes `value` into `record`.
    pub fn write(&self, record: &mut T, value: Value) {
        (self.setter)(record, value);
    }
}

impl<T> Clone for FieldDescriptor<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            alias: self.alias,
            ty: self.ty,
            ignored: self.ignored,
            getter: self.getter,
            setter: self.setter,
        }
    }
}

impl<T> fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("alias", &self.alias)
            .field("ty", &self.ty)
            .field("ignored", &self.ignored)
            .finish_non_exhaustive()
    }
}

/// A descriptor resolved against one table's columns.
#[derive(Debug)]
pub struct ProjectedField<'a, T> {
    /// The field being populated.
    pub descriptor: &'a FieldDescriptor<T>,
    /// Index of the source column.
    pub column: usize,
}

/// Ordered field descriptors of one record type.
pub struct FieldMap<T> {
    fields: Vec<FieldDescriptor<T>>,
}

impl<T> Default for FieldMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FieldMap<T> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Adds a field read from the column named `name`.
    #[must_use]
    pub fn field(self, name: &'static str, ty: CellType, getter: Getter<T>, setter: Setter<T>) -> Self {
        self.push(name, None, ty, false, getter, setter)
    }

    /// Adds a field read from the column named `alias`.
    #[must_use]
    pub fn aliased(
        self,
        name: &'static str,
        alias: &'static str,
        ty: CellType,
        getter: Getter<T>,
        setter: Setter<T>,
    ) -> Self {
        self.push(name, Some(alias), ty, false, getter, setter)
    }

    /// Adds a field read from `alias` when given, else from `name`.
    #[must_use]
    pub fn maybe_aliased(
        self,
        name: &'static str,
        alias: Option<&'static str>,
        ty: CellType,
        getter: Getter<T>,
        setter: Setter<T>,
    ) -> Self {
        self.push(name, alias, ty, false, getter, setter)
    }

    /// Adds a readable field that is never populated from a table.
    #[must_use]
    pub fn ignored(self, name: &'static str, ty: CellType, getter: Getter<T>) -> Self {
        self.push(name, None, ty, true, getter, |_, _| {})
    }

    fn push(
        mut self,
        name: &'static str,
        alias: Option<&'static str>,
        ty: CellType,
        ignored: bool,
        getter: Getter<T>,
        setter: Setter<T>,
    ) -> Self {
        self.fields.push(FieldDescriptor {
            name,
            alias,
            ty,
            ignored,
            getter,
            setter,
        });
        self
    }

    /// Returns every descriptor in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor<T>] {
        &self.fields
    }

    /// Returns the descriptor with logical name `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldDescriptor<T>> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns the number of descriptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the map has no descriptors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Resolves descriptors against `table`'s columns.
    ///
    /// Ignored fields and fields without a matching column are dropped.
    /// The field named `key` moves to the front so boundary detection runs
    /// before any other field resolves.
    #[must_use]
    pub fn project<'a>(&'a self, table: &Table, key: &str) -> Vec<ProjectedField<'a, T>> {
        let mut projected: Vec<_> = self
            .fields
            .iter()
            .filter(|f| !f.ignored)
            .filter_map(|descriptor| {
                table
                    .column_index(descriptor.column_name())
                    .map(|column| ProjectedField { descriptor, column })
            })
            .collect();
        if let Some(pos) = projected.iter().position(|p| p.descriptor.name == key) {
            let key_field = projected.remove(pos);
            projected.insert(0, key_field);
        }
        projected
    }

    /// Reads every field of `record`, in declaration order.
    #[must_use]
    pub fn values(&self, record: &T) -> Vec<(&'static str, Value)> {
        self.fields.iter().map(|f| (f.name, f.read(record))).collect()
    }
}

impl<T> fmt::Debug for FieldMap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.fields).finish()
    }
}

/// A Rust type a record field can hold.
pub trait FieldValue: Sized {
    /// The cell type the field is populated from.
    const CELL_TYPE: CellType;

    /// Converts the field to a [`Value`]; zero values map to their zero cell.
    fn to_value(&self) -> Value;

    /// Builds the field from a value already coerced to [`Self::CELL_TYPE`].
    fn from_value(value: Value) -> Self;
}

impl FieldValue for i32 {
    const CELL_TYPE: CellType = CellType::Int;

    fn to_value(&self) -> Value {
        Value::Int(*self)
    }

    fn from_value(value: Value) -> Self {
        value.int_or_zero()
    }
}

impl FieldValue for bool {
    const CELL_TYPE: CellType = CellType::Boolean;

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(value: Value) -> Self {
        value.bool_or_false()
    }
}

impl FieldValue for String {
    const CELL_TYPE: CellType = CellType::String;

    fn to_value(&self) -> Value {
        if self.is_empty() {
            Value::Empty
        } else {
            Value::from(self.as_str())
        }
    }

    fn from_value(value: Value) -> Self {
        value.to_string()
    }
}

/// A record type that can be populated from table rows.
pub trait Mapped: Sized + 'static {
    /// Builds the field map for this type.
    fn field_map() -> FieldMap<Self>;
}

type MapCache = RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>;

static FIELD_MAPS: LazyLock<MapCache> = LazyLock::new(|| RwLock::new(HashMap::new()));

/// Process-wide cache of field maps, one per record type.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldMapper;

impl FieldMapper {
    /// Returns the shared field map of `T`, building it on first use.
    #[must_use]
    pub fn shared<T: Mapped>() -> Arc<FieldMap<T>> {
        let key = TypeId::of::<T>();
        if let Some(map) = Self::cached::<T>(FIELD_MAPS.read().get(&key)) {
            return map;
        }

        let mut maps = FIELD_MAPS.write();
        if let Some(map) = Self::cached::<T>(maps.get(&key)) {
            return map;
        }
        let map = Arc::new(T::field_map());
        tracing::trace!(
            record = std::any::type_name::<T>(),
            fields = map.len(),
            "built field map"
        );
        maps.insert(key, Arc::clone(&map) as Arc<dyn Any + Send + Sync>);
        map
    }

    fn cached<T: Mapped>(entry: Option<&Arc<dyn Any + Send + Sync>>) -> Option<Arc<FieldMap<T>>> {
        entry.and_then(|any| Arc::clone(any).downcast::<FieldMap<T>>().ok())
    }
}
