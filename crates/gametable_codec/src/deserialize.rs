//! Hierarchical deserialization.
//!
//! Rows are read top to bottom. A row whose key cell is non-empty is a
//! boundary row: it starts a new entity at level 0. Every following row
//! with an empty key cell is the next level of that entity, and each of
//! its empty cells takes the value the same field last held since the
//! boundary row.
//!
//! ```text
//! Name    Cost   Hitpoints
//! Cannon  50     400        <- entity 0, level 0
//!                520        <- entity 0, level 1 (Cost inherited: 50)
//! Mortar  80     300        <- entity 1, level 0
//! ```

use std::sync::Arc;

use gametable_foundation::{CellType, Error, ErrorContext, ErrorKind, Result, Value};
use gametable_storage::{DataRecord, EntityCollection, LevelCollection};
use gametable_table::{Row, Table};

use crate::config::{LoadConfig, OrphanRows};
use crate::field::{FieldMap, FieldMapper, Mapped, ProjectedField};

/// Counts gathered during one load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of entities produced.
    pub entities: usize,
    /// Number of records produced across all entities.
    pub records: usize,
    /// Rows dropped because they preceded the first boundary row.
    pub orphan_rows: usize,
}

/// Converts tables into sealed entity collections.
#[derive(Clone, Debug, Default)]
pub struct Deserializer {
    config: LoadConfig,
}

impl Deserializer {
    /// Creates a deserializer with the given configuration.
    #[must_use]
    pub fn new(config: LoadConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &LoadConfig {
        &self.config
    }

    /// Deserializes `table` using `T`'s shared field map.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `T` has no field named after the key column
    /// - `MalformedTable` if the table has data rows but no key column, or
    ///   an orphan row is found under [`OrphanRows::Reject`]
    /// - `TypeMismatch` if a cell cannot convert to its field's type
    /// - `OutOfRange` if the table holds more entities than `T`'s range
    pub fn deserialize<T>(&self, table: &Table) -> Result<EntityCollection<T>>
    where
        T: DataRecord + Mapped + Default,
    {
        self.deserialize_with_report(table).map(|(entities, _)| entities)
    }

    /// Like [`Deserializer::deserialize`], also returning a [`LoadReport`].
    ///
    /// # Errors
    ///
    /// See [`Deserializer::deserialize`].
    pub fn deserialize_with_report<T>(&self, table: &Table) -> Result<(EntityCollection<T>, LoadReport)>
    where
        T: DataRecord + Mapped + Default,
    {
        let map = FieldMapper::shared::<T>();
        self.deserialize_mapped(table, &map)
    }

    /// Deserializes `table` with an explicit field map.
    ///
    /// # Errors
    ///
    /// See [`Deserializer::deserialize`].
    pub fn deserialize_mapped<T>(
        &self,
        table: &Table,
        map: &FieldMap<T>,
    ) -> Result<(EntityCollection<T>, LoadReport)>
    where
        T: DataRecord + Default,
    {
        let key = self.config.key_column.as_str();
        if map.get(key).is_none() {
            return Err(Error::invalid_argument(format!(
                "{} has no field named '{key}' to mark entity boundaries",
                T::KIND
            )));
        }

        let fields = map.project(table, key);
        let has_key = fields.first().is_some_and(|f| f.descriptor.name() == key);
        if !has_key && !table.is_empty() {
            let column = map.get(key).map_or(key, |f| f.column_name());
            return Err(Error::malformed(format!("no '{column}' column to mark entity boundaries"))
                .with_context(ErrorContext::new().with_table(table.name())));
        }

        let mut load = Load::new(table, &fields, &self.config);
        for row in table.rows() {
            load.row(row)?;
        }
        let (mut entities, report) = load.finish()?;
        entities.seal();

        tracing::debug!(
            table = table.name(),
            kind = T::KIND,
            entities = report.entities,
            records = report.records,
            orphan_rows = report.orphan_rows,
            "deserialized table"
        );
        Ok((entities, report))
    }
}

/// Deserializes `table` with the default configuration.
///
/// # Errors
///
/// See [`Deserializer::deserialize`].
pub fn deserialize<T>(table: &Table) -> Result<EntityCollection<T>>
where
    T: DataRecord + Mapped + Default,
{
    Deserializer::default().deserialize(table)
}

/// Deserializes `table` with the default configuration and reports counts.
///
/// # Errors
///
/// See [`Deserializer::deserialize`].
pub fn deserialize_with_report<T>(table: &Table) -> Result<(EntityCollection<T>, LoadReport)>
where
    T: DataRecord + Mapped + Default,
{
    Deserializer::default().deserialize_with_report(table)
}

/// State of one pass over a table.
struct Load<'a, 'm, T> {
    table: &'a Table,
    fields: &'a [ProjectedField<'m, T>],
    config: &'a LoadConfig,
    entities: EntityCollection<T>,
    /// Entity being filled, with its shared text key.
    current: Option<(LevelCollection<T>, Arc<str>)>,
    /// Last value each projected field held since the boundary row.
    inherited: Vec<Option<Value>>,
    next_index: usize,
    level: usize,
    report: LoadReport,
}

impl<'a, 'm, T: DataRecord + Default> Load<'a, 'm, T> {
    fn new(table: &'a Table, fields: &'a [ProjectedField<'m, T>], config: &'a LoadConfig) -> Self {
        Self {
            table,
            fields,
            config,
            entities: EntityCollection::new(),
            current: None,
            inherited: vec![None; fields.len()],
            next_index: 0,
            level: 0,
            report: LoadReport::default(),
        }
    }

    fn row(&mut self, row: &Row) -> Result<()> {
        let fields = self.fields;
        let boundary = fields
            .first()
            .and_then(|key| row.cell(key.column))
            .filter(|cell| !cell.is_empty());

        if let Some(key_cell) = boundary {
            self.open_entity(key_text(key_cell), row)?;
        } else if self.current.is_some() {
            self.level += 1;
        } else {
            return self.orphan(row);
        }

        let mut record = T::default();
        for (slot, field) in fields.iter().enumerate() {
            let Some(cell) = row.cell(field.column) else {
                continue;
            };
            let ty = field.descriptor.ty();
            let value = if cell.is_empty() {
                self.inherited[slot].clone().unwrap_or_default()
            } else {
                let value = cell
                    .coerce(ty)
                    .ok_or_else(|| self.mismatch(ty, cell, row, field))?;
                self.inherited[slot] = Some(value.clone());
                value
            };
            if !value.is_zero_for(ty) {
                field.descriptor.write(&mut record, value);
            }
        }

        if boundary.is_some() {
            // Fields the boundary row left empty pass on whatever the record holds.
            for (slot, field) in fields.iter().enumerate() {
                if self.inherited[slot].is_none() {
                    self.inherited[slot] = Some(field.descriptor.read(&record));
                }
            }
        }

        let Some((levels, key)) = self.current.as_mut() else {
            return Err(Error::new(ErrorKind::Internal(
                "no open entity after boundary detection".to_string(),
            )));
        };
        record.set_id(levels.id())?;
        record.set_text_key(Arc::clone(key))?;
        record.set_level(self.level)?;
        levels.insert(record)?;
        self.report.records += 1;
        Ok(())
    }

    fn open_entity(&mut self, key: Arc<str>, row: &Row) -> Result<()> {
        self.close_entity()?;

        let id = T::kind_range()
            .id_at(self.next_index)
            .map_err(|e| e.with_context(self.context(row)))?;
        self.next_index += 1;
        self.level = 0;
        self.inherited.fill(None);

        if self.entities.contains_key(&key) {
            tracing::warn!(
                table = self.table.name(),
                key = %key,
                line = row.line(),
                "duplicate text key starts a new entity"
            );
        }
        tracing::trace!(id, key = %key, line = row.line(), "entity boundary");

        let levels = LevelCollection::with_capacity(id, Arc::clone(&key), self.config.level_capacity)?;
        self.current = Some((levels, key));
        Ok(())
    }

    fn close_entity(&mut self) -> Result<()> {
        if let Some((mut levels, _)) = self.current.take() {
            levels.seal();
            self.entities.insert(levels)?;
            self.report.entities += 1;
        }
        Ok(())
    }

    fn orphan(&mut self, row: &Row) -> Result<()> {
        match self.config.orphan_rows {
            OrphanRows::Skip => {
                tracing::warn!(
                    table = self.table.name(),
                    line = row.line(),
                    "skipping row before first boundary row"
                );
                self.report.orphan_rows += 1;
                Ok(())
            }
            OrphanRows::Reject => Err(Error::malformed(format!(
                "row has an empty '{}' cell and no entity to continue",
                self.config.key_column
            ))
            .with_context(self.context(row))),
        }
    }

    fn mismatch(&self, ty: CellType, cell: &Value, row: &Row, field: &ProjectedField<'m, T>) -> Error {
        let column = &*self.table.columns()[field.column].name;
        Error::type_mismatch(ty, format!("{cell:?}")).with_context(self.context(row).with_column(column))
    }

    fn context(&self, row: &Row) -> ErrorContext {
        ErrorContext::new()
            .with_table(self.table.name())
            .with_line(row.line())
    }

    fn finish(mut self) -> Result<(EntityCollection<T>, LoadReport)> {
        self.close_entity()?;
        Ok((self.entities, self.report))
    }
}

fn key_text(cell: &Value) -> Arc<str> {
    match cell {
        Value::String(text) => Arc::clone(text),
        other => Arc::from(other.to_string()),
    }
}
