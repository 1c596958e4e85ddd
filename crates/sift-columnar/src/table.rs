#![forbid(unsafe_code)]

use crate::bitmap::BitVec;
use crate::types::{ColumnType, Value};
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq)]
pub struct ColumnSchema {
    pub name: String,
    pub column_type: ColumnType,
}

/// Type-dispatched backing storage for one column.
#[derive(Clone, Debug)]
enum ColumnData {
    Int(Vec<i64>),
    Float(Vec<f64>),
    Bool(BitVec),
    Str(Vec<Arc<str>>),
    UInt8(Vec<u8>),
}

impl ColumnData {
    fn for_type(column_type: ColumnType) -> Self {
        match column_type {
            ColumnType::Int => ColumnData::Int(Vec::new()),
            ColumnType::Float => ColumnData::Float(Vec::new()),
            ColumnType::Bool => ColumnData::Bool(BitVec::new()),
            ColumnType::Str => ColumnData::Str(Vec::new()),
            ColumnType::UInt8 => ColumnData::UInt8(Vec::new()),
        }
    }

    fn reserve(&mut self, rows: usize) {
        match self {
            ColumnData::Int(v) => v.reserve(rows.saturating_sub(v.len())),
            ColumnData::Float(v) => v.reserve(rows.saturating_sub(v.len())),
            ColumnData::Bool(v) => v.reserve_bits(rows),
            ColumnData::Str(v) => v.reserve(rows.saturating_sub(v.len())),
            ColumnData::UInt8(v) => v.reserve(rows.saturating_sub(v.len())),
        }
    }

    fn resize(&mut self, rows: usize) {
        match self {
            ColumnData::Int(v) => v.resize(rows, 0),
            ColumnData::Float(v) => v.resize(rows, 0.0),
            ColumnData::Bool(v) => v.resize(rows, false),
            ColumnData::Str(v) => v.resize(rows, Arc::<str>::from("")),
            ColumnData::UInt8(v) => v.resize(rows, 0),
        }
    }

    fn clear(&mut self) {
        match self {
            ColumnData::Int(v) => v.clear(),
            ColumnData::Float(v) => v.clear(),
            ColumnData::Bool(v) => v.clear(),
            ColumnData::Str(v) => v.clear(),
            ColumnData::UInt8(v) => v.clear(),
        }
    }
}

/// One column of a [`Table`]: typed storage plus a validity bitmap.
#[derive(Clone, Debug)]
pub struct Column {
    schema: ColumnSchema,
    data: ColumnData,
    validity: BitVec,
}

impl Column {
    fn new(schema: ColumnSchema) -> Self {
        Self {
            data: ColumnData::for_type(schema.column_type),
            schema,
            validity: BitVec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.schema.name
    }

    pub fn column_type(&self) -> ColumnType {
        self.schema.column_type
    }

    pub fn len(&self) -> usize {
        self.validity.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validity.is_empty()
    }

    pub fn is_valid(&self, row: usize) -> bool {
        self.validity.get(row)
    }

    /// Read the cell at `row`; invalid cells read as [`Value::Null`].
    pub fn value(&self, row: usize) -> Value {
        if !self.validity.get(row) {
            return Value::Null;
        }
        match &self.data {
            ColumnData::Int(v) => Value::Int(v[row]),
            ColumnData::Float(v) => Value::Float(v[row]),
            ColumnData::Bool(v) => Value::Bool(v.get(row)),
            ColumnData::Str(v) => Value::Str(v[row].clone()),
            ColumnData::UInt8(v) => Value::UInt8(v[row]),
        }
    }

    /// Read the cell at `row` as a boolean, if this is a valid `Bool` cell.
    pub fn bool_value(&self, row: usize) -> Option<bool> {
        if !self.validity.get(row) {
            return None;
        }
        match &self.data {
            ColumnData::Bool(v) => Some(v.get(row)),
            _ => None,
        }
    }

    /// Write the cell at `row`. A value whose type does not match the column
    /// type (including `Value::Null`) stores as null.
    pub fn set(&mut self, row: usize, value: Value) {
        match (&mut self.data, value) {
            (ColumnData::Int(v), Value::Int(x)) => v[row] = x,
            (ColumnData::Float(v), Value::Float(x)) => v[row] = x,
            (ColumnData::Bool(v), Value::Bool(x)) => v.set(row, x),
            (ColumnData::Str(v), Value::Str(x)) => v[row] = x,
            (ColumnData::UInt8(v), Value::UInt8(x)) => v[row] = x,
            _ => {
                self.set_null(row);
                return;
            }
        }
        self.validity.set(row, true);
    }

    pub fn set_null(&mut self, row: usize) {
        self.validity.set(row, false);
    }

    fn reserve(&mut self, rows: usize) {
        self.data.reserve(rows);
        self.validity.reserve_bits(rows);
    }

    fn resize(&mut self, rows: usize) {
        self.data.resize(rows);
        // Newly exposed rows start out null until a caller writes them.
        self.validity.resize(rows, false);
    }

    fn clear(&mut self) {
        self.data.clear();
        self.validity.clear();
    }

    fn reset(&mut self) {
        self.data = ColumnData::for_type(self.schema.column_type);
        self.validity = BitVec::new();
    }
}

/// A mutable in-memory columnar table.
///
/// The logical row count is controlled through [`Table::set_size`]; cells of
/// newly exposed rows are null until written. `clear` drops the rows but
/// keeps allocated capacity for reuse; `reset` drops both.
#[derive(Clone, Debug)]
pub struct Table {
    schema: Vec<ColumnSchema>,
    columns: Vec<Column>,
    rows: usize,
}

impl Table {
    /// Build an empty table with zero capacity.
    pub fn new(schema: Vec<ColumnSchema>) -> Self {
        let columns = schema.iter().cloned().map(Column::new).collect();
        Self {
            schema,
            columns,
            rows: 0,
        }
    }

    /// Build an empty table with backing storage for `rows` rows.
    pub fn with_capacity(schema: Vec<ColumnSchema>, rows: usize) -> Self {
        let mut table = Self::new(schema);
        table.reserve(rows);
        table
    }

    pub fn schema(&self) -> &[ColumnSchema] {
        &self.schema
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Hint storage to accommodate at least `rows` rows. Never shrinks and
    /// does not change the logical row count.
    pub fn reserve(&mut self, rows: usize) {
        for column in &mut self.columns {
            column.reserve(rows);
        }
    }

    /// Set the logical row count to exactly `rows`, growing storage as
    /// needed. Newly exposed cells are null.
    pub fn set_size(&mut self, rows: usize) {
        for column in &mut self.columns {
            column.resize(rows);
        }
        self.rows = rows;
    }

    /// Reset the logical row count to zero, retaining allocated capacity.
    pub fn clear(&mut self) {
        for column in &mut self.columns {
            column.clear();
        }
        self.rows = 0;
    }

    /// Discard all data and capacity, returning to the freshly constructed
    /// state. The schema is unaffected.
    pub fn reset(&mut self) {
        for column in &mut self.columns {
            column.reset();
        }
        self.rows = 0;
    }

    pub fn get_column(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.schema.name == name)
    }

    pub fn get_const_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.schema.name == name)
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    pub fn columns_mut(&mut self) -> &mut [Column] {
        &mut self.columns
    }
}
