use crate::expr::ComputedColumn;
use crate::schema::{derive_schemas, SchemaError};
use crate::transition::ValueTransition;
use sift_columnar::{Column, ColumnType, Table, Value};

#[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
use rayon::prelude::*;

/// Name of the boolean column in the row-existence table passed to
/// [`SnapshotTables::calculate_transitions`].
pub const EXISTED_COLUMN: &str = "existed";

/// The six columnar tables tracking one set of computed columns.
///
/// `master` accumulates computed values across batches and is sized by the
/// evaluation engine. The other five are *transitional*: their row counts
/// always agree and describe exactly the in-flight batch. Rows line up by
/// index across `flattened`, `prev`, `current`, `delta` and `transitions`.
///
/// All six tables share column names; the five value tables share per-column
/// types, while every `transitions` column holds one-byte
/// [`ValueTransition`] codes.
///
/// The tables are owned exclusively by this aggregate and handed out as
/// borrows, so the lifecycle operations below cannot race with access to
/// individual tables.
#[derive(Debug)]
pub struct SnapshotTables {
    master: Table,
    flattened: Table,
    prev: Table,
    current: Table,
    delta: Table,
    transitions: Table,
}

impl SnapshotTables {
    /// Derive the value and transition schemas from `defs` and allocate the
    /// six tables at zero capacity.
    pub fn new(defs: &[ComputedColumn]) -> Result<Self, SchemaError> {
        let (value_schema, transition_schema) = derive_schemas(defs)?;

        Ok(Self {
            master: Table::new(value_schema.clone()),
            flattened: Table::new(value_schema.clone()),
            prev: Table::new(value_schema.clone()),
            current: Table::new(value_schema.clone()),
            delta: Table::new(value_schema),
            transitions: Table::new(transition_schema),
        })
    }

    /// Hint storage for at least `rows` rows in each transitional table.
    ///
    /// Does not change logical sizes and never shrinks; `master` is left
    /// alone.
    pub fn reserve_transitional(&mut self, rows: usize) {
        self.flattened.reserve(rows);
        self.prev.reserve(rows);
        self.current.reserve(rows);
        self.delta.reserve(rows);
        self.transitions.reserve(rows);
    }

    /// Set the logical row count of every transitional table to exactly
    /// `rows`. Newly exposed cells are null until the evaluation engine
    /// populates them (the classifier writes `transitions` itself).
    pub fn set_transitional_size(&mut self, rows: usize) {
        self.flattened.set_size(rows);
        self.prev.set_size(rows);
        self.current.set_size(rows);
        self.delta.set_size(rows);
        self.transitions.set_size(rows);
    }

    /// Drop the batch: reset every transitional table to zero rows, keeping
    /// allocated capacity for the next batch. `master` is unaffected.
    pub fn clear_transitional(&mut self) {
        self.flattened.clear();
        self.prev.clear();
        self.current.clear();
        self.delta.clear();
        self.transitions.clear();
    }

    /// Discard all data and capacity in all six tables, including `master`,
    /// returning to the just-constructed state.
    pub fn reset(&mut self) {
        self.master.reset();
        self.flattened.reset();
        self.prev.reset();
        self.current.reset();
        self.delta.reset();
        self.transitions.reset();
    }

    /// Row count shared by the five transitional tables.
    ///
    /// Panics if they disagree; that only happens when a caller resized an
    /// individual table behind [`SnapshotTables::set_transitional_size`],
    /// which breaks the lifecycle contract beyond recovery.
    pub fn transitional_size(&self) -> usize {
        let rows = self.flattened.row_count();
        assert!(
            self.prev.row_count() == rows
                && self.current.row_count() == rows
                && self.delta.row_count() == rows
                && self.transitions.row_count() == rows,
            "transitional tables have diverging row counts"
        );
        rows
    }

    pub fn master(&self) -> &Table {
        &self.master
    }

    pub fn master_mut(&mut self) -> &mut Table {
        &mut self.master
    }

    pub fn flattened(&self) -> &Table {
        &self.flattened
    }

    pub fn flattened_mut(&mut self) -> &mut Table {
        &mut self.flattened
    }

    pub fn prev(&self) -> &Table {
        &self.prev
    }

    pub fn prev_mut(&mut self) -> &mut Table {
        &mut self.prev
    }

    pub fn current(&self) -> &Table {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut Table {
        &mut self.current
    }

    pub fn delta(&self) -> &Table {
        &self.delta
    }

    pub fn delta_mut(&mut self) -> &mut Table {
        &mut self.delta
    }

    /// The per-cell classification produced by
    /// [`SnapshotTables::calculate_transitions`]. Read-only: only the
    /// classifier writes it.
    pub fn transitions(&self) -> &Table {
        &self.transitions
    }

    /// Classify how every cell changed between `prev` and `current`,
    /// writing one [`ValueTransition`] code per cell into `transitions`.
    ///
    /// `existed` must carry a `Bool` column named [`EXISTED_COLUMN`] with
    /// one flag per batch row, telling whether the row was present before
    /// this batch. Each (column, row) cell is classified independently of
    /// every other cell, so columns are processed in parallel when a thread
    /// pool is available; the output never depends on execution order.
    ///
    /// Panics if `existed` has the wrong row count or if a table is missing
    /// a computed column; both indicate a broken lifecycle contract.
    pub fn calculate_transitions(&mut self, existed: &Table) {
        let rows = self.transitional_size();
        assert_eq!(
            existed.row_count(),
            rows,
            "row-existence table has {} rows but the batch has {rows}",
            existed.row_count()
        );

        let existed_column = existed
            .get_const_column(EXISTED_COLUMN)
            .unwrap_or_else(|| {
                panic!("row-existence table is missing the `{EXISTED_COLUMN}` column")
            });
        assert_eq!(
            existed_column.column_type(),
            ColumnType::Bool,
            "`{EXISTED_COLUMN}` must be a Bool column"
        );

        let prev = &self.prev;
        let current = &self.current;

        let classify_column = |out: &mut Column| {
            let prev_column = prev.get_const_column(out.name()).unwrap_or_else(|| {
                panic!("prev table is missing computed column `{}`", out.name())
            });
            let current_column = current.get_const_column(out.name()).unwrap_or_else(|| {
                panic!("current table is missing computed column `{}`", out.name())
            });

            for row in 0..out.len() {
                let row_existed = existed_column.bool_value(row).unwrap_or(false);

                let transition = if row_existed {
                    let prev_valid = prev_column.is_valid(row);
                    let current_valid = current_column.is_valid(row);

                    if prev_valid
                        && current_valid
                        && prev_column.value(row) == current_column.value(row)
                    {
                        // Unchanged; prior state carries forward.
                        ValueTransition::EqSame
                    } else if !prev_valid && current_valid {
                        // The previous cell was null and a value appeared.
                        ValueTransition::NeqFromNull
                    } else {
                        ValueTransition::NeqChanged
                    }
                } else {
                    // The row is new; there is no prior state to compare
                    // against.
                    ValueTransition::NeqFromNull
                };

                out.set(row, Value::UInt8(transition.code()));
            }
        };

        #[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
        {
            if let Some(pool) = crate::parallel::classifier_pool() {
                let columns = self.transitions.columns_mut();
                pool.install(|| {
                    columns
                        .par_iter_mut()
                        .for_each(|column| classify_column(column));
                });
                return;
            }
        }

        for column in self.transitions.columns_mut() {
            classify_column(column);
        }
    }
}
