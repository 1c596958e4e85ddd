//! Incremental-recomputation core for computed (derived) columns.
//!
//! For each batch of incoming data, upstream evaluation writes computed
//! values into a set of snapshot tables; this crate tracks how every cell
//! changed between the previous and current snapshot and publishes the
//! result as a one-byte classification per cell, for downstream consumers
//! (aggregation contexts, change notification) to act on.
//!
//! The pieces:
//! - [`ComputedColumn`]: the (alias, dtype) shape of one computed column.
//! - [`derive_schemas`]: turns an ordered definition list into the value
//!   schema and the transition schema.
//! - [`SnapshotTables`]: the six columnar tables (`master`, `flattened`,
//!   `prev`, `current`, `delta`, `transitions`), their batch lifecycle, and
//!   the transition classifier.
//! - [`ValueTransition`]: the classification codes.

#![forbid(unsafe_code)]

mod expr;
mod parallel;
mod schema;
mod snapshot;
mod transition;

pub use crate::expr::ComputedColumn;
pub use crate::schema::{derive_schemas, SchemaError};
pub use crate::snapshot::{SnapshotTables, EXISTED_COLUMN};
pub use crate::transition::ValueTransition;
