//! Mutable in-memory columnar tables for Sift.
//!
//! This crate provides the storage layer the incremental engine runs on:
//! - Columnar data representation with per-cell validity tracking.
//! - A mutable size model (`reserve` / `set_size` / `clear` / `reset`) so a
//!   table can be resized to one processing batch and reused for the next.
//! - Typed per-cell reads and writes through a closed set of value types.

#![forbid(unsafe_code)]

mod bitmap;
mod table;
mod types;

pub use crate::bitmap::BitVec;
pub use crate::table::{Column, ColumnSchema, Table};
pub use crate::types::{ColumnType, Value};
