use sift_columnar::ColumnType;

/// Definition of one computed column: the alias its values are published
/// under and the type its expression evaluates to.
///
/// The expression itself lives in the evaluation engine; this core only
/// needs the (alias, dtype) pair to shape its snapshot tables.
#[derive(Clone, Debug, PartialEq)]
pub struct ComputedColumn {
    pub alias: String,
    pub dtype: ColumnType,
}

impl ComputedColumn {
    pub fn new(alias: impl Into<String>, dtype: ColumnType) -> Self {
        Self {
            alias: alias.into(),
            dtype,
        }
    }
}
