use crate::expr::ComputedColumn;
use sift_columnar::{ColumnSchema, ColumnType};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("duplicate computed column alias `{alias}`")]
    DuplicateAlias { alias: String },
    #[error("computed column `{alias}` declares the transition code type, which cannot hold computed values")]
    ReservedType { alias: String },
}

/// Derive the value schema and the transition schema for an ordered list of
/// computed column definitions.
///
/// The value schema carries each alias at its declared type; the transition
/// schema carries the same aliases, in the same order, all typed as the
/// one-byte transition code. Pure function of its input.
pub fn derive_schemas(
    defs: &[ComputedColumn],
) -> Result<(Vec<ColumnSchema>, Vec<ColumnSchema>), SchemaError> {
    let mut seen = HashSet::with_capacity(defs.len());
    let mut values = Vec::with_capacity(defs.len());
    let mut transitions = Vec::with_capacity(defs.len());

    for def in defs {
        if def.dtype == ColumnType::UInt8 {
            return Err(SchemaError::ReservedType {
                alias: def.alias.clone(),
            });
        }
        if !seen.insert(def.alias.as_str()) {
            return Err(SchemaError::DuplicateAlias {
                alias: def.alias.clone(),
            });
        }

        values.push(ColumnSchema {
            name: def.alias.clone(),
            column_type: def.dtype,
        });
        transitions.push(ColumnSchema {
            name: def.alias.clone(),
            column_type: ColumnType::UInt8,
        });
    }

    Ok((values, transitions))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schemas_preserve_order_and_types() {
        let defs = vec![
            ComputedColumn::new("b", ColumnType::Int),
            ComputedColumn::new("a", ColumnType::Float),
            ComputedColumn::new("c", ColumnType::Str),
        ];

        let (values, transitions) = derive_schemas(&defs).unwrap();

        let names: Vec<&str> = values.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert_eq!(values[0].column_type, ColumnType::Int);
        assert_eq!(values[1].column_type, ColumnType::Float);
        assert_eq!(values[2].column_type, ColumnType::Str);

        let transition_names: Vec<&str> =
            transitions.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(transition_names, names);
        assert!(transitions
            .iter()
            .all(|c| c.column_type == ColumnType::UInt8));
    }

    #[test]
    fn duplicate_alias_is_rejected() {
        let defs = vec![
            ComputedColumn::new("a", ColumnType::Float),
            ComputedColumn::new("a", ColumnType::Int),
        ];
        assert_eq!(
            derive_schemas(&defs),
            Err(SchemaError::DuplicateAlias {
                alias: "a".to_owned()
            })
        );
    }

    #[test]
    fn code_type_is_not_a_value_type() {
        let defs = vec![ComputedColumn::new("a", ColumnType::UInt8)];
        assert_eq!(
            derive_schemas(&defs),
            Err(SchemaError::ReservedType {
                alias: "a".to_owned()
            })
        );
    }
}
