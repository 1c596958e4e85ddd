use pretty_assertions::assert_eq;
use sift_columnar::{ColumnType, Table, Value};
use sift_engine::{ComputedColumn, SnapshotTables};

fn defs() -> Vec<ComputedColumn> {
    vec![
        ComputedColumn::new("price", ColumnType::Float),
        ComputedColumn::new("count", ColumnType::Int),
        ComputedColumn::new("label", ColumnType::Str),
    ]
}

fn names(table: &Table) -> Vec<&str> {
    table.schema().iter().map(|c| c.name.as_str()).collect()
}

#[test]
fn construction_builds_six_empty_tables_in_definition_order() {
    let tables = SnapshotTables::new(&defs()).unwrap();

    for table in [
        tables.master(),
        tables.flattened(),
        tables.prev(),
        tables.current(),
        tables.delta(),
    ] {
        assert_eq!(names(table), vec!["price", "count", "label"]);
        assert_eq!(table.schema()[0].column_type, ColumnType::Float);
        assert_eq!(table.schema()[1].column_type, ColumnType::Int);
        assert_eq!(table.schema()[2].column_type, ColumnType::Str);
        assert_eq!(table.row_count(), 0);
    }

    let transitions = tables.transitions();
    assert_eq!(names(transitions), vec!["price", "count", "label"]);
    assert!(transitions
        .schema()
        .iter()
        .all(|c| c.column_type == ColumnType::UInt8));
    assert_eq!(transitions.row_count(), 0);
}

#[test]
fn set_size_and_clear_track_one_batch() {
    let mut tables = SnapshotTables::new(&defs()).unwrap();

    // `master` is sized by the evaluation engine, independently of batches.
    tables.master_mut().set_size(3);

    tables.reserve_transitional(4);
    tables.set_transitional_size(4);
    assert_eq!(tables.transitional_size(), 4);
    assert_eq!(tables.flattened().row_count(), 4);
    assert_eq!(tables.prev().row_count(), 4);
    assert_eq!(tables.current().row_count(), 4);
    assert_eq!(tables.delta().row_count(), 4);
    assert_eq!(tables.transitions().row_count(), 4);
    assert_eq!(tables.master().row_count(), 3);

    tables.clear_transitional();
    assert_eq!(tables.transitional_size(), 0);
    assert_eq!(tables.master().row_count(), 3);
}

#[test]
fn set_size_without_reserve_still_sizes_exactly() {
    let mut tables = SnapshotTables::new(&defs()).unwrap();
    tables.set_transitional_size(100);
    assert_eq!(tables.transitional_size(), 100);
    // Unpopulated cells read as null.
    let price = tables.current().get_const_column("price").unwrap();
    assert_eq!(price.value(99), Value::Null);
}

#[test]
fn reset_discards_everything_but_the_schemas() {
    let mut tables = SnapshotTables::new(&defs()).unwrap();

    tables.master_mut().set_size(5);
    tables
        .master_mut()
        .get_column("count")
        .unwrap()
        .set(4, Value::Int(42));
    tables.set_transitional_size(2);
    tables
        .prev_mut()
        .get_column("price")
        .unwrap()
        .set(0, Value::Float(1.5));

    tables.reset();
    assert_eq!(tables.master().row_count(), 0);
    assert_eq!(tables.transitional_size(), 0);
    assert_eq!(names(tables.master()), vec!["price", "count", "label"]);

    // The set accepts a fresh batch cycle after a reset.
    tables.reserve_transitional(2);
    tables.set_transitional_size(2);
    assert_eq!(tables.transitional_size(), 2);
    let price = tables.prev().get_const_column("price").unwrap();
    assert_eq!(price.value(0), Value::Null);
}
