//! Mapper, Prototype and Table working together on realistic rows.


use recast::{
    record, Accessor, Error, Lookup, Mapper, Mapping, Matrix, Prototype, Record, Table, Value,
};
use test_data_gen::matrix_with_counts;

fn status_mapper() -> Mapper {
    let statuses = Lookup::new("statuses", "name");
    let mapping = Mapping::new(statuses, "status", "status_id", "id").expect("valid mapping");
    let mut mapper = Mapper::new([mapping]).expect("unique names");
    mapper
        .add_each(
            "statuses",
            [
                record! { "id" => 1, "name" => "active" },
                record! { "id" => 2, "name" => "inactive" },
            ],
        )
        .expect("known lookup");
    mapper
}

#[test]
fn test_mapper_resolves_codes_to_ids() {
    let mapper = status_mapper();
    let rows = [
        record! { "patient_id" => 1, "status" => "active" },
        record! { "patient_id" => 2, "status" => "inactive" },
        record! { "patient_id" => 3, "status" => "unknown" },
    ];
    let ids: Vec<Value> = rows.iter().map(|r| mapper.map(r)["status_id"].clone()).collect();
    assert_eq!(ids, vec![Value::Int(1), Value::Int(2), Value::Null]);

    // inputs are untouched
    assert!(!rows[0].contains_key("status_id"));
}

#[test]
fn test_mapper_with_computed_accessors() {
    let by_code = Lookup::new(
        "codes",
        Accessor::func(|r: &Record| Value::from(r.get("code").map(|v| v.to_string().to_lowercase()))),
    );
    let mapping = Mapping::new(
        by_code,
        Accessor::func(|r: &Record| Value::from(r.get("raw").map(|v| v.to_string().to_lowercase()))),
        "label",
        "label",
    )
    .expect("valid mapping");
    let mut mapper = Mapper::new([mapping]).expect("unique names");
    mapper
        .add("codes", record! { "code" => "AB", "label" => "Alpha Beta" })
        .expect("known lookup");

    let out = mapper.map(&record! { "raw" => "ab" });
    assert_eq!(out["label"], Value::from("Alpha Beta"));
}

#[test]
fn test_mapper_rejects_unknown_and_blank_lookup_names() {
    let mut mapper = status_mapper();
    assert!(matches!(
        mapper.add("nope", record! { "id" => 9 }),
        Err(Error::Config(_))
    ));
    assert!(matches!(
        mapper.add("  ", record! { "id" => 9 }),
        Err(Error::Config(_))
    ));
}

#[test]
fn test_prototype_shapes_heterogeneous_rows() {
    let prototype = Prototype::new(
        ["id".to_string(), "name".to_string(), "age".to_string()],
        Value::Null,
    );
    let shaped: Vec<Record> = [
        record! { "id" => 1 },
        record! { "age" => 40, "id" => 2, "extra" => true },
    ]
    .iter()
    .map(|r| prototype.make(r))
    .collect();

    for row in &shaped {
        let keys: Vec<&str> = row.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["id", "name", "age"]);
    }
    assert_eq!(shaped[1]["age"], Value::Int(40));
    assert!(matches!(
        prototype.make_strict(&record! { "extra" => true }),
        Err(Error::KeyOutOfBounds(_))
    ));
}

#[test]
fn test_matrix_combinations_fill_a_table() {
    // every combination becomes a row; each field is a cell
    let matrix = matrix_with_counts(&[2, 2]);
    let keys: Vec<String> = matrix.keys().cloned().collect();
    let mut table: Table<usize, String, Value> =
        Table::new(Prototype::new(keys.iter().cloned(), Value::Null));

    for (row_id, record) in matrix.enumerate().into_iter().enumerate() {
        for (field, value) in record {
            table.add(row_id, field, value).expect("declared field");
        }
    }

    assert_eq!(table.len(), 4);
    let rows = table.rows();
    assert_eq!(rows[3].row_id, 3);
    assert_eq!(rows[3].fields["k0"], Value::Int(1));
    assert_eq!(rows[3].fields["k1"], Value::Int(1));
}

#[test]
fn test_sparse_table_rows_serialize() {
    let mut table: Table<&str, &str, Value> =
        Table::new(Prototype::new(["a", "b"], Value::from("n/a")));
    table
        .add("r1", "b", Value::from(5))
        .and_then(|t| t.add("r2", "a", Value::from(true)))
        .expect("declared fields");

    let json = serde_json::to_value(table.rows()).expect("serializable rows");
    assert_eq!(
        json,
        serde_json::json!([
            { "row_id": "r1", "fields": { "a": "n/a", "b": 5 } },
            { "row_id": "r2", "fields": { "a": true, "b": "n/a" } },
        ])
    );
}

#[test]
fn test_table_rejects_undeclared_field() {
    let mut table: Table<u32, &str, Value> = Table::new(Prototype::new(["a"], Value::Null));
    assert!(matches!(
        table.add(1, "z", Value::from(1)),
        Err(Error::KeyOutOfBounds(_))
    ));
    assert!(table.is_empty());
}

#[test]
fn test_matrix_from_pairs() {
    let matrix: Matrix<&str, i64> = [("x", 1), ("x", 2), ("y", 3)].into_iter().collect();
    assert_eq!(matrix.combination_count(), 2);
}
