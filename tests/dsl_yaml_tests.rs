//! Configuration documents driving full pipelines through the facade.

use recast::{parse_json_document, parse_yaml_document, record, DslError, Error, Pipeline, Value};

const INTAKE: &str = r#"
unpivot:
  collisions: last_write_wins
  pivots:
    - keys: [first_exam_date, last_exam_date, consent_date]
      coalesce_key: field
      coalesce_key_value: value
mappings:
  - lookup: { name: statuses, by: code }
    value: status
    set: status_id
    with: id
prototype:
  keys: [patient_id, status, status_id, field, value]
  base_value: missing
"#;

fn intake_pipeline() -> Pipeline {
    let doc = parse_yaml_document(INTAKE).expect("valid document");
    let mut pipeline = Pipeline::from_document(&doc).expect("valid pipeline");
    pipeline
        .mapper_mut()
        .add_each(
            "statuses",
            [
                record! { "id" => 100, "code" => "A" },
                record! { "id" => 200, "code" => "I" },
            ],
        )
        .expect("known lookup");
    pipeline
}

#[test]
fn test_intake_rows_become_one_row_per_date() {
    let patients = vec![
        record! {
            "patient_id" => 1,
            "status" => "A",
            "first_exam_date" => "2020-01-03",
            "last_exam_date" => "2020-04-05",
            "consent_date" => "2020-01-02",
        },
        record! { "patient_id" => 2, "status" => "I" },
    ];

    let out = intake_pipeline()
        .process_all(&patients)
        .expect("declared fields only");
    assert_eq!(out.len(), 6);

    assert_eq!(
        out[0],
        record! {
            "patient_id" => 1,
            "status" => "A",
            "status_id" => 100,
            "field" => "first_exam_date",
            "value" => "2020-01-03",
        }
    );
    // second patient has no dates: values come back null, not the base value
    for row in &out[3..] {
        assert_eq!(row["status_id"], Value::Int(200));
        assert_eq!(row["value"], Value::Null);
    }
}

#[test]
fn test_base_value_fills_fields_nothing_produced() {
    let doc = parse_yaml_document("prototype:\n  keys: [a, b]\n  base_value: missing\n")
        .expect("valid document");
    let pipeline = Pipeline::from_document(&doc).expect("valid pipeline");
    let out = pipeline.process(&record! { "a" => 1 }).expect("declared");
    assert_eq!(out, vec![record! { "a" => 1, "b" => "missing" }]);
}

#[test]
fn test_yaml_and_json_documents_agree() {
    let yaml = parse_yaml_document(
        "unpivot:\n  pivots:\n    - keys: [x, y]\n      coalesce_key: k\n      coalesce_key_value: v\n",
    )
    .expect("valid yaml");
    let json = parse_json_document(
        r#"{"unpivot": {"pivots": [{"keys": ["x", "y"], "coalesce_key": "k", "coalesce_key_value": "v"}]}}"#,
    )
    .expect("valid json");

    let input = record! { "x" => 1.5, "y" => false, "z" => "keep" };
    let from_yaml = Pipeline::from_document(&yaml)
        .and_then(|p| p.process(&input))
        .expect("yaml pipeline");
    let from_json = Pipeline::from_document(&json)
        .and_then(|p| p.process(&input))
        .expect("json pipeline");
    assert_eq!(from_yaml, from_json);
    assert_eq!(from_yaml.len(), 2);
}

#[test]
fn test_single_pivot_key_may_be_a_scalar() {
    let doc = parse_yaml_document(
        "unpivot:\n  pivots:\n    - keys: only\n      coalesce_key: k\n      coalesce_key_value: v\n",
    )
    .expect("scalar keys accepted");
    let out = doc
        .unpivot()
        .expect("unpivot")
        .expand(&record! { "only" => 7 });
    assert_eq!(out, vec![record! { "k" => "only", "v" => 7 }]);
}

#[test]
fn test_document_validation_outcomes() {
    let same_fields = parse_yaml_document(
        "unpivot:\n  pivots:\n    - keys: [a]\n      coalesce_key: k\n      coalesce_key_value: k\n",
    )
    .expect("valid yaml");
    let out = Pipeline::from_document(&same_fields)
        .and_then(|p| p.process(&record! { "a" => 5, "z" => 0 }))
        .expect("shared output field is accepted");
    assert_eq!(out, vec![record! { "z" => 0, "k" => 5 }]);

    let blank_field = parse_yaml_document(
        "unpivot:\n  pivots:\n    - keys: [a]\n      coalesce_key: k\n      coalesce_key_value: \"\"\n",
    )
    .expect("valid yaml");
    assert!(matches!(
        Pipeline::from_document(&blank_field),
        Err(DslError::Core(Error::Config(_)))
    ));

    let duplicate_lookups = parse_yaml_document(
        r#"
mappings:
  - { lookup: { name: s, by: id }, value: a, set: b, with: id }
  - { lookup: { name: s, by: id }, value: c, set: d, with: id }
"#,
    )
    .expect("valid yaml");
    assert!(matches!(
        Pipeline::from_document(&duplicate_lookups),
        Err(DslError::Core(Error::Config(_)))
    ));

    assert!(matches!(
        parse_yaml_document("unpivot: [not, a, map]"),
        Err(DslError::Yaml(_))
    ));
    assert!(matches!(parse_json_document("{"), Err(DslError::Json(_))));
}

#[test]
fn test_matrix_section_enumerates() {
    let doc = parse_json_document(r#"{"matrix": {"size": ["s", "m", "l"], "color": ["red", "blue"]}}"#)
        .expect("valid json");
    let combos = doc.matrix().enumerate();
    assert_eq!(combos.len(), 6);
    assert_eq!(combos[1], record! { "size" => "s", "color" => "blue" });
}
