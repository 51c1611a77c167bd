use sgf_doc::*;
use sgf_encode::{EncodeError, SgfEncoder};

fn sample_doc() -> GraphDoc {
    let mut doc = GraphDoc::new("roundtrip", true);
    doc.nodes = vec![
        NodeDef {
            id: 0,
            edges: vec![
                EdgeDef {
                    target: 1,
                    weight: Some(0.5),
                },
                EdgeDef {
                    target: 2,
                    weight: None,
                },
            ],
        },
        NodeDef {
            id: 1,
            edges: vec![],
        },
        NodeDef {
            id: 2,
            edges: vec![EdgeDef {
                target: 0,
                weight: Some(12.0),
            }],
        },
    ];
    doc
}

fn temp_path(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join("sgf_doc_test");
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

#[test]
fn yaml_save_load_encode() {
    let path = temp_path("roundtrip.yaml");
    let doc = sample_doc();
    save_yaml(&path, &doc).unwrap();

    let loaded = load(&path).unwrap();
    assert_eq!(loaded, doc);

    let lines = sgf_encode::encode(&loaded).unwrap();
    assert_eq!(
        lines,
        [
            "# Simple Graph Format",
            "# name: roundtrip",
            "d 3 3",
            "0|1:0.5,2",
            "1|",
            "2|0:12",
        ]
    );
}

#[test]
fn json_save_load() {
    let path = temp_path("roundtrip.json");
    let doc = sample_doc();
    save_json(&path, &doc).unwrap();
    assert_eq!(load_json(&path).unwrap(), doc);
}

#[test]
fn load_rejects_dangling_edge() {
    let path = temp_path("dangling.yaml");
    std::fs::write(
        &path,
        "name: bad\nnodes:\n  - id: 0\n    edges:\n      - target: 9\n",
    )
    .unwrap();
    assert!(matches!(
        load(&path),
        Err(DocError::Validation(ValidationError::MissingReference {
            node: 0,
            target: 9
        }))
    ));
}

#[test]
fn gap_in_document_fails_at_encode() {
    let path = temp_path("gap.json");
    std::fs::write(
        &path,
        r#"{"name": "gap", "nodes": [{"id": 0}, {"id": 1}, {"id": 3}]}"#,
    )
    .unwrap();

    let doc = load(&path).unwrap();
    let mut out = Vec::new();
    let err = SgfEncoder::new(doc.encode).write_to(&doc, &mut out).unwrap_err();
    assert!(matches!(err, EncodeError::NonConsecutiveNode { expected: 2, .. }));
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "# Simple Graph Format\n# name: gap\nu 3 0\n0|\n1|\n"
    );
}

#[test]
fn document_options_enable_edge_count_check() {
    let mut doc = sample_doc();
    doc.encode.check_edge_count = true;
    let encoder = SgfEncoder::new(doc.encode);
    assert!(encoder.encode(&doc).is_ok());
}
