//! Tests for the persistence collaborators and editor configuration.
mod common;
use common::*;
use mtss_flow::prelude::*;

#[test]
fn test_json_file_store_roundtrip() {
    let dir = scratch_dir("store");
    let store = JsonFileStore::new(dir.join("nested").join("flow.json"));

    let mut editor = FlowEditor::builder()
        .with_document(create_simple_document())
        .build();
    editor.on_connect("screen", "support");
    editor.save(&store).unwrap();

    let reopened = FlowEditor::open(&store).unwrap();
    assert_eq!(reopened.document(), editor.document());
    assert!(reopened.history().is_empty());
}

#[test]
fn test_json_file_store_missing_file() {
    let dir = scratch_dir("store-missing");
    let store = JsonFileStore::new(dir.join("absent.json"));
    assert!(matches!(store.load(), Err(StoreError::Io(_))));
}

#[test]
fn test_json_file_store_rejects_invalid_document() {
    let dir = scratch_dir("store-invalid");
    let path = dir.join("flow.json");
    std::fs::write(
        &path,
        r#"{"nodes": [], "edges": [{"id": "x", "source": "a", "target": "b"}]}"#,
    )
    .unwrap();

    let store = JsonFileStore::new(&path);
    assert!(matches!(
        store.load(),
        Err(StoreError::Invalid(FlowError::DanglingEdge { .. }))
    ));

    std::fs::write(&path, "garbage").unwrap();
    assert!(matches!(store.load(), Err(StoreError::Serialization(_))));
}

#[test]
fn test_memory_store() {
    let store = MemoryStore::new();
    assert!(store.snapshot().is_none());
    assert!(matches!(store.load(), Err(StoreError::Unavailable(_))));

    store.save(&create_simple_document()).unwrap();
    assert_eq!(store.load().unwrap(), create_simple_document());
}

#[test]
fn test_editor_refuses_to_save_inconsistent_document() {
    let mut document = create_simple_document();
    document
        .edges
        .push(GraphEdge::new("e1", "screen", "support", EdgeKind::Default));
    let mut editor = FlowEditor::builder().with_document(document).build();

    let store = MemoryStore::new();
    let err = editor.save(&store).unwrap_err();
    assert_eq!(
        err,
        StoreError::Invalid(FlowError::DuplicateEdgeId("e1".to_string()))
    );
    assert!(store.snapshot().is_none());
}

#[test]
fn test_config_defaults_and_parsing() {
    let config = EditorConfig::default();
    assert_eq!(config.max_history, None);
    assert_eq!(config.template_jitter, 20.0);

    let config = EditorConfig::from_json(r#"{"maxHistory": 50}"#).unwrap();
    assert_eq!(config.max_history, Some(50));
    assert_eq!(config.template_jitter, 20.0);

    let config = EditorConfig::from_json("{}").unwrap();
    assert_eq!(config, EditorConfig::default());
}

#[test]
fn test_config_validation() {
    assert!(matches!(
        EditorConfig::from_json(r#"{"templateJitter": -1.0}"#),
        Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
        EditorConfig::from_json(r#"{"maxHistory": 0}"#),
        Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
        EditorConfig::from_json("not json"),
        Err(ConfigError::JsonParseError(_))
    ));
}

#[test]
fn test_config_from_file() {
    let dir = scratch_dir("config");
    let path = dir.join("editor.json");
    std::fs::write(&path, r#"{"maxHistory": 3, "templateJitter": 5.5}"#).unwrap();

    let config = EditorConfig::from_file(path.to_str().unwrap()).unwrap();
    assert_eq!(config.max_history, Some(3));
    assert_eq!(config.template_jitter, 5.5);
    assert!(matches!(
        EditorConfig::from_file(dir.join("nope.json").to_str().unwrap()),
        Err(ConfigError::Io(_))
    ));
}
