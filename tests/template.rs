//! Tests for templates and the template library.
mod common;
use common::*;
use mtss_flow::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_builtin_templates_are_valid() {
    let library = TemplateLibrary::builtin();
    assert_eq!(
        library.names(),
        vec!["progress-monitoring", "tier2-intervention", "universal-screening"]
    );
    for name in library.names() {
        let template = library.get(name).unwrap();
        assert!(template.validate().is_ok(), "template '{}' is invalid", name);
        assert!(!template.description.is_empty());
    }
}

#[test]
fn test_universal_screening_shape() {
    let library = TemplateLibrary::builtin();
    let template = library.get("universal-screening").unwrap();
    let doc = GraphDocument::new(template.nodes.clone(), template.edges.clone());

    assert_eq!(doc.node("screen").unwrap().kind(), NodeKind::Screening);
    assert_eq!(doc.outgoing("review").count(), 3);
    assert!(
        doc.outgoing("review")
            .all(|e| e.kind == EdgeKind::Conditional)
    );
}

#[test]
fn test_register_rejects_dangling_edges() {
    let mut template = create_simple_template();
    template
        .edges
        .push(GraphEdge::new("bad", "t-screen", "nowhere", EdgeKind::Default));

    let mut library = TemplateLibrary::new();
    match library.register(template) {
        Err(TemplateError::InvalidTemplate { name, source }) => {
            assert_eq!(name, "check-and-support");
            assert!(matches!(source, FlowError::DanglingEdge { .. }));
        }
        other => panic!("Expected InvalidTemplate error, got {:?}", other),
    }
    assert!(library.is_empty());
}

#[test]
fn test_register_replaces_same_name() {
    let mut library = TemplateLibrary::builtin();
    let before = library.len();
    let mut replacement = create_simple_template();
    replacement.name = "universal-screening".to_string();
    library.register(replacement.clone()).unwrap();

    assert_eq!(library.len(), before);
    assert_eq!(library.get("universal-screening").unwrap(), &replacement);
}

#[test]
fn test_unknown_template() {
    let library = TemplateLibrary::new();
    assert_eq!(
        library.get("missing").unwrap_err(),
        TemplateError::UnknownTemplate("missing".to_string())
    );
}

#[test]
fn test_instantiate_is_deterministic_for_seeded_rng() {
    let template = create_simple_template();
    let a = template.instantiate(15.0, &mut StdRng::seed_from_u64(42));
    let b = template.instantiate(15.0, &mut StdRng::seed_from_u64(42));
    assert_eq!(a, b);

    for (node, original) in a.nodes.iter().zip(&template.nodes) {
        assert!((node.position.x - original.position.x).abs() <= 15.0);
        assert!((node.position.y - original.position.y).abs() <= 15.0);
    }
    assert_eq!(a.edges, template.edges);
}

#[test]
fn test_library_from_json_and_merge() {
    let json = serde_json::to_string(&vec![create_simple_template()]).unwrap();
    let extra = TemplateLibrary::from_json(&json).unwrap();
    assert_eq!(extra.names(), vec!["check-and-support"]);

    let mut library = TemplateLibrary::builtin();
    library.merge(extra);
    assert_eq!(library.len(), 4);
    assert!(library.get("check-and-support").is_ok());

    assert!(matches!(
        TemplateLibrary::from_json("{"),
        Err(TemplateError::JsonParseError(_))
    ));
}

#[test]
fn test_library_from_file() {
    let dir = scratch_dir("templates");
    let path = dir.join("templates.json");
    std::fs::write(
        &path,
        serde_json::to_string_pretty(&vec![create_simple_template()]).unwrap(),
    )
    .unwrap();

    let library = TemplateLibrary::from_file(path.to_str().unwrap()).unwrap();
    assert_eq!(library.len(), 1);

    let missing = dir.join("missing.json");
    assert!(matches!(
        TemplateLibrary::from_file(missing.to_str().unwrap()),
        Err(TemplateError::Io(_))
    ));
}
